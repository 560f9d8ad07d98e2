// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and the API client / stores
// - Commands return domain types or DTOs, ready to be printed
// - Failures are already reported through the snackbar when they arrive here
// - Commands NEVER contain business logic

pub mod bangumi_commands;
pub mod calendar_commands;
pub mod system_commands;

pub use bangumi_commands::*;
pub use calendar_commands::*;
pub use system_commands::*;
