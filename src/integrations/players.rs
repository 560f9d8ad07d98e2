// src/integrations/players.rs
//
// External video players reachable through URL schemes.
//
// The online watch route streams a finished download; these players are
// launched by handing them that stream URL inside their own scheme.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExternalPlayer {
    Iina,
    Infuse,
    Vlc,
    Mpv,
}

impl ExternalPlayer {
    pub const ALL: [ExternalPlayer; 4] = [
        ExternalPlayer::Iina,
        ExternalPlayer::Infuse,
        ExternalPlayer::Vlc,
        ExternalPlayer::Mpv,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExternalPlayer::Iina => "IINA",
            ExternalPlayer::Infuse => "Infuse",
            ExternalPlayer::Vlc => "VLC",
            ExternalPlayer::Mpv => "MPV",
        }
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            ExternalPlayer::Iina => "iina://weblink?url=",
            ExternalPlayer::Infuse => "infuse://x-callback-url/play?url=",
            ExternalPlayer::Vlc => "vlc-x-callback://x-callback-url/stream?url=",
            ExternalPlayer::Mpv => "mpv://",
        }
    }

    /// URL that opens `video_url` in this player.
    pub fn play_url(&self, video_url: &str) -> String {
        format!("{}{}", self.scheme(), encode_component(video_url))
    }
}

/// Percent-encode one URL component, leaving `!'()*` unescaped.
fn encode_component(s: &str) -> String {
    const KEPT: [(&str, &str); 5] = [
        ("%21", "!"),
        ("%27", "'"),
        ("%28", "("),
        ("%29", ")"),
        ("%2A", "*"),
    ];
    KEPT.iter()
        .fold(urlencoding::encode(s).into_owned(), |out, (escaped, raw)| {
            out.replace(escaped, raw)
        })
}

impl fmt::Display for ExternalPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExternalPlayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExternalPlayer::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown player: {}", s))
    }
}
