use thiserror::Error;

/// Result alias used by the domain code of the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter at least one artist name")]
    EmptyLineup,

    #[error("Songs per artist must be between {min} and {max}, got {got}")]
    SongsPerArtistOutOfRange { got: u32, min: u32, max: u32 },

    #[error("Playlist name must not be empty")]
    EmptyPlaylistName,

    #[error("Invalid authentication format: {0}")]
    InvalidAuthFormat(String),

    #[error("Invalid or expired authentication: {0}")]
    AuthRejected(String),

    #[error("No songs could be added to the playlist")]
    NothingToAdd,

    #[error("Failed to create playlist: {0}")]
    PlaylistCreation(String),

    #[error("Failed to add songs to playlist: {0}")]
    AddTracks(String),

    #[error("YouTube Music request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube Music returned status {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Unexpected response from YouTube Music: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// True for errors caused by what the user typed or pasted.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyLineup
                | Error::SongsPerArtistOutOfRange { .. }
                | Error::EmptyPlaylistName
                | Error::InvalidAuthFormat(_)
        )
    }

    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::AuthRejected(_) => true,
            Error::Status { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

/// Advice shown next to a failure, picked from keywords in its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Authentication,
    Network,
    RateLimit,
    General,
}

const HINT_KEYWORDS: &[(Hint, &[&str])] = &[
    (
        Hint::Authentication,
        &["auth", "unauthorized", "permission", "credentials"],
    ),
    (
        Hint::Network,
        &["network", "connection", "timeout", "unreachable"],
    ),
    (Hint::RateLimit, &["rate", "limit", "quota", "too many"]),
];

impl Hint {
    pub fn classify(message: &str) -> Hint {
        let lower = message.to_lowercase();
        HINT_KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(hint, _)| *hint)
            .unwrap_or(Hint::General)
    }

    pub fn advice(&self) -> &'static [&'static str] {
        match self {
            Hint::Authentication => &[
                "Log out and back in",
                "Get fresh authentication headers",
                "Make sure you're logged into YouTube Music",
            ],
            Hint::Network => &[
                "Check your internet connection",
                "Refresh the page",
                "Try again in a few minutes",
            ],
            Hint::RateLimit => &[
                "Wait a few minutes before trying again",
                "Reduce the number of songs per artist",
                "Process fewer artists at once",
            ],
            Hint::General => &[
                "Your authentication is still valid",
                "The artists' names are correct",
                "You have sufficient permissions in YouTube Music",
                "Your internet connection is stable",
            ],
        }
    }
}
