use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The tickets file is missing, unreadable, or not a list of ticket records.
    InputUnavailable { path: PathBuf, reason: String },
    /// A date or clock field that does not parse as `dd.mm.yy` / `HH:MM`.
    InvalidTimestamp { field: &'static str, value: String },
    /// Arrival precedes departure once the dates are taken into account.
    InvalidInterval { departure: String, arrival: String },
}

impl StatsError {
    pub fn exit_code(&self) -> u8 {
        match self {
            StatsError::InputUnavailable { .. } => 3,
            StatsError::InvalidTimestamp { .. } | StatsError::InvalidInterval { .. } => 4,
        }
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::InputUnavailable { path, reason } => {
                write!(f, "cannot read tickets from {}: {}", path.display(), reason)
            }
            StatsError::InvalidTimestamp { field, value } => {
                write!(f, "invalid {} {:?}", field, value)
            }
            StatsError::InvalidInterval { departure, arrival } => {
                write!(f, "arrival {} precedes departure {}", arrival, departure)
            }
        }
    }
}

impl std::error::Error for StatsError {}
