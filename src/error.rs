//! Crate-level error type.
//!
//! One variant per external failure mode, a hand-written `Display`, and
//! `From` impls so `?` composes across the loader, job expander, and writer.

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    Input { reason: String, record_index: Option<usize> },
    Capacity(String),
}

impl Error {
    pub fn input(reason: impl Into<String>) -> Self {
        Self::Input { reason: reason.into(), record_index: None }
    }

    pub fn input_at(reason: impl Into<String>, record_index: usize) -> Self {
        Self::Input { reason: reason.into(), record_index: Some(record_index) }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
            Self::Input { reason, record_index: Some(idx) } =>
                write!(f, "input error at record {idx}: {reason}"),
            Self::Input { reason, record_index: None } =>
                write!(f, "input error: {reason}"),
            Self::Capacity(reason) => write!(f, "capacity error: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
