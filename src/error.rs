use thiserror::Error;

/// Errors raised while configuring the localizer or talking to a preference store.
///
/// Applying a language never produces one of these: missing controls and
/// missing variants degrade silently.
#[derive(Debug, Error)]
pub enum LocalizerError {
    #[error("Invalid language code: '{0}'")]
    InvalidLanguageCode(String),

    #[error("Language '{0}' is configured more than once")]
    DuplicateLanguage(String),

    #[error("Default language '{0}' is not among the configured languages")]
    DefaultNotSupported(String),

    #[error("Language '{0}' is not configured")]
    UnknownLanguage(String),

    #[error("Default language '{0}' cannot be disabled")]
    DefaultDisabled(String),

    #[error("No languages configured")]
    NoLanguages,

    #[error("Preference store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LocalizerError>;
