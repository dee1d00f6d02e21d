use thiserror::Error;

/// Faults raised by form wiring and configuration. Validation failures are
/// never reported through this type.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown step: {0}")]
    UnknownStep(u32),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("invalid step layout: {0}")]
    InvalidLayout(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Errors surfaced by the terminal host.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
