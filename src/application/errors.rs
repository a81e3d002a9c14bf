//! Application layer errors

use thiserror::Error;

/// Errors raised while registering colleagues or distributing messages
#[derive(Error, Debug)]
pub enum MediatorError {
    #[error("Invalid {kind} reference: {name}")]
    InvalidReference { kind: ReferenceKind, name: String },

    #[error("Colleague '{colleague}' is already registered with mediator '{mediator}'")]
    AlreadyRegistered { mediator: String, colleague: String },

    #[error("Delivery to '{recipient}' via '{mediator}' failed: {source}")]
    DeliveryFailure {
        mediator: String,
        recipient: String,
        #[source]
        source: ColleagueError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Which kind of participant a reference was supposed to name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Colleague,
    Mediator,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Colleague => write!(f, "colleague"),
            ReferenceKind::Mediator => write!(f, "mediator"),
        }
    }
}

/// Errors a colleague can report from `receive`
#[derive(Error, Debug)]
pub enum ColleagueError {
    #[error("Message rejected: {0}")]
    Rejected(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Top-level error for running a scenario end to end
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mediator error: {0}")]
    Mediator(#[from] MediatorError),
}
