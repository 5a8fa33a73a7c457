use crate::command::kind::CommandKind;

pub type PathMorphResult<T> = Result<T, PathMorphError>;

#[derive(thiserror::Error, Debug)]
pub enum PathMorphError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("conversion error: cannot convert {from} to {to}")]
    Conversion { from: CommandKind, to: CommandKind },

    #[error("interpolation error: {0}")]
    Interpolation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PathMorphError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conversion(from: CommandKind, to: CommandKind) -> Self {
        Self::Conversion { from, to }
    }

    pub fn interpolation(msg: impl Into<String>) -> Self {
        Self::Interpolation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
