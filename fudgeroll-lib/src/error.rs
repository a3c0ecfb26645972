use thiserror::Error;

/// Crate Error type
///
/// A token that is not a dice expression at all is not an error: the solver
/// returns `Ok(None)` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A dice-like prefix matched but the rest of the token breaks the chain or batch rules
    #[error("malformed expression `{input}`: {reason}")]
    MalformedExpression { input: String, reason: &'static str },
    /// A numeric field is out of its allowed range
    #[error("invalid dice: {0}")]
    InvalidSpec(String),
    #[error("unknown dice type `{0}`")]
    UnknownDieType(String),
}

impl Error {
    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        Self::MalformedExpression {
            input: input.to_owned(),
            reason,
        }
    }

    /// Whether the error comes from user input rather than a broken invariant
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::MalformedExpression { .. } | Self::InvalidSpec(_) => true,
            Self::UnknownDieType(_) => false,
        }
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
