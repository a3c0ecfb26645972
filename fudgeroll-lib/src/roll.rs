pub mod kind;

/// Keep the roll expression type
#[derive(Debug, Clone)]
pub enum Kind {
    Batch(kind::Batch),
    Chain(kind::Chain),
}

/// Keep a roll expression result
#[derive(Debug, Clone)]
pub struct Result {
    result: Kind,
    query: String,
}

impl Result {
    /// New with independent repeated outcomes
    pub fn new_batch(outcomes: Vec<kind::Outcome>, query: &str) -> Self {
        Result {
            result: Kind::Batch(kind::Batch { outcomes }),
            query: query.to_owned(),
        }
    }

    /// New with outcomes combined into one total
    pub fn new_chain(outcomes: Vec<kind::Outcome>, query: &str) -> Self {
        Result {
            result: Kind::Chain(kind::Chain { outcomes }),
            query: query.to_owned(),
        }
    }

    pub fn get_result(&self) -> &Kind {
        &self.result
    }

    /// The token that was solved
    pub fn get_query(&self) -> &str {
        &self.query
    }

    /// Every outcome regardless of the result shape
    pub fn outcomes(&self) -> &[kind::Outcome] {
        match &self.result {
            Kind::Batch(batch) => &batch.outcomes,
            Kind::Chain(chain) => &chain.outcomes,
        }
    }

    /// Check and return result as batch
    pub fn as_batch(&self) -> Option<&kind::Batch> {
        match &self.result {
            Kind::Batch(batch) => Some(batch),
            Kind::Chain(_) => None,
        }
    }

    /// Check and return result as chain
    pub fn as_chain(&self) -> Option<&kind::Chain> {
        match &self.result {
            Kind::Batch(_) => None,
            Kind::Chain(chain) => Some(chain),
        }
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Kind::Batch(batch) => {
                write!(f, "`{}`", self.query)?;
                batch
                    .iter()
                    .try_for_each(|outcome| write!(f, "\n{}", outcome.to_string_single()))
            }
            Kind::Chain(chain) => write!(f, "`{}` {}", self.query, chain),
        }
    }
}

/// How an outcome combines with the ones before it in a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn apply(&self, value: i64) -> i64 {
        match self {
            Sign::Plus => value,
            Sign::Minus => value.saturating_neg(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
        }
    }
}

/// Interface for rolling dices
pub trait Source {
    /// Draw a uniformly random integer in `min..=max`
    fn throw(&mut self, min: i64, max: i64) -> i64;
}
