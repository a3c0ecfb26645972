pub(crate) mod keep;

use crate::error::Error;
use std::ops::Deref;

pub use keep::Keep;

/// One of the three shifted uniform die families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DieType {
    /// d12 - 6
    F,
    /// d18 - 9
    R,
    /// d24 - 12
    T,
}

impl DieType {
    /// Number of faces drawn before the offset is applied
    pub fn sides(&self) -> i64 {
        match self {
            DieType::F => 12,
            DieType::R => 18,
            DieType::T => 24,
        }
    }

    pub fn offset(&self) -> i64 {
        match self {
            DieType::F => 6,
            DieType::R => 9,
            DieType::T => 12,
        }
    }

    pub fn min(&self) -> i64 {
        1 - self.offset()
    }

    pub fn max(&self) -> i64 {
        self.sides() - self.offset()
    }

    pub fn as_char(&self) -> char {
        match self {
            DieType::F => 'f',
            DieType::R => 'r',
            DieType::T => 't',
        }
    }
}

impl TryFrom<&str> for DieType {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "f" => Ok(DieType::F),
            "r" => Ok(DieType::R),
            "t" => Ok(DieType::T),
            other => Err(Error::UnknownDieType(other.to_owned())),
        }
    }
}

impl std::fmt::Display for DieType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Mark if a dice result is a critic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Critic {
    Max,
    Min,
    Not,
}

/// Keep one die face with critic marker
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub value: i64,
    pub critic: Critic,
    /// Dropped faces stay around for display but do not count
    pub kept: bool,
}

impl Face {
    pub fn new(value: i64, die: DieType) -> Self {
        Face {
            value,
            critic: match value {
                v if v == die.max() => Critic::Max,
                v if v == die.min() => Critic::Min,
                _ => Critic::Not,
            },
            kept: true,
        }
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Face {}

impl PartialOrd for Face {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Face {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl Deref for Face {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kept {
            write!(f, "{}", self.value)
        } else {
            write!(f, "~~{}~~", self.value)
        }
    }
}

/// Parsed form of one dice term, e.g. `4fkh2+3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spec {
    pub amount: u64,
    pub die: DieType,
    pub keep: Option<Keep>,
    pub modifier: Option<i64>,
}

impl std::fmt::Display for Spec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.die)?;
        if let Some(keep) = &self.keep {
            write!(f, "{keep}")?;
        }
        match self.modifier {
            Some(m) if m < 0 => write!(f, "{m}"),
            Some(m) => write!(f, "+{m}"),
            None => Ok(()),
        }
    }
}
