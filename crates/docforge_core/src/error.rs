use std::fmt;

/// Errors raised when a progressive tax table violates its ordering rules
#[derive(Debug, Clone, PartialEq)]
pub enum BracketError {
    Empty,
    NonPositiveBound {
        index: usize,
        bound: f64,
    },
    NonIncreasingBound {
        index: usize,
        bound: f64,
        previous: f64,
    },
    /// Only the top bracket may be open-ended
    UnboundedNotLast {
        index: usize,
    },
    RateOutOfRange {
        index: usize,
        rate: f64,
    },
}

impl fmt::Display for BracketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketError::Empty => write!(f, "bracket table is empty"),
            BracketError::NonPositiveBound { index, bound } => {
                write!(f, "bracket {index} has non-positive upper bound {bound}")
            }
            BracketError::NonIncreasingBound {
                index,
                bound,
                previous,
            } => write!(
                f,
                "bracket {index} upper bound {bound} does not exceed previous bound {previous}"
            ),
            BracketError::UnboundedNotLast { index } => {
                write!(f, "bracket {index} is unbounded but is not the last bracket")
            }
            BracketError::RateOutOfRange { index, rate } => {
                write!(f, "bracket {index} rate {rate} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for BracketError {}

/// Errors raised when a stored ledger contradicts its own postings
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    NonFiniteOpening(f64),
    OutOfOrder {
        index: usize,
    },
    BalanceMismatch {
        index: usize,
        expected: f64,
        found: f64,
    },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::NonFiniteOpening(value) => {
                write!(f, "opening balance {value} is not a finite number")
            }
            LedgerError::OutOfOrder { index } => {
                write!(f, "entry {index} is not in posting order")
            }
            LedgerError::BalanceMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "entry {index} balance {found} does not match running balance {expected}"
            ),
        }
    }
}

impl std::error::Error for LedgerError {}

/// Errors found while validating a household configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Bracket(BracketError),
    EmptyRange {
        field: String,
        min: f64,
        max: f64,
    },
    InvalidDayRange {
        field: String,
        first: i8,
        last: i8,
    },
    EmptyChoices {
        field: String,
    },
    InvalidProbability {
        field: String,
        value: f64,
    },
    InvalidWeights {
        plan: String,
        total: f64,
    },
    NonPositivePrice {
        holding: String,
        price: f64,
    },
    NonFinite {
        field: String,
        value: f64,
    },
    InvalidYear(i16),
    Parse(String),
    Serialize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Bracket(e) => write!(f, "invalid tax brackets: {e}"),
            ConfigError::EmptyRange { field, min, max } => {
                write!(f, "{field}: range [{min}, {max}] is empty")
            }
            ConfigError::InvalidDayRange { field, first, last } => {
                write!(f, "{field}: day range {first}..={last} is not within 1..=31")
            }
            ConfigError::EmptyChoices { field } => write!(f, "{field}: no choices configured"),
            ConfigError::InvalidProbability { field, value } => {
                write!(f, "{field}: probability {value} is outside [0, 1]")
            }
            ConfigError::InvalidWeights { plan, total } => {
                write!(f, "plan {plan:?}: holding weights sum to {total}, expected 1")
            }
            ConfigError::NonPositivePrice { holding, price } => {
                write!(f, "holding {holding:?}: price {price} must be positive")
            }
            ConfigError::NonFinite { field, value } => {
                write!(f, "{field}: value {value} is not a finite number")
            }
            ConfigError::InvalidYear(year) => write!(f, "year {year} is outside 1..=9999"),
            ConfigError::Parse(msg) => write!(f, "failed to parse configuration: {msg}"),
            ConfigError::Serialize(msg) => write!(f, "failed to serialize configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Bracket(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BracketError> for ConfigError {
    fn from(e: BracketError) -> Self {
        ConfigError::Bracket(e)
    }
}

/// Errors raised while generating documents
#[derive(Debug)]
pub enum GenerateError {
    Config(ConfigError),
    DateError(jiff::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Config(e) => write!(f, "{e}"),
            GenerateError::DateError(e) => write!(f, "date calculation error: {e}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Config(e) => Some(e),
            GenerateError::DateError(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GenerateError {
    fn from(err: ConfigError) -> Self {
        GenerateError::Config(err)
    }
}

impl From<jiff::Error> for GenerateError {
    fn from(err: jiff::Error) -> Self {
        GenerateError::DateError(err)
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
