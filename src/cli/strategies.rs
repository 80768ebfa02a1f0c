use std::fmt::Display;

use crate::extraction::{Attribute, Extractor, LastToken};

/// The unique string token that identifies attribute extraction
pub static ATTRIBUTE: &str = "attribute";

/// The unique string token that identifies last-token extraction
pub static LAST_TOKEN: &str = "last-token";

/// Available extraction strategies
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Read a named attribute of the answer tag
    #[default]
    Attribute,

    /// Strip markup and take the last token of the line
    LastToken,
}

impl Strategy {
    /// Build the extractor for this strategy. `attribute` is only used by
    /// [`Strategy::Attribute`].
    pub fn extractor(&self, attribute: &str) -> Box<dyn Extractor> {
        match self {
            Strategy::Attribute => Box::new(Attribute::new(attribute.to_string())),
            Strategy::LastToken => Box::new(LastToken),
        }
    }
}

impl TryFrom<&str> for Strategy {
    type Error = StrategyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase() {
            v if v == ATTRIBUTE => Ok(Strategy::Attribute),
            v if v == LAST_TOKEN => Ok(Strategy::LastToken),
            _ => Err(StrategyError::Unknown(value.to_string())),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::try_from(s)
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Attribute => ATTRIBUTE,
            Strategy::LastToken => LAST_TOKEN,
        };

        write!(f, "{}", name)
    }
}

/// Strategy Error
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StrategyError {
    /// No strategy found for the given string
    #[error("no extraction strategy found for {0}, expected \"attribute\" or \"last-token\"")]
    Unknown(String),
}
