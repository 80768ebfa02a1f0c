use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The unique string token for the "product" sense of "line"
pub static PRODUCT: &str = "product";

/// The unique string token for the "phone" sense of "line"
pub static PHONE: &str = "phone";

/// The closed set of senses a test instance can be tagged with
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Sense {
    /// A product line, such as a line of goods
    Product,

    /// A telephone line
    Phone,
}

impl Sense {
    /// Every sense, in display order
    pub const ALL: [Sense; 2] = [Sense::Product, Sense::Phone];

    /// The sense observed most often in the training data
    pub const MAJORITY: Sense = Sense::Product;

    /// Get the unique string token that identifies this sense
    pub fn as_str(&self) -> &'static str {
        match self {
            Sense::Product => PRODUCT,
            Sense::Phone => PHONE,
        }
    }
}

impl TryFrom<&str> for Sense {
    type Error = SenseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            v if v == PRODUCT => Ok(Sense::Product),
            v if v == PHONE => Ok(Sense::Phone),
            _ => Err(SenseError::Unknown(value.to_string())),
        }
    }
}

impl FromStr for Sense {
    type Err = SenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sense::try_from(s)
    }
}

impl Display for Sense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sense Error
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SenseError {
    /// The value is not one of the known senses
    #[error("unknown sense {0:?}, expected one of \"product\" or \"phone\"")]
    Unknown(String),
}
