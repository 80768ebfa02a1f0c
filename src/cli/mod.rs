/// Extraction strategies selectable from the command line
pub mod strategies;

pub use strategies::{Strategy, StrategyError};
