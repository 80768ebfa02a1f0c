//! # Sense Scorer
//!
//! Scores word sense disambiguation answers for the "line" task against a gold key,
//! reporting accuracy, a majority-sense baseline and a confusion matrix.
#![forbid(unsafe_code)]

/// Sense labels
pub mod senses;

/// Sense extraction from answer files
pub mod extraction;

/// Accuracy and confusion matrix computation
pub mod evaluation;

/// Report rendering
pub mod report;

/// Run configuration
pub mod config;

/// Loading and scoring answer files
pub mod scoring;

/// Utilities
pub mod utils;

/// CLI indexes and utilities
pub mod cli;

/// Error macros
#[macro_use]
extern crate anyhow;
