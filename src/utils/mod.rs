/// File utilities
pub mod files;

/// Run audit log
pub mod audit;
