//! Configuration constants for feedback-finder

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Trace rendering configuration
pub mod trace {
    /// Marker printed where a walk folds back into the loop
    pub const FOLD_BACK_MARKER: &str = "↩";
}
