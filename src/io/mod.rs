/// Command-line interface and run orchestration
pub mod cli;
/// Layout constants and configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// Atomic PNG export
pub mod export;
/// Diagnostic log setup
pub mod logging;
/// Progress display
pub mod progress;
