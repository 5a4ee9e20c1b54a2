/// Command-line parsing and run orchestration
pub mod cli;
/// Format constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and file output
pub mod error;
/// Writing generated textures to files and streams
pub mod output;
