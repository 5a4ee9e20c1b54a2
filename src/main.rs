//! CLI entry point for the PVRTC texture generator

use clap::Parser;
use pvrtcgen::io::cli::{Cli, GenerationJob};
use tracing_subscriber::EnvFilter;

fn main() -> pvrtcgen::Result<()> {
    let cli = Cli::parse();

    // Texture bytes may go to stdout, so logs stay on stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(cli.log_level().into()))
        .init();

    GenerationJob::new(cli).process()
}
