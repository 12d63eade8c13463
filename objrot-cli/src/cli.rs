use std::path::PathBuf;

use clap::ValueHint;

use crate::DEFAULT_INPUT;

#[derive(Debug, clap::Parser)]
#[command(author, version, about = "Rotate an OBJ mesh a quarter turn about the Z axis")]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,objrot=info,objrot_core=info",
        env = "OBJROT_LOG"
    )]
    pub log_filter: String,
    /// Where to write the rotated mesh [default: INPUT with its file name prefixed by `rotated_`]
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    /// OBJ file to rotate
    #[arg(default_value = DEFAULT_INPUT, value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
}

/// Set up log output on stderr
pub fn initialize_tracing(log_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(log_filter)
        .init();
}
