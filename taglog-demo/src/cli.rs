use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "taglog-demo")]
#[command(about = "Writes a few tagged log lines through taglog")]
#[command(version)]
pub struct Cli {
    /// TOML config file; defaults apply when it does not exist
    #[arg(long, default_value = "taglog.toml")]
    pub(crate) config: PathBuf,

    /// Exit after the sample lines instead of waiting for Ctrl+C
    #[arg(long)]
    pub(crate) once: bool,
}
