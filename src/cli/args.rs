use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seq",
    version,
    about = "Print numbers from start to end, in steps of step",
    override_usage = "seq [-f format] [-w] [-s separator] [start] [step] <end>"
)]
pub struct CliArgs {
    /// Use printf style floating-point FORMAT (default: %v)
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Use STRING to separate numbers (default: newline)
    #[arg(short = 's', long, value_name = "STRING")]
    pub separator: Option<String>,

    /// Equalize width by padding with leading zeroes
    #[arg(short = 'w', long, default_value_t = false)]
    pub equal_width: bool,

    /// JSON file with format/separator/equal_width defaults; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// [start] [step] end
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub numbers: Vec<String>,
}
