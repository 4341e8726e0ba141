use std::io::{self, BufWriter, Write};

use clap::CommandFactory;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use seq::SequenceParams;

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Config file values first, then any flag given on the command line.
fn resolve_params(args: &CliArgs) -> Result<SequenceParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            debug!("Loading config from {:?}", path);
            SequenceParams::from_json_file(path)?
        }
        None => SequenceParams::default(),
    };

    if let Some(format) = &args.format {
        params.format = format.clone();
    }
    if let Some(separator) = &args.separator {
        params.separator = separator.clone();
    }
    params.equal_width |= args.equal_width;

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let params = resolve_params(&args)?;
    debug!(?params, numbers = ?args.numbers, "resolved parameters");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = seq::write_sequence(&mut out, args.numbers.as_slice(), &params)?;
    out.flush()?;

    info!("Wrote {} values", count);
    Ok(())
}

/// Print the error and the usage help to stderr.
pub fn report_failure(err: &AppError) {
    eprintln!("seq: {}", err);
    let help = CliArgs::command().render_help();
    eprintln!("{}", help);
}
