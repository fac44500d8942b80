use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

use grainpress::ImageTransformer;

use super::args::CliArgs;
use super::errors::AppError;

/// Parse the command line. `Ok(None)` means clap already printed help or the
/// version and there is nothing left to do.
pub fn parse_args<I, T>(argv: I) -> Result<Option<CliArgs>, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliArgs::try_parse_from(argv) {
        Ok(args) => Ok(Some(args)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            Ok(None)
        }
        Err(e) => Err(AppError::Usage(e.render().to_string())),
    }
}

/// Log to stderr so stdout only ever carries the success marker.
/// Verbosity comes from `RUST_LOG`, defaulting to warnings.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging();

    let dims = ImageTransformer::default().process_file(&args.input, &args.output)?;
    info!("Successfully processed: {:?} -> {:?} ({})", args.input, args.output, dims);

    println!("SUCCESS:{}", args.output.display());
    Ok(())
}
