use structopt::clap::ErrorKind;
use structopt::StructOpt;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use rss_reader::cli::RssReaderArgs;
use rss_reader::RssReader;

const EXIT_CODE_ERROR: i32 = 2;
const EXIT_CODE_VALIDATION_ERROR: i32 = 3;

fn main() {
    let args = match RssReaderArgs::from_iter_safe(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => match err.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                println!("{}", err.message);
                return;
            }
            _ => {
                println!("Error: {}", err.message);
                std::process::exit(EXIT_CODE_ERROR);
            }
        },
    };

    init_logging(args.verbose);

    let config = match args.into_config() {
        Ok(config) => config,
        Err(err) => {
            println!("Error: {}", err);
            std::process::exit(EXIT_CODE_VALIDATION_ERROR);
        }
    };
    debug!(?config, "using validated configuration");

    let reader = RssReader::new(config);
    if let Err(err) = reader.run() {
        // anyhow's alternate formatting prints the whole cause chain on one
        // line. Output that was already printed or written stays in place.
        let err = anyhow::Error::new(err);
        error!("execution failed: {:#}", err);
        println!("Execution failed: {:#}", err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}
