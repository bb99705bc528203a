use clap::Parser;
use tagsync_core::logging;
use tagsync_core::PipelineError;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    logging::init(cli.verbose);

    if let Err(err) = cli.run() {
        match err.downcast_ref::<PipelineError>() {
            Some(pipeline_err) => eprintln!("tagsync error: {}: {:#}", pipeline_err.kind(), err),
            None => eprintln!("tagsync error: {:#}", err),
        }
        std::process::exit(1);
    }
}
