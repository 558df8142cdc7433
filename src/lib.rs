pub mod commands;
pub mod models;
pub mod services;
pub mod standard_error;
pub mod templates;

use clap::Parser;
use commands::Args;

pub use models::disc_info::DiscInfo;
pub use services::disc_builder::load_disc;
pub use standard_error::StandardError;

fn setup_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

pub fn run() {
    let args = Args::parse();
    setup_logger(args.verbose);

    if let Err(e) = commands::execute(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
