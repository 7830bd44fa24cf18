use std::{env, path::Path, process};

use colour_id::{config::ProcessConfig, manifest::default_manifest, run};
use log::{Level, error, log_enabled};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(config_path) => ProcessConfig::read_config(Path::new(&config_path)),
        None => Ok(ProcessConfig::default()),
    };

    if let Err(err) = config.and_then(|config| run(&config, &default_manifest())) {
        // a fatal error must reach the terminal even when logging is switched off
        if log_enabled!(Level::Error) {
            error!("{}", err);
        } else {
            eprintln!("ERROR: {}", err);
        }
        process::exit(1);
    }
}
