use log::{error, info};

use community_landing::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page behaviors");
    if let Err(e) = community_landing::start() {
        error!("could not start page behaviors: {}", e);
    }
}
