use log::{error, info};

mod config;
mod controllers;
mod dom;
mod error;
mod web;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page controllers");
    let page = match web::Page::current() {
        Ok(page) => page,
        Err(e) => {
            error!("Cannot attach to page: {}", e);
            return;
        }
    };

    let config = page.landing_config();
    let installed = web::install_all(&page, &config);
    info!(
        "{} of {} controllers active",
        installed.controllers.len(),
        installed.controllers.len() + installed.failures.len()
    );
}
