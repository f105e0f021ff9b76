mod components;
mod config;
mod hooks;
mod models;
mod services;
mod stores;
mod utils;

use components::{App, AppProps};
use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("💎 MLBB Diamonds Store arrancando (backend: {})", CONFIG.backend_url());

    yew::Renderer::<App>::with_props(AppProps {
        config: CONFIG.clone(),
    })
    .render();
}
