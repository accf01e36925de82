mod components;
mod config;
mod hooks;
mod models;
mod services;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚚 Freightboard starting (api: {})", config::CONFIG.api_base_url);

    yew::Renderer::<App>::new().render();
}
