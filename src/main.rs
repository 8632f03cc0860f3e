#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        web_sys::console::warn_1(&format!("Logger already initialised: {}", e).into());
    }

    tracing::info!("Starting orbitlink web front end");

    dioxus::launch(app::App);
}
