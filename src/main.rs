//! Lost & Found Board Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod logger;
mod pages;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
