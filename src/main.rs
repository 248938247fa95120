#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod contact;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frontend;
mod loader;
mod logging;
mod navbar;
mod navigation;
mod notification;
mod reveal;
mod scroll;
mod timeline;
mod typewriter;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("Page interactions only run in the browser. Build with `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
