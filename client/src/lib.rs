use app::App;
use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    // Verify the wasm start binding was called on the client
    log::info!("Preparing to mount client...");

    mount_to_body(|cx| view! { cx, <App /> });
}
