use leptos::prelude::*;
use salute_console_dashboard_leptos::App;
use wasm_bindgen::JsCast;

/// The hosting page must provide `<div id="root">`; it is looked up once here
/// and handed to the mount call, nothing below this point queries the DOM.
fn main() {
    let Some(root) = document()
        .get_element_by_id("root")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        leptos::logging::error!("console container #root not found");
        return;
    };
    leptos::mount::mount_to(root, App).forget();
}
