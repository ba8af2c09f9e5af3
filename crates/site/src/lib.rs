mod web_app;

pub use web_app::{current_path, page_config, SiteApp, CONFIG_SCRIPT_ID};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    let path = current_path();
    leptos::mount_to_body(move || leptos::view! { <SiteApp path=path /> })
}
