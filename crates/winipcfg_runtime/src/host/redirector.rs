//! IP-version selector bindings, the status-bar clock, and viewport scaling.

use std::time::Duration;

use leptos::*;
use platform_host::ClockReading;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use super::{dom, WinipcfgHostContext};
use crate::redirector::{
    format_clock, preference_from_url, redirect_url, viewport_content, IpVersionPreference,
};

const CLOCK_ID: &str = "clock";
const OK_BUTTON_ID: &str = "ok-button";
const APPLY_BUTTON_ID: &str = "apply-button";
const CANCEL_BUTTON_ID: &str = "cancel-button";
const CHECKED_PREFERENCE_SELECTOR: &str = r#"input[name="ipversion"]:checked"#;
const VIEWPORT_META_SELECTOR: &str = r#"meta[name="viewport"]"#;

pub(super) fn install(host: WinipcfgHostContext) {
    preselect_preference();

    for id in [OK_BUTTON_ID, APPLY_BUTTON_ID] {
        if let Some(button) = dom::element_by_id(id) {
            let host = host.clone();
            dom::listen(&button, "click", move |_| apply_preference(&host));
        }
    }
    if let Some(button) = dom::element_by_id(CANCEL_BUTTON_ID) {
        let host = host.clone();
        dom::listen(&button, "click", move |_| {
            host.navigate(&host.config().cancel_href);
        });
    }

    start_clock();
    install_viewport_scaling(host.config().design_width);
}

fn radio(preference: IpVersionPreference) -> Option<HtmlInputElement> {
    dom::element_by_id(preference.radio_id())
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

/// Checks the radio matching the current URL, only when the template renders all three.
fn preselect_preference() {
    let Some(radios) = IpVersionPreference::ALL
        .into_iter()
        .map(|preference| radio(preference).map(|input| (preference, input)))
        .collect::<Option<Vec<_>>>()
    else {
        return;
    };
    let href = window().location().href().unwrap_or_default();
    let selected = preference_from_url(&href);
    for (preference, input) in radios {
        input.set_checked(preference == selected);
    }
}

fn apply_preference(host: &WinipcfgHostContext) {
    let Some(checked) = dom::query(CHECKED_PREFERENCE_SELECTOR)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let value = checked.value();
    let Some(preference) = IpVersionPreference::from_radio_value(&value) else {
        logging::warn!("unknown ipversion value `{value}`");
        return;
    };
    let hostname = window().location().hostname().unwrap_or_default();
    host.navigate(&redirect_url(
        preference,
        &hostname,
        &host.config().redirect_path,
    ));
}

fn start_clock() {
    let Some(clock) = dom::element_by_id(CLOCK_ID) else {
        return;
    };
    let tick = move || clock.set_text_content(Some(&format_clock(ClockReading::now())));
    tick();
    match set_interval_with_handle(tick, Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("clock interval failed: {err:?}"),
    }
}

fn install_viewport_scaling(design_width: f64) {
    let rescale = move || {
        let Some(meta) = dom::query(VIEWPORT_META_SELECTOR) else {
            return;
        };
        let content = viewport_content(dom::viewport_width(), design_width);
        let _ = meta.set_attribute("content", &content);
    };
    rescale();
    let resize = window_event_listener(ev::resize, move |_| rescale());
    on_cleanup(move || resize.remove());
}
