//! Element lookup, measurement, and state projection for the chrome DOM contract.

use leptos::{document, logging, on_cleanup, window};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event, EventTarget, HtmlElement};

use crate::model::{
    ChromeMetrics, ChromeState, DragTarget, ElementPosition, ElementRect, IconVisual,
    WindowVisual,
};

pub(super) const WINDOW_ID: &str = "winipcfg-window";
pub(super) const ICON_ID: &str = "winipcfg-icon";
pub(super) const MAXIMIZE_BUTTON_ID: &str = "maximize-button";
pub(super) const MINIMIZE_BUTTON_ID: &str = "minimize-button";
pub(super) const CLOSE_BUTTON_ID: &str = "close-button";
pub(super) const TITLE_BAR_SELECTOR: &str = ".title-bar";
pub(super) const ICON_COMPONENT_CLASS: &str = "icon-component";

pub(super) fn element_by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub(super) fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id).and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub(super) fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

pub(super) fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nodes) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attaches a listener for the lifetime of the current reactive owner.
pub(super) fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        logging::warn!("binding `{event}` listener failed: {err:?}");
        return;
    }
    let target = target.clone();
    on_cleanup(move || {
        let _ =
            target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    });
}

pub(super) fn drag_target_element(target: DragTarget) -> Option<HtmlElement> {
    match target {
        DragTarget::Window => html_element_by_id(WINDOW_ID),
        DragTarget::Icon => html_element_by_id(ICON_ID),
    }
}

fn viewport_size() -> (f64, f64) {
    let window = window();
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_default();
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_default();
    (width, height)
}

pub(super) fn viewport_width() -> f64 {
    viewport_size().0
}

pub(super) fn chrome_metrics() -> ChromeMetrics {
    let (viewport_width, viewport_height) = viewport_size();
    let (window_width, window_height) = html_element_by_id(WINDOW_ID)
        .map(|window| {
            (
                f64::from(window.offset_width()),
                f64::from(window.offset_height()),
            )
        })
        .unwrap_or_default();
    ChromeMetrics {
        window_width,
        window_height,
        viewport_width,
        viewport_height,
    }
}

pub(super) fn bounding_rect(element: &Element) -> ElementRect {
    let rect = element.get_bounding_client_rect();
    ElementRect {
        left: rect.left(),
        top: rect.top(),
    }
}

pub(super) fn offset_position(element: &HtmlElement) -> ElementPosition {
    ElementPosition {
        left: element.offset_left(),
        top: element.offset_top(),
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

fn apply_position(element: &HtmlElement, position: Option<ElementPosition>) {
    if let Some(position) = position {
        set_style(element, "left", &format!("{}px", position.left));
        set_style(element, "top", &format!("{}px", position.top));
    }
}

fn apply_window_visual(element: &HtmlElement, visual: &WindowVisual) {
    if let Some(display) = visual.display {
        set_style(element, "display", display.css_value());
    }
    if let Some(origin) = visual.transform_origin {
        set_style(element, "transform-origin", origin);
    }
    if let Some(transform) = visual.transform.as_deref() {
        set_style(element, "transform", transform);
    }
    if let Some(opacity) = visual.opacity {
        set_style(element, "opacity", opacity);
    }
    apply_position(element, visual.position);
}

fn apply_icon_visual(element: &HtmlElement, visual: &IconVisual) {
    if let Some(display) = visual.display {
        set_style(element, "display", display.css_value());
    }
    let classes = element.class_list();
    let _ = classes.toggle_with_force("selected", visual.selected);
    let _ = classes.toggle_with_force("restored", visual.restored);
    apply_position(element, visual.position);
}

/// Writes the assigned parts of `state` onto the page.
pub(super) fn project_chrome_state(state: &ChromeState) {
    if let Some(window) = html_element_by_id(WINDOW_ID) {
        apply_window_visual(&window, &state.window);
    }
    if let Some(icon) = html_element_by_id(ICON_ID) {
        apply_icon_visual(&icon, &state.icon);
    }
    if let (Some(label), Some(button)) = (state.maximize_label, element_by_id(MAXIMIZE_BUTTON_ID))
    {
        let _ = button.set_attribute("aria-label", label);
    }
}
