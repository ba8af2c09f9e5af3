//! Window chrome bindings: buttons, icon, drag handles, and the outside-click listener.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use super::{dom, sequencing};
use crate::{
    model::{DragTarget, PointerPosition},
    reducer::ChromeAction,
    runtime_context::WinipcfgRuntimeContext,
};

pub(super) fn install(runtime: WinipcfgRuntimeContext) {
    create_effect(move |_| runtime.state.with(dom::project_chrome_state));
    on_cleanup(move || disarm_selection_dismiss(runtime));

    let window = dom::html_element_by_id(dom::WINDOW_ID);
    let icon = dom::html_element_by_id(dom::ICON_ID);

    if let Some(window) = window.as_ref() {
        dom::listen(window, "transitionend", move |event| {
            let own = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
                .is_some_and(|target| target.id() == dom::WINDOW_ID);
            if own {
                sequencing::on_window_transition_end(runtime);
            }
        });
        bind_click(dom::MAXIMIZE_BUTTON_ID, move || {
            runtime.dispatch_action(ChromeAction::ToggleMaximize {
                metrics: dom::chrome_metrics(),
            });
        });
    }

    if window.is_some() && icon.is_some() {
        bind_click(dom::CLOSE_BUTTON_ID, move || {
            runtime.dispatch_action(ChromeAction::ToggleVisibility);
        });
        bind_click(dom::MINIMIZE_BUTTON_ID, move || {
            let (Some(window), Some(icon)) = (
                dom::element_by_id(dom::WINDOW_ID),
                dom::element_by_id(dom::ICON_ID),
            ) else {
                return;
            };
            runtime.dispatch_action(ChromeAction::ToggleMinimizeAnimated {
                window_rect: dom::bounding_rect(&window),
                icon_rect: dom::bounding_rect(&icon),
            });
        });
    }

    if let Some(icon) = icon.as_ref() {
        dom::listen(icon, "dblclick", move |_| {
            runtime.dispatch_action(ChromeAction::RestoreFromIcon);
        });
        for component in dom::query_all(&format!(".{}", dom::ICON_COMPONENT_CLASS)) {
            dom::listen(&component, "click", move |_| {
                runtime.dispatch_action(ChromeAction::SelectIcon);
            });
        }
    }

    let mut bound_handles = 0;
    if let (Some(title_bar), Some(_)) = (
        dom::query(dom::TITLE_BAR_SELECTOR).and_then(|bar| bar.dyn_into::<HtmlElement>().ok()),
        window.as_ref(),
    ) {
        bind_drag_handle(runtime, &title_bar, DragTarget::Window);
        bound_handles += 1;
    }
    if let Some(icon) = icon.as_ref() {
        bind_drag_handle(runtime, icon, DragTarget::Icon);
        bound_handles += 1;
    }
    if bound_handles > 0 {
        install_drag_tracking(runtime);
    }
}

fn bind_click(id: &str, on_click: impl Fn() + 'static) {
    if let Some(button) = dom::element_by_id(id) {
        dom::listen(&button, "click", move |_| on_click());
    }
}

fn pointer_of(event: &MouseEvent) -> PointerPosition {
    PointerPosition {
        x: event.client_x(),
        y: event.client_y(),
    }
}

fn bind_drag_handle(runtime: WinipcfgRuntimeContext, handle: &HtmlElement, target: DragTarget) {
    runtime.dispatch_action(ChromeAction::RegisterDragHandle {
        handle_id: handle.id(),
    });

    let cursor_target = handle.clone();
    dom::listen(handle, "mousedown", move |event| {
        let (Some(event), Some(element)) = (
            event.dyn_ref::<MouseEvent>(),
            dom::drag_target_element(target),
        ) else {
            return;
        };
        let _ = cursor_target.style().set_property("cursor", "auto");
        runtime.dispatch_action(ChromeAction::BeginDrag {
            target,
            pointer: pointer_of(event),
            origin: dom::offset_position(&element),
        });
    });
    // Native HTML drag-and-drop would swallow the mouse events.
    dom::listen(handle, "dragstart", |event| event.prevent_default());
}

fn install_drag_tracking(runtime: WinipcfgRuntimeContext) {
    let dragging = move || runtime.interaction.with_untracked(|ui| ui.dragging.is_some());

    let movement = window_event_listener(ev::mousemove, move |event| {
        if dragging() {
            runtime.dispatch_action(ChromeAction::UpdateDrag {
                pointer: pointer_of(&event),
            });
        }
    });
    let release = window_event_listener(ev::mouseup, move |_| {
        if dragging() {
            runtime.dispatch_action(ChromeAction::EndDrag);
        }
    });
    on_cleanup(move || {
        movement.remove();
        release.remove();
    });
}

fn is_icon_click(event: &MouseEvent) -> bool {
    let icon = dom::element_by_id(dom::ICON_ID);
    let on_icon = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .is_some_and(|target| icon.as_ref() == Some(&target));
    on_icon
        || event.composed_path().iter().any(|node| {
            node.dyn_ref::<Element>()
                .is_some_and(|element| element.class_list().contains(dom::ICON_COMPONENT_CLASS))
        })
}

pub(super) fn arm_selection_dismiss(runtime: WinipcfgRuntimeContext) {
    let handle = window_event_listener(ev::click, move |event| {
        if !is_icon_click(&event) {
            runtime.dispatch_action(ChromeAction::DismissIconSelection);
        }
    });
    let previous = runtime
        .selection_listener
        .try_update_value(|slot| slot.replace(handle))
        .flatten();
    if let Some(previous) = previous {
        previous.remove();
    }
}

pub(super) fn disarm_selection_dismiss(runtime: WinipcfgRuntimeContext) {
    let handle = runtime
        .selection_listener
        .try_update_value(Option::take)
        .flatten();
    if let Some(handle) = handle {
        handle.remove();
    }
}
