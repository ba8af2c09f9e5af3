//! Completion signals for the deferred halves of chrome transitions.

use std::time::Duration;

use leptos::*;

use super::dom;
use crate::{
    reducer::{ChromeAction, Sequencing, TransitionStep},
    runtime_context::WinipcfgRuntimeContext,
};

/// Arranges for `step` to be dispatched once the `after` signal is observed.
pub(super) fn schedule(
    runtime: WinipcfgRuntimeContext,
    epoch: u64,
    step: TransitionStep,
    after: Sequencing,
    fallback: Duration,
) {
    match after {
        // Two frames: the first lands before the pending style flush, the second after it.
        Sequencing::StyleFlush => request_animation_frame(move || {
            request_animation_frame(move || continue_step(runtime, epoch, step));
        }),
        Sequencing::WindowTransition => {
            runtime.pending_transition.set_value(Some((epoch, step)));
            set_timeout(move || fire_if_pending(runtime, (epoch, step)), fallback);
        }
    }
}

/// `transitionend` on the window element.
pub(super) fn on_window_transition_end(runtime: WinipcfgRuntimeContext) {
    let pending = runtime.pending_transition.try_update_value(Option::take).flatten();
    if let Some((epoch, step)) = pending {
        continue_step(runtime, epoch, step);
    }
}

fn fire_if_pending(runtime: WinipcfgRuntimeContext, expected: (u64, TransitionStep)) {
    let matches = runtime
        .pending_transition
        .with_value(|pending| *pending == Some(expected));
    if matches {
        runtime.pending_transition.set_value(None);
        logging::debug_warn!("window transition end not observed; continuing {expected:?}");
        continue_step(runtime, expected.0, expected.1);
    }
}

fn continue_step(runtime: WinipcfgRuntimeContext, epoch: u64, step: TransitionStep) {
    runtime.dispatch_action(ChromeAction::Continue {
        epoch,
        step,
        metrics: dom::chrome_metrics(),
    });
}
