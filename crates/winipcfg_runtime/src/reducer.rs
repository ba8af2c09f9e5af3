//! Reducer actions, side-effect intents, and transition logic for the window chrome.

use thiserror::Error;

use crate::{
    model::{
        ChromeMetrics, ChromeState, DragSession, DragTarget, ElementPosition, ElementRect,
        Geometry, InteractionState, PointerPosition, WindowMode, MAXIMIZE_LABEL, RESTORE_LABEL,
    },
    window_manager::{
        maximize_geometry, minimize_transform, MINIMIZE_TRANSFORM_ORIGIN, RESTORED_TRANSFORM,
        RESTORED_TRANSFORM_ORIGIN, UNMAXIMIZED_TRANSFORM,
    },
};

/// Substring marking a drag handle id as the icon's own handle.
const ICON_HANDLE_MARKER: &str = "icon";

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_chrome`] to mutate [`ChromeState`].
pub enum ChromeAction {
    /// Close button: plain visibility toggle between the window and the icon.
    ToggleVisibility,
    /// Maximize button: toggle between normal and integer-scaled geometry.
    ToggleMaximize {
        /// Current window and viewport sizes.
        metrics: ChromeMetrics,
    },
    /// Minimize button: animated collapse onto the icon, or animated restore.
    ToggleMinimizeAnimated {
        /// Window bounding rect.
        window_rect: ElementRect,
        /// Icon bounding rect.
        icon_rect: ElementRect,
    },
    /// Icon double-click: restore the geometry the window was minimized from.
    RestoreFromIcon,
    /// Run a follow-up step scheduled by an earlier transition.
    Continue {
        /// Epoch the step was scheduled in.
        epoch: u64,
        /// Step to run.
        step: TransitionStep,
        /// Measurements taken when the step fired.
        metrics: ChromeMetrics,
    },
    /// A drag handle was bound; icon handles select the icon.
    RegisterDragHandle {
        /// DOM id of the handle.
        handle_id: String,
    },
    /// Apply the selection marker to the icon.
    SelectIcon,
    /// A click landed outside the icon.
    DismissIconSelection,
    /// Pointer pressed on a drag handle.
    BeginDrag {
        /// Element the handle moves.
        target: DragTarget,
        /// Pointer position.
        pointer: PointerPosition,
        /// Element `offsetLeft`/`offsetTop`.
        origin: ElementPosition,
    },
    /// Pointer moved anywhere in the document.
    UpdateDrag {
        /// Pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released anywhere in the document.
    EndDrag,
}

/// Deferred halves of the animated transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// Collapse finished: swap the window out for the icon.
    CollapseToIcon,
    /// Icon is displayed: start its entrance animation.
    RevealIcon,
    /// Window is displayed again after a minimize-button restore: reset its transform.
    SettleWindow,
    /// Window is displayed again after an icon double-click: replay its geometry.
    SettleFromIcon,
    /// Restore finished: hide the icon.
    HideIcon,
}

/// Completion signal a follow-up step waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequencing {
    /// Styles written so far have been applied by the browser.
    StyleFlush,
    /// The window's CSS transition has ended.
    WindowTransition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_chrome`] for the host to execute.
pub enum RuntimeEffect {
    /// Dispatch [`ChromeAction::Continue`] once `after` has been observed.
    Schedule {
        /// Epoch to echo back.
        epoch: u64,
        /// Step to run.
        step: TransitionStep,
        /// Signal to wait for.
        after: Sequencing,
    },
    /// Install the document-wide click listener that dismisses the icon selection.
    ArmSelectionDismiss,
    /// Remove that listener.
    DisarmSelectionDismiss,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that can no longer apply.
pub enum ReducerError {
    /// A follow-up step arrived after a newer transition superseded it.
    #[error("transition step from epoch {received} superseded by epoch {current}")]
    StaleTransition {
        /// Epoch of the live transition.
        current: u64,
        /// Epoch carried by the step.
        received: u64,
    },
}

/// Applies a [`ChromeAction`] to the chrome state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::StaleTransition`] for a [`ChromeAction::Continue`] whose epoch is no
/// longer current; state is left untouched in that case.
pub fn reduce_chrome(
    state: &mut ChromeState,
    interaction: &mut InteractionState,
    action: ChromeAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        ChromeAction::ToggleVisibility => {
            state.begin_transition();
            match state.mode {
                WindowMode::Minimized { restore } => {
                    state.show_window();
                    state.hide_icon();
                    state.mode = restore.into();
                }
                mode => {
                    state.hide_window();
                    state.show_icon();
                    state.mode = mode.minimized_from();
                }
            }
        }
        ChromeAction::ToggleMaximize { metrics } => {
            match state.mode.geometry() {
                Geometry::Normal => {
                    let Some(geometry) = maximize_geometry(metrics) else {
                        return Ok(effects);
                    };
                    state.begin_transition();
                    state.window.transform = Some(geometry.transform());
                    state.maximize_label = Some(RESTORE_LABEL);
                    state.mode = WindowMode::Maximized;
                }
                Geometry::Maximized => {
                    state.begin_transition();
                    state.window.transform = Some(UNMAXIMIZED_TRANSFORM.to_string());
                    state.maximize_label = Some(MAXIMIZE_LABEL);
                    state.mode = WindowMode::Normal;
                }
            }
            // Undo whatever a superseded collapse left behind.
            state.window.opacity = Some("1");
            state.window.transform_origin = Some(RESTORED_TRANSFORM_ORIGIN);
            state.icon.restored = false;
            state.show_window();
            state.hide_icon();
        }
        ChromeAction::ToggleMinimizeAnimated {
            window_rect,
            icon_rect,
        } => {
            let epoch = state.begin_transition();
            if state.mode.is_minimized() {
                state.icon.restored = false;
                state.show_window();
                state.mode = WindowMode::Normal;
                effects.push(schedule(
                    epoch,
                    TransitionStep::SettleWindow,
                    Sequencing::StyleFlush,
                ));
            } else {
                state.window.transform_origin = Some(MINIMIZE_TRANSFORM_ORIGIN);
                state.window.transform = Some(minimize_transform(window_rect, icon_rect));
                state.window.opacity = Some("0");
                state.mode = state.mode.minimized_from();
                effects.push(schedule(
                    epoch,
                    TransitionStep::CollapseToIcon,
                    Sequencing::WindowTransition,
                ));
            }
        }
        ChromeAction::RestoreFromIcon => {
            let WindowMode::Minimized { restore } = state.mode else {
                return Ok(effects);
            };
            let epoch = state.begin_transition();
            state.icon.restored = false;
            state.show_window();
            state.mode = restore.into();
            effects.push(schedule(
                epoch,
                TransitionStep::SettleFromIcon,
                Sequencing::StyleFlush,
            ));
        }
        ChromeAction::Continue {
            epoch,
            step,
            metrics,
        } => {
            if epoch != state.transition_epoch {
                return Err(ReducerError::StaleTransition {
                    current: state.transition_epoch,
                    received: epoch,
                });
            }
            continue_transition(state, &mut effects, epoch, step, metrics);
        }
        ChromeAction::RegisterDragHandle { handle_id } => {
            if handle_id.contains(ICON_HANDLE_MARKER) {
                select_icon(state, interaction, &mut effects);
            }
        }
        ChromeAction::SelectIcon => select_icon(state, interaction, &mut effects),
        ChromeAction::DismissIconSelection => {
            state.icon.selected = false;
            if interaction.selection_dismiss_armed {
                interaction.selection_dismiss_armed = false;
                effects.push(RuntimeEffect::DisarmSelectionDismiss);
            }
        }
        ChromeAction::BeginDrag {
            target,
            pointer,
            origin,
        } => {
            interaction.dragging = Some(DragSession {
                target,
                offset: PointerPosition {
                    x: pointer.x - origin.left,
                    y: pointer.y - origin.top,
                },
            });
        }
        ChromeAction::UpdateDrag { pointer } => {
            if let Some(session) = interaction.dragging {
                let position = ElementPosition {
                    left: pointer.x - session.offset.x,
                    top: pointer.y - session.offset.y,
                };
                match session.target {
                    DragTarget::Window => state.window.position = Some(position),
                    DragTarget::Icon => state.icon.position = Some(position),
                }
            }
        }
        ChromeAction::EndDrag => {
            interaction.dragging = None;
        }
    }
    Ok(effects)
}

fn continue_transition(
    state: &mut ChromeState,
    effects: &mut Vec<RuntimeEffect>,
    epoch: u64,
    step: TransitionStep,
    metrics: ChromeMetrics,
) {
    match step {
        TransitionStep::CollapseToIcon => {
            state.hide_window();
            state.show_icon();
            effects.push(schedule(
                epoch,
                TransitionStep::RevealIcon,
                Sequencing::StyleFlush,
            ));
        }
        TransitionStep::RevealIcon => {
            state.icon.restored = true;
        }
        TransitionStep::SettleWindow => {
            settle_normal(state);
            effects.push(schedule(
                epoch,
                TransitionStep::HideIcon,
                Sequencing::WindowTransition,
            ));
        }
        TransitionStep::SettleFromIcon => {
            match state.mode.geometry() {
                Geometry::Maximized => match maximize_geometry(metrics) {
                    Some(geometry) => {
                        state.window.transform = Some(geometry.transform());
                        state.window.transform_origin = Some(RESTORED_TRANSFORM_ORIGIN);
                        state.window.opacity = Some("1");
                        state.maximize_label = Some(RESTORE_LABEL);
                    }
                    // The viewport shrank while minimized; fall back to normal geometry.
                    None => {
                        settle_normal(state);
                        state.mode = WindowMode::Normal;
                    }
                },
                Geometry::Normal => settle_normal(state),
            }
            effects.push(schedule(
                epoch,
                TransitionStep::HideIcon,
                Sequencing::WindowTransition,
            ));
        }
        TransitionStep::HideIcon => {
            state.hide_icon();
        }
    }
}

fn settle_normal(state: &mut ChromeState) {
    state.window.transform = Some(RESTORED_TRANSFORM.to_string());
    state.window.opacity = Some("1");
    state.window.transform_origin = Some(RESTORED_TRANSFORM_ORIGIN);
    state.maximize_label = Some(MAXIMIZE_LABEL);
}

fn select_icon(
    state: &mut ChromeState,
    interaction: &mut InteractionState,
    effects: &mut Vec<RuntimeEffect>,
) {
    state.icon.selected = true;
    if !interaction.selection_dismiss_armed {
        interaction.selection_dismiss_armed = true;
        effects.push(RuntimeEffect::ArmSelectionDismiss);
    }
}

fn schedule(epoch: u64, step: TransitionStep, after: Sequencing) -> RuntimeEffect {
    RuntimeEffect::Schedule { epoch, step, after }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Display;
    use pretty_assertions::assert_eq;

    const ROOMY: ChromeMetrics = ChromeMetrics {
        window_width: 360.0,
        window_height: 300.0,
        viewport_width: 1280.0,
        viewport_height: 720.0,
    };

    const CRAMPED: ChromeMetrics = ChromeMetrics {
        window_width: 360.0,
        window_height: 300.0,
        viewport_width: 600.0,
        viewport_height: 720.0,
    };

    const WINDOW_RECT: ElementRect = ElementRect {
        left: 100.0,
        top: 50.0,
    };
    const ICON_RECT: ElementRect = ElementRect {
        left: 20.0,
        top: 400.0,
    };

    struct Harness {
        state: ChromeState,
        interaction: InteractionState,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: ChromeState::default(),
                interaction: InteractionState::default(),
            }
        }

        fn apply(&mut self, action: ChromeAction) -> Vec<RuntimeEffect> {
            reduce_chrome(&mut self.state, &mut self.interaction, action).expect("reduce")
        }

        /// Runs every scheduled follow-up to completion, as the host would.
        fn settle(&mut self, mut effects: Vec<RuntimeEffect>) {
            while let Some(effect) = effects.pop() {
                if let RuntimeEffect::Schedule { epoch, step, .. } = effect {
                    effects.extend(self.apply(ChromeAction::Continue {
                        epoch,
                        step,
                        metrics: ROOMY,
                    }));
                }
            }
        }

        fn minimize_animated(&mut self) -> Vec<RuntimeEffect> {
            self.apply(ChromeAction::ToggleMinimizeAnimated {
                window_rect: WINDOW_RECT,
                icon_rect: ICON_RECT,
            })
        }
    }

    #[test]
    fn initial_state_leaves_server_styles_alone() {
        let state = ChromeState::default();

        assert_eq!(state.mode, WindowMode::Normal);
        assert_eq!(state.window.display, None);
        assert_eq!(state.window.transform, None);
        assert_eq!(state.icon.display, None);
        assert_eq!(state.maximize_label, None);
    }

    #[test]
    fn close_button_toggles_visibility_without_touching_geometry() {
        let mut h = Harness::new();
        h.apply(ChromeAction::ToggleMaximize { metrics: ROOMY });
        let maximized_transform = h.state.window.transform.clone();

        h.apply(ChromeAction::ToggleVisibility);
        assert_eq!(
            h.state.mode,
            WindowMode::Minimized {
                restore: Geometry::Maximized
            }
        );
        assert_eq!(h.state.window.display, Some(Display::Hidden));
        assert_eq!(h.state.icon.display, Some(Display::Block));

        h.apply(ChromeAction::ToggleVisibility);
        assert_eq!(h.state.mode, WindowMode::Maximized);
        assert_eq!(h.state.window.display, Some(Display::Block));
        assert_eq!(h.state.icon.display, Some(Display::Hidden));
        assert_eq!(h.state.window.transform, maximized_transform);
    }

    #[test]
    fn maximize_is_noop_when_window_cannot_double() {
        let mut h = Harness::new();
        h.apply(ChromeAction::ToggleVisibility);
        let before = h.state.clone();

        let effects = h.apply(ChromeAction::ToggleMaximize { metrics: CRAMPED });

        assert!(effects.is_empty());
        assert_eq!(h.state, before);
    }

    #[test]
    fn maximize_then_restore_returns_identity_transform_and_label() {
        let mut h = Harness::new();

        h.apply(ChromeAction::ToggleMaximize { metrics: ROOMY });
        assert_eq!(h.state.mode, WindowMode::Maximized);
        assert_eq!(
            h.state.window.transform.as_deref(),
            Some("scale(2) translate(0, 75px)")
        );
        assert_eq!(h.state.maximize_label, Some("Restore"));

        h.apply(ChromeAction::ToggleMaximize { metrics: ROOMY });
        assert_eq!(h.state.mode, WindowMode::Normal);
        assert_eq!(
            h.state.window.transform.as_deref(),
            Some("scale(1) translate(0, 0)")
        );
        assert_eq!(h.state.maximize_label, Some("Maximize"));
    }

    #[test]
    fn maximize_cancels_minimized_state() {
        let mut h = Harness::new();
        h.apply(ChromeAction::ToggleVisibility);

        h.apply(ChromeAction::ToggleMaximize { metrics: ROOMY });

        assert_eq!(h.state.mode, WindowMode::Maximized);
        assert_eq!(h.state.window.display, Some(Display::Block));
        assert_eq!(h.state.icon.display, Some(Display::Hidden));
    }

    #[test]
    fn animated_minimize_collapses_then_swaps_then_marks_icon() {
        let mut h = Harness::new();

        let effects = h.minimize_animated();
        let epoch = h.state.transition_epoch;
        assert_eq!(
            effects,
            vec![RuntimeEffect::Schedule {
                epoch,
                step: TransitionStep::CollapseToIcon,
                after: Sequencing::WindowTransition,
            }]
        );
        assert_eq!(h.state.window.transform_origin, Some("top left"));
        assert_eq!(
            h.state.window.transform.as_deref(),
            Some("translate(-80px, 350px) scale(0.1)")
        );
        assert_eq!(h.state.window.opacity, Some("0"));
        assert!(h.state.mode.is_minimized());
        assert_eq!(h.state.window.display, None);

        let effects = h.apply(ChromeAction::Continue {
            epoch,
            step: TransitionStep::CollapseToIcon,
            metrics: ROOMY,
        });
        assert_eq!(h.state.window.display, Some(Display::Hidden));
        assert_eq!(h.state.icon.display, Some(Display::Block));
        assert!(!h.state.icon.restored);
        assert_eq!(
            effects,
            vec![RuntimeEffect::Schedule {
                epoch,
                step: TransitionStep::RevealIcon,
                after: Sequencing::StyleFlush,
            }]
        );

        h.settle(effects);
        assert!(h.state.icon.restored);
    }

    #[test]
    fn animated_restore_overlaps_window_and_icon_until_transition_ends() {
        let mut h = Harness::new();
        let effects = h.minimize_animated();
        h.settle(effects);

        let effects = h.minimize_animated();
        assert_eq!(h.state.mode, WindowMode::Normal);
        assert!(!h.state.icon.restored);
        assert_eq!(h.state.window.display, Some(Display::Block));
        assert_eq!(h.state.icon.display, Some(Display::Block));

        let epoch = h.state.transition_epoch;
        assert_eq!(
            effects,
            vec![RuntimeEffect::Schedule {
                epoch,
                step: TransitionStep::SettleWindow,
                after: Sequencing::StyleFlush,
            }]
        );

        let effects = h.apply(ChromeAction::Continue {
            epoch,
            step: TransitionStep::SettleWindow,
            metrics: ROOMY,
        });
        assert_eq!(h.state.window.transform.as_deref(), Some("scale(1)"));
        assert_eq!(h.state.window.opacity, Some("1"));
        assert_eq!(h.state.window.transform_origin, Some("center"));
        assert_eq!(h.state.icon.display, Some(Display::Block));

        h.settle(effects);
        assert_eq!(h.state.icon.display, Some(Display::Hidden));
    }

    #[test]
    fn double_click_restore_replays_maximize_geometry() {
        let mut h = Harness::new();
        h.apply(ChromeAction::ToggleMaximize { metrics: ROOMY });
        let maximized = h.state.window.transform.clone();
        let effects = h.minimize_animated();
        h.settle(effects);

        let effects = h.apply(ChromeAction::RestoreFromIcon);
        assert_eq!(h.state.mode, WindowMode::Maximized);
        h.settle(effects);

        assert_eq!(h.state.window.transform, maximized);
        assert_eq!(h.state.window.transform_origin, Some("center"));
        assert_eq!(h.state.window.opacity, Some("1"));
        assert_eq!(h.state.maximize_label, Some("Restore"));
        assert_eq!(h.state.icon.display, Some(Display::Hidden));
    }

    #[test]
    fn double_click_restore_settles_normal_window() {
        let mut h = Harness::new();
        h.apply(ChromeAction::ToggleVisibility);

        let effects = h.apply(ChromeAction::RestoreFromIcon);
        assert_eq!(h.state.window.display, Some(Display::Block));
        h.settle(effects);

        assert_eq!(h.state.mode, WindowMode::Normal);
        assert_eq!(h.state.window.transform.as_deref(), Some("scale(1)"));
        assert_eq!(h.state.window.transform_origin, Some("center"));
        assert_eq!(h.state.maximize_label, Some("Maximize"));
    }

    #[test]
    fn double_click_restore_falls_back_when_viewport_shrank() {
        let mut h = Harness::new();
        h.apply(ChromeAction::ToggleMaximize { metrics: ROOMY });
        h.apply(ChromeAction::ToggleVisibility);

        h.apply(ChromeAction::RestoreFromIcon);
        let epoch = h.state.transition_epoch;
        h.apply(ChromeAction::Continue {
            epoch,
            step: TransitionStep::SettleFromIcon,
            metrics: CRAMPED,
        });

        assert_eq!(h.state.mode, WindowMode::Normal);
        assert_eq!(h.state.window.transform.as_deref(), Some("scale(1)"));
        assert_eq!(h.state.maximize_label, Some("Maximize"));
    }

    #[test]
    fn double_click_is_ignored_unless_minimized() {
        let mut h = Harness::new();
        let before = h.state.clone();

        let effects = h.apply(ChromeAction::RestoreFromIcon);

        assert!(effects.is_empty());
        assert_eq!(h.state, before);
    }

    #[test]
    fn stale_follow_up_is_rejected_after_overlapping_click() {
        let mut h = Harness::new();
        h.minimize_animated();
        let collapse_epoch = h.state.transition_epoch;

        h.apply(ChromeAction::ToggleMaximize { metrics: ROOMY });
        let before = h.state.clone();

        let err = reduce_chrome(
            &mut h.state,
            &mut h.interaction,
            ChromeAction::Continue {
                epoch: collapse_epoch,
                step: TransitionStep::CollapseToIcon,
                metrics: ROOMY,
            },
        )
        .unwrap_err();

        assert_eq!(
            err,
            ReducerError::StaleTransition {
                current: collapse_epoch + 1,
                received: collapse_epoch,
            }
        );
        assert_eq!(h.state, before);
        assert_eq!(h.state.mode, WindowMode::Maximized);
        assert_eq!(h.state.window.display, Some(Display::Block));
        assert_eq!(h.state.window.opacity, Some("1"));
        assert_eq!(h.state.window.transform_origin, Some("center"));
        assert!(!h.state.icon.restored);
    }

    #[test]
    fn maximize_after_completed_collapse_makes_window_visible_again() {
        let mut h = Harness::new();
        let effects = h.minimize_animated();
        h.settle(effects);
        assert!(h.state.icon.restored);

        h.apply(ChromeAction::ToggleMaximize { metrics: ROOMY });

        assert_eq!(h.state.mode, WindowMode::Maximized);
        assert_eq!(h.state.window.display, Some(Display::Block));
        assert_eq!(h.state.window.opacity, Some("1"));
        assert_eq!(h.state.window.transform_origin, Some("center"));
        assert_eq!(h.state.icon.display, Some(Display::Hidden));
        assert!(!h.state.icon.restored);
    }

    #[test]
    fn repeated_selection_arms_a_single_dismiss_listener() {
        let mut h = Harness::new();

        assert_eq!(
            h.apply(ChromeAction::SelectIcon),
            vec![RuntimeEffect::ArmSelectionDismiss]
        );
        assert!(h.apply(ChromeAction::SelectIcon).is_empty());
        assert!(h.state.icon.selected);

        assert_eq!(
            h.apply(ChromeAction::DismissIconSelection),
            vec![RuntimeEffect::DisarmSelectionDismiss]
        );
        assert!(!h.state.icon.selected);
        assert!(!h.interaction.selection_dismiss_armed);

        assert_eq!(
            h.apply(ChromeAction::SelectIcon),
            vec![RuntimeEffect::ArmSelectionDismiss]
        );
    }

    #[test]
    fn registering_icon_handle_selects_icon_but_title_bar_does_not() {
        let mut h = Harness::new();

        assert!(h
            .apply(ChromeAction::RegisterDragHandle {
                handle_id: String::new(),
            })
            .is_empty());
        assert!(!h.state.icon.selected);

        let effects = h.apply(ChromeAction::RegisterDragHandle {
            handle_id: "winipcfg-icon".to_string(),
        });
        assert_eq!(effects, vec![RuntimeEffect::ArmSelectionDismiss]);
        assert!(h.state.icon.selected);
    }

    #[test]
    fn drag_keeps_pointer_at_the_same_relative_offset() {
        let mut h = Harness::new();

        h.apply(ChromeAction::BeginDrag {
            target: DragTarget::Window,
            pointer: PointerPosition { x: 130, y: 60 },
            origin: ElementPosition {
                left: 100,
                top: 50,
            },
        });
        h.apply(ChromeAction::UpdateDrag {
            pointer: PointerPosition { x: 200, y: 15 },
        });
        assert_eq!(
            h.state.window.position,
            Some(ElementPosition { left: 170, top: 5 })
        );
        assert_eq!(h.state.icon.position, None);

        h.apply(ChromeAction::EndDrag);
        h.apply(ChromeAction::UpdateDrag {
            pointer: PointerPosition { x: 0, y: 0 },
        });
        assert_eq!(
            h.state.window.position,
            Some(ElementPosition { left: 170, top: 5 })
        );
    }

    #[test]
    fn icon_drag_moves_only_the_icon() {
        let mut h = Harness::new();

        h.apply(ChromeAction::BeginDrag {
            target: DragTarget::Icon,
            pointer: PointerPosition { x: 15, y: 410 },
            origin: ElementPosition { left: 10, top: 400 },
        });
        h.apply(ChromeAction::UpdateDrag {
            pointer: PointerPosition { x: 55, y: 300 },
        });

        assert_eq!(
            h.state.icon.position,
            Some(ElementPosition { left: 50, top: 290 })
        );
        assert_eq!(h.state.window.position, None);
        assert_eq!(h.state.transition_epoch, 0);
    }
}
