//! Runtime provider and context wiring for the winipcfg page.
//!
//! This module owns the long-lived chrome reducer container, the runtime effect queue and its
//! drain, and the host bootstrap that binds the server-rendered markup.

use leptos::{leptos_dom::helpers::WindowListenerHandle, *};
use platform_host::HostServices;

use crate::{
    config::RuntimeConfig,
    host::WinipcfgHostContext,
    model::{ChromeState, InteractionState},
    reducer::{reduce_chrome, ChromeAction, RuntimeEffect, TransitionStep},
};

#[derive(Clone, Copy)]
/// Runtime handle shared by host bindings for reading chrome state and dispatching
/// [`ChromeAction`] values.
pub struct WinipcfgRuntimeContext {
    /// Host service bundle and page configuration.
    pub host: StoredValue<WinipcfgHostContext>,
    /// Reactive window/icon chrome state.
    pub state: RwSignal<ChromeState>,
    /// Reactive drag and selection-listener bookkeeping.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ChromeAction>,
    /// Handle of the armed outside-click listener, if any.
    pub(crate) selection_listener: StoredValue<Option<WindowListenerHandle>>,
    /// Follow-up step waiting on the window's `transitionend`.
    pub(crate) pending_transition: StoredValue<Option<(u64, TransitionStep)>>,
}

impl WinipcfgRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ChromeAction) {
        self.dispatch.call(action);
    }
}

/// Drains reducer-emitted effects in order.
///
/// Effects run against the host after the queue is emptied, so a dispatch made while an effect
/// runs lands in the next drain instead of the one in flight.
fn install_effect_drain(runtime: WinipcfgRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        let queued = runtime
            .effects
            .try_update(std::mem::take)
            .unwrap_or_default();
        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(runtime, effect);
        }
    });
}

fn install_runtime_orchestration(runtime: WinipcfgRuntimeContext) {
    let host = runtime.host.get_value();
    logging::log!(
        "winipcfg runtime starting ({} host, {:?} fields)",
        host.host_strategy_name(),
        host.config().field_scheme
    );
    install_effect_drain(runtime);
    host.install_chrome(runtime);
    host.install_redirector();
    host.install_probe();
}

#[component]
/// Boots the chrome runtime and binds the server-rendered page.
pub fn WinipcfgProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Page configuration; defaults to the base template.
    #[prop(optional)]
    config: Option<RuntimeConfig>,
) -> impl IntoView {
    let host = store_value(WinipcfgHostContext::new(
        host_services,
        config.unwrap_or_default(),
    ));
    let state = create_rw_signal(ChromeState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let selection_listener = store_value(None::<WindowListenerHandle>);
    let pending_transition = store_value(None::<(u64, TransitionStep)>);

    let dispatch = Callback::new(move |action: ChromeAction| {
        let mut chrome = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_chrome = chrome.clone();
        let previous_ui = ui.clone();

        match reduce_chrome(&mut chrome, &mut ui, action) {
            Ok(new_effects) => {
                if chrome != previous_chrome {
                    state.set(chrome);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            // Late completions from a superseded transition land here routinely.
            Err(err) => logging::debug_warn!("chrome reducer: {err}"),
        }
    });

    let runtime = WinipcfgRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
        selection_listener,
        pending_transition,
    };

    install_runtime_orchestration(runtime);
}
