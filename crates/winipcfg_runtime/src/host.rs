//! Host-side runtime helpers for executing reducer effects and binding the rendered page.
//!
//! The page markup is produced by the server. Everything in this module attaches to it by id or
//! selector and quietly skips any feature whose elements the active template does not render.

#[cfg(target_arch = "wasm32")]
mod chrome;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod probe;
#[cfg(target_arch = "wasm32")]
mod redirector;
#[cfg(target_arch = "wasm32")]
mod sequencing;

use std::{rc::Rc, time::Duration};

use leptos::logging;
use platform_host::{HostServices, IpInfoService, NavigationService};

use crate::{config::RuntimeConfig, reducer::RuntimeEffect, runtime_context::WinipcfgRuntimeContext};

#[derive(Clone)]
/// Host service bundle and page configuration for the winipcfg runtime.
pub struct WinipcfgHostContext {
    services: HostServices,
    config: RuntimeConfig,
}

impl WinipcfgHostContext {
    /// Builds a host context from an injected service bundle and page configuration.
    pub fn new(services: HostServices, config: RuntimeConfig) -> Self {
        Self { services, config }
    }

    /// Returns the page configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Returns the configured sibling-host fetch service.
    pub fn ip_info_service(&self) -> Rc<dyn IpInfoService> {
        self.services.ip_info.clone()
    }

    /// Returns the configured navigation service.
    pub fn navigation_service(&self) -> Rc<dyn NavigationService> {
        self.services.navigation.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Upper bound on waiting for the window's CSS transition to end.
    pub fn transition_fallback(&self) -> Duration {
        Duration::from_millis(self.config.transition_fallback_ms)
    }

    /// Navigates away from the page, logging when the host refuses.
    pub fn navigate(&self, url: &str) {
        if let Err(err) = self.services.navigation.navigate(url) {
            logging::warn!("navigation to `{url}` failed: {err}");
        }
    }

    /// Binds the window chrome: buttons, icon, drag handles, and state projection.
    pub fn install_chrome(&self, runtime: WinipcfgRuntimeContext) {
        #[cfg(target_arch = "wasm32")]
        chrome::install(runtime);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = runtime;
    }

    /// Binds the IP-version radios and buttons, the clock, and viewport scaling.
    pub fn install_redirector(&self) {
        #[cfg(target_arch = "wasm32")]
        redirector::install(self.clone());
    }

    /// Runs the dual-stack probe once the page has loaded.
    pub fn install_probe(&self) {
        #[cfg(target_arch = "wasm32")]
        probe::install(self.clone());
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: WinipcfgRuntimeContext, effect: RuntimeEffect) {
        #[cfg(target_arch = "wasm32")]
        match effect {
            RuntimeEffect::Schedule { epoch, step, after } => {
                sequencing::schedule(runtime, epoch, step, after, self.transition_fallback())
            }
            RuntimeEffect::ArmSelectionDismiss => chrome::arm_selection_dismiss(runtime),
            RuntimeEffect::DisarmSelectionDismiss => chrome::disarm_selection_dismiss(runtime),
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (runtime, effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        probe::FieldScheme,
        redirector::{redirect_url, IpVersionPreference},
    };
    use platform_host::{MemoryIpInfoService, MemoryNavigationService};
    use pretty_assertions::assert_eq;

    fn host_with(navigation: MemoryNavigationService) -> WinipcfgHostContext {
        WinipcfgHostContext::new(
            HostServices::memory(MemoryIpInfoService::default(), navigation),
            RuntimeConfig::for_scheme(FieldScheme::Legacy),
        )
    }

    #[test]
    fn navigate_routes_through_injected_service() {
        let navigation = MemoryNavigationService::default();
        let host = host_with(navigation.clone());

        host.navigate(&redirect_url(
            IpVersionPreference::Ip6,
            "ip4.example.com",
            &host.config().redirect_path,
        ));
        host.navigate(&host.config().cancel_href);

        assert_eq!(
            navigation.visited(),
            vec!["https://ip6.example.com/98".to_string(), "/".to_string()]
        );
        assert_eq!(navigation.last().as_deref(), Some("/"));
    }

    #[test]
    fn exposes_configured_fallback_and_strategy() {
        let host = host_with(MemoryNavigationService::default());

        assert_eq!(host.transition_fallback(), Duration::from_millis(300));
        assert_eq!(host.host_strategy_name(), "stub");
        assert_eq!(host.config().field_scheme, FieldScheme::Legacy);
    }
}
