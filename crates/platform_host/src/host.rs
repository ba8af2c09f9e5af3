//! Shared host-bundle models for browser runtime composition.

use std::rc::Rc;

use crate::{
    IpInfoService, MemoryIpInfoService, MemoryNavigationService, NavigationService,
    NoopIpInfoService, NoopNavigationService,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// No-op adapters for native builds and tests.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the winipcfg runtime.
///
/// Environment-specific service selection happens before this bundle crosses into
/// `winipcfg_runtime`.
#[derive(Clone)]
pub struct HostServices {
    /// Sibling-host IP information fetcher.
    pub ip_info: Rc<dyn IpInfoService>,
    /// Full-page navigation.
    pub navigation: Rc<dyn NavigationService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op services.
    pub fn stub() -> Self {
        Self {
            ip_info: Rc::new(NoopIpInfoService),
            navigation: Rc::new(NoopNavigationService),
            host_strategy: HostStrategy::Stub,
        }
    }

    /// Bundle backed by the given in-memory services.
    pub fn memory(ip_info: MemoryIpInfoService, navigation: MemoryNavigationService) -> Self {
        Self {
            ip_info: Rc::new(ip_info),
            navigation: Rc::new(navigation),
            host_strategy: HostStrategy::Stub,
        }
    }
}
