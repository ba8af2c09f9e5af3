use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, IpInfo, IpInfoFuture, IpInfoService, NavigationService,
    NoopIpInfoService, NoopNavigationService,
};

use crate::{WebIpInfoService, WebNavigationService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete fetch backend behind [`IpInfoService`].
#[derive(Debug, Clone, Copy)]
pub enum IpInfoServiceAdapter {
    /// Browser `fetch`.
    Browser(WebIpInfoService),
    /// No-op fallback for stubbed builds.
    Stub(NoopIpInfoService),
}

impl IpInfoService for IpInfoServiceAdapter {
    fn fetch_ip_info<'a>(&'a self, url: &'a str) -> IpInfoFuture<'a, Result<IpInfo, String>> {
        match self {
            Self::Browser(service) => service.fetch_ip_info(url),
            Self::Stub(service) => service.fetch_ip_info(url),
        }
    }
}

/// Adapter enum that erases the concrete navigation backend behind [`NavigationService`].
#[derive(Debug, Clone, Copy)]
pub enum NavigationServiceAdapter {
    /// Browser `location.href`.
    Browser(WebNavigationService),
    /// No-op fallback for stubbed builds.
    Stub(NoopNavigationService),
}

impl NavigationService for NavigationServiceAdapter {
    fn navigate(&self, url: &str) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.navigate(url),
            Self::Stub(service) => service.navigate(url),
        }
    }
}

/// Builds the IP-info adapter for the selected host strategy.
pub fn ip_info_service() -> IpInfoServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => IpInfoServiceAdapter::Browser(WebIpInfoService),
        HostStrategy::Stub => IpInfoServiceAdapter::Stub(NoopIpInfoService),
    }
}

/// Builds the navigation adapter for the selected host strategy.
pub fn navigation_service() -> NavigationServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => NavigationServiceAdapter::Browser(WebNavigationService),
        HostStrategy::Stub => NavigationServiceAdapter::Stub(NoopNavigationService),
    }
}

/// Assembles the host service bundle injected into the winipcfg runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        ip_info: Rc::new(ip_info_service()),
        navigation: Rc::new(navigation_service()),
        host_strategy: selected_host_strategy(),
    }
}
