//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for sibling-host `fetch` and page
//! navigation. Native builds compile the same API against stubs that report errors, so the
//! runtime crates stay testable off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod ip_info;
pub mod navigation;

pub use adapters::{
    build_host_services, host_strategy_name, ip_info_service, navigation_service,
    selected_host_strategy, IpInfoServiceAdapter, NavigationServiceAdapter,
};
pub use ip_info::WebIpInfoService;
pub use navigation::WebNavigationService;
