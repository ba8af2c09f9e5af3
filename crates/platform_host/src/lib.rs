//! Typed host-domain contracts and shared models used by the winipcfg runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the `/json` IP-info
//! model, the fetch and navigation service traits, and wall-clock helpers, while concrete browser
//! adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod ip_info;
pub mod navigation;
pub mod time;

pub use host::{HostServices, HostStrategy};
pub use ip_info::{
    IpFamily, IpInfo, IpInfoFuture, IpInfoService, MemoryIpInfoService, NoopIpInfoService,
    MISSING_ADDRESS_SENTINEL,
};
pub use navigation::{MemoryNavigationService, NavigationService, NoopNavigationService};
pub use time::ClockReading;
