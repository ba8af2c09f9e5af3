//! Client runtime for the server-rendered winipcfg page.
//!
//! The page arrives fully rendered; this crate enhances it in place. [`reduce_chrome`] owns the
//! window/icon chrome state machine, [`probe`] completes the IP fields on dual-stack hosts, and
//! [`redirector`] drives the IP-version selector. [`WinipcfgProvider`] wires all of it to the DOM
//! through the injected [`platform_host::HostServices`].

mod host;
mod runtime_context;

pub mod config;
pub mod model;
pub mod probe;
pub mod redirector;
pub mod reducer;
pub mod window_manager;

pub use config::{ConfigError, RuntimeConfig};
pub use host::WinipcfgHostContext;
pub use model::*;
pub use probe::{run_dual_stack_probe, FieldScheme, IpField, IpFieldAccess, ProbeError, ProbeReport};
pub use reducer::{reduce_chrome, ChromeAction, ReducerError, RuntimeEffect};
pub use runtime_context::{WinipcfgProvider, WinipcfgRuntimeContext};
