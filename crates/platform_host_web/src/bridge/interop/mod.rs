//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

use platform_host::IpInfo;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_ip_info(url: &str) -> Result<IpInfo, String> {
    imp::fetch_ip_info(url).await
}

pub fn navigate(url: &str) -> Result<(), String> {
    imp::navigate(url)
}
