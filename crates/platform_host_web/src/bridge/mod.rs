//! Browser capability bridge implementations for `platform_host_web` service adapters.

mod interop;

use platform_host::IpInfo;

pub async fn fetch_ip_info(url: &str) -> Result<IpInfo, String> {
    interop::fetch_ip_info(url).await
}

pub fn navigate(url: &str) -> Result<(), String> {
    interop::navigate(url)
}
