//! IP-info host-service adapter backed by the browser `fetch` API.

use platform_host::{IpInfo, IpInfoFuture, IpInfoService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser IP-info adapter. Issues one CORS `GET` per call with no retry or timeout.
pub struct WebIpInfoService;

impl IpInfoService for WebIpInfoService {
    fn fetch_ip_info<'a>(&'a self, url: &'a str) -> IpInfoFuture<'a, Result<IpInfo, String>> {
        Box::pin(async move { bridge::fetch_ip_info(url).await })
    }
}
