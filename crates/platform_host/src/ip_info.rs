//! IP-information model and the host service that fetches it from a sibling endpoint.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Placeholder text the server renders for an address family it could not determine.
pub const MISSING_ADDRESS_SENTINEL: &str = "None";

/// Object-safe boxed future used by [`IpInfoService`].
pub type IpInfoFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// IP address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpFamily {
    /// IPv4.
    V4,
    /// IPv6.
    V6,
}

impl IpFamily {
    /// Subdomain prefix of the single-stack host serving this family.
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::V4 => "ip4",
            Self::V6 => "ip6",
        }
    }

    /// Display label, also the key used by the JSON body.
    pub const fn label(self) -> &'static str {
        match self {
            Self::V4 => "IPv4",
            Self::V6 => "IPv6",
        }
    }

    /// The other family.
    pub const fn complement(self) -> Self {
        match self {
            Self::V4 => Self::V6,
            Self::V6 => Self::V4,
        }
    }
}

/// JSON body returned by the `/json` endpoint.
///
/// Every field is optional: the backend emits `null` for families it could not resolve and may
/// omit the request-metadata keys entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpInfo {
    /// Client IPv4 address.
    #[serde(rename = "IPv4", default)]
    pub ipv4: Option<String>,
    /// Client IPv6 address.
    #[serde(rename = "IPv6", default)]
    pub ipv6: Option<String>,
    /// Reverse-resolved hostname for the IPv4 address.
    #[serde(rename = "HOSTNAME_IPv4", default)]
    pub hostname_ipv4: Option<String>,
    /// Reverse-resolved hostname for the IPv6 address.
    #[serde(rename = "HOSTNAME_IPv6", default)]
    pub hostname_ipv6: Option<String>,
    /// Request `User-Agent` header.
    #[serde(rename = "USER_AGENT", default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Request `Accept-Language` header.
    #[serde(rename = "LANGUAGE", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Request `Accept-Encoding` header.
    #[serde(rename = "ENCODINGS", default, skip_serializing_if = "Option::is_none")]
    pub encodings: Option<String>,
    /// Raw `X-Forwarded-For` chain seen by the backend.
    #[serde(rename = "X-Forwarded-For", default, skip_serializing_if = "Option::is_none")]
    pub forwarded_for: Option<String>,
    /// Request `Host` header.
    #[serde(rename = "HOST", default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Cloudflare `CF-Connecting-IP` header, when proxied.
    #[serde(rename = "CF_CONNECTING_IP", default, skip_serializing_if = "Option::is_none")]
    pub cf_connecting_ip: Option<String>,
}

impl IpInfo {
    /// Address reported for `family`.
    pub fn address(&self, family: IpFamily) -> Option<&str> {
        match family {
            IpFamily::V4 => self.ipv4.as_deref(),
            IpFamily::V6 => self.ipv6.as_deref(),
        }
    }

    /// Hostname reported for `family`.
    pub fn hostname(&self, family: IpFamily) -> Option<&str> {
        match family {
            IpFamily::V4 => self.hostname_ipv4.as_deref(),
            IpFamily::V6 => self.hostname_ipv6.as_deref(),
        }
    }
}

/// Host service for fetching [`IpInfo`] from an absolute URL.
pub trait IpInfoService {
    /// Issues a single GET request and decodes the JSON body.
    ///
    /// Non-2xx responses, transport failures and undecodable bodies are all errors.
    fn fetch_ip_info<'a>(&'a self, url: &'a str) -> IpInfoFuture<'a, Result<IpInfo, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// IP-info service for targets without a network stack.
pub struct NoopIpInfoService;

impl IpInfoService for NoopIpInfoService {
    fn fetch_ip_info<'a>(&'a self, url: &'a str) -> IpInfoFuture<'a, Result<IpInfo, String>> {
        Box::pin(async move { Err(format!("ip info unavailable for `{url}`")) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory IP-info service with canned responses keyed by URL.
///
/// Every requested URL is recorded, including ones without a canned response.
pub struct MemoryIpInfoService {
    responses: Rc<RefCell<HashMap<String, Result<IpInfo, String>>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl MemoryIpInfoService {
    /// Registers the response returned for `url`.
    pub fn respond(&self, url: impl Into<String>, response: Result<IpInfo, String>) {
        self.responses.borrow_mut().insert(url.into(), response);
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl IpInfoService for MemoryIpInfoService {
    fn fetch_ip_info<'a>(&'a self, url: &'a str) -> IpInfoFuture<'a, Result<IpInfo, String>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(url.to_string());
            self.responses
                .borrow()
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(format!("HTTP 404 for `{url}`")))
        })
    }
}
