//! Dual-stack probe: fills in the address family the serving host could not see.
//!
//! The page is rendered by whichever host the browser reached. When it reached the dual-stack
//! host over one family, the other family is looked up on the single-stack sibling host and
//! patched into the rendered fields.

use std::collections::BTreeMap;

use leptos::logging;
use platform_host::{IpFamily, IpInfoService, MISSING_ADDRESS_SENTINEL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RuntimeConfig;

/// DOM id of the element announcing the family the page was served over.
pub const INITIAL_PROTOCOL_ID: &str = "initial-protocol";

/// Selector scheme of the rendered IP fields, one per page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldScheme {
    /// Dialog template: fields carry ids.
    Legacy,
    /// Table template: cells carry `data-ip-key`.
    #[default]
    Base,
}

/// One rendered IP field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpField {
    Ipv4Address,
    Ipv6Address,
    Ipv4Hostname,
    Ipv6Hostname,
}

impl IpField {
    pub const fn address(family: IpFamily) -> Self {
        match family {
            IpFamily::V4 => Self::Ipv4Address,
            IpFamily::V6 => Self::Ipv6Address,
        }
    }

    pub const fn hostname(family: IpFamily) -> Self {
        match family {
            IpFamily::V4 => Self::Ipv4Hostname,
            IpFamily::V6 => Self::Ipv6Hostname,
        }
    }
}

/// Path the legacy dialog template is served under.
pub const LEGACY_TEMPLATE_PATH: &str = "/98";

impl FieldScheme {
    /// Scheme of the template the server renders for `path`.
    pub fn for_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path == LEGACY_TEMPLATE_PATH {
            Self::Legacy
        } else {
            Self::Base
        }
    }

    pub const fn selector(self, field: IpField) -> &'static str {
        match (self, field) {
            (Self::Legacy, IpField::Ipv4Address) => "#ipv4-address",
            (Self::Legacy, IpField::Ipv6Address) => "#ipv6-address",
            (Self::Legacy, IpField::Ipv4Hostname) => "#ipv4-hostname",
            (Self::Legacy, IpField::Ipv6Hostname) => "#ipv6-hostname",
            (Self::Base, IpField::Ipv4Address) => r#"td[data-ip-key="IPv4"]"#,
            (Self::Base, IpField::Ipv6Address) => r#"td[data-ip-key="IPv6"]"#,
            (Self::Base, IpField::Ipv4Hostname) => r#"td[data-ip-key="HOSTNAME_IPv4"]"#,
            (Self::Base, IpField::Ipv6Hostname) => r#"td[data-ip-key="HOSTNAME_IPv6"]"#,
        }
    }
}

/// Read/write access to the rendered IP fields.
///
/// Absent elements read as `None` and silently ignore writes.
pub trait IpFieldAccess {
    fn read(&self, field: IpField) -> Option<String>;
    fn write(&mut self, field: IpField, text: &str);
    /// Writes the label of the family the page was served over.
    fn announce_initial_protocol(&mut self, family: IpFamily);
}

/// In-memory field set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpFieldSet {
    fields: BTreeMap<IpField, String>,
    initial_protocol: Option<String>,
}

impl IpFieldSet {
    pub fn with(mut self, field: IpField, text: impl Into<String>) -> Self {
        self.fields.insert(field, text.into());
        self
    }

    pub fn get(&self, field: IpField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn initial_protocol(&self) -> Option<&str> {
        self.initial_protocol.as_deref()
    }
}

impl IpFieldAccess for IpFieldSet {
    fn read(&self, field: IpField) -> Option<String> {
        self.fields.get(&field).cloned()
    }

    fn write(&mut self, field: IpField, text: &str) {
        if let Some(value) = self.fields.get_mut(&field) {
            *value = text.to_string();
        }
    }

    fn announce_initial_protocol(&mut self, family: IpFamily) {
        self.initial_protocol = Some(family.label().to_string());
    }
}

/// Family shown as the sentinel, when exactly one is.
pub fn missing_family(ipv4: Option<&str>, ipv6: Option<&str>) -> Option<IpFamily> {
    let ipv4_missing = ipv4 == Some(MISSING_ADDRESS_SENTINEL);
    let ipv6_missing = ipv6 == Some(MISSING_ADDRESS_SENTINEL);
    match (ipv4_missing, ipv6_missing) {
        (true, false) => Some(IpFamily::V4),
        (false, true) => Some(IpFamily::V6),
        _ => None,
    }
}

pub fn is_dual_stack_host(hostname: &str, marker: &str) -> bool {
    hostname.contains(marker)
}

/// Last two labels of `hostname`.
pub fn root_domain(hostname: &str) -> String {
    let labels: Vec<&str> = hostname.split('.').collect();
    labels[labels.len().saturating_sub(2)..].join(".")
}

/// `/json` endpoint of the single-stack sibling serving `family`.
pub fn sibling_json_url(family: IpFamily, hostname: &str) -> String {
    format!(
        "https://{}.{}/json",
        family.short_code(),
        root_domain(hostname)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbePlan {
    /// Neither or both families show the sentinel.
    Indeterminate,
    /// Not on the dual-stack host; only announce.
    AnnounceOnly { missing: IpFamily },
    Fetch { missing: IpFamily, url: String },
}

pub fn plan_probe(
    ipv4: Option<&str>,
    ipv6: Option<&str>,
    hostname: &str,
    dual_stack_marker: &str,
) -> ProbePlan {
    let Some(missing) = missing_family(ipv4, ipv6) else {
        return ProbePlan::Indeterminate;
    };
    if is_dual_stack_host(hostname, dual_stack_marker) {
        ProbePlan::Fetch {
            missing,
            url: sibling_json_url(missing, hostname),
        }
    } else {
        ProbePlan::AnnounceOnly { missing }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeReport {
    Indeterminate,
    SingleStackHost { missing: IpFamily },
    Patched { family: IpFamily, url: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("fetching {url} failed: {reason}")]
    Fetch { url: String, reason: String },
}

/// Runs the probe once against `fields`.
///
/// # Errors
///
/// Returns [`ProbeError::Fetch`] when the sibling request fails. Fields are left as rendered,
/// apart from the initial-protocol announcement.
pub async fn run_dual_stack_probe<F>(
    fields: &mut F,
    hostname: &str,
    config: &RuntimeConfig,
    ip_info: &dyn IpInfoService,
) -> Result<ProbeReport, ProbeError>
where
    F: IpFieldAccess + ?Sized,
{
    let ipv4 = fields.read(IpField::Ipv4Address);
    let ipv6 = fields.read(IpField::Ipv6Address);

    let (missing, url) = match plan_probe(
        ipv4.as_deref(),
        ipv6.as_deref(),
        hostname,
        &config.dual_stack_marker,
    ) {
        ProbePlan::Indeterminate => return Ok(ProbeReport::Indeterminate),
        ProbePlan::AnnounceOnly { missing } => {
            fields.announce_initial_protocol(missing.complement());
            if hostname.contains("ip6.") || hostname.contains("ipv6.") {
                logging::log!("ip info: IPv6-only host");
            }
            return Ok(ProbeReport::SingleStackHost { missing });
        }
        ProbePlan::Fetch { missing, url } => (missing, url),
    };

    fields.announce_initial_protocol(missing.complement());
    logging::log!("ip info: dual-stack host, looking up {} at {url}", missing.label());

    let info = ip_info
        .fetch_ip_info(&url)
        .await
        .map_err(|reason| ProbeError::Fetch {
            url: url.clone(),
            reason,
        })?;

    fields.write(
        IpField::address(missing),
        info.address(missing).unwrap_or_default(),
    );
    fields.write(
        IpField::hostname(missing),
        info.hostname(missing).unwrap_or_default(),
    );

    Ok(ProbeReport::Patched {
        family: missing,
        url,
    })
}
