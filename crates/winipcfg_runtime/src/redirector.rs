//! IP-version redirect targets, the status-bar clock, and viewport scaling.

use platform_host::ClockReading;

/// IP family the user wants the page served over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersionPreference {
    /// Dual-stack host; the browser picks the family.
    Auto,
    Ip4,
    Ip6,
}

impl IpVersionPreference {
    pub const ALL: [Self; 3] = [Self::Auto, Self::Ip4, Self::Ip6];

    /// Parses the `value` attribute of an `ipversion` radio input.
    pub fn from_radio_value(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(Self::Auto),
            "ip4" => Some(Self::Ip4),
            "ip6" => Some(Self::Ip6),
            _ => None,
        }
    }

    pub const fn radio_value(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Ip4 => "ip4",
            Self::Ip6 => "ip6",
        }
    }

    /// DOM id of the radio input representing this preference.
    pub const fn radio_id(self) -> &'static str {
        match self {
            Self::Auto => "radio1",
            Self::Ip4 => "radio2",
            Self::Ip6 => "radio3",
        }
    }

    /// Leftmost hostname label of the host serving this preference.
    pub const fn host_prefix(self) -> &'static str {
        match self {
            Self::Auto => "ip",
            Self::Ip4 => "ip4",
            Self::Ip6 => "ip6",
        }
    }
}

/// Strips the leftmost label of `hostname`.
///
/// Assumes `<subdomain>.<baseHost>`; a single-label host yields an empty base.
pub fn base_host(hostname: &str) -> String {
    hostname.split('.').skip(1).collect::<Vec<_>>().join(".")
}

/// Absolute URL of `path` on the sibling host serving `preference`.
pub fn redirect_url(preference: IpVersionPreference, hostname: &str, path: &str) -> String {
    format!(
        "https://{}.{}{}",
        preference.host_prefix(),
        base_host(hostname),
        path
    )
}

/// Preference implied by the page URL, used to pre-select a radio.
pub fn preference_from_url(url: &str) -> IpVersionPreference {
    if url.contains("ip4.") {
        IpVersionPreference::Ip4
    } else if url.contains("ip6.") {
        IpVersionPreference::Ip6
    } else {
        IpVersionPreference::Auto
    }
}

/// `H:MM:SS`, 24-hour. Hours are not padded.
pub fn format_clock(reading: ClockReading) -> String {
    format!(
        "{}:{:02}:{:02}",
        reading.hour, reading.minute, reading.second
    )
}

/// `initial-scale` that makes `design_width` logical pixels span `screen_width`.
pub fn viewport_scale(screen_width: f64, design_width: f64) -> f64 {
    screen_width / design_width
}

/// `content` attribute of the viewport meta tag.
pub fn viewport_content(screen_width: f64, design_width: f64) -> String {
    format!(
        "width=device-width, initial-scale={}",
        viewport_scale(screen_width, design_width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn redirect_targets_for_every_preference() {
        let host = "ip4.example.com";

        assert_eq!(
            redirect_url(IpVersionPreference::Auto, host, "/98"),
            "https://ip.example.com/98"
        );
        assert_eq!(
            redirect_url(IpVersionPreference::Ip4, host, "/98"),
            "https://ip4.example.com/98"
        );
        assert_eq!(
            redirect_url(IpVersionPreference::Ip6, host, "/98"),
            "https://ip6.example.com/98"
        );
    }

    #[test]
    fn base_host_keeps_every_label_after_the_first() {
        assert_eq!(base_host("ip.ipinfo.example.co.uk"), "ipinfo.example.co.uk");
        assert_eq!(base_host("localhost"), "");
    }

    #[test]
    fn radio_values_round_trip() {
        for preference in IpVersionPreference::ALL {
            assert_eq!(
                IpVersionPreference::from_radio_value(preference.radio_value()),
                Some(preference)
            );
        }
        assert_eq!(IpVersionPreference::from_radio_value("ipx"), None);
    }

    #[test]
    fn preselection_follows_url_subdomain() {
        assert_eq!(
            preference_from_url("https://ip4.example.com/98").radio_id(),
            "radio2"
        );
        assert_eq!(
            preference_from_url("https://ip6.example.com/98").radio_id(),
            "radio3"
        );
        assert_eq!(
            preference_from_url("https://ip.example.com/98").radio_id(),
            "radio1"
        );
        assert_eq!(
            preference_from_url("http://localhost:5000/98").radio_id(),
            "radio1"
        );
    }

    #[test]
    fn clock_pads_minutes_and_seconds() {
        for value in 0..60 {
            let text = format_clock(ClockReading {
                hour: 7,
                minute: value,
                second: value,
            });
            assert_eq!(text, format!("7:{value:02}:{value:02}"));
            assert_eq!(text.len(), 7);
        }
        assert_eq!(
            format_clock(ClockReading {
                hour: 23,
                minute: 5,
                second: 9,
            }),
            "23:05:09"
        );
    }

    #[test]
    fn viewport_scale_fills_device_width() {
        assert_eq!(viewport_scale(720.0, 360.0), 2.0);
        assert_eq!(
            viewport_content(720.0, 360.0),
            "width=device-width, initial-scale=2"
        );
        assert_eq!(
            viewport_content(540.0, 360.0),
            "width=device-width, initial-scale=1.5"
        );
    }
}
