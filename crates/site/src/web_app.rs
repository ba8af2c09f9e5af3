use leptos::*;
use winipcfg_runtime::{FieldScheme, RuntimeConfig, WinipcfgProvider};

/// Id of the optional `application/json` script carrying [`RuntimeConfig`] overrides.
pub const CONFIG_SCRIPT_ID: &str = "winipcfg-config";

/// Enhances the page the server rendered for `path`.
///
/// Navigation between templates stays full-page: the server owns routing, so the app only reads
/// the path once to pick the field scheme.
#[component]
pub fn SiteApp(#[prop(into)] path: String) -> impl IntoView {
    let config = page_config(FieldScheme::for_path(&path), embedded_config().as_deref());
    let host_services = platform_host_web::build_host_services();

    view! { <WinipcfgProvider host_services=host_services config=config /> }
}

/// Resolves the runtime configuration for a template, layering a well-formed embedded override
/// over the template's defaults.
pub fn page_config(scheme: FieldScheme, embedded: Option<&str>) -> RuntimeConfig {
    let template = RuntimeConfig::for_scheme(scheme);
    let Some(raw) = embedded.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return template;
    };
    match template.with_overrides(raw) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("ignoring embedded winipcfg config: {err}");
            template
        }
    }
}

/// Path of the current page, read once at mount.
#[cfg(target_arch = "wasm32")]
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn embedded_config() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|script| script.text_content())
}

#[cfg(not(target_arch = "wasm32"))]
fn embedded_config() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn template_scheme_applies_without_override() {
        assert_eq!(
            page_config(FieldScheme::Legacy, None),
            RuntimeConfig::for_scheme(FieldScheme::Legacy)
        );
        assert_eq!(
            page_config(FieldScheme::Base, Some("  ")),
            RuntimeConfig::for_scheme(FieldScheme::Base)
        );
    }

    #[test]
    fn override_without_scheme_keeps_template_scheme() {
        let config = page_config(FieldScheme::Legacy, Some(r#"{"cancel_href":"/home"}"#));

        assert_eq!(config.field_scheme, FieldScheme::Legacy);
        assert_eq!(config.cancel_href, "/home");
        assert_eq!(config.redirect_path, "/98");
    }

    #[test]
    fn override_may_name_the_scheme_explicitly() {
        let config = page_config(
            FieldScheme::Base,
            Some(r#"{"field_scheme":"legacy","cancel_href":"/home"}"#),
        );

        assert_eq!(config.field_scheme, FieldScheme::Legacy);
        assert_eq!(config.cancel_href, "/home");
    }

    #[test]
    fn malformed_override_falls_back_to_template_defaults() {
        assert_eq!(
            page_config(FieldScheme::Legacy, Some("{not json")),
            RuntimeConfig::for_scheme(FieldScheme::Legacy)
        );
    }

    #[test]
    fn legacy_path_and_override_compose() {
        let config = page_config(
            FieldScheme::for_path("/98"),
            Some(r#"{"transition_fallback_ms":500}"#),
        );

        assert_eq!(config.field_scheme, FieldScheme::Legacy);
        assert_eq!(config.transition_fallback_ms, 500);
    }
}
