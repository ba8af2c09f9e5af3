//! Dual-stack probe bound to the rendered IP fields.

use leptos::*;
use platform_host::IpFamily;
use web_sys::Document;

use super::WinipcfgHostContext;
use crate::probe::{run_dual_stack_probe, FieldScheme, IpField, IpFieldAccess, INITIAL_PROTOCOL_ID};

struct DomIpFields {
    document: Document,
    scheme: FieldScheme,
}

impl IpFieldAccess for DomIpFields {
    fn read(&self, field: IpField) -> Option<String> {
        self.document
            .query_selector(self.scheme.selector(field))
            .ok()
            .flatten()
            .and_then(|element| element.text_content())
    }

    fn write(&mut self, field: IpField, text: &str) {
        if let Ok(Some(element)) = self.document.query_selector(self.scheme.selector(field)) {
            element.set_text_content(Some(text));
        }
    }

    fn announce_initial_protocol(&mut self, family: IpFamily) {
        if let Some(element) = self.document.get_element_by_id(INITIAL_PROTOCOL_ID) {
            element.set_text_content(Some(family.label()));
        }
    }
}

pub(super) fn install(host: WinipcfgHostContext) {
    if document().ready_state() == "complete" {
        spawn_probe(host);
        return;
    }
    let load = window_event_listener(ev::load, move |_| spawn_probe(host.clone()));
    on_cleanup(move || load.remove());
}

fn spawn_probe(host: WinipcfgHostContext) {
    spawn_local(async move {
        let mut fields = DomIpFields {
            document: document(),
            scheme: host.config().field_scheme,
        };
        let hostname = window().location().hostname().unwrap_or_default();
        let ip_info = host.ip_info_service();
        match run_dual_stack_probe(&mut fields, &hostname, host.config(), ip_info.as_ref()).await
        {
            Ok(report) => logging::log!("ip info probe: {report:?}"),
            Err(err) => logging::error!("Error fetching IP information: {err}"),
        }
    });
}
