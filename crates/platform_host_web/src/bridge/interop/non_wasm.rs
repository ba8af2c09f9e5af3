use super::*;

fn unsupported() -> String {
    "Browser fetch/navigation APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_ip_info(_url: &str) -> Result<IpInfo, String> {
    Err(unsupported())
}

pub fn navigate(_url: &str) -> Result<(), String> {
    Err(unsupported())
}
