//! Navigation host-service adapter backed by `window.location`.

use platform_host::NavigationService;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation adapter that assigns `location.href`.
pub struct WebNavigationService;

impl NavigationService for WebNavigationService {
    fn navigate(&self, url: &str) -> Result<(), String> {
        bridge::navigate(url)
    }
}
