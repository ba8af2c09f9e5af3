//! Page-navigation host-service contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service for full-page navigation.
pub trait NavigationService {
    /// Navigates the current page to `url`, replacing the running document.
    fn navigate(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Navigation service that ignores every request.
pub struct NoopNavigationService;

impl NavigationService for NoopNavigationService {
    fn navigate(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Navigation service that records requested URLs instead of leaving the page.
pub struct MemoryNavigationService {
    visited: Rc<RefCell<Vec<String>>>,
}

impl MemoryNavigationService {
    /// Most recent navigation target.
    pub fn last(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }

    /// Every navigation target, in order.
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl NavigationService for MemoryNavigationService {
    fn navigate(&self, url: &str) -> Result<(), String> {
        self.visited.borrow_mut().push(url.to_string());
        Ok(())
    }
}
