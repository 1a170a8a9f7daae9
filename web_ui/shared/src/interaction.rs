//! The browser capabilities the page scripts depend on, behind traits so the decisions
//! can be driven by something other than a real window.

use crate::error::NavigationError;

/// Blocking yes/no and acknowledgement dialogs.
pub trait UserPrompt {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Moving the browser somewhere else.
pub trait PageNavigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError>;
    fn reload(&self) -> Result<(), NavigationError>;
}

/// `window.confirm` and `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message)
    }
}

/// `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl PageNavigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        gloo_utils::window()
            .location()
            .set_href(url)
            .map_err(NavigationError::from)
    }

    fn reload(&self) -> Result<(), NavigationError> {
        gloo_utils::window()
            .location()
            .reload()
            .map_err(NavigationError::from)
    }
}
