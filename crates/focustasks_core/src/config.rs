//! Page configuration.
//!
//! # Responsibility
//! - Derive storage keys and the page title from one short site id.
//!
//! # Invariants
//! - Task and theme state never share a storage key.

/// Site id used when the host does not supply one.
pub const DEFAULT_SID: &str = "0211";

const STORAGE_KEY_PREFIX: &str = "focustasks";
const APP_NAME: &str = "FocusTasks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Short site id namespacing storage keys and shown in the title.
    pub sid: String,
    /// Key holding the JSON task array.
    pub storage_key: String,
    /// Key holding the JSON dark-theme flag.
    pub theme_key: String,
    /// Heading text; corrected on mount if it does not mention `sid`.
    pub app_title: String,
}

impl PageConfig {
    pub fn for_sid(sid: impl Into<String>) -> Self {
        let sid = sid.into();
        Self {
            storage_key: format!("{STORAGE_KEY_PREFIX}_{sid}"),
            theme_key: format!("{STORAGE_KEY_PREFIX}_{sid}_theme"),
            app_title: format!("{APP_NAME} {sid}"),
            sid,
        }
    }

    /// Title to display: the configured one when it mentions the site id,
    /// otherwise the canonical `FocusTasks <sid>`.
    pub fn effective_title(&self) -> String {
        if self.app_title.contains(self.sid.as_str()) {
            self.app_title.clone()
        } else {
            format!("{APP_NAME} {}", self.sid)
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::for_sid(DEFAULT_SID)
    }
}
