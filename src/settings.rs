use crate::constants::DEFAULT_STATIC_URL;

/// Site wide configuration shared by every rendered picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prefix joined to static image paths, e.g. `/static/` or a CDN origin
    pub static_url: String,
}

impl Settings {
    pub fn new(static_url: &str) -> Self {
        Self {
            static_url: static_url.to_owned(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_STATIC_URL)
    }
}
