// src/error.rs
use crate::platform::{Browser, Platform};
use thiserror::Error;

/// Errors returned when a caller constrains or names a platform/browser.
///
/// Plain generation never fails; these only surface from the constrained
/// and parsing entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The browser has no template for the platform (e.g. Safari on Linux).
    #[error("{browser} is not available on {platform}")]
    Unsupported { browser: Browser, platform: Platform },
    /// A platform name that matches none of the known platforms.
    #[error("unknown platform: {0:?}")]
    UnknownPlatform(String),
    /// A browser name that matches none of the known browsers.
    #[error("unknown browser: {0:?}")]
    UnknownBrowser(String),
}
