// src/platform.rs
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system family a user agent claims to run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    #[serde(alias = "mac", alias = "osx")]
    MacOs,
}

/// Browser identity a user agent claims to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Firefox,
    Edge,
    #[serde(rename = "ie", alias = "msie", alias = "internetexplorer")]
    InternetExplorer,
    Chrome,
    Safari,
}

impl Platform {
    /// Every platform, in draw order.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Linux, Platform::MacOs];

    /// Browsers that have a template for this platform, in draw order.
    pub fn browsers(self) -> &'static [Browser] {
        match self {
            Platform::Windows => &[
                Browser::Firefox,
                Browser::InternetExplorer,
                Browser::Edge,
                Browser::Chrome,
                Browser::Safari,
            ],
            Platform::Linux => &[Browser::Firefox, Browser::Chrome],
            Platform::MacOs => &[Browser::Firefox, Browser::Chrome, Browser::Safari],
        }
    }

    /// Returns `true` if `browser` can be rendered for this platform.
    pub fn supports(self, browser: Browser) -> bool {
        self.browsers().contains(&browser)
    }

    fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        }
    }
}

impl Browser {
    /// Every browser.
    pub const ALL: [Browser; 5] = [
        Browser::Firefox,
        Browser::Edge,
        Browser::InternetExplorer,
        Browser::Chrome,
        Browser::Safari,
    ];

    /// Platforms this browser has a template for.
    pub fn platforms(self) -> &'static [Platform] {
        match self {
            Browser::Firefox | Browser::Chrome => &Platform::ALL,
            Browser::Edge | Browser::InternetExplorer => &[Platform::Windows],
            Browser::Safari => &[Platform::Windows, Platform::MacOs],
        }
    }

    fn name(self) -> &'static str {
        match self {
            Browser::Firefox => "firefox",
            Browser::Edge => "edge",
            Browser::InternetExplorer => "ie",
            Browser::Chrome => "chrome",
            Browser::Safari => "safari",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" | "mac" | "osx" => Ok(Platform::MacOs),
            _ => Err(Error::UnknownPlatform(s.to_string())),
        }
    }
}

impl FromStr for Browser {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firefox" => Ok(Browser::Firefox),
            "edge" => Ok(Browser::Edge),
            "ie" | "msie" | "internetexplorer" => Ok(Browser::InternetExplorer),
            "chrome" => Ok(Browser::Chrome),
            "safari" => Ok(Browser::Safari),
            _ => Err(Error::UnknownBrowser(s.to_string())),
        }
    }
}

/// A platform/browser pair that is known to have a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    platform: Platform,
    browser: Browser,
}

impl Target {
    /// Validates the pair against the platform's browser list.
    ///
    /// # Arguments
    ///
    /// * `platform` - Platform to render for.
    /// * `browser` - Browser to render.
    pub fn new(platform: Platform, browser: Browser) -> Result<Self, Error> {
        if platform.supports(browser) {
            Ok(Self { platform, browser })
        } else {
            Err(Error::Unsupported { browser, platform })
        }
    }

    /// Pairs a browser drawn from `platform.browsers()` (or a platform drawn
    /// from `browser.platforms()`) without re-checking.
    pub(crate) fn drawn(platform: Platform, browser: Browser) -> Self {
        debug_assert!(platform.supports(browser), "{browser} on {platform}");
        Self { platform, browser }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn browser(&self) -> Browser {
        self.browser
    }
}
