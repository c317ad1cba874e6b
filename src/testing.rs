// src/testing.rs
//! Test helpers: one anchored regex per rendered template.
//!
//! Numeric fields are captured in groups named `n<idx>_<lo>_<hi>`, so a
//! single pass over the capture names checks every drawn number against
//! its inclusive range.

use crate::fragments::{LANGUAGE_CODES, LINUX_CODES, MAC_CODES};
use crate::platform::{Browser, Platform};
use regex::Regex;

#[derive(Default)]
struct Pattern {
    src: String,
    next: usize,
}

impl Pattern {
    fn lit(&mut self, text: &str) -> &mut Self {
        self.src.push_str(&regex::escape(text));
        self
    }

    fn raw(&mut self, re: &str) -> &mut Self {
        self.src.push_str(re);
        self
    }

    fn num(&mut self, lo: u32, hi: u32) -> &mut Self {
        self.src.push_str(&format!(r"(?P<n{}_{lo}_{hi}>\d+)", self.next));
        self.next += 1;
        self
    }

    /// Alternation over a pool; an empty entry makes the group optional.
    fn pool(&mut self, pool: &[&str]) -> &mut Self {
        let entries: Vec<String> = pool
            .iter()
            .filter(|e| !e.is_empty())
            .map(|e| regex::escape(e))
            .collect();
        self.src.push_str(&format!("(?:{})", entries.join("|")));
        if pool.iter().any(|e| e.is_empty()) {
            self.src.push('?');
        }
        self
    }

    fn opt(&mut self, inner: impl FnOnce(&mut Self)) -> &mut Self {
        self.src.push_str("(?:");
        inner(self);
        self.src.push_str(")?");
        self
    }

    fn windows_nt(&mut self) -> &mut Self {
        self.lit("Windows NT ").num(5, 10).lit(".").num(0, 1)
    }

    fn linux(&mut self) -> &mut Self {
        self.lit("Linux ").pool(LINUX_CODES)
    }

    fn webkit(&mut self) -> &mut Self {
        self.num(531, 604).lit(".").num(0, 50).opt(|p| {
            p.lit(".").num(0, 199);
        })
    }

    fn chrome_version(&mut self) -> &mut Self {
        self.num(42, 66).lit(".0.").num(2500, 3300).lit(".").num(0, 199)
    }

    fn firefox_trailer(&mut self) -> &mut Self {
        self.lit("rv:")
            .num(40, 60)
            .lit(".")
            .num(0, 5)
            .lit(") Gecko/20")
            .num(10, 15)
            .lit("0101 Firefox/")
            .num(40, 60)
            .lit(".")
            .num(0, 5)
    }

    fn build(&self) -> Regex {
        Regex::new(&format!("^{}$", self.src)).unwrap()
    }
}

const ARCH_TRAILING: &str = "(?:WOW64; |Win64; x64; |Win64; )?";
const ARCH_LEADING: &str = "(?:; WOW64|; Win64; x64|; Win64)?";

pub struct Template {
    pub platform: Platform,
    pub browser: Browser,
    pub regex: Regex,
}

pub struct Templates(Vec<Template>);

impl Templates {
    pub fn new() -> Self {
        let mut all = Vec::new();
        let mut add = |platform, browser, pattern: &mut Pattern| {
            all.push(Template {
                platform,
                browser,
                regex: pattern.build(),
            })
        };

        add(
            Platform::Windows,
            Browser::Firefox,
            Pattern::default()
                .lit("Mozilla/5.0 (")
                .windows_nt()
                .lit("; ")
                .raw(ARCH_TRAILING)
                .firefox_trailer(),
        );
        add(
            Platform::Linux,
            Browser::Firefox,
            Pattern::default()
                .lit("Mozilla/5.0 (X11; ")
                .raw("(?:U; |Ubuntu; )?")
                .linux()
                .lit("; ")
                .firefox_trailer(),
        );
        add(
            Platform::MacOs,
            Browser::Firefox,
            Pattern::default()
                .lit("Mozilla/5.0 (Macintosh; ")
                .pool(MAC_CODES)
                .lit(" Mac OS X 10.")
                .num(9, 15)
                .lit("; ")
                .opt(|p| {
                    p.pool(LANGUAGE_CODES).lit("; ");
                })
                .firefox_trailer(),
        );
        add(
            Platform::Windows,
            Browser::Edge,
            Pattern::default()
                .lit("Mozilla/5.0 (Windows NT 10.0")
                .raw(ARCH_LEADING)
                .lit(") AppleWebKit/537.36 (KHTML, like Gecko) Chrome/")
                .num(42, 64)
                .lit(".0.")
                .num(2300, 3200)
                .lit(".")
                .num(110, 135)
                .lit(" Safari/537.36 Edge/")
                .num(12, 18)
                .lit(".")
                .num(1400, 1800),
        );
        add(
            Platform::Windows,
            Browser::InternetExplorer,
            Pattern::default()
                .lit("Mozilla/5.0 (compatible; MSIE ")
                .num(7, 9)
                .lit(".0; ")
                .windows_nt()
                .lit("; ")
                .raw(ARCH_TRAILING)
                .lit("Trident/")
                .num(3, 7)
                .lit(".0")
                .raw("(?:")
                .lit("; .NET CLR 1.1.")
                .num(4320, 4325)
                .raw("|")
                .lit("; WOW64")
                .raw("|")
                .lit("; SLCC2; Media Center PC 6.0; InfoPath.3")
                .raw("|")
                .lit("; .NET CLR 1.1.")
                .num(1000, 5000)
                .lit("; .NET CLR 2.0.")
                .num(1000, 6000)
                .raw("|")
                .lit("; SLCC2; .NET CLR 2.")
                .num(50000, 55000)
                .lit("; .NET CLR 3.5.")
                .num(30000, 35000)
                .lit("; .NET CLR 3.")
                .num(30000, 35000)
                .lit("; .NET4.0C; .NET4.0E")
                .raw("|")
                .lit("; SLCC2; .NET CLR 2.0.")
                .num(50000, 55000)
                .lit("; .NET CLR 3.5.30729; .NET CLR 3.0.")
                .num(30000, 35000)
                .lit("; Media Center PC 6.0; .NET4.0C; InfoPath.3; .NET4.0E")
                .raw(")?")
                .lit(")"),
        );
        add(
            Platform::Windows,
            Browser::Chrome,
            Pattern::default()
                .lit("Mozilla/5.0 (")
                .windows_nt()
                .raw(ARCH_LEADING)
                .lit(") AppleWebKit/537.36 (KHTML, like Gecko) Chrome/")
                .chrome_version()
                .lit(" Safari/537.36"),
        );
        add(
            Platform::Linux,
            Browser::Chrome,
            Pattern::default()
                .lit("Mozilla/5.0 (X11; ")
                .raw("(?:U; )?")
                .linux()
                .opt(|p| {
                    p.lit("; ").pool(LANGUAGE_CODES);
                })
                .lit(") AppleWebKit/537.36 (KHTML, like Gecko)")
                .opt(|p| {
                    p.lit(" Ubuntu Chromium/").raw(r"[\d.]+");
                })
                .lit(" Chrome/")
                .chrome_version()
                .lit(" Safari/537.36"),
        );
        add(
            Platform::MacOs,
            Browser::Chrome,
            Pattern::default()
                .lit("Mozilla/5.0 (Macintosh; ")
                .pool(MAC_CODES)
                .lit(" Mac OS X 10_")
                .num(5, 15)
                .lit("_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/")
                .chrome_version()
                .lit(" Safari/537.36")
                .opt(|p| {
                    p.lit(" OPR/")
                        .num(44, 49)
                        .lit(".0.")
                        .num(2200, 2500)
                        .lit(".")
                        .num(10, 199);
                }),
        );
        add(
            Platform::Windows,
            Browser::Safari,
            Pattern::default()
                .lit("Mozilla/5.0 (")
                .windows_nt()
                .raw(ARCH_LEADING)
                .opt(|p| {
                    p.lit("; ").pool(LANGUAGE_CODES);
                })
                .lit(") AppleWebKit/")
                .webkit()
                .lit(" (KHTML, like Gecko) Version/")
                .num(3, 5)
                .lit(".")
                .num(0, 1)
                .lit(".")
                .num(0, 5)
                .lit(" Safari/")
                .raw(r"[\d.]+"),
        );
        add(
            Platform::MacOs,
            Browser::Safari,
            Pattern::default()
                .lit("Mozilla/5.0 (Macintosh; ")
                .pool(MAC_CODES)
                .lit(" Mac OS X 10_")
                .num(5, 13)
                .lit("_")
                .num(0, 9)
                .lit(") AppleWebKit/")
                .webkit()
                .lit(" (KHTML, like Gecko) Version/")
                .num(5, 11)
                .lit(".0.")
                .num(0, 10)
                .lit(" Safari/")
                .raw(r"[\d.]+"),
        );

        Templates(all)
    }

    /// Finds the template `ua` was rendered from and checks every numeric
    /// field against its range. Panics with the offending string otherwise.
    pub fn check(&self, ua: &str) -> (Platform, Browser) {
        let template = self
            .0
            .iter()
            .find(|t| t.regex.is_match(ua))
            .unwrap_or_else(|| panic!("no template matches {ua:?}"));
        let caps = template.regex.captures(ua).unwrap();
        for name in template.regex.capture_names().flatten() {
            let Some(value) = caps.name(name) else { continue };
            let mut bounds = name.split('_').skip(1).map(|b| b.parse::<u32>().unwrap());
            let (lo, hi) = (bounds.next().unwrap(), bounds.next().unwrap());
            let value: u32 = value.as_str().parse().unwrap();
            assert!((lo..=hi).contains(&value), "{value} outside {lo}..={hi} in {ua:?}");
        }
        (template.platform, template.browser)
    }
}

/// Asserts no empty optional field left a dangling separator behind.
pub fn assert_clean(ua: &str) {
    for bad in [";;", "; ;", "; )", "( ", "(;", "  ", " ;", ";)"] {
        assert!(!ua.contains(bad), "{bad:?} in {ua:?}");
    }
    assert_eq!(ua.trim(), ua);
}
