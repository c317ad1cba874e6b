// src/fragments.rs
//! Fixed fragment pools and the small helpers shared by the renderers.
//!
//! Every pool is an immutable ordered slice and every choice is a uniform
//! pick of an index in `[0, len - 1]`. Pools carry an empty entry wherever a
//! field is optional; the empty entry already leaves out the field's
//! separator, so callers concatenate without further checks.

use rand::Rng;

/// Linux machine codes, rendered after `Linux `.
pub const LINUX_CODES: &[&str] = &["i686", "i686 (x86_64)", "x86_64", "armv6l", "armv7l", "amd64"];

/// Mac architecture codes, rendered before ` Mac OS X`.
pub const MAC_CODES: &[&str] = &["Intel", "PPC", "U; Intel", "U; PPC"];

/// Locale tags used for optional language fields.
pub const LANGUAGE_CODES: &[&str] = &[
    "en-CA", "en-US", "en-GB", "es", "es-AR", "es-ES", "es-MX", "fr", "fr-FR", "fr-US", "de",
    "de-DE", "ru", "ru-MO", "zh", "zh-TW", "zh-CN", "zh-SG",
];

/// Windows architecture annotations that precede the next field (`...; rv:`).
pub const WINDOWS_ARCH_TRAILING: &[&str] = &["", "WOW64; ", "Win64; x64; ", "Win64; "];

/// Windows architecture annotations that follow the previous field (`Windows NT x.y; ...)`).
pub const WINDOWS_ARCH_LEADING: &[&str] = &["", "; WOW64", "; Win64; x64", "; Win64"];

/// Distribution markers in Firefox's Linux platform token.
pub const FIREFOX_LINUX_SYSTEMS: &[&str] = &["", "U; ", "Ubuntu; "];

/// Uniformly picks one entry of a non-empty pool.
pub fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, pool: &[T]) -> T {
    pool[rng.gen_range(0..pool.len())]
}

/// Renders `field` or nothing, each with equal probability.
///
/// This is the two-entry pool `["", field]` where the field needs its own
/// random draws, which are only taken when the field is kept.
pub fn optional<R, F>(rng: &mut R, field: F) -> String
where
    R: Rng + ?Sized,
    F: FnOnce(&mut R) -> String,
{
    if rng.gen_range(0..2) == 0 {
        String::new()
    } else {
        field(rng)
    }
}

/// Draws 0..=10 and reports whether it landed above 7 (3 in 11).
pub fn rarely<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_range(0..=10) > 7
}

/// `Windows NT <5-10>.<0-1>`
pub fn windows_nt<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Windows NT {}.{}", rng.gen_range(5..=10), rng.gen_range(0..=1))
}

/// `Linux <code>`
pub fn linux<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Linux {}", pick(rng, LINUX_CODES))
}

pub fn mac<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, MAC_CODES)
}

pub fn language<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, LANGUAGE_CODES)
}
