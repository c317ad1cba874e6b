// src/render.rs
use crate::fragments::{
    language, linux, mac, optional, pick, rarely, windows_nt, FIREFOX_LINUX_SYSTEMS,
    WINDOWS_ARCH_LEADING, WINDOWS_ARCH_TRAILING,
};
use crate::platform::{Browser, Platform, Target};
use rand::Rng;

/// Renders a user agent for a validated platform/browser pair.
///
/// # Arguments
///
/// * `rng` - Random source every fragment is drawn from.
/// * `target` - Platform and browser to render.
pub fn render<R: Rng + ?Sized>(rng: &mut R, target: Target) -> String {
    let platform = target.platform();
    match target.browser() {
        Browser::Firefox => firefox(rng, platform),
        Browser::Edge => edge(rng),
        Browser::InternetExplorer => ie(rng),
        Browser::Chrome => chrome(rng, platform),
        Browser::Safari => safari(rng, platform),
    }
}

fn firefox<R: Rng + ?Sized>(rng: &mut R, platform: Platform) -> String {
    let version = format!("{}.{}", rng.gen_range(40..=60), rng.gen_range(0..=5));
    let gecko = format!("Gecko/20{}0101", rng.gen_range(10..=15));

    match platform {
        Platform::Windows => format!(
            "Mozilla/5.0 ({}; {}rv:{version}) {gecko} Firefox/{version}",
            windows_nt(rng),
            pick(rng, WINDOWS_ARCH_TRAILING),
        ),
        Platform::Linux => format!(
            "Mozilla/5.0 (X11; {}{}; rv:{version}) {gecko} Firefox/{version}",
            pick(rng, FIREFOX_LINUX_SYSTEMS),
            linux(rng),
        ),
        Platform::MacOs => format!(
            "Mozilla/5.0 (Macintosh; {} Mac OS X 10.{}; {}rv:{version}) {gecko} Firefox/{version}",
            mac(rng),
            rng.gen_range(9..=15),
            optional(rng, |r| format!("{}; ", language(r))),
        ),
    }
}

/// Legacy EdgeHTML; only ever reports Windows 10.
fn edge<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "Mozilla/5.0 (Windows NT 10.0{}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{}.0.{}.{} Safari/537.36 Edge/{}.{}",
        pick(rng, WINDOWS_ARCH_LEADING),
        rng.gen_range(42..=64),
        rng.gen_range(2300..=3200),
        rng.gen_range(110..=135),
        rng.gen_range(12..=18),
        rng.gen_range(1400..=1800),
    )
}

fn ie<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "Mozilla/5.0 (compatible; MSIE {}.0; {}; {}Trident/{}.0{})",
        rng.gen_range(7..=9),
        windows_nt(rng),
        pick(rng, WINDOWS_ARCH_TRAILING),
        rng.gen_range(3..=7),
        ie_extras(rng),
    )
}

/// Trailing .NET CLR / Media Center annotations. Only the chosen entry's
/// numbers are drawn.
fn ie_extras<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..7) {
        0 => String::new(),
        1 => format!("; .NET CLR 1.1.{}", rng.gen_range(4320..=4325)),
        2 => "; WOW64".to_string(),
        3 => "; SLCC2; Media Center PC 6.0; InfoPath.3".to_string(),
        4 => format!(
            "; .NET CLR 1.1.{}; .NET CLR 2.0.{}",
            rng.gen_range(1000..=5000),
            rng.gen_range(1000..=6000),
        ),
        5 => format!(
            "; SLCC2; .NET CLR 2.{}; .NET CLR 3.5.{}; .NET CLR 3.{}; .NET4.0C; .NET4.0E",
            rng.gen_range(50000..=55000),
            rng.gen_range(30000..=35000),
            rng.gen_range(30000..=35000),
        ),
        _ => format!(
            "; SLCC2; .NET CLR 2.0.{}; .NET CLR 3.5.30729; .NET CLR 3.0.{}; Media Center PC 6.0; .NET4.0C; InfoPath.3; .NET4.0E",
            rng.gen_range(50000..=55000),
            rng.gen_range(30000..=35000),
        ),
    }
}

fn chrome<R: Rng + ?Sized>(rng: &mut R, platform: Platform) -> String {
    let version = format!(
        "{}.0.{}.{}",
        rng.gen_range(42..=66),
        rng.gen_range(2500..=3300),
        rng.gen_range(0..=199)
    );

    match platform {
        Platform::Windows => format!(
            "Mozilla/5.0 ({}{}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version} Safari/537.36",
            windows_nt(rng),
            pick(rng, WINDOWS_ARCH_LEADING),
        ),
        Platform::Linux => {
            let unix = if rarely(rng) { "U; " } else { "" };
            format!(
                "Mozilla/5.0 (X11; {unix}{}{}) AppleWebKit/537.36 (KHTML, like Gecko){} Chrome/{version} Safari/537.36",
                linux(rng),
                optional(rng, |r| format!("; {}", language(r))),
                optional(rng, |_| format!(" Ubuntu Chromium/{version}")),
            )
        }
        Platform::MacOs => format!(
            "Mozilla/5.0 (Macintosh; {} Mac OS X 10_{}_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version} Safari/537.36{}",
            mac(rng),
            rng.gen_range(5..=15),
            optional(rng, |r| format!(
                " OPR/{}.0.{}.{}",
                r.gen_range(44..=49),
                r.gen_range(2200..=2500),
                r.gen_range(10..=199)
            )),
        ),
    }
}

fn safari<R: Rng + ?Sized>(rng: &mut R, platform: Platform) -> String {
    let (major, minor) = (rng.gen_range(531..=604), rng.gen_range(0..=50));
    let webkit = if rarely(rng) {
        format!("{major}.{minor}.{}", rng.gen_range(0..=199))
    } else {
        format!("{major}.{minor}")
    };

    match platform {
        Platform::Windows => format!(
            "Mozilla/5.0 ({}{}{}) AppleWebKit/{webkit} (KHTML, like Gecko) Version/{}.{}.{} Safari/{webkit}",
            windows_nt(rng),
            pick(rng, WINDOWS_ARCH_LEADING),
            optional(rng, |r| format!("; {}", language(r))),
            rng.gen_range(3..=5),
            rng.gen_range(0..=1),
            rng.gen_range(0..=5),
        ),
        Platform::MacOs => format!(
            "Mozilla/5.0 (Macintosh; {} Mac OS X 10_{}_{}) AppleWebKit/{webkit} (KHTML, like Gecko) Version/{}.0.{} Safari/{webkit}",
            mac(rng),
            rng.gen_range(5..=13),
            rng.gen_range(0..=9),
            rng.gen_range(5..=11),
            rng.gen_range(0..=10),
        ),
        Platform::Linux => unreachable!("Target never pairs Safari with Linux"),
    }
}
