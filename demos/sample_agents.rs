// Print a few user agents from each entry point of the library.
use uagen::{Browser, Generator, Platform};

fn main() {
    println!("Free function: {}", uagen::user_agent());
    println!();

    let mut generator = Generator::seeded(42);
    println!("Seeded samples:");
    for i in 1..=5 {
        let sample = generator.sample();
        println!("  {}. [{} / {}] {}", i, sample.platform, sample.browser, sample.user_agent);
    }

    println!();
    println!("One per supported pair:");
    for platform in Platform::ALL {
        for &browser in platform.browsers() {
            if let Ok(sample) = generator.constrained(Some(platform), Some(browser)) {
                println!("  {:<8} {:<8} {}", platform, browser, sample.user_agent);
            }
        }
    }

    println!();
    match generator.constrained(Some(Platform::Linux), Some(Browser::Safari)) {
        Ok(sample) => println!("Unexpected: {}", sample.user_agent),
        Err(e) => println!("Linux + Safari: {}", e),
    }
}
