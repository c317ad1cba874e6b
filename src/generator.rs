// src/generator.rs
use crate::error::Error;
use crate::fragments;
use crate::platform::{Browser, Platform, Target};
use crate::render::render;
use log::trace;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// One generated user agent together with the choices behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub platform: Platform,
    pub browser: Browser,
    pub user_agent: String,
}

/// Draws a platform, then a browser valid for it, then renders the pair.
///
/// Every draw comes from the generator's own random source, so a seeded
/// generator replays the exact same sequence of user agents.
pub struct Generator<R = ThreadRng> {
    rng: R,
}

impl Generator<ThreadRng> {
    /// Creates a generator backed by the thread-local random source.
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<StdRng> {
    /// Creates a reproducible generator.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the underlying `StdRng`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a random user agent. Never fails.
    pub fn user_agent(&mut self) -> String {
        self.sample().user_agent
    }

    /// Like [`Generator::user_agent`], also reporting the platform and browser drawn.
    pub fn sample(&mut self) -> Sample {
        let target = self.pick();
        self.sample_for(target)
    }

    /// Draws the platform uniformly, then the browser uniformly from that
    /// platform's list.
    pub fn pick(&mut self) -> Target {
        let platform = fragments::pick(&mut self.rng, &Platform::ALL);
        let browser = fragments::pick(&mut self.rng, platform.browsers());
        Target::drawn(platform, browser)
    }

    /// Renders a user agent for an already chosen target.
    pub fn render(&mut self, target: Target) -> String {
        render(&mut self.rng, target)
    }

    /// Generates with either choice, or both, fixed by the caller.
    ///
    /// A fixed platform draws the browser from its list; a fixed browser
    /// draws the platform from those supporting it.
    ///
    /// # Arguments
    ///
    /// * `platform` - Platform to force, if any.
    /// * `browser` - Browser to force, if any.
    ///
    /// Returns `Error::Unsupported` when both are fixed and the browser has
    /// no template for the platform.
    pub fn constrained(
        &mut self,
        platform: Option<Platform>,
        browser: Option<Browser>,
    ) -> Result<Sample, Error> {
        let target = match (platform, browser) {
            (None, None) => self.pick(),
            (Some(platform), None) => {
                let browser = fragments::pick(&mut self.rng, platform.browsers());
                Target::drawn(platform, browser)
            }
            (None, Some(browser)) => {
                let platform = fragments::pick(&mut self.rng, browser.platforms());
                Target::drawn(platform, browser)
            }
            (Some(platform), Some(browser)) => Target::new(platform, browser)?,
        };
        Ok(self.sample_for(target))
    }

    fn sample_for(&mut self, target: Target) -> Sample {
        trace!("rendering {} on {}", target.browser(), target.platform());
        Sample {
            platform: target.platform(),
            browser: target.browser(),
            user_agent: self.render(target),
        }
    }
}

/// Returns a random, well-formed user agent string.
///
/// Uses the calling thread's random source, so concurrent callers share no
/// state.
pub fn user_agent() -> String {
    Generator::new().user_agent()
}
