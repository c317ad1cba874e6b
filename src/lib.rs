// src/lib.rs
pub mod config;
pub mod error;
pub mod fragments;
pub mod generator;
pub mod platform;
pub mod render;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::Error;
pub use generator::{user_agent, Generator, Sample};
pub use platform::{Browser, Platform, Target};
