pub mod config;
mod runner;

pub use config::GateConfig;
pub use runner::{validate, Gate};
