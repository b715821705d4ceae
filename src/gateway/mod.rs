pub mod analyse;
pub mod server;

pub use server::{AppState, router, run};

/// Path the browser UI posts prompts to.
pub const ANALYSE_PATH: &str = "/api/dataAnalyst/analyse";
