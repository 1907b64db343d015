//! Application service layer - estimate session, config, export, logging

pub mod config;
pub mod export;
pub mod logging;
pub mod session;

pub use config::Config;
pub use session::EstimateSession;
