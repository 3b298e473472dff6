//! Core module
//!
//! Configuration, shared state, and the HTTP server itself.

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, build_app};
pub use state::PortalState;
