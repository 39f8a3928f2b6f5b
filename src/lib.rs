// Library exports for Inkfeed
// This allows integration tests and external code to use Inkfeed modules

pub mod bridge;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod routes;
pub mod session;
pub mod state;
