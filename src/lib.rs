// HTTP server modules
pub mod handlers;
pub mod models;
pub mod routes;

// Upstream chat-completion client
pub mod upstream;

// SQLite Q&A log
pub mod store;

pub mod analytics;
pub mod config;
pub mod observer;
