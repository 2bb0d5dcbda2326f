//! SQLite-backed Q&A log
//!
//! A single append-only `faq` table. See [`FaqStore`] for the operations.

pub mod client;
pub mod error;
pub mod record;

pub use client::FaqStore;
pub use error::{Result, StoreError};
pub use record::QARecord;
