//! Core types for meta-hooks.
//!
//! This crate provides the foundational types shared by the webhook receiver
//! service, its storage layer, and the client SDK:
//!
//! - **Platforms**: `Platform` (facebook, instagram, threads)
//! - **Records**: `UpdateRecord`, the captured form of one webhook delivery
//! - **Identifiers**: `RecordId`
//! - **Signatures**: `crypto::verify` and `crypto::sign` for `X-Hub-Signature` headers
//!
//! # Record Lifecycle
//!
//! A record is built at capture time from the platform it arrived on, the
//! server clock, and the untouched JSON payload. Records are never modified
//! after construction.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crypto;
pub mod error;
pub mod ids;
pub mod platform;
pub mod update;

pub use crypto::SignatureAlgorithm;
pub use error::{CoreError, Result};
pub use ids::RecordId;
pub use platform::Platform;
pub use update::UpdateRecord;
