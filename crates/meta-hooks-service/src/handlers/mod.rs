//! API handlers.

pub mod health;
pub mod ui;
pub mod updates;
pub mod webhooks;
