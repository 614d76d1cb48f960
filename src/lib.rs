//! Subscription lifecycle engine: validated upserts keyed by user and name,
//! plus the cancel/expire state machine, over a pluggable repository.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod setup;
