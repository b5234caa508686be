//! Observability for the decision engine.
//! `tracing` crate with `EnvFilter`, filter read from `BDT_LOG`.
//!
//! The engine emits events with the fields `category_id`, `raw_success`,
//! `tempered_success`, `utility`, `posterior`, `confidence`, `choice`,
//! and `soft`.

pub mod setup;

pub use setup::{env_filter, filter_from, init_tracing};
