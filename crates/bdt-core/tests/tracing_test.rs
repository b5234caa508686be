//! Tests for tracing setup.

use std::sync::Mutex;

use bdt_core::constants::DEFAULT_LOG_FILTER;
use bdt_core::tracing::{env_filter, filter_from, init_tracing};

/// Serializes tests that touch `BDT_LOG`.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn unset_or_blank_uses_default() {
    assert_eq!(filter_from(None).to_string(), DEFAULT_LOG_FILTER);
    assert_eq!(filter_from(Some("   ")).to_string(), DEFAULT_LOG_FILTER);
}

#[test]
fn bad_level_falls_back_to_default() {
    let filter = filter_from(Some("bdt_agent=notalevel"));
    assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
}

#[test]
fn per_crate_levels_are_kept() {
    let rendered = filter_from(Some("bdt_agent=trace,bdt_core=warn")).to_string();
    assert!(rendered.contains("bdt_agent=trace"), "{rendered}");
    assert!(rendered.contains("bdt_core=warn"), "{rendered}");
    assert!(!rendered.contains("bdt=info"), "{rendered}");
}

#[test]
fn env_filter_reads_bdt_log() {
    let _lock = ENV_MUTEX.lock().unwrap();

    std::env::set_var("BDT_LOG", "bdt_agent=debug");
    let honored = env_filter().to_string();
    std::env::set_var("BDT_LOG", "bdt_agent=notalevel");
    let rejected = env_filter().to_string();
    std::env::remove_var("BDT_LOG");
    let unset = env_filter().to_string();

    assert!(honored.contains("bdt_agent=debug"), "{honored}");
    assert_eq!(rejected, DEFAULT_LOG_FILTER);
    assert_eq!(unset, DEFAULT_LOG_FILTER);
}

#[test]
fn repeated_init_is_harmless() {
    let _lock = ENV_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    assert!(tracing::dispatcher::has_been_set());
}
