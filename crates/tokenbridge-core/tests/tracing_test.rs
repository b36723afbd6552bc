//! Tracing setup: env filter parsing and idempotent init.

use std::sync::Mutex;

use tokenbridge_core::tracing::{init_tracing, LOG_ENV_VAR};

// Tests below mutate the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_per_subsystem_filter_accepted() {
    let _lock = ENV_LOCK.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "tokenbridge_analysis::matcher=debug,tokenbridge=info");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = ENV_LOCK.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "not a [valid filter");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
    tracing::info!("still logging");
}

#[test]
fn test_init_is_idempotent() {
    let _lock = ENV_LOCK.lock().unwrap();
    init_tracing();
    init_tracing();
}
