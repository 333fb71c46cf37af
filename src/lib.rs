#![doc(test(attr(deny(warnings))))]

//! Bolso is a personal budgeting application: salary, fixed and variable
//! expenses, and savings goals go in; daily allowance, utilization metrics,
//! insights, and a paginated report come out.

pub mod app;
pub mod cli;
pub mod errors;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("bolso=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Bolso tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
