#![allow(missing_docs)]
#![allow(dead_code)]

use std::sync::Once;

use rstest::fixture;
use status_bitstring::Bitstring;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// initalise tracing once for all tests
static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// # Panics
///
/// Panics if the tracing subscriber cannot be set.
pub fn init_tracer() {
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_max_level(Level::ERROR).finish();
        tracing::subscriber::set_global_default(subscriber).expect("subscriber set");
    });
}

/// An 8-bit, default-ordered bitstring with all bits clear.
#[fixture]
pub fn bitstring() -> Bitstring {
    Bitstring::with_length(8).expect("should create")
}
