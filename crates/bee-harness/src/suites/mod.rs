//! Built-in self-check suites run by the `bee-harness` binary.

mod core_benches;

pub use core_benches::{BENCH_REPEAT, register_core_benches};
pub use core_tests::register_core_tests;

use crate::bench::BenchRegistry;
use crate::test::TestRegistry;

/// Registry preloaded with [`register_core_tests`].
#[must_use]
pub fn core_test_registry() -> TestRegistry {
    let mut registry = TestRegistry::new();
    register_core_tests(&mut registry);
    registry
}

/// Registry preloaded with [`register_core_benches`].
#[must_use]
pub fn core_bench_registry() -> BenchRegistry {
    let mut registry = BenchRegistry::new();
    register_core_benches(&mut registry);
    registry
}
