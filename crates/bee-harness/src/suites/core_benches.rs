use std::hint::black_box;
use std::io::Write;

use bee_core::{math, string};

use crate::bench::BenchRegistry;

/// Repeat count of the built-in benches.
pub const BENCH_REPEAT: u32 = 5;

/// Register the `bee-core` self-check benches.
pub fn register_core_benches(registry: &mut BenchRegistry) {
    registry.add("Write Line", BENCH_REPEAT, |out| {
        let _ = writeln!(
            out,
            "[INFO] | {}:{} | 2 elevated to {} is {} == {}",
            file!(),
            line!(),
            1,
            math::bit(1),
            true
        );
    });

    registry.add("Format Then Write", BENCH_REPEAT, |out| {
        let line = format!("2 elevated to {} is {} == {}", 1, math::bit(1), true);
        let _ = writeln!(out, "{line}");
    });

    registry.add("Str Replace Many Unsorted", BENCH_REPEAT, |_| {
        black_box(string::replace_many(
            black_box("1.2-3:4·5"),
            &["-", ".", "·", ":"],
            &["[2] ", "[1] ", "[4] ", "[3] "],
            false,
        ));
    });

    registry.add("Str Replace Many Sorted", BENCH_REPEAT, |_| {
        black_box(string::replace_many(
            black_box("1.2-3:4·5"),
            &[".", "-", ":", "·"],
            &["[1] ", "[2] ", "[3] ", "[4] "],
            true,
        ));
    });

    registry.add("Str Split Join", BENCH_REPEAT, |_| {
        let parts = string::split(black_box("1,2,3,4,5"), ",");
        black_box(string::join(&parts, ";"));
    });
}
