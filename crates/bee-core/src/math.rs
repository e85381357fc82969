//! Small numeric helpers.

/// Returns `1 << n`.
///
/// # Panics
///
/// Panics if `n >= 64`.
#[inline]
#[must_use]
pub const fn bit(n: u32) -> u64 {
    assert!(n < u64::BITS, "bit index out of range for u64");
    1 << n
}

/// Clamps `v` into `[lo, hi]`. When `lo > hi`, `lo` wins.
#[inline]
#[must_use]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    let v = if v > hi { hi } else { v };
    if v < lo { lo } else { v }
}

/// Linearly maps `value` from `[src_min, src_max]` onto `[dst_min, dst_max]`.
#[inline]
#[must_use]
pub fn map_range(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    dst_min + (dst_max - dst_min) * (value - src_min) / (src_max - src_min)
}

/// [`map_range`] from a `0..=100` percentage.
#[inline]
#[must_use]
pub fn map_100(value: f64, dst_min: f64, dst_max: f64) -> f64 {
    map_range(value, 0.0, 100.0, dst_min, dst_max)
}

/// Default tolerance for [`fuzzy_eq`].
pub const FUZZY_THRESHOLD: f64 = 0.01;

/// Returns true if `a` and `b` differ by at most `threshold`.
#[inline]
#[must_use]
pub fn fuzzy_eq(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() <= threshold
}

/// Wraps an angle in degrees into `[0, 360)`.
#[inline]
#[must_use]
pub fn clamp_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // Tiny negative inputs round up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
