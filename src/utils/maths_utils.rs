/// Rounds to 2 decimal places. All displayed prices and bounds go through this.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
