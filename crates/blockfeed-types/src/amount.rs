//! Display rendering for native-asset amounts.

/// Stroops per whole native unit.
pub const STROOPS_PER_UNIT: i64 = 10_000_000;

/// Render a stroop amount as a fixed seven-decimal string.
///
/// `1_234_500_000` renders as `"123.4500000"`. The full fractional width is
/// always emitted so the representation is stable across values.
pub fn display_amount(stroops: i64) -> String {
    let magnitude = stroops.unsigned_abs();
    let whole = magnitude / STROOPS_PER_UNIT as u64;
    let frac = magnitude % STROOPS_PER_UNIT as u64;
    if stroops < 0 {
        format!("-{whole}.{frac:07}")
    } else {
        format!("{whole}.{frac:07}")
    }
}
