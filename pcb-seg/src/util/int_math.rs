use std::cmp::Ordering;

use crate::{Coord, ECoord, WCoord};

/// Computes `numerator * value / denominator`, rounded to the nearest integer (halves away from zero).
///
/// Coordinate-derived operands (products of two differences times a difference) stay far below
/// the [`WCoord`] range. Anything beyond saturates.
pub fn rescale(numerator: WCoord, value: WCoord, denominator: WCoord) -> WCoord {
    debug_assert!(denominator != 0, "rescale by zero: {numerator} * {value} / 0");

    let negative = ((numerator < 0) != (value < 0)) != (denominator < 0);
    let (num, den) = (
        numerator.unsigned_abs().saturating_mul(value.unsigned_abs()),
        denominator.unsigned_abs().max(1),
    );
    let quotient = (num / den + u128::from(num % den >= den - den / 2)).min(WCoord::MAX as u128) as WCoord;

    match negative && quotient != 0 {
        true => -quotient,
        false => quotient,
    }
}

/// Integer square root, rounded down. Non-positive inputs yield 0, results saturate at [`ECoord::MAX`].
pub fn isqrt(v: WCoord) -> ECoord {
    if v <= 0 {
        return 0;
    }
    let v = v as u128;
    //floating point estimate, corrected to the exact floor
    let mut r = ((v as f64).sqrt() as u128).min(ECoord::MAX as u128);
    while r > 0 && r * r > v {
        r -= 1;
    }
    while r < ECoord::MAX as u128 && (r + 1) * (r + 1) <= v {
        r += 1;
    }
    r as ECoord
}

/// Square root rounded to the nearest integer. Non-positive inputs yield 0.
pub fn round_sqrt(v: WCoord) -> ECoord {
    let r = isqrt(v);
    // (r + 0.5)² = r² + r + 0.25, so anything above r² + r rounds up
    let r_wide = r as WCoord;
    match v - r_wide * r_wide > r_wide {
        true => r + 1,
        false => r,
    }
}

/// `⌊|num| / √den_sq⌋`, exact for every [`WCoord`] input. Saturates at [`ECoord::MAX`].
///
/// `den_sq` must be positive, 0 is returned otherwise.
pub fn floor_div_sqrt(num: WCoord, den_sq: WCoord) -> ECoord {
    debug_assert!(den_sq > 0, "square root of non-positive divisor: {den_sq}");
    if den_sq <= 0 {
        return 0;
    }
    let (n, d) = (num.unsigned_abs(), den_sq as u128);
    let n_squared = widening_mul(n, n);
    // k ≤ |num| / √den_sq  <=>  k² · den_sq ≤ num²
    let fits = |k: u128| widening_mul(k * k, d).cmp(&n_squared) != Ordering::Greater;

    let mut k = ((n as f64 / (d as f64).sqrt()) as u128).min(ECoord::MAX as u128);
    while k > 0 && !fits(k) {
        k -= 1;
    }
    while k < ECoord::MAX as u128 && fits(k + 1) {
        k += 1;
    }
    k as ECoord
}

/// Full 256-bit product of `a` and `b`, as `(high, low)` halves
fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    const MASK: u128 = u64::MAX as u128;
    let (a_hi, a_lo) = (a >> 64, a & MASK);
    let (b_hi, b_lo) = (b >> 64, b & MASK);

    let lo_lo = a_lo * b_lo;
    let (hi_lo, lo_hi) = (a_hi * b_lo, a_lo * b_hi);
    let mid = (lo_lo >> 64) + (hi_lo & MASK) + (lo_hi & MASK);

    let low = (lo_lo & MASK) | (mid << 64);
    let high = a_hi * b_hi + (hi_lo >> 64) + (lo_hi >> 64) + (mid >> 64);
    (high, low)
}

/// Narrows a [`WCoord`] to a [`Coord`], if it fits.
pub fn to_coord(v: WCoord) -> Option<Coord> {
    Coord::try_from(v).ok()
}

/// Narrows a [`WCoord`] to a [`Coord`], clamping to the representable range.
pub fn to_coord_saturating(v: WCoord) -> Coord {
    v.clamp(Coord::MIN as WCoord, Coord::MAX as WCoord) as Coord
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(5, 10, 100, 1; "0.5 rounds up")]
    #[test_case(4, 10, 100, 0; "0.4 rounds down")]
    #[test_case(-5, 10, 100, -1; "-0.5 rounds away from zero")]
    #[test_case(5, -10, -100, 1; "both signs negative")]
    #[test_case(50, 7, 100, 4; "3.5 rounds up")]
    #[test_case(-1, 1, 3, 0; "small negative rounds to zero")]
    #[test_case(0, 123, 7, 0; "zero numerator")]
    #[test_case(7, 1, 2, 4; "odd denominator half")]
    #[test_case(2, 1, 3, 1; "two thirds")]
    fn rescale_rounds_to_nearest(n: WCoord, v: WCoord, d: WCoord, expected: WCoord) {
        assert_eq!(rescale(n, v, d), expected);
    }

    #[test]
    fn rescale_does_not_overflow_in_the_product() {
        let big: WCoord = 1 << 66;
        assert_eq!(rescale(big, 1 << 33, 1 << 40), 1 << 59);
        assert_eq!(rescale(big, -(1 << 33), 1 << 40), -(1 << 59));
        assert_eq!(rescale(WCoord::MAX, WCoord::MAX, 1), WCoord::MAX);
    }

    #[test]
    fn isqrt_is_exact_floor() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(-4), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(24), 4);
        assert_eq!(isqrt(25), 5);
        assert_eq!(isqrt(26), 5);
        assert_eq!(isqrt(ECoord::MAX as WCoord), 3_037_000_499);
        let n: WCoord = 6_074_000_999;
        assert_eq!(isqrt(n * n), n as ECoord);
        assert_eq!(isqrt(n * n - 1), n as ECoord - 1);
        assert_eq!(isqrt(WCoord::MAX), ECoord::MAX);
    }

    #[test]
    fn round_sqrt_rounds_to_nearest() {
        assert_eq!(round_sqrt(2), 1);
        assert_eq!(round_sqrt(3), 2);
        assert_eq!(round_sqrt(12), 3);
        assert_eq!(round_sqrt(13), 4);
        assert_eq!(round_sqrt(200), 14);
    }

    #[test_case(10, 4, 5; "exact")]
    #[test_case(-10, 4, 5; "sign is dropped")]
    #[test_case(50, 50, 7; "irrational divisor")]
    #[test_case(7, 1, 7; "unit divisor")]
    #[test_case(0, 9, 0; "zero numerator")]
    fn floor_div_sqrt_truncates(num: WCoord, den_sq: WCoord, expected: ECoord) {
        assert_eq!(floor_div_sqrt(num, den_sq), expected);
    }

    #[test]
    fn floor_div_sqrt_is_exact_beyond_double_precision() {
        // num = k · √den_sq exactly, with num² far outside the 128-bit range
        let side: WCoord = 4_294_967_295;
        let k: WCoord = 4_294_967_293;
        assert_eq!(floor_div_sqrt(k * side, side * side), k as ECoord);
        assert_eq!(floor_div_sqrt(k * side - 1, side * side), k as ECoord - 1);
        assert_eq!(floor_div_sqrt(k * side + 1, side * side), k as ECoord);
    }

    #[test]
    fn widening_mul_keeps_the_high_half() {
        assert_eq!(widening_mul(u128::MAX, u128::MAX), (u128::MAX - 1, 1));
        assert_eq!(widening_mul(1 << 64, 1 << 64), (1, 0));
        assert_eq!(widening_mul(3, 5), (0, 15));
    }

    #[test]
    fn narrowing() {
        assert_eq!(to_coord(42), Some(42));
        assert_eq!(to_coord(Coord::MAX as WCoord + 1), None);
        assert_eq!(to_coord_saturating(WCoord::MIN), Coord::MIN);
        assert_eq!(to_coord_saturating(-7), -7);
    }
}
