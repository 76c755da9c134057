//! Exact integer square root.

/// Largest integer `r` such that `r * r <= n`.
///
/// Newton's iteration over unsigned integers; converges from above, so
/// the loop exits at the floor of the true root. No floating point is
/// involved anywhere — the result is exact for every `u128` input.
///
/// # Examples
///
/// ```
/// use pair_pool::math::integer_sqrt;
///
/// assert_eq!(integer_sqrt(10_000), 100);
/// assert_eq!(integer_sqrt(99), 9);
/// assert_eq!(integer_sqrt(0), 0);
/// ```
#[must_use]
pub const fn integer_sqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut guess = n;
    let mut next = (guess + 1) / 2;
    while next < guess {
        guess = next;
        next = (guess + n / guess) / 2;
    }
    guess
}
