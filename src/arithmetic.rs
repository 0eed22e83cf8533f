/// Greatest common divisor of the absolute values of `a` and `b`.
/// Non-negative with one exception: a true gcd of `2^63` (only reachable
/// when both inputs are `i64::MIN` or zero) is unrepresentable in `i64`
/// and wraps to `i64::MIN`. `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a as i64
}

/// Extended Euclidean algorithm: returns `(g, x, y)` with `a*x + b*y == g`.
///
/// The sign of the results depends on the recursion and is not normalized;
/// callers that need a canonical coefficient reduce it into their modulus.
pub fn extended_euclidean(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        return (b, 0, 1);
    }
    let (g, x1, y1) = extended_euclidean(b % a, a);
    (g, y1 - (b / a) * x1, x1)
}

/// `(a * b) mod m` without overflowing the product, by binary double-and-add.
/// Both operands are normalized into `[0, m)` first, so negative inputs are
/// handled. Requires `m > 0`.
pub fn mod_mul(a: i64, b: i64, m: i64) -> i64 {
    debug_assert!(m > 0);
    let mut a = ((a % m) + m) % m;
    let mut b = ((b % m) + m) % m;
    let mut result = 0;
    while b > 0 {
        if b & 1 == 1 {
            result = (result + a) % m;
        }
        a = (a * 2) % m;
        b >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::{extended_euclidean, gcd, mod_mul};

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(56, 98), 14);
        assert_eq!(gcd(98, 56), 14);
        assert_eq!(gcd(12, 21), 3);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_gcd_sign() {
        assert_eq!(gcd(-56, 98), 14);
        assert_eq!(gcd(56, -98), 14);
        assert_eq!(gcd(-56, -98), 14);

        // a true gcd of 2^63 cannot be represented and wraps
        assert_eq!(gcd(i64::MIN, 0), i64::MIN);
        assert_eq!(gcd(i64::MIN, i64::MIN), i64::MIN);
        // any other input pair keeps the divisor below 2^63
        assert_eq!(gcd(i64::MIN, 2), 2);
        assert_eq!(gcd(i64::MIN, i64::MAX), 1);

        let mut rng = thread_rng();
        for _ in 0..200 {
            let a = rng.gen_range(-1_000_000..1_000_000i64);
            let b = rng.gen_range(-1_000_000..1_000_000i64);
            let g = gcd(a, b);
            assert_eq!(g, gcd(a.abs(), b.abs()));
            assert!(g >= 0);
        }
    }

    #[test]
    fn test_ext_euc() {
        let (g, x, y) = extended_euclidean(56, 98);
        assert_eq!(g, 14);
        assert_eq!(56 * x + 98 * y, 14);

        assert_eq!(extended_euclidean(0, 7), (7, 0, 1));
    }

    #[test]
    fn test_ext_euc_bezout_identity() {
        let mut rng = thread_rng();
        for _ in 0..500 {
            let a = rng.gen_range(-1_000_000..1_000_000i64);
            let b = rng.gen_range(-1_000_000..1_000_000i64);
            let (g, x, y) = extended_euclidean(a, b);
            assert_eq!(
                a as i128 * x as i128 + b as i128 * y as i128,
                g as i128,
                "identity failed for a={a}, b={b}"
            );
            assert_eq!(g.abs(), gcd(a, b));
        }
    }

    #[test]
    fn test_mod_mul() {
        assert_eq!(mod_mul(3, 4, 5), 2);
        assert_eq!(mod_mul(0, 4, 5), 0);
        assert_eq!(mod_mul(-2, 3, 5), 4);

        // products that would overflow a native i64 multiply
        let big = 4_000_000_000_000_000_000i64;
        let m = 4_611_686_018_427_387_847i64;
        let expected = (big as i128 * big as i128 % m as i128) as i64;
        assert_eq!(mod_mul(big, big, m), expected);
    }

    #[test]
    fn test_mod_mul_oracle() {
        let mut rng = thread_rng();
        for _ in 0..500 {
            let m = rng.gen_range(1..1_000_000_007i64);
            let a = rng.gen_range(-1_000_000_000..1_000_000_000i64);
            let b = rng.gen_range(-1_000_000_000..1_000_000_000i64);
            let expected = (a as i128 * b as i128).rem_euclid(m as i128) as i64;
            assert_eq!(mod_mul(a, b, m), expected, "a={a}, b={b}, m={m}");
        }
    }
}
