/// Euler's totient: the count of integers in `[1, n]` coprime to `n`.
///
/// Computed by trial-division factorization, applying `result -= result / p`
/// once per distinct prime factor `p`. `totient(0) == 0` by convention.
pub fn totient(mut n: u64) -> u64 {
    if n == 0 {
        return 0;
    }

    let mut result = n;

    if n % 2 == 0 {
        while n % 2 == 0 {
            n /= 2;
        }
        result -= result / 2;
    }

    let mut i = 3;
    // i <= n / i rather than i * i <= n: the squared form overflows u64 when
    // the residual cofactor is a prime close to u64::MAX
    while i <= n / i {
        if n % i == 0 {
            while n % i == 0 {
                n /= i;
            }
            result -= result / i;
        }
        i += 2;
    }

    // whatever survived trial division is itself prime
    if n > 1 {
        result -= result / n;
    }

    result
}

#[cfg(test)]
mod tests {
    use crate::arithmetic::gcd;

    use super::totient;

    fn totient_naive(n: u64) -> u64 {
        (1..=n).filter(|&i| gcd(i as i64, n as i64) == 1).count() as u64
    }

    #[test]
    fn test_totient_edges() {
        assert_eq!(totient(0), 0);
        assert_eq!(totient(1), 1);
        assert_eq!(totient(2), 1);
    }

    #[test]
    fn test_totient_known_values() {
        assert_eq!(totient(100), 40);
        assert_eq!(totient(10), 4);
        // primes: phi(p) = p - 1
        assert_eq!(totient(7), 6);
        assert_eq!(totient(1_000_000_007), 1_000_000_006);
        // prime powers: phi(p^k) = p^k - p^(k-1)
        assert_eq!(totient(1024), 512);
        assert_eq!(totient(243), 162);
    }

    #[test]
    fn test_totient_near_u64_max_prime() {
        // largest 64-bit prime; trial division must walk past i = 2^32
        // without the loop guard overflowing
        assert_eq!(totient(18_446_744_073_709_551_557), 18_446_744_073_709_551_556);
    }

    #[test]
    fn test_totient_matches_naive_count() {
        for n in 1..=500 {
            assert_eq!(totient(n), totient_naive(n), "n={n}");
        }
    }
}
