use serde::Serialize;

use crate::arithmetic::{extended_euclidean, gcd, mod_mul};
use crate::error::{Error, Result};

/// Solution of a system of congruences: the unique `solution` in
/// `[0, modulus)` with `solution ≡ remainders[i] (mod moduli[i])` for every i,
/// where `modulus` is the product of the moduli.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CrtSolution {
    pub solution: i64,
    pub modulus: i64,
}

/// Solves `x ≡ remainders[i] (mod moduli[i])` by direct CRT combination.
///
/// Fails if the slices differ in length, if any modulus is not positive, or
/// if the moduli are not pairwise coprime. The product of the moduli must fit
/// in an `i64`; overflow for larger systems is not guarded.
pub fn crt_solve(remainders: &[i64], moduli: &[i64]) -> Result<CrtSolution> {
    if remainders.len() != moduli.len() {
        return Err(Error::CountMismatch {
            remainders: remainders.len(),
            moduli: moduli.len(),
        });
    }

    if let Some(&m) = moduli.iter().find(|&&m| m <= 0) {
        return Err(Error::NonPositiveModulus(m));
    }

    for i in 0..moduli.len() {
        for j in i + 1..moduli.len() {
            if gcd(moduli[i], moduli[j]) != 1 {
                return Err(Error::ModuliNotCoprime {
                    a: moduli[i],
                    b: moduli[j],
                });
            }
        }
    }

    let m_total: i64 = moduli.iter().product();

    let mut solution: i64 = 0;
    for (&r, &m) in remainders.iter().zip(moduli) {
        let partial = m_total / m;
        let (_, x, _) = extended_euclidean(partial, m);
        let inverse = ((x % m) + m) % m;

        let term = mod_mul(mod_mul(r, partial, m_total), inverse, m_total);
        solution = (solution + term) % m_total;
    }

    Ok(CrtSolution {
        solution,
        modulus: m_total,
    })
}
