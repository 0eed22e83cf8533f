use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("remainder/modulus count mismatch: {remainders} remainders, {moduli} moduli")]
    CountMismatch { remainders: usize, moduli: usize },

    #[error("moduli must be pairwise coprime: gcd({a}, {b}) != 1")]
    ModuliNotCoprime { a: i64, b: i64 },

    #[error("modulus must be positive, got {0}")]
    NonPositiveModulus(i64),
}
