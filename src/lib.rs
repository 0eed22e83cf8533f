pub mod arithmetic;
pub mod crt;
pub mod error;
pub mod totient;
