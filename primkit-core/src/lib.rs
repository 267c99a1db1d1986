//! PrimKit Core Library
//!
//! Small, stateless building blocks:
//! - Numeric primitives (sum, mean, factorial, primality)
//! - Text primitives (case mapping, trimming, splitting, palindromes)
//! - JSON-RPC protocol types used by `primkit-server`

pub mod numeric;
pub mod protocol;
pub mod text;

pub use numeric::{factorial, is_prime, mean, mean_numbers, sum, sum_numbers, MathError, Number};
pub use protocol::{Request, Response};
pub use text::{is_palindrome, split, to_lower, to_upper, trim};
