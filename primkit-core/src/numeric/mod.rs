//! Numeric primitives
//!
//! Sum, mean, factorial and primality over plain Rust numbers, plus
//! `Number`-based variants for sequences whose element type is only known
//! at runtime.

pub mod error;
pub mod number;

use std::iter::Sum;

use num_traits::AsPrimitive;

pub use error::MathError;
pub use number::Number;

/// Additive total of `values`, zero for an empty slice.
///
/// Overflow follows the element type's own arithmetic.
pub fn sum<T>(values: &[T]) -> T
where
    T: Copy + Sum<T>,
{
    values.iter().copied().sum()
}

/// Arithmetic mean of `values`, `0.0` for an empty slice.
///
/// Elements are widened to `f64` before adding, so the total cannot overflow `T`.
pub fn mean<T>(values: &[T]) -> f64
where
    T: AsPrimitive<f64>,
{
    if values.is_empty() {
        return 0.0;
    }
    let total: f64 = values.iter().map(|v| v.as_()).sum();
    total / values.len() as f64
}

/// `n!` as a 64-bit unsigned integer.
///
/// Fails with [`MathError::InvalidArgument`] for negative `n` and with
/// [`MathError::Overflow`] when the product no longer fits in `u64`
/// (every `n >= 21`).
pub fn factorial(n: i64) -> Result<u64, MathError> {
    if n < 0 {
        log::debug!("factorial rejected negative input {}", n);
        return Err(MathError::negative("factorial", n));
    }

    (2..=n as u64)
        .try_fold(1u64, |acc, i| acc.checked_mul(i))
        .ok_or_else(|| {
            log::debug!("factorial({}) exceeds u64", n);
            MathError::overflow("factorial", format!("{}! does not fit in u64", n))
        })
}

/// Primality by trial division over the 6k±1 wheel.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // i <= n / i is i * i <= n without the overflow near i64::MAX
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Sum of a mixed sequence.
///
/// Integers are added exactly in `i64`; a single float anywhere promotes the
/// whole sum to `f64`.
pub fn sum_numbers(values: &[Number]) -> Result<Number, MathError> {
    if values.iter().all(Number::is_integer) {
        let mut total: i64 = 0;
        for value in values {
            if let Number::Int(v) = value {
                total = total.checked_add(*v).ok_or_else(|| {
                    log::debug!("integer sum of {} values exceeds i64", values.len());
                    MathError::overflow("sum", "integer total does not fit in i64")
                })?;
            }
        }
        return Ok(Number::Int(total));
    }

    Ok(Number::Float(values.iter().map(Number::to_f64).sum()))
}

/// Mean of a mixed sequence, `0.0` for an empty slice.
pub fn mean_numbers(values: &[Number]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total: f64 = values.iter().map(Number::to_f64).sum();
    total / values.len() as f64
}
