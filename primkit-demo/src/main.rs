//! PrimKit Demo
//!
//! Walks through every primitive and prints the results.

use anyhow::{Context, Result};
use primkit_core::{
    factorial, is_palindrome, is_prime, mean, split, sum, sum_numbers, to_lower, to_upper, trim,
    Number,
};

fn main() -> Result<()> {
    println!("=== PrimKit Demo ===");
    println!();

    println!("Math Utilities:");
    println!("---------------");

    let numbers = [1, 2, 3, 4, 5];
    println!("Numbers: {:?}", numbers);
    println!("Sum: {}", sum(&numbers));
    println!("Mean: {}", mean(&numbers));

    let mixed = [Number::from(1i64), Number::from(2.5), Number::from(4i64)];
    let mixed_sum = sum_numbers(&mixed).context("summing mixed numbers")?;
    println!("Mixed sum: {} ({})", mixed_sum, mixed_sum.type_name());
    println!(
        "Factorial of 5: {}",
        factorial(5).context("computing 5!")?
    );

    let primes: Vec<i64> = (1..=20).filter(|&n| is_prime(n)).collect();
    println!("Prime numbers from 1 to 20: {:?}", primes);
    println!();

    println!("String Utilities:");
    println!("-----------------");

    let text = "Hello, World!";
    println!("Original: {}", text);
    println!("Uppercase: {}", to_upper(text));
    println!("Lowercase: {}", to_lower(text));

    let spaced = "   trimmed text   ";
    println!("Before trim: '{}'", spaced);
    println!("After trim: '{}'", trim(spaced));

    let csv = "apple,banana,cherry,date";
    println!("Splitting '{}' by ',': {:?}", csv, split(csv, ','));

    for candidate in ["racecar", "hello"] {
        let verdict = if is_palindrome(candidate) { "Yes" } else { "No" };
        println!("Is '{}' a palindrome? {}", candidate, verdict);
    }

    println!();
    println!("=== Demo Complete ===");

    Ok(())
}
