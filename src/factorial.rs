//! Recursive computation of the factorial function over primitive integer types.

use num::PrimInt;

/// Computes `n!`, the product of all positive integers up to `n`.
///
/// The base case `n <= 1` yields 1, so both `0!` and `1!` are 1. Negative inputs fall into the
/// base case unconditionally and also yield 1 rather than failing. The result is exact as long
/// as it fits into `T`; overflow behavior is whatever `T` does on multiplication overflow.
pub fn factorial<T: PrimInt>(n: T) -> T {
    if n <= T::one() {
        T::one()
    } else {
        n * factorial(n - T::one())
    }
}
