//! A crate containing utility functions for elementary integer arithmetic: a recursive factorial
//! and a trial-division primality test.

pub mod factorial;
