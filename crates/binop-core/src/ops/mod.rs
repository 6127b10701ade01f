//! Operator implementations, grouped the way query syntax groups them.
//!
//! All functions are total over `f64 × f64`. NaN stands for an absent
//! sample; each function documents what it does with one.

pub mod arith;
pub mod compare;
pub mod logical;
