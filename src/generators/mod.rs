//! Hand-lowered generators.
//!
//! Each module pairs a generator with `run_direct`, the plain loop it was
//! lowered from, so the two can be compared element for element.
//! `running_sum` consumes a value from its caller on every step; the others
//! take [`NoInput`](crate::core::NoInput).

pub mod even_fib;
pub mod fib;
pub mod floor_div;
pub mod running_sum;

pub use even_fib::EvenFib;
pub use fib::Fib;
pub use floor_div::FloorDiv;
pub use running_sum::RunningSum;
