//! Builder API for declaring generators.
//!
//! Hand-lowered generators implement [`Generator`](crate::core::Generator)
//! directly. Loops with a single yield can instead be declared from a
//! prologue, a guard, a conditional emission and a state advance with
//! [`LoopBuilder`]. The [`positions!`](crate::positions) macro declares the
//! resume points of a hand-lowered generator.

pub mod error;
pub mod macros;
pub mod while_loop;

pub use error::BuildError;
pub use while_loop::{LoopBuilder, LoopPosition, WhileLoop};
