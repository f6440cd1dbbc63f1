//! Scalar implementation of the minimum-index search.

mod generic;
pub use generic::{argmin, argmin_iter};
