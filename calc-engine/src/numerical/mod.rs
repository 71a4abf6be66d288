//! Numerical evaluation of expressions.

pub mod ctxt;
pub mod error;
pub mod eval;

pub use ctxt::Ctxt;
pub use eval::Eval;
