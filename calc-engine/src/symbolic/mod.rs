//! Algebraic manipulation of expressions.
//!
//! # Simplification
//!
//! [`simplify()`] rewrites an expression bottom-up with a fixed set of local rules: constant
//! folding, the identities of `0` and `1`, combining like terms and like factors, moving
//! constants together and pulling negations outwards. It is not a canonicalizer; two equal
//! expressions may simplify to different trees.
//!
//! ```
//! use calc_engine::numerical::Ctxt;
//! use calc_engine::parser::parse;
//! use calc_engine::symbolic::simplify;
//!
//! let expr = parse("x + x + 3x").unwrap();
//! let simplified = simplify(&expr, &Ctxt::new()).unwrap();
//! assert_eq!(simplified.to_string(), "5 * x");
//! ```
//!
//! # Differentiation
//!
//! [`derivative()`] differentiates an expression with respect to a variable. The result is not
//! simplified.
//!
//! ```
//! use calc_engine::numerical::Ctxt;
//! use calc_engine::parser::parse;
//!
//! let expr = parse("sin(x)").unwrap();
//! let derivative = expr.diff("x", &Ctxt::new()).unwrap();
//! assert_eq!(derivative.to_string(), "cos(x) * 1");
//! assert_eq!(derivative.simplify(&Ctxt::new()).unwrap().to_string(), "cos(x)");
//! ```

pub mod derivative;
pub mod error;
pub mod simplify;
pub mod step_collector;

use calc_error::Error;
use crate::numerical::Ctxt;
use crate::parser::ast::Expr;

pub use derivative::derivative;
pub use simplify::{simplify, simplify_with, simplify_with_steps, Step};
pub use step_collector::StepCollector;

impl Expr {
    /// Simplifies the expression. See [`simplify()`].
    pub fn simplify(&self, ctxt: &Ctxt) -> Result<Expr, Error> {
        simplify(self, ctxt)
    }

    /// Differentiates the expression with respect to `var`. See [`derivative()`].
    pub fn diff(&self, var: &str, ctxt: &Ctxt) -> Result<Expr, Error> {
        derivative(self, var, ctxt)
    }
}
