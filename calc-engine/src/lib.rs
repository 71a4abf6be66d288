//! An engine for algebraic expressions over double-precision numbers.
//!
//! Source text is split into tokens by the [`tokenizer`], and the [`parser`] builds an
//! [`Expr`] tree from them. That tree can then be:
//!
//! - evaluated to a number against a variable context with [`numerical::Eval`],
//! - differentiated with [`symbolic::derivative`],
//! - simplified with [`symbolic::simplify`],
//! - rendered as plain text (through [`std::fmt::Display`]) or LaTeX (through
//!   [`parser::fmt::Latex`]).
//!
//! ```
//! use calc_engine::{numerical::{Ctxt, Eval}, parser::parse, symbolic::simplify};
//!
//! let ctxt = Ctxt::default();
//! let expr = parse("2a + 3a").unwrap();
//! assert_eq!(simplify(&expr, &ctxt).unwrap().to_string(), "5 * a");
//!
//! let expr = parse("1 + 2 * 3").unwrap();
//! assert_eq!(expr.eval(&ctxt).unwrap(), 7.0);
//! ```

pub mod numerical;
pub mod parser;
pub mod symbolic;
pub mod tokenizer;

pub use parser::ast::{BinOpKind, Expr, FuncTag};
