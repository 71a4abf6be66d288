//! The expression tree produced by the parser.

pub mod expr;
pub mod layout;
pub mod op;

pub use expr::Expr;
pub use op::{BinOpKind, FuncTag};
