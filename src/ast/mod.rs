//! The expression algebra: immutable expression values and the clause
//! records the compiler consumes.

pub mod clauses;
pub mod exmap;
pub mod expr;
pub mod ident;
pub mod operators;
pub mod values;

pub use clauses::*;
pub use exmap::{Ex, ExOp, ExOr, ExValue};
pub use expr::*;
pub use ident::{Ident, IdentCol};
pub use operators::*;
pub use values::Value;

use crate::error::Result;

/// Builds an identifier expression from a dotted path
/// (`col`, `table.col` or `schema.table.col`).
pub fn col(path: &str) -> Result<Expr> {
    Ok(Expr::Ident(Ident::parse(path)?))
}

/// The all-columns marker (`*`).
pub fn star() -> Expr {
    Expr::Ident(Ident::new("*"))
}

/// Builds a raw SQL literal; `?` markers are substituted positionally by
/// the arguments.
pub fn lit<I, V>(sql: &str, args: I) -> Expr
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Expr::Literal(Literal::with_args(sql, args))
}

/// Builds a function call expression.
pub fn func<I: IntoIterator<Item = Expr>>(name: &str, args: I) -> Expr {
    Expr::Func(FuncExpr::new(name, args))
}

/// AND's the given expressions together.
pub fn and<I: IntoIterator<Item = Expr>>(exprs: I) -> ExprList {
    ExprList::and(exprs)
}

/// OR's the given expressions together.
pub fn or<I: IntoIterator<Item = Expr>>(exprs: I) -> ExprList {
    ExprList::or(exprs)
}
