use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ast::{Expr, ExprList, Ident, RangeExpr, RangeOp, Value};
use crate::error::{Error, Result};

/// Operator keywords usable inside an `Ex`/`ExOr` operator bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExOp {
    Eq,
    Neq,
    Is,
    IsNot,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    NotIn,
    Like,
    NotLike,
    ILike,
    NotILike,
    Between,
    NotBetween,
}

/// The right-hand side of one `Ex` entry: either a bare value (implying
/// equality under the type-directed rewrite) or a bag of operators.
///
/// When a bag carries several operators for the same column, the resulting
/// conditions are OR'd together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExValue {
    Val(Value),
    Ops(BTreeMap<ExOp, Value>),
}

impl ExValue {
    /// Builds an operator bag.
    pub fn ops<I, V>(entries: I) -> ExValue
    where
        I: IntoIterator<Item = (ExOp, V)>,
        V: Into<Value>,
    {
        ExValue::Ops(entries.into_iter().map(|(op, v)| (op, v.into())).collect())
    }
}

impl<V: Into<Value>> From<V> for ExValue {
    fn from(v: V) -> ExValue {
        ExValue::Val(v.into())
    }
}

/// Map shorthand for filters: column name to value or operator bag,
/// with all entries AND'd together.
///
/// An empty map compiles to "no filter": the enclosing WHERE clause is
/// omitted entirely rather than rendered as an empty condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Ex(pub BTreeMap<String, ExValue>);

/// Like [`Ex`], but entries are OR'd together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExOr(pub BTreeMap<String, ExValue>);

impl Ex {
    pub fn new() -> Ex {
        Ex::default()
    }

    pub fn set(mut self, col: impl Into<String>, val: impl Into<ExValue>) -> Ex {
        self.0.insert(col.into(), val.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_expressions(&self) -> Result<ExprList> {
        Ok(ExprList::and(entries_to_exprs(&self.0)?))
    }
}

impl ExOr {
    pub fn new() -> ExOr {
        ExOr::default()
    }

    pub fn set(mut self, col: impl Into<String>, val: impl Into<ExValue>) -> ExOr {
        self.0.insert(col.into(), val.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_expressions(&self) -> Result<ExprList> {
        Ok(ExprList::or(entries_to_exprs(&self.0)?))
    }
}

fn entries_to_exprs(entries: &BTreeMap<String, ExValue>) -> Result<Vec<Expr>> {
    let mut out = Vec::with_capacity(entries.len());
    for (col, val) in entries {
        let ident = Expr::Ident(Ident::parse(col)?);
        match val {
            ExValue::Val(v) => out.push(ident.eq(v.clone())),
            ExValue::Ops(ops) => {
                let mut conds = Vec::with_capacity(ops.len());
                for (op, v) in ops {
                    conds.push(op_to_expr(ident.clone(), *op, v.clone())?);
                }
                if conds.len() == 1 {
                    out.extend(conds);
                } else {
                    out.push(Expr::List(ExprList::or(conds)));
                }
            }
        }
    }
    Ok(out)
}

fn op_to_expr(lhs: Expr, op: ExOp, v: Value) -> Result<Expr> {
    let expr = match op {
        ExOp::Eq => lhs.eq(v),
        ExOp::Neq => lhs.neq(v),
        ExOp::Is => lhs.is(v),
        ExOp::IsNot => lhs.is_not(v),
        ExOp::Gt => lhs.gt(v),
        ExOp::Gte => lhs.gte(v),
        ExOp::Lt => lhs.lt(v),
        ExOp::Lte => lhs.lte(v),
        ExOp::In => lhs.in_list(v),
        ExOp::NotIn => lhs.not_in_list(v),
        ExOp::Like => lhs.like(v),
        ExOp::NotLike => lhs.not_like(v),
        ExOp::ILike => lhs.ilike(v),
        ExOp::NotILike => lhs.not_ilike(v),
        ExOp::Between => range(lhs, RangeOp::Between, v)?,
        ExOp::NotBetween => range(lhs, RangeOp::NotBetween, v)?,
    };
    Ok(expr)
}

fn range(lhs: Expr, op: RangeOp, v: Value) -> Result<Expr> {
    match v {
        Value::List(mut items) if items.len() == 2 => {
            let end = items.remove(1);
            let start = items.remove(0);
            Ok(Expr::Range(RangeExpr {
                lhs: Box::new(lhs),
                op,
                start,
                end,
            }))
        }
        Value::List(items) => Err(Error::InvalidRangeValue(items.len())),
        _ => Err(Error::InvalidRangeValue(1)),
    }
}
