use serde::{Deserialize, Serialize};

use crate::ast::{
    BoolOp, CombineOp, Ident, NullOrdering, RangeOp, SortDirection, Statement, Value,
};

/// A general expression node.
///
/// Expressions are immutable values: combinators always return a new
/// expression and `Clone` produces a deep, independent copy, so a compiled
/// statement can safely be reused as a template for derived statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A (possibly qualified) identifier
    Ident(Ident),
    /// Raw SQL text with positional substitution arguments
    Literal(Literal),
    /// A binary comparison (lhs op rhs)
    Bool(BoolExpr),
    /// A range comparison (lhs BETWEEN start AND end)
    Range(RangeExpr),
    /// A sort expression with direction and null placement
    Ordered(OrderedExpr),
    /// An AND/OR combinator over sub-expressions
    List(ExprList),
    /// An aliased expression (expr AS alias)
    Aliased { expr: Box<Expr>, alias: Ident },
    /// A type cast (CAST(expr AS type))
    Cast { expr: Box<Expr>, target: String },
    /// A function call, optionally windowed
    Func(FuncExpr),
    /// A parenthesized sub-statement
    Subquery(Box<Statement>),
}

/// Raw SQL text plus an ordered list of substitution arguments.
///
/// Each `?` marker in the text is replaced positionally by the matching
/// argument during rendering; arguments may themselves be expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Literal {
    pub fn new(sql: impl Into<String>) -> Literal {
        Literal {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, V>(sql: impl Into<String>, args: I) -> Literal
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Literal {
            sql: sql.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// A binary comparison expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolExpr {
    pub lhs: Box<Expr>,
    pub op: BoolOp,
    pub rhs: Value,
}

impl BoolExpr {
    /// Returns a copy with the operator replaced by its inversion.
    pub fn invert(mut self) -> BoolExpr {
        self.op = self.op.invert();
        self
    }
}

/// A range comparison expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeExpr {
    pub lhs: Box<Expr>,
    pub op: RangeOp,
    pub start: Value,
    pub end: Value,
}

/// A sort expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedExpr {
    pub expr: Box<Expr>,
    pub direction: SortDirection,
    pub nulls: Option<NullOrdering>,
}

impl OrderedExpr {
    pub fn nulls_first(mut self) -> OrderedExpr {
        self.nulls = Some(NullOrdering::First);
        self
    }

    pub fn nulls_last(mut self) -> OrderedExpr {
        self.nulls = Some(NullOrdering::Last);
        self
    }
}

impl From<OrderedExpr> for Expr {
    fn from(o: OrderedExpr) -> Expr {
        Expr::Ordered(o)
    }
}

/// An AND/OR combinator over an ordered sequence of sub-expressions.
///
/// Empty lists render as nothing, singletons render as the bare element,
/// larger lists render fully parenthesized with the combinator interleaved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExprList {
    pub op: CombineOp,
    pub exprs: Vec<Expr>,
}

impl ExprList {
    pub fn and<I: IntoIterator<Item = Expr>>(exprs: I) -> ExprList {
        ExprList {
            op: CombineOp::And,
            exprs: exprs.into_iter().collect(),
        }
    }

    pub fn or<I: IntoIterator<Item = Expr>>(exprs: I) -> ExprList {
        ExprList {
            op: CombineOp::Or,
            exprs: exprs.into_iter().collect(),
        }
    }

    /// Returns a new list with the combinator preserved and the given
    /// expressions appended. The source list is left untouched.
    pub fn append<I: IntoIterator<Item = Expr>>(&self, exprs: I) -> ExprList {
        let mut out = self.clone();
        out.exprs.extend(exprs);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }
}

impl From<ExprList> for Expr {
    fn from(list: ExprList) -> Expr {
        Expr::List(list)
    }
}

/// An ordered sequence of expressions for comma-joined contexts
/// (SELECT lists, GROUP BY, ORDER BY, FROM sources).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ColumnList(pub Vec<Expr>);

impl ColumnList {
    pub fn new<I: IntoIterator<Item = Expr>>(exprs: I) -> ColumnList {
        ColumnList(exprs.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Expr>> for ColumnList {
    fn from(exprs: Vec<Expr>) -> ColumnList {
        ColumnList(exprs)
    }
}

/// A function call, optionally carrying a window reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncExpr {
    pub name: String,
    pub args: Vec<Expr>,
    pub over: Option<WindowRef>,
}

impl FuncExpr {
    pub fn new<I: IntoIterator<Item = Expr>>(name: impl Into<String>, args: I) -> FuncExpr {
        FuncExpr {
            name: name.into(),
            args: args.into_iter().collect(),
            over: None,
        }
    }

    /// Attaches an OVER clause referencing a named window.
    pub fn over_named(mut self, name: impl Into<String>) -> FuncExpr {
        self.over = Some(WindowRef::Name(name.into()));
        self
    }

    /// Attaches an OVER clause with an inline window definition.
    pub fn over(mut self, window: WindowExpr) -> FuncExpr {
        self.over = Some(WindowRef::Inline(window));
        self
    }
}

impl From<FuncExpr> for Expr {
    fn from(func: FuncExpr) -> Expr {
        Expr::Func(func)
    }
}

/// Reference from a window function to its window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowRef {
    /// A window declared in the statement's WINDOW clause
    Name(String),
    /// An inline window definition
    Inline(WindowExpr),
}

/// A window definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WindowExpr {
    /// Name, when declared in a WINDOW clause
    pub name: Option<String>,
    /// Parent window this one extends
    pub parent: Option<String>,
    pub partition: ColumnList,
    pub order: ColumnList,
}

impl WindowExpr {
    pub fn named(name: impl Into<String>) -> WindowExpr {
        WindowExpr {
            name: Some(name.into()),
            ..WindowExpr::default()
        }
    }

    pub fn inherit(mut self, parent: impl Into<String>) -> WindowExpr {
        self.parent = Some(parent.into());
        self
    }

    pub fn partition_by<I: IntoIterator<Item = Expr>>(mut self, cols: I) -> WindowExpr {
        self.partition = ColumnList::new(cols);
        self
    }

    pub fn order_by<I: IntoIterator<Item = Expr>>(mut self, cols: I) -> WindowExpr {
        self.order = ColumnList::new(cols);
        self
    }
}

/// Applies the type-directed operator rewrite: NULL and booleans force IS,
/// collections force IN, regex patterns force the regexp LIKE flavors.
fn typed_op(base: BoolOp, rhs: &Value) -> BoolOp {
    match (base, rhs) {
        (BoolOp::Eq, Value::Null | Value::Bool(_)) => BoolOp::Is,
        (BoolOp::Eq, Value::List(_)) => BoolOp::In,
        (BoolOp::Like, Value::Regex(_)) => BoolOp::RegexpLike,
        (BoolOp::ILike, Value::Regex(_)) => BoolOp::RegexpILike,
        _ => base,
    }
}

impl Expr {
    fn cmp(self, op: BoolOp, rhs: Value) -> Expr {
        Expr::Bool(BoolExpr {
            lhs: Box::new(self),
            op,
            rhs,
        })
    }

    pub fn eq(self, v: impl Into<Value>) -> Expr {
        let rhs = v.into();
        let op = typed_op(BoolOp::Eq, &rhs);
        self.cmp(op, rhs)
    }

    pub fn neq(self, v: impl Into<Value>) -> Expr {
        let rhs = v.into();
        let op = typed_op(BoolOp::Eq, &rhs).invert();
        self.cmp(op, rhs)
    }

    pub fn is(self, v: impl Into<Value>) -> Expr {
        self.cmp(BoolOp::Is, v.into())
    }

    pub fn is_not(self, v: impl Into<Value>) -> Expr {
        self.cmp(BoolOp::IsNot, v.into())
    }

    pub fn gt(self, v: impl Into<Value>) -> Expr {
        self.cmp(BoolOp::Gt, v.into())
    }

    pub fn gte(self, v: impl Into<Value>) -> Expr {
        self.cmp(BoolOp::Gte, v.into())
    }

    pub fn lt(self, v: impl Into<Value>) -> Expr {
        self.cmp(BoolOp::Lt, v.into())
    }

    pub fn lte(self, v: impl Into<Value>) -> Expr {
        self.cmp(BoolOp::Lte, v.into())
    }

    pub fn in_list(self, v: impl Into<Value>) -> Expr {
        self.cmp(BoolOp::In, v.into())
    }

    pub fn not_in_list(self, v: impl Into<Value>) -> Expr {
        self.cmp(BoolOp::NotIn, v.into())
    }

    pub fn like(self, v: impl Into<Value>) -> Expr {
        let rhs = v.into();
        let op = typed_op(BoolOp::Like, &rhs);
        self.cmp(op, rhs)
    }

    pub fn not_like(self, v: impl Into<Value>) -> Expr {
        let rhs = v.into();
        let op = typed_op(BoolOp::Like, &rhs).invert();
        self.cmp(op, rhs)
    }

    pub fn ilike(self, v: impl Into<Value>) -> Expr {
        let rhs = v.into();
        let op = typed_op(BoolOp::ILike, &rhs);
        self.cmp(op, rhs)
    }

    pub fn not_ilike(self, v: impl Into<Value>) -> Expr {
        let rhs = v.into();
        let op = typed_op(BoolOp::ILike, &rhs).invert();
        self.cmp(op, rhs)
    }

    pub fn between(self, start: impl Into<Value>, end: impl Into<Value>) -> Expr {
        Expr::Range(RangeExpr {
            lhs: Box::new(self),
            op: RangeOp::Between,
            start: start.into(),
            end: end.into(),
        })
    }

    pub fn not_between(self, start: impl Into<Value>, end: impl Into<Value>) -> Expr {
        Expr::Range(RangeExpr {
            lhs: Box::new(self),
            op: RangeOp::NotBetween,
            start: start.into(),
            end: end.into(),
        })
    }

    pub fn asc(self) -> OrderedExpr {
        OrderedExpr {
            expr: Box::new(self),
            direction: SortDirection::Asc,
            nulls: None,
        }
    }

    pub fn desc(self) -> OrderedExpr {
        OrderedExpr {
            expr: Box::new(self),
            direction: SortDirection::Desc,
            nulls: None,
        }
    }

    pub fn alias(self, alias: impl Into<IdentColPath>) -> Expr {
        Expr::Aliased {
            expr: Box::new(self),
            alias: alias.into().0,
        }
    }

    pub fn cast(self, target: impl Into<String>) -> Expr {
        Expr::Cast {
            expr: Box::new(self),
            target: target.into(),
        }
    }
}

/// Conversion helper so aliases accept plain strings or full identifiers.
pub struct IdentColPath(pub Ident);

impl From<&str> for IdentColPath {
    fn from(s: &str) -> Self {
        IdentColPath(Ident::new(s))
    }
}

impl From<Ident> for IdentColPath {
    fn from(i: Ident) -> Self {
        IdentColPath(i)
    }
}

impl From<Ident> for Expr {
    fn from(i: Ident) -> Expr {
        Expr::Ident(i)
    }
}

impl From<Literal> for Expr {
    fn from(l: Literal) -> Expr {
        Expr::Literal(l)
    }
}
