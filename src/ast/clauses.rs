use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ast::{
    ColumnList, CompoundKind, Expr, ExprList, Ident, JoinKind, LockStrength, LockWait, Value,
};

/// A join against another source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinExpr {
    pub kind: JoinKind,
    pub table: Expr,
    pub condition: Option<JoinCondition>,
}

impl JoinExpr {
    pub fn new(kind: JoinKind, table: Expr) -> JoinExpr {
        JoinExpr {
            kind,
            table,
            condition: None,
        }
    }

    pub fn on(mut self, condition: ExprList) -> JoinExpr {
        self.condition = Some(JoinCondition::On(condition));
        self
    }

    pub fn using(mut self, cols: ColumnList) -> JoinExpr {
        self.condition = Some(JoinCondition::Using(cols));
        self
    }
}

/// The condition attached to a conditioned join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinCondition {
    On(ExprList),
    Using(ColumnList),
}

/// A common table expression entry in a WITH clause.
///
/// The name may itself encode a column list, e.g. `multi(x,y)`, and is
/// emitted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CteExpr {
    pub recursive: bool,
    pub name: String,
    pub body: Box<Statement>,
}

impl CteExpr {
    pub fn new(name: impl Into<String>, body: Statement) -> CteExpr {
        CteExpr {
            recursive: false,
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn recursive(name: impl Into<String>, body: Statement) -> CteExpr {
        CteExpr {
            recursive: true,
            name: name.into(),
            body: Box::new(body),
        }
    }
}

/// A UNION/INTERSECT combination with another statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundExpr {
    pub kind: CompoundKind,
    pub rhs: Box<Statement>,
}

impl CompoundExpr {
    pub fn new(kind: CompoundKind, rhs: Statement) -> CompoundExpr {
        CompoundExpr {
            kind,
            rhs: Box::new(rhs),
        }
    }
}

/// A single column assignment in a SET list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignExpr {
    pub col: Ident,
    pub val: Value,
}

impl AssignExpr {
    pub fn new(col: Ident, val: impl Into<Value>) -> AssignExpr {
        AssignExpr {
            col,
            val: val.into(),
        }
    }
}

/// ON CONFLICT behavior for INSERT statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConflictExpr {
    DoNothing,
    DoUpdate {
        /// Target constraint or column, emitted verbatim in parentheses
        target: Option<String>,
        set: Vec<AssignExpr>,
        filter: Option<ExprList>,
    },
}

/// A row-lock request appended to a SELECT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockExpr {
    pub strength: LockStrength,
    pub wait: LockWait,
    /// Optional list of target tables (FOR UPDATE OF ...)
    pub of: Option<ColumnList>,
}

impl LockExpr {
    pub fn new(strength: LockStrength) -> LockExpr {
        LockExpr {
            strength,
            wait: LockWait::Wait,
            of: None,
        }
    }

    pub fn wait(mut self, wait: LockWait) -> LockExpr {
        self.wait = wait;
        self
    }
}

/// LIMIT clause value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Limit {
    Count(u64),
    All,
}

/// Identity handling for TRUNCATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityOption {
    Restart,
    Continue,
}

/// A single row for record-shaped inserts; ordered by column name so the
/// derived column list is deterministic.
pub type Row = BTreeMap<String, Value>;

/// Clause record for a SELECT statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SelectClauses {
    pub with: Vec<CteExpr>,
    /// `None` = plain SELECT, `Some(empty)` = DISTINCT,
    /// `Some(cols)` = DISTINCT ON (cols)
    pub distinct: Option<ColumnList>,
    /// Projected columns; empty selects `*`
    pub select: ColumnList,
    pub from: ColumnList,
    pub joins: Vec<JoinExpr>,
    pub where_clause: Option<ExprList>,
    pub group_by: ColumnList,
    pub having: Option<ExprList>,
    pub windows: Vec<super::WindowExpr>,
    pub compounds: Vec<CompoundExpr>,
    pub order: ColumnList,
    pub limit: Option<Limit>,
    pub offset: Option<u64>,
    pub lock: Option<LockExpr>,
}

/// Clause record for an INSERT statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InsertClauses {
    pub with: Vec<CteExpr>,
    pub into: Option<Expr>,
    pub cols: Option<ColumnList>,
    /// Explicit value tuples
    pub vals: Vec<Vec<Value>>,
    /// Record-shaped rows; takes precedence over `cols`/`vals`
    pub rows: Vec<Row>,
    /// Sub-statement source for INSERT ... SELECT
    pub from: Option<Box<Statement>>,
    pub conflict: Option<ConflictExpr>,
    pub returning: Option<ColumnList>,
}

impl InsertClauses {
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn has_vals(&self) -> bool {
        !self.vals.is_empty()
    }

    pub fn has_cols(&self) -> bool {
        self.cols.as_ref().is_some_and(|c| !c.is_empty())
    }
}

/// Clause record for an UPDATE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpdateClauses {
    pub with: Vec<CteExpr>,
    /// Updated table(s); more than one requires dialect support
    pub table: ColumnList,
    pub set: Vec<AssignExpr>,
    pub from: ColumnList,
    pub where_clause: Option<ExprList>,
    pub order: ColumnList,
    pub limit: Option<Limit>,
    pub returning: Option<ColumnList>,
}

/// Clause record for a DELETE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeleteClauses {
    pub with: Vec<CteExpr>,
    pub from: Option<Expr>,
    pub where_clause: Option<ExprList>,
    pub order: ColumnList,
    pub limit: Option<Limit>,
    pub returning: Option<ColumnList>,
}

/// Clause record for a TRUNCATE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TruncateClauses {
    pub tables: ColumnList,
    pub identity: Option<IdentityOption>,
    pub cascade: bool,
    pub restrict: bool,
}

/// A complete statement: one clause record tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Select(SelectClauses),
    Insert(InsertClauses),
    Update(UpdateClauses),
    Delete(DeleteClauses),
    Truncate(TruncateClauses),
}

impl Statement {
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "select",
            Statement::Insert(_) => "insert",
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
            Statement::Truncate(_) => "truncate",
        }
    }
}

impl From<SelectClauses> for Statement {
    fn from(c: SelectClauses) -> Statement {
        Statement::Select(c)
    }
}

impl From<InsertClauses> for Statement {
    fn from(c: InsertClauses) -> Statement {
        Statement::Insert(c)
    }
}

impl From<UpdateClauses> for Statement {
    fn from(c: UpdateClauses) -> Statement {
        Statement::Update(c)
    }
}

impl From<DeleteClauses> for Statement {
    fn from(c: DeleteClauses) -> Statement {
        Statement::Delete(c)
    }
}

impl From<TruncateClauses> for Statement {
    fn from(c: TruncateClauses) -> Statement {
        Statement::Truncate(c)
    }
}
