use serde::{Deserialize, Serialize};

/// Binary comparison and pattern-matching operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BoolOp {
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Neq,
    /// IS (NULL / TRUE / FALSE)
    Is,
    /// IS NOT
    IsNot,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// IN collection
    In,
    /// NOT IN collection
    NotIn,
    /// LIKE pattern match
    Like,
    /// NOT LIKE pattern match
    NotLike,
    /// Case-insensitive LIKE
    ILike,
    /// Case-insensitive NOT LIKE
    NotILike,
    /// Regular-expression match
    RegexpLike,
    /// Negated regular-expression match
    RegexpNotLike,
    /// Case-insensitive regular-expression match
    RegexpILike,
    /// Negated case-insensitive regular-expression match
    RegexpNotILike,
}

impl BoolOp {
    /// Returns the statically known inversion of this operator.
    ///
    /// Inverting twice always returns the original operator.
    pub fn invert(self) -> BoolOp {
        match self {
            BoolOp::Eq => BoolOp::Neq,
            BoolOp::Neq => BoolOp::Eq,
            BoolOp::Is => BoolOp::IsNot,
            BoolOp::IsNot => BoolOp::Is,
            BoolOp::Gt => BoolOp::Lte,
            BoolOp::Lte => BoolOp::Gt,
            BoolOp::Gte => BoolOp::Lt,
            BoolOp::Lt => BoolOp::Gte,
            BoolOp::In => BoolOp::NotIn,
            BoolOp::NotIn => BoolOp::In,
            BoolOp::Like => BoolOp::NotLike,
            BoolOp::NotLike => BoolOp::Like,
            BoolOp::ILike => BoolOp::NotILike,
            BoolOp::NotILike => BoolOp::ILike,
            BoolOp::RegexpLike => BoolOp::RegexpNotLike,
            BoolOp::RegexpNotLike => BoolOp::RegexpLike,
            BoolOp::RegexpILike => BoolOp::RegexpNotILike,
            BoolOp::RegexpNotILike => BoolOp::RegexpILike,
        }
    }

    /// Stable keyword used in error messages.
    pub fn keyword(self) -> &'static str {
        match self {
            BoolOp::Eq => "eq",
            BoolOp::Neq => "neq",
            BoolOp::Is => "is",
            BoolOp::IsNot => "isNot",
            BoolOp::Gt => "gt",
            BoolOp::Gte => "gte",
            BoolOp::Lt => "lt",
            BoolOp::Lte => "lte",
            BoolOp::In => "in",
            BoolOp::NotIn => "notIn",
            BoolOp::Like => "like",
            BoolOp::NotLike => "notLike",
            BoolOp::ILike => "iLike",
            BoolOp::NotILike => "notILike",
            BoolOp::RegexpLike => "regexpLike",
            BoolOp::RegexpNotLike => "regexpNotLike",
            BoolOp::RegexpILike => "regexpILike",
            BoolOp::RegexpNotILike => "regexpNotILike",
        }
    }
}

/// Range operators (three-operand comparisons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RangeOp {
    Between,
    NotBetween,
}

impl RangeOp {
    pub fn invert(self) -> RangeOp {
        match self {
            RangeOp::Between => RangeOp::NotBetween,
            RangeOp::NotBetween => RangeOp::Between,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            RangeOp::Between => "between",
            RangeOp::NotBetween => "notBetween",
        }
    }
}

/// Logical combinator between expressions in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CombineOp {
    #[default]
    And,
    Or,
}

/// Sort order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// NULL placement for ordered expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullOrdering {
    First,
    Last,
}

/// Join type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Natural,
    NaturalLeft,
    NaturalRight,
    NaturalFull,
    Cross,
}

impl JoinKind {
    /// Conditioned joins must carry an ON expression or a USING column list.
    pub fn is_conditioned(self) -> bool {
        !matches!(
            self,
            JoinKind::Natural
                | JoinKind::NaturalLeft
                | JoinKind::NaturalRight
                | JoinKind::NaturalFull
                | JoinKind::Cross
        )
    }

    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "inner",
            JoinKind::Left => "left",
            JoinKind::Right => "right",
            JoinKind::Full => "full",
            JoinKind::Natural => "natural",
            JoinKind::NaturalLeft => "natural left",
            JoinKind::NaturalRight => "natural right",
            JoinKind::NaturalFull => "natural full",
            JoinKind::Cross => "cross",
        }
    }
}

/// Set operation tag for combining statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundKind {
    Union,
    UnionAll,
    Intersect,
    IntersectAll,
}

impl CompoundKind {
    pub fn keyword(self) -> &'static str {
        match self {
            CompoundKind::Union => "union",
            CompoundKind::UnionAll => "unionAll",
            CompoundKind::Intersect => "intersect",
            CompoundKind::IntersectAll => "intersectAll",
        }
    }
}

/// Row lock strength for SELECT ... FOR clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockStrength {
    Update,
    NoKeyUpdate,
    Share,
    KeyShare,
}

/// Wait policy attached to a row lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LockWait {
    #[default]
    Wait,
    NoWait,
    SkipLocked,
}
