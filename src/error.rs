use thiserror::Error;

/// Everything that can go wrong while compiling a statement.
///
/// All of these are structural: retrying with the same input reproduces the
/// same failure, so nothing here is ever retried or downgraded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The dialect's fragment order names a fragment this statement kind has
    /// no renderer for.
    #[error("unsupported fragment {fragment} in {statement} statement")]
    UnsupportedFragment {
        statement: &'static str,
        fragment: &'static str,
    },

    #[error("dialect does not support CTE WITH clause")]
    CteNotSupported,

    #[error("dialect does not support CTE WITH RECURSIVE clause")]
    RecursiveCteNotSupported,

    #[error("dialect does not support window functions")]
    WindowNotSupported,

    #[error("dialect does not support DISTINCT ON expressions")]
    DistinctOnNotSupported,

    #[error("dialect does not support a WHERE clause on an upsert")]
    UpsertWhereNotSupported,

    #[error("dialect does not support {0} join")]
    JoinTypeNotSupported(&'static str),

    #[error("dialect does not support updating multiple tables")]
    MultipleTablesNotSupported,

    #[error("dialect does not support operator {0}")]
    OperatorNotSupported(&'static str),

    #[error("empty identifier: at least one of schema, table or column must be present")]
    EmptyIdentifier,

    #[error("identifier {0:?} has too many parts, expected at most schema.table.column")]
    TooManyIdentifierParts(String),

    #[error("rows with different value length, expected {expected} got {found}")]
    MismatchedRowLength { expected: usize, found: usize },

    #[error("{0} join requires an ON or USING condition")]
    MissingJoinCondition(&'static str),

    #[error("WINDOW clause entry requires a name")]
    MissingWindowName,

    #[error("no SET values provided for update")]
    MissingUpdateValues,

    #[error("DO UPDATE requires at least one assignment")]
    MissingConflictUpdateValues,

    #[error("no {0} table specified")]
    MissingTable(&'static str),

    #[error("range operator expects a two-element list, got {0} elements")]
    InvalidRangeValue(usize),

    #[error("value {0} cannot be encoded as a SQL literal")]
    UnencodableValue(String),
}

pub type Result<T> = std::result::Result<T, Error>;
