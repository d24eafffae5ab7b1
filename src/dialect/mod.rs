//! Per-dialect rendering configuration.
//!
//! A [`DialectOptions`] record holds every tunable the compiler consults:
//! fragment orders, keyword tokens, quoting and placeholder characters,
//! operator spellings and feature gates. The compiler itself contains no
//! dialect conditionals beyond feature-gate checks.

pub mod mysql;
pub mod postgres;
pub mod registry;
pub mod sqlite;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ast::{BoolOp, CompoundKind, JoinKind, RangeOp};
use crate::error::{Error, Result};

pub use registry::{DialectRegistry, registry, register_dialect, deregister_dialect, dialect_options};

/// One named piece of a statement's text, ordered per statement kind by the
/// dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
    With,
    Select,
    From,
    Join,
    Where,
    GroupBy,
    Having,
    Window,
    Compounds,
    Order,
    Limit,
    Offset,
    Lock,
    Insert,
    Into,
    InsertBody,
    Conflict,
    Returning,
    Update,
    Set,
    UpdateFrom,
    Delete,
    Truncate,
}

impl Fragment {
    pub fn name(self) -> &'static str {
        match self {
            Fragment::With => "with",
            Fragment::Select => "select",
            Fragment::From => "from",
            Fragment::Join => "join",
            Fragment::Where => "where",
            Fragment::GroupBy => "groupBy",
            Fragment::Having => "having",
            Fragment::Window => "window",
            Fragment::Compounds => "compounds",
            Fragment::Order => "order",
            Fragment::Limit => "limit",
            Fragment::Offset => "offset",
            Fragment::Lock => "lock",
            Fragment::Insert => "insert",
            Fragment::Into => "into",
            Fragment::InsertBody => "insertBody",
            Fragment::Conflict => "conflict",
            Fragment::Returning => "returning",
            Fragment::Update => "update",
            Fragment::Set => "set",
            Fragment::UpdateFrom => "updateFrom",
            Fragment::Delete => "delete",
            Fragment::Truncate => "truncate",
        }
    }
}

/// Everything a dialect can tune about rendering.
///
/// Immutable once registered; compile calls hold an `Arc` to a snapshot.
#[derive(Debug, Clone)]
pub struct DialectOptions {
    // Fragment order per statement kind.
    pub select_order: Vec<Fragment>,
    pub insert_order: Vec<Fragment>,
    pub update_order: Vec<Fragment>,
    pub delete_order: Vec<Fragment>,
    pub truncate_order: Vec<Fragment>,

    // Feature gates.
    pub supports_returning: bool,
    pub supports_with: bool,
    pub supports_with_recursive: bool,
    pub supports_window: bool,
    pub supports_distinct_on: bool,
    pub supports_order_by_on_update: bool,
    pub supports_order_by_on_delete: bool,
    pub supports_limit_on_update: bool,
    pub supports_limit_on_delete: bool,
    pub supports_conflict_update_where: bool,
    /// Dialect accepts a conflict target (`ON CONFLICT (col)`); when off the
    /// target is skipped, as with `ON DUPLICATE KEY UPDATE`.
    pub supports_conflict_target: bool,
    /// Conflict do-nothing is spelled as an INSERT keyword modifier
    /// (`INSERT IGNORE`) rather than a trailing conflict clause.
    pub supports_insert_ignore: bool,
    pub supports_multiple_update_tables: bool,
    pub wrap_compounds_in_parens: bool,
    /// Render `IS TRUE` with the bareword keyword instead of the dialect's
    /// boolean literal token.
    pub boolean_is_keyword: bool,

    // Punctuation.
    pub quote_char: char,
    pub string_quote: char,
    pub placeholder: &'static str,
    pub numbered_placeholders: bool,
    pub comma: &'static str,

    // Keyword fragments.
    pub select_clause: &'static str,
    pub distinct_fragment: &'static str,
    pub distinct_on_fragment: &'static str,
    pub star: &'static str,
    pub from_fragment: &'static str,
    pub where_fragment: &'static str,
    pub group_by_fragment: &'static str,
    pub having_fragment: &'static str,
    pub window_fragment: &'static str,
    pub order_by_fragment: &'static str,
    pub limit_fragment: &'static str,
    pub limit_all: &'static str,
    pub offset_fragment: &'static str,
    pub with_fragment: &'static str,
    pub recursive_fragment: &'static str,
    pub as_fragment: &'static str,
    pub insert_clause: &'static str,
    pub insert_ignore_clause: &'static str,
    pub into_fragment: &'static str,
    pub values_fragment: &'static str,
    pub default_values_fragment: &'static str,
    pub update_clause: &'static str,
    pub set_fragment: &'static str,
    pub delete_clause: &'static str,
    pub truncate_clause: &'static str,
    pub returning_fragment: &'static str,
    pub conflict_fragment: &'static str,
    pub conflict_do_nothing: &'static str,
    pub conflict_do_update: &'static str,
    pub cascade_fragment: &'static str,
    pub restrict_fragment: &'static str,
    pub restart_identity_fragment: &'static str,
    pub continue_identity_fragment: &'static str,
    pub for_update_fragment: &'static str,
    pub for_no_key_update_fragment: &'static str,
    pub for_share_fragment: &'static str,
    pub for_key_share_fragment: &'static str,
    pub of_fragment: &'static str,
    pub nowait_fragment: &'static str,
    pub skip_locked_fragment: &'static str,
    pub on_fragment: &'static str,
    pub using_fragment: &'static str,
    pub partition_by_fragment: &'static str,
    pub window_order_by_fragment: &'static str,
    pub asc_fragment: &'static str,
    pub desc_fragment: &'static str,
    pub nulls_first_fragment: &'static str,
    pub nulls_last_fragment: &'static str,
    pub and_fragment: &'static str,
    pub or_fragment: &'static str,
    pub cast_fragment: &'static str,
    pub over_fragment: &'static str,
    pub null_literal: &'static str,
    pub true_literal: &'static str,
    pub false_literal: &'static str,

    /// chrono format string for timestamp literals.
    pub time_format: &'static str,
    /// Per-character replacements applied inside string literals.
    pub escaped_runes: HashMap<char, &'static str>,

    // Operator spellings.
    pub bool_operators: HashMap<BoolOp, &'static str>,
    pub range_operators: HashMap<RangeOp, &'static str>,
    pub join_types: HashMap<JoinKind, &'static str>,
    pub compound_types: HashMap<CompoundKind, &'static str>,
}

impl DialectOptions {
    /// Quotes an identifier component, doubling embedded quote characters.
    pub fn quote(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        out.push(self.quote_char);
        for ch in name.chars() {
            if ch == self.quote_char {
                out.push(self.quote_char);
            }
            out.push(ch);
        }
        out.push(self.quote_char);
        out
    }

    pub fn bool_op(&self, op: BoolOp) -> Result<&'static str> {
        self.bool_operators
            .get(&op)
            .copied()
            .ok_or(Error::OperatorNotSupported(op.keyword()))
    }

    pub fn range_op(&self, op: RangeOp) -> Result<&'static str> {
        self.range_operators
            .get(&op)
            .copied()
            .ok_or(Error::OperatorNotSupported(op.keyword()))
    }

    pub fn join_type(&self, kind: JoinKind) -> Result<&'static str> {
        self.join_types
            .get(&kind)
            .copied()
            .ok_or(Error::JoinTypeNotSupported(kind.keyword()))
    }

    pub fn compound_type(&self, kind: CompoundKind) -> Result<&'static str> {
        self.compound_types
            .get(&kind)
            .copied()
            .ok_or(Error::OperatorNotSupported(kind.keyword()))
    }
}

impl Default for DialectOptions {
    /// The `"default"` dialect: double-quote identifier quoting, unnumbered
    /// `?` placeholders, CTE/RETURNING/window/DISTINCT ON supported.
    fn default() -> DialectOptions {
        DialectOptions {
            select_order: vec![
                Fragment::With,
                Fragment::Select,
                Fragment::From,
                Fragment::Join,
                Fragment::Where,
                Fragment::GroupBy,
                Fragment::Having,
                Fragment::Window,
                Fragment::Compounds,
                Fragment::Order,
                Fragment::Limit,
                Fragment::Offset,
                Fragment::Lock,
            ],
            insert_order: vec![
                Fragment::With,
                Fragment::Insert,
                Fragment::Into,
                Fragment::InsertBody,
                Fragment::Conflict,
                Fragment::Returning,
            ],
            update_order: vec![
                Fragment::With,
                Fragment::Update,
                Fragment::Set,
                Fragment::UpdateFrom,
                Fragment::Where,
                Fragment::Order,
                Fragment::Limit,
                Fragment::Returning,
            ],
            delete_order: vec![
                Fragment::With,
                Fragment::Delete,
                Fragment::From,
                Fragment::Where,
                Fragment::Order,
                Fragment::Limit,
                Fragment::Returning,
            ],
            truncate_order: vec![Fragment::Truncate],

            supports_returning: true,
            supports_with: true,
            supports_with_recursive: true,
            supports_window: true,
            supports_distinct_on: true,
            supports_order_by_on_update: false,
            supports_order_by_on_delete: false,
            supports_limit_on_update: false,
            supports_limit_on_delete: false,
            supports_conflict_update_where: true,
            supports_conflict_target: true,
            supports_insert_ignore: false,
            supports_multiple_update_tables: true,
            wrap_compounds_in_parens: true,
            boolean_is_keyword: true,

            quote_char: '"',
            string_quote: '\'',
            placeholder: "?",
            numbered_placeholders: false,
            comma: ", ",

            select_clause: "SELECT",
            distinct_fragment: " DISTINCT",
            distinct_on_fragment: " DISTINCT ON ",
            star: "*",
            from_fragment: " FROM ",
            where_fragment: " WHERE ",
            group_by_fragment: " GROUP BY ",
            having_fragment: " HAVING ",
            window_fragment: " WINDOW ",
            order_by_fragment: " ORDER BY ",
            limit_fragment: " LIMIT ",
            limit_all: "ALL",
            offset_fragment: " OFFSET ",
            with_fragment: "WITH ",
            recursive_fragment: "RECURSIVE ",
            as_fragment: " AS ",
            insert_clause: "INSERT",
            insert_ignore_clause: "INSERT IGNORE",
            into_fragment: " INTO ",
            values_fragment: " VALUES ",
            default_values_fragment: " DEFAULT VALUES",
            update_clause: "UPDATE ",
            set_fragment: " SET ",
            delete_clause: "DELETE",
            truncate_clause: "TRUNCATE ",
            returning_fragment: " RETURNING ",
            conflict_fragment: " ON CONFLICT",
            conflict_do_nothing: " DO NOTHING",
            conflict_do_update: " DO UPDATE SET ",
            cascade_fragment: " CASCADE",
            restrict_fragment: " RESTRICT",
            restart_identity_fragment: " RESTART IDENTITY",
            continue_identity_fragment: " CONTINUE IDENTITY",
            for_update_fragment: " FOR UPDATE",
            for_no_key_update_fragment: " FOR NO KEY UPDATE",
            for_share_fragment: " FOR SHARE",
            for_key_share_fragment: " FOR KEY SHARE",
            of_fragment: " OF ",
            nowait_fragment: " NOWAIT",
            skip_locked_fragment: " SKIP LOCKED",
            on_fragment: " ON ",
            using_fragment: " USING ",
            partition_by_fragment: "PARTITION BY ",
            window_order_by_fragment: "ORDER BY ",
            asc_fragment: " ASC",
            desc_fragment: " DESC",
            nulls_first_fragment: " NULLS FIRST",
            nulls_last_fragment: " NULLS LAST",
            and_fragment: " AND ",
            or_fragment: " OR ",
            cast_fragment: "CAST",
            over_fragment: " OVER ",
            null_literal: "NULL",
            true_literal: "TRUE",
            false_literal: "FALSE",

            time_format: "%Y-%m-%dT%H:%M:%S%.6f%:z",
            escaped_runes: HashMap::from([('\'', "''")]),

            bool_operators: HashMap::from([
                (BoolOp::Eq, "="),
                (BoolOp::Neq, "!="),
                (BoolOp::Is, "IS"),
                (BoolOp::IsNot, "IS NOT"),
                (BoolOp::Gt, ">"),
                (BoolOp::Gte, ">="),
                (BoolOp::Lt, "<"),
                (BoolOp::Lte, "<="),
                (BoolOp::In, "IN"),
                (BoolOp::NotIn, "NOT IN"),
                (BoolOp::Like, "LIKE"),
                (BoolOp::NotLike, "NOT LIKE"),
                (BoolOp::ILike, "ILIKE"),
                (BoolOp::NotILike, "NOT ILIKE"),
                (BoolOp::RegexpLike, "~"),
                (BoolOp::RegexpNotLike, "!~"),
                (BoolOp::RegexpILike, "~*"),
                (BoolOp::RegexpNotILike, "!~*"),
            ]),
            range_operators: HashMap::from([
                (RangeOp::Between, "BETWEEN"),
                (RangeOp::NotBetween, "NOT BETWEEN"),
            ]),
            join_types: HashMap::from([
                (JoinKind::Inner, "INNER JOIN"),
                (JoinKind::Left, "LEFT JOIN"),
                (JoinKind::Right, "RIGHT JOIN"),
                (JoinKind::Full, "FULL JOIN"),
                (JoinKind::Natural, "NATURAL JOIN"),
                (JoinKind::NaturalLeft, "NATURAL LEFT JOIN"),
                (JoinKind::NaturalRight, "NATURAL RIGHT JOIN"),
                (JoinKind::NaturalFull, "NATURAL FULL JOIN"),
                (JoinKind::Cross, "CROSS JOIN"),
            ]),
            compound_types: HashMap::from([
                (CompoundKind::Union, " UNION "),
                (CompoundKind::UnionAll, " UNION ALL "),
                (CompoundKind::Intersect, " INTERSECT "),
                (CompoundKind::IntersectAll, " INTERSECT ALL "),
            ]),
        }
    }
}
