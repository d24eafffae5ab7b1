//! SQLite dialect preset.

use crate::ast::{BoolOp, JoinKind};
use crate::dialect::DialectOptions;

/// SQLite options: no RETURNING or DISTINCT ON, no RIGHT/FULL joins,
/// unparenthesized compound operands, ILIKE mapped onto LIKE.
pub fn options() -> DialectOptions {
    let mut options = DialectOptions::default();
    options.supports_returning = false;
    options.supports_distinct_on = false;
    options.supports_order_by_on_update = true;
    options.supports_order_by_on_delete = true;
    options.supports_limit_on_update = true;
    options.supports_limit_on_delete = true;
    options.supports_multiple_update_tables = false;
    // SQLite rejects parenthesized compound operands.
    options.wrap_compounds_in_parens = false;
    options.time_format = "%Y-%m-%d %H:%M:%S";
    options.bool_operators.insert(BoolOp::ILike, "LIKE");
    options.bool_operators.insert(BoolOp::NotILike, "NOT LIKE");
    options.bool_operators.insert(BoolOp::RegexpLike, "REGEXP");
    options
        .bool_operators
        .insert(BoolOp::RegexpNotLike, "NOT REGEXP");
    options.bool_operators.remove(&BoolOp::RegexpILike);
    options.bool_operators.remove(&BoolOp::RegexpNotILike);
    options.join_types.remove(&JoinKind::Right);
    options.join_types.remove(&JoinKind::Full);
    options.join_types.remove(&JoinKind::NaturalRight);
    options.join_types.remove(&JoinKind::NaturalFull);
    options
}
