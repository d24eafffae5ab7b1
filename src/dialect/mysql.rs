//! MySQL dialect preset.

use std::collections::HashMap;

use crate::ast::BoolOp;
use crate::dialect::DialectOptions;

/// MySQL options: backtick quoting, backslash string escapes, REGEXP
/// operators, `INSERT IGNORE` / `ON DUPLICATE KEY UPDATE` upserts, no
/// RETURNING and no DISTINCT ON, but ORDER BY and LIMIT on UPDATE/DELETE.
pub fn options() -> DialectOptions {
    let mut options = DialectOptions::default();
    options.quote_char = '`';
    options.supports_returning = false;
    options.supports_distinct_on = false;
    options.supports_order_by_on_update = true;
    options.supports_order_by_on_delete = true;
    options.supports_limit_on_update = true;
    options.supports_limit_on_delete = true;
    options.supports_conflict_update_where = false;
    options.supports_conflict_target = false;
    options.supports_insert_ignore = true;
    options.conflict_fragment = "";
    options.conflict_do_update = " ON DUPLICATE KEY UPDATE ";
    // MySQL has no DEFAULT VALUES shorthand.
    options.default_values_fragment = " () VALUES ()";
    options.true_literal = "1";
    options.false_literal = "0";
    options.time_format = "%Y-%m-%d %H:%M:%S";
    options.escaped_runes = HashMap::from([
        ('\'', "\\'"),
        ('"', "\\\""),
        ('\\', "\\\\"),
        ('\n', "\\n"),
        ('\r', "\\r"),
        ('\0', "\\x00"),
    ]);
    // LIKE is already case-insensitive under the default collation.
    options.bool_operators.insert(BoolOp::ILike, "LIKE");
    options.bool_operators.insert(BoolOp::NotILike, "NOT LIKE");
    options.bool_operators.insert(BoolOp::RegexpLike, "REGEXP");
    options
        .bool_operators
        .insert(BoolOp::RegexpNotLike, "NOT REGEXP");
    options.bool_operators.insert(BoolOp::RegexpILike, "REGEXP");
    options
        .bool_operators
        .insert(BoolOp::RegexpNotILike, "NOT REGEXP");
    options
}
