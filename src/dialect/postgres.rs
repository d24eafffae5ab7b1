//! PostgreSQL dialect preset.

use crate::dialect::DialectOptions;

/// PostgreSQL options: numbered `$n` placeholders, native ILIKE and `~`
/// regexp operators, the full CTE/RETURNING/window feature set.
pub fn options() -> DialectOptions {
    DialectOptions {
        placeholder: "$",
        numbered_placeholders: true,
        supports_multiple_update_tables: false,
        ..DialectOptions::default()
    }
}
