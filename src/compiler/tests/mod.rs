//! Compiler test modules.
//!
//! Tests are organized by category:
//! - `core`: basic SELECT, INSERT, UPDATE, DELETE, TRUNCATE rendering
//! - `dialects`: dialect-specific output (postgres, mysql, sqlite) and the
//!   registry
//! - `features`: windows, locks, literals, upserts, the map shorthand

mod features;

use std::sync::Arc;

use crate::ast::{ColumnList, SelectClauses, Statement, col};
use crate::compiler::{CompiledSql, Compiler};
use crate::dialect::DialectOptions;
use crate::error::Result;

/// A compiler over a private default-dialect snapshot, so tests never touch
/// the shared registry.
fn compiler() -> Compiler {
    Compiler::new(Arc::new(DialectOptions::default()))
}

fn with_options(options: DialectOptions) -> Compiler {
    Compiler::new(Arc::new(options))
}

fn sql(stmt: impl Into<Statement>) -> Result<String> {
    compiler().compile(&stmt.into(), false).map(|out| out.sql)
}

fn prepared(stmt: impl Into<Statement>) -> Result<CompiledSql> {
    compiler().compile(&stmt.into(), true)
}

/// A `SELECT * FROM <table>` skeleton for tests to extend.
fn from(table: &str) -> SelectClauses {
    SelectClauses {
        from: ColumnList::new([col(table).unwrap()]),
        ..SelectClauses::default()
    }
}
