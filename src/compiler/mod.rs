//! Statement compilation.
//!
//! A [`Compiler`] walks the dialect's fragment order for the statement kind
//! and renders each fragment in turn, stopping at the first error. All
//! dialect-specific behavior comes from the [`DialectOptions`] snapshot the
//! compiler holds; the walker itself is dialect-agnostic.

pub mod builder;
mod dml;
mod exprs;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::ast::Statement;
use crate::dialect::{DialectOptions, Fragment, dialect_options};
use crate::error::{Error, Result};

pub use builder::{CompiledSql, SqlBuilder};

/// Renders statements for one dialect snapshot.
#[derive(Debug, Clone)]
pub struct Compiler {
    pub(crate) options: Arc<DialectOptions>,
}

impl Compiler {
    pub fn new(options: Arc<DialectOptions>) -> Compiler {
        Compiler { options }
    }

    /// Looks up the dialect in the process registry, falling back to the
    /// default dialect for unknown names.
    pub fn for_dialect(dialect: &str) -> Compiler {
        Compiler {
            options: dialect_options(dialect),
        }
    }

    pub fn options(&self) -> &DialectOptions {
        &self.options
    }

    /// Compiles a statement to SQL text. In prepared mode encodable values
    /// become placeholders and are returned as the ordered argument list.
    pub fn compile(&self, stmt: &Statement, prepared: bool) -> Result<CompiledSql> {
        let mut b = SqlBuilder::new(prepared);
        self.render_statement(&mut b, stmt);
        let compiled = b.finish();
        #[cfg(feature = "tracing")]
        match &compiled {
            Ok(out) => tracing::debug!(
                kind = stmt.kind(),
                args = out.args.len(),
                sql = %out.sql,
                "compiled statement"
            ),
            Err(err) => tracing::debug!(kind = stmt.kind(), %err, "compile failed"),
        }
        compiled
    }

    pub(crate) fn render_statement(&self, b: &mut SqlBuilder, stmt: &Statement) {
        let order = match stmt {
            Statement::Select(_) => &self.options.select_order,
            Statement::Insert(_) => &self.options.insert_order,
            Statement::Update(_) => &self.options.update_order,
            Statement::Delete(_) => &self.options.delete_order,
            Statement::Truncate(_) => &self.options.truncate_order,
        };
        for fragment in order {
            if b.has_error() {
                return;
            }
            self.render_fragment(b, stmt, *fragment);
        }
    }

    fn render_fragment(&self, b: &mut SqlBuilder, stmt: &Statement, fragment: Fragment) {
        match (stmt, fragment) {
            (Statement::Select(c), Fragment::With) => self.render_with(b, &c.with),
            (Statement::Select(c), Fragment::Select) => self.render_select_projection(b, c),
            (Statement::Select(c), Fragment::From) => self.render_select_from(b, c),
            (Statement::Select(c), Fragment::Join) => self.render_joins(b, &c.joins),
            (Statement::Select(c), Fragment::Where) => self.render_where(b, &c.where_clause),
            (Statement::Select(c), Fragment::GroupBy) => self.render_group_by(b, c),
            (Statement::Select(c), Fragment::Having) => self.render_having(b, c),
            (Statement::Select(c), Fragment::Window) => self.render_window_clause(b, c),
            (Statement::Select(c), Fragment::Compounds) => self.render_compounds(b, &c.compounds),
            (Statement::Select(c), Fragment::Order) => self.render_order(b, &c.order),
            (Statement::Select(c), Fragment::Limit) => self.render_limit(b, &c.limit),
            (Statement::Select(c), Fragment::Offset) => self.render_offset(b, c),
            (Statement::Select(c), Fragment::Lock) => self.render_lock(b, &c.lock),

            (Statement::Insert(c), Fragment::With) => self.render_with(b, &c.with),
            (Statement::Insert(c), Fragment::Insert) => self.render_insert_keyword(b, c),
            (Statement::Insert(c), Fragment::Into) => self.render_insert_into(b, c),
            (Statement::Insert(c), Fragment::InsertBody) => self.render_insert_body(b, c),
            (Statement::Insert(c), Fragment::Conflict) => self.render_conflict(b, &c.conflict),
            (Statement::Insert(c), Fragment::Returning) => self.render_returning(b, &c.returning),

            (Statement::Update(c), Fragment::With) => self.render_with(b, &c.with),
            (Statement::Update(c), Fragment::Update) => self.render_update_table(b, c),
            (Statement::Update(c), Fragment::Set) => self.render_set(b, c),
            (Statement::Update(c), Fragment::UpdateFrom) => self.render_update_from(b, c),
            (Statement::Update(c), Fragment::Where) => self.render_where(b, &c.where_clause),
            (Statement::Update(c), Fragment::Order) => {
                if self.options.supports_order_by_on_update {
                    self.render_order(b, &c.order);
                }
            }
            (Statement::Update(c), Fragment::Limit) => {
                if self.options.supports_limit_on_update {
                    self.render_limit(b, &c.limit);
                }
            }
            (Statement::Update(c), Fragment::Returning) => self.render_returning(b, &c.returning),

            (Statement::Delete(c), Fragment::With) => self.render_with(b, &c.with),
            (Statement::Delete(_), Fragment::Delete) => b.write(self.options.delete_clause),
            (Statement::Delete(c), Fragment::From) => self.render_delete_from(b, c),
            (Statement::Delete(c), Fragment::Where) => self.render_where(b, &c.where_clause),
            (Statement::Delete(c), Fragment::Order) => {
                if self.options.supports_order_by_on_delete {
                    self.render_order(b, &c.order);
                }
            }
            (Statement::Delete(c), Fragment::Limit) => {
                if self.options.supports_limit_on_delete {
                    self.render_limit(b, &c.limit);
                }
            }
            (Statement::Delete(c), Fragment::Returning) => self.render_returning(b, &c.returning),

            (Statement::Truncate(c), Fragment::Truncate) => self.render_truncate(b, c),

            (stmt, fragment) => b.set_error(Error::UnsupportedFragment {
                statement: stmt.kind(),
                fragment: fragment.name(),
            }),
        }
    }
}

/// Compiles a statement against a named dialect from the process registry.
pub fn compile(dialect: &str, stmt: &Statement, prepared: bool) -> Result<CompiledSql> {
    Compiler::for_dialect(dialect).compile(stmt, prepared)
}
