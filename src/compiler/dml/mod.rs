//! Per-statement fragment renderers.
//!
//! Clause renderers shared across statement kinds live here; the
//! statement-specific ones live in their own modules.

mod delete;
mod insert;
mod select;
mod truncate;
mod update;

use crate::ast::{ColumnList, CteExpr, ExprList, Limit, Value};
use crate::compiler::Compiler;
use crate::compiler::builder::SqlBuilder;
use crate::error::Error;

impl Compiler {
    /// Renders the WITH clause. The RECURSIVE keyword is emitted once if any
    /// entry is recursive.
    pub(crate) fn render_with(&self, b: &mut SqlBuilder, ctes: &[CteExpr]) {
        if ctes.is_empty() {
            return;
        }
        if !self.options.supports_with {
            b.set_error(Error::CteNotSupported);
            return;
        }
        let recursive = ctes.iter().any(|cte| cte.recursive);
        if recursive && !self.options.supports_with_recursive {
            b.set_error(Error::RecursiveCteNotSupported);
            return;
        }
        b.write(self.options.with_fragment);
        if recursive {
            b.write(self.options.recursive_fragment);
        }
        for (i, cte) in ctes.iter().enumerate() {
            if i > 0 {
                b.write(self.options.comma);
            }
            // Names may carry a column list, e.g. `multi(x,y)`.
            b.write(&cte.name);
            b.write(self.options.as_fragment);
            b.write("(");
            self.render_statement(b, &cte.body);
            b.write(")");
        }
        b.write(" ");
    }

    /// An absent or empty condition list suppresses the clause entirely.
    pub(crate) fn render_where(&self, b: &mut SqlBuilder, filter: &Option<ExprList>) {
        let Some(list) = filter else { return };
        if list.is_empty() {
            return;
        }
        b.write(self.options.where_fragment);
        self.render_expr_list(b, list);
    }

    pub(crate) fn render_order(&self, b: &mut SqlBuilder, order: &ColumnList) {
        if order.is_empty() {
            return;
        }
        b.write(self.options.order_by_fragment);
        self.render_column_list(b, order);
    }

    pub(crate) fn render_limit(&self, b: &mut SqlBuilder, limit: &Option<Limit>) {
        match limit {
            None => {}
            Some(Limit::Count(n)) => {
                b.write(self.options.limit_fragment);
                self.render_value(b, &Value::Uint(*n), false);
            }
            Some(Limit::All) => {
                b.write(self.options.limit_fragment);
                b.write(self.options.limit_all);
            }
        }
    }

    /// Skipped silently when the dialect does not support RETURNING.
    pub(crate) fn render_returning(&self, b: &mut SqlBuilder, returning: &Option<ColumnList>) {
        if !self.options.supports_returning {
            return;
        }
        let Some(cols) = returning else { return };
        if cols.is_empty() {
            return;
        }
        b.write(self.options.returning_fragment);
        self.render_column_list(b, cols);
    }
}
