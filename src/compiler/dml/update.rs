//! UPDATE fragment renderers.

use crate::ast::UpdateClauses;
use crate::compiler::Compiler;
use crate::compiler::builder::SqlBuilder;
use crate::error::Error;

impl Compiler {
    pub(crate) fn render_update_table(&self, b: &mut SqlBuilder, c: &UpdateClauses) {
        if c.table.is_empty() {
            b.set_error(Error::MissingTable("update"));
            return;
        }
        if c.table.len() > 1 && !self.options.supports_multiple_update_tables {
            b.set_error(Error::MultipleTablesNotSupported);
            return;
        }
        b.write(self.options.update_clause);
        self.render_column_list(b, &c.table);
    }

    pub(crate) fn render_set(&self, b: &mut SqlBuilder, c: &UpdateClauses) {
        if c.set.is_empty() {
            b.set_error(Error::MissingUpdateValues);
            return;
        }
        b.write(self.options.set_fragment);
        self.render_assignments(b, &c.set);
    }

    pub(crate) fn render_update_from(&self, b: &mut SqlBuilder, c: &UpdateClauses) {
        if c.from.is_empty() {
            return;
        }
        b.write(self.options.from_fragment);
        self.render_column_list(b, &c.from);
    }
}
