//! INSERT fragment renderers.

use crate::ast::{AssignExpr, ConflictExpr, InsertClauses, Row, Value};
use crate::compiler::Compiler;
use crate::compiler::builder::SqlBuilder;
use crate::error::Error;

impl Compiler {
    /// Dialects that spell conflict do-nothing as a keyword modifier emit
    /// `INSERT IGNORE` here instead of a trailing conflict clause.
    pub(crate) fn render_insert_keyword(&self, b: &mut SqlBuilder, c: &InsertClauses) {
        if self.options.supports_insert_ignore
            && matches!(c.conflict, Some(ConflictExpr::DoNothing))
        {
            b.write(self.options.insert_ignore_clause);
        } else {
            b.write(self.options.insert_clause);
        }
    }

    pub(crate) fn render_insert_into(&self, b: &mut SqlBuilder, c: &InsertClauses) {
        let Some(into) = &c.into else {
            b.set_error(Error::MissingTable("insert"));
            return;
        };
        b.write(self.options.into_fragment);
        self.render_expr(b, into);
    }

    /// Source precedence: record rows, then explicit column/value tuples,
    /// then a sub-statement source, then DEFAULT VALUES.
    pub(crate) fn render_insert_body(&self, b: &mut SqlBuilder, c: &InsertClauses) {
        if c.has_rows() {
            self.render_insert_rows(b, &c.rows);
        } else if c.has_vals() {
            // Every tuple must have the same length, whether the yardstick
            // is an explicit column list or the first tuple.
            let expected = match &c.cols {
                Some(cols) if !cols.is_empty() => cols.len(),
                _ => c.vals[0].len(),
            };
            for row in &c.vals {
                if row.len() != expected {
                    b.set_error(Error::MismatchedRowLength {
                        expected,
                        found: row.len(),
                    });
                    return;
                }
            }
            if let Some(cols) = &c.cols {
                if !cols.is_empty() {
                    b.write(" (");
                    self.render_column_list(b, cols);
                    b.write(")");
                }
            }
            self.render_value_tuples(b, &c.vals);
        } else if let Some(from) = &c.from {
            if c.has_cols() {
                if let Some(cols) = &c.cols {
                    b.write(" (");
                    self.render_column_list(b, cols);
                    b.write(")");
                }
            }
            b.write(" ");
            self.render_statement(b, from);
        } else {
            b.write(self.options.default_values_fragment);
        }
    }

    /// Record-shaped rows: the column list is derived from the first row's
    /// keys (sorted), and every row must supply exactly those columns.
    fn render_insert_rows(&self, b: &mut SqlBuilder, rows: &[Row]) {
        let Some(first) = rows.first() else { return };
        let cols: Vec<&String> = first.keys().collect();
        b.write(" (");
        for (i, col) in cols.iter().enumerate() {
            if i > 0 {
                b.write(self.options.comma);
            }
            b.write(&self.options.quote(col));
        }
        b.write(")");
        b.write(self.options.values_fragment);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols.len() {
                b.set_error(Error::MismatchedRowLength {
                    expected: cols.len(),
                    found: row.len(),
                });
                return;
            }
            if i > 0 {
                b.write(self.options.comma);
            }
            b.write("(");
            for (j, col) in cols.iter().enumerate() {
                if j > 0 {
                    b.write(self.options.comma);
                }
                match row.get(*col) {
                    Some(value) => self.render_value(b, value, false),
                    None => {
                        b.set_error(Error::MismatchedRowLength {
                            expected: cols.len(),
                            found: row.len(),
                        });
                        return;
                    }
                }
            }
            b.write(")");
        }
    }

    fn render_value_tuples(&self, b: &mut SqlBuilder, vals: &[Vec<Value>]) {
        b.write(self.options.values_fragment);
        for (i, row) in vals.iter().enumerate() {
            if i > 0 {
                b.write(self.options.comma);
            }
            b.write("(");
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    b.write(self.options.comma);
                }
                self.render_value(b, value, false);
            }
            b.write(")");
        }
    }

    pub(crate) fn render_conflict(&self, b: &mut SqlBuilder, conflict: &Option<ConflictExpr>) {
        let Some(conflict) = conflict else { return };
        match conflict {
            ConflictExpr::DoNothing => {
                // Already emitted as INSERT IGNORE where the dialect asks.
                if !self.options.supports_insert_ignore {
                    b.write(self.options.conflict_fragment);
                    b.write(self.options.conflict_do_nothing);
                }
            }
            ConflictExpr::DoUpdate {
                target,
                set,
                filter,
            } => {
                b.write(self.options.conflict_fragment);
                if let Some(target) = target {
                    if self.options.supports_conflict_target {
                        b.write(" (");
                        b.write(target);
                        b.write(")");
                    }
                }
                if set.is_empty() {
                    b.set_error(Error::MissingConflictUpdateValues);
                    return;
                }
                b.write(self.options.conflict_do_update);
                self.render_assignments(b, set);
                if let Some(filter) = filter {
                    if !filter.is_empty() {
                        if !self.options.supports_conflict_update_where {
                            b.set_error(Error::UpsertWhereNotSupported);
                            return;
                        }
                        b.write(self.options.where_fragment);
                        self.render_expr_list(b, filter);
                    }
                }
            }
        }
    }

    pub(crate) fn render_assignments(&self, b: &mut SqlBuilder, set: &[AssignExpr]) {
        for (i, assign) in set.iter().enumerate() {
            if i > 0 {
                b.write(self.options.comma);
            }
            self.render_ident(b, &assign.col);
            b.write(" = ");
            self.render_value(b, &assign.val, false);
        }
    }
}
