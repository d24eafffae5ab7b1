//! SELECT fragment renderers.

use crate::ast::{
    CompoundExpr, JoinCondition, JoinExpr, LockExpr, LockStrength, LockWait, SelectClauses, Value,
};
use crate::compiler::Compiler;
use crate::compiler::builder::SqlBuilder;
use crate::error::Error;

impl Compiler {
    /// SELECT keyword, distinct modifier, and the projection. An empty
    /// projection selects `*`.
    pub(crate) fn render_select_projection(&self, b: &mut SqlBuilder, c: &SelectClauses) {
        b.write(self.options.select_clause);
        match &c.distinct {
            None => {}
            Some(cols) if cols.is_empty() => b.write(self.options.distinct_fragment),
            Some(cols) => {
                if !self.options.supports_distinct_on {
                    b.set_error(Error::DistinctOnNotSupported);
                    return;
                }
                b.write(self.options.distinct_on_fragment);
                b.write("(");
                self.render_column_list(b, cols);
                b.write(")");
            }
        }
        b.write(" ");
        if c.select.is_empty() {
            b.write(self.options.star);
        } else {
            self.render_column_list(b, &c.select);
        }
    }

    pub(crate) fn render_select_from(&self, b: &mut SqlBuilder, c: &SelectClauses) {
        if c.from.is_empty() {
            return;
        }
        b.write(self.options.from_fragment);
        self.render_column_list(b, &c.from);
    }

    pub(crate) fn render_joins(&self, b: &mut SqlBuilder, joins: &[JoinExpr]) {
        for join in joins {
            let token = match self.options.join_type(join.kind) {
                Ok(token) => token,
                Err(err) => {
                    b.set_error(err);
                    return;
                }
            };
            b.write(" ");
            b.write(token);
            b.write(" ");
            self.render_expr(b, &join.table);
            if !join.kind.is_conditioned() {
                continue;
            }
            match &join.condition {
                Some(JoinCondition::On(list)) => {
                    b.write(self.options.on_fragment);
                    self.render_expr_list(b, list);
                }
                Some(JoinCondition::Using(cols)) => {
                    b.write(self.options.using_fragment);
                    b.write("(");
                    self.render_column_list(b, cols);
                    b.write(")");
                }
                None => {
                    b.set_error(Error::MissingJoinCondition(join.kind.keyword()));
                    return;
                }
            }
        }
    }

    pub(crate) fn render_group_by(&self, b: &mut SqlBuilder, c: &SelectClauses) {
        if c.group_by.is_empty() {
            return;
        }
        b.write(self.options.group_by_fragment);
        self.render_column_list(b, &c.group_by);
    }

    pub(crate) fn render_having(&self, b: &mut SqlBuilder, c: &SelectClauses) {
        let Some(list) = &c.having else { return };
        if list.is_empty() {
            return;
        }
        b.write(self.options.having_fragment);
        self.render_expr_list(b, list);
    }

    pub(crate) fn render_window_clause(&self, b: &mut SqlBuilder, c: &SelectClauses) {
        if c.windows.is_empty() {
            return;
        }
        if !self.options.supports_window {
            b.set_error(Error::WindowNotSupported);
            return;
        }
        b.write(self.options.window_fragment);
        for (i, window) in c.windows.iter().enumerate() {
            let Some(name) = &window.name else {
                b.set_error(Error::MissingWindowName);
                return;
            };
            if i > 0 {
                b.write(self.options.comma);
            }
            b.write(&self.options.quote(name));
            b.write(self.options.as_fragment);
            self.render_window_def(b, window);
        }
    }

    pub(crate) fn render_compounds(&self, b: &mut SqlBuilder, compounds: &[CompoundExpr]) {
        for compound in compounds {
            let token = match self.options.compound_type(compound.kind) {
                Ok(token) => token,
                Err(err) => {
                    b.set_error(err);
                    return;
                }
            };
            b.write(token);
            if self.options.wrap_compounds_in_parens {
                b.write("(");
                self.render_statement(b, &compound.rhs);
                b.write(")");
            } else {
                self.render_statement(b, &compound.rhs);
            }
        }
    }

    pub(crate) fn render_offset(&self, b: &mut SqlBuilder, c: &SelectClauses) {
        let Some(offset) = c.offset else { return };
        b.write(self.options.offset_fragment);
        self.render_value(b, &Value::Uint(offset), false);
    }

    pub(crate) fn render_lock(&self, b: &mut SqlBuilder, lock: &Option<LockExpr>) {
        let Some(lock) = lock else { return };
        b.write(match lock.strength {
            LockStrength::Update => self.options.for_update_fragment,
            LockStrength::NoKeyUpdate => self.options.for_no_key_update_fragment,
            LockStrength::Share => self.options.for_share_fragment,
            LockStrength::KeyShare => self.options.for_key_share_fragment,
        });
        if let Some(of) = &lock.of {
            if !of.is_empty() {
                b.write(self.options.of_fragment);
                self.render_column_list(b, of);
            }
        }
        match lock.wait {
            LockWait::Wait => {}
            LockWait::NoWait => b.write(self.options.nowait_fragment),
            LockWait::SkipLocked => b.write(self.options.skip_locked_fragment),
        }
    }
}
