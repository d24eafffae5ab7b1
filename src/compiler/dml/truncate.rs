//! TRUNCATE rendering.

use crate::ast::{IdentityOption, TruncateClauses};
use crate::compiler::Compiler;
use crate::compiler::builder::SqlBuilder;
use crate::error::Error;

impl Compiler {
    pub(crate) fn render_truncate(&self, b: &mut SqlBuilder, c: &TruncateClauses) {
        if c.tables.is_empty() {
            b.set_error(Error::MissingTable("truncate"));
            return;
        }
        b.write(self.options.truncate_clause);
        self.render_column_list(b, &c.tables);
        match c.identity {
            Some(IdentityOption::Restart) => b.write(self.options.restart_identity_fragment),
            Some(IdentityOption::Continue) => b.write(self.options.continue_identity_fragment),
            None => {}
        }
        if c.cascade {
            b.write(self.options.cascade_fragment);
        }
        if c.restrict {
            b.write(self.options.restrict_fragment);
        }
    }
}
