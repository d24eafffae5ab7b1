//! DELETE fragment renderers.

use crate::ast::DeleteClauses;
use crate::compiler::Compiler;
use crate::compiler::builder::SqlBuilder;
use crate::error::Error;

impl Compiler {
    pub(crate) fn render_delete_from(&self, b: &mut SqlBuilder, c: &DeleteClauses) {
        let Some(from) = &c.from else {
            b.set_error(Error::MissingTable("delete"));
            return;
        };
        b.write(self.options.from_fragment);
        self.render_expr(b, from);
    }
}
