//! Recursive expression rendering.

use crate::ast::{
    BoolExpr, BoolOp, CombineOp, ColumnList, Expr, ExprList, FuncExpr, Ident, IdentCol, Literal,
    NullOrdering, OrderedExpr, RangeExpr, SortDirection, Value, WindowExpr, WindowRef,
};
use crate::compiler::builder::SqlBuilder;
use crate::compiler::Compiler;
use crate::error::Error;

impl Compiler {
    pub(crate) fn render_expr(&self, b: &mut SqlBuilder, expr: &Expr) {
        match expr {
            Expr::Ident(ident) => self.render_ident(b, ident),
            Expr::Literal(literal) => self.render_literal(b, literal),
            Expr::Bool(bool_expr) => self.render_bool(b, bool_expr),
            Expr::Range(range) => self.render_range(b, range),
            Expr::Ordered(ordered) => self.render_ordered(b, ordered),
            Expr::List(list) => self.render_expr_list(b, list),
            Expr::Aliased { expr, alias } => {
                self.render_expr(b, expr);
                b.write(self.options.as_fragment);
                self.render_ident(b, alias);
            }
            Expr::Cast { expr, target } => {
                b.write(self.options.cast_fragment);
                b.write("(");
                self.render_expr(b, expr);
                b.write(self.options.as_fragment);
                b.write(target);
                b.write(")");
            }
            Expr::Func(func) => self.render_func(b, func),
            Expr::Subquery(stmt) => {
                b.write("(");
                self.render_statement(b, stmt);
                b.write(")");
            }
        }
    }

    /// Quoting is applied independently per present component; a computed
    /// column renders recursively without quoting.
    pub(crate) fn render_ident(&self, b: &mut SqlBuilder, ident: &Ident) {
        if ident.is_empty() {
            b.set_error(Error::EmptyIdentifier);
            return;
        }
        let mut dotted = false;
        for part in [ident.schema.as_deref(), ident.table.as_deref()]
            .into_iter()
            .flatten()
        {
            if dotted {
                b.write(".");
            }
            b.write(&self.options.quote(part));
            dotted = true;
        }
        if let Some(col) = &ident.col {
            if dotted {
                b.write(".");
            }
            match col {
                IdentCol::Name(name) => b.write(&self.options.quote(name)),
                IdentCol::Star => b.write(self.options.star),
                IdentCol::Expr(expr) => self.render_expr(b, expr),
            }
        }
    }

    /// Substitutes each `?` marker positionally with the matching argument.
    /// Markers beyond the argument list are passed through verbatim.
    pub(crate) fn render_literal(&self, b: &mut SqlBuilder, literal: &Literal) {
        let mut args = literal.args.iter();
        for ch in literal.sql.chars() {
            if ch == '?' {
                match args.next() {
                    Some(arg) => self.render_value(b, arg, false),
                    None => b.write_char('?'),
                }
            } else {
                b.write_char(ch);
            }
        }
    }

    pub(crate) fn render_bool(&self, b: &mut SqlBuilder, expr: &BoolExpr) {
        let token = match self.options.bool_op(expr.op) {
            Ok(token) => token,
            Err(err) => {
                b.set_error(err);
                return;
            }
        };
        b.write("(");
        self.render_expr(b, &expr.lhs);
        b.write(" ");
        b.write(token);
        b.write(" ");
        let is_context = matches!(expr.op, BoolOp::Is | BoolOp::IsNot);
        self.render_value(b, &expr.rhs, is_context);
        b.write(")");
    }

    pub(crate) fn render_range(&self, b: &mut SqlBuilder, expr: &RangeExpr) {
        let token = match self.options.range_op(expr.op) {
            Ok(token) => token,
            Err(err) => {
                b.set_error(err);
                return;
            }
        };
        b.write("(");
        self.render_expr(b, &expr.lhs);
        b.write(" ");
        b.write(token);
        b.write(" ");
        self.render_value(b, &expr.start, false);
        b.write(self.options.and_fragment);
        self.render_value(b, &expr.end, false);
        b.write(")");
    }

    pub(crate) fn render_ordered(&self, b: &mut SqlBuilder, ordered: &OrderedExpr) {
        self.render_expr(b, &ordered.expr);
        b.write(match ordered.direction {
            SortDirection::Asc => self.options.asc_fragment,
            SortDirection::Desc => self.options.desc_fragment,
        });
        match ordered.nulls {
            Some(NullOrdering::First) => b.write(self.options.nulls_first_fragment),
            Some(NullOrdering::Last) => b.write(self.options.nulls_last_fragment),
            None => {}
        }
    }

    /// Empty lists render as nothing (the caller suppresses the enclosing
    /// clause keyword too), singletons render bare, larger lists render
    /// fully parenthesized with the combinator interleaved.
    pub(crate) fn render_expr_list(&self, b: &mut SqlBuilder, list: &ExprList) {
        match list.exprs.as_slice() {
            [] => {}
            [single] => self.render_expr(b, single),
            exprs => {
                let token = match list.op {
                    CombineOp::And => self.options.and_fragment,
                    CombineOp::Or => self.options.or_fragment,
                };
                b.write("(");
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        b.write(token);
                    }
                    self.render_expr(b, expr);
                }
                b.write(")");
            }
        }
    }

    pub(crate) fn render_column_list(&self, b: &mut SqlBuilder, cols: &ColumnList) {
        for (i, expr) in cols.0.iter().enumerate() {
            if i > 0 {
                b.write(self.options.comma);
            }
            self.render_expr(b, expr);
        }
    }

    pub(crate) fn render_func(&self, b: &mut SqlBuilder, func: &FuncExpr) {
        b.write(&func.name);
        b.write("(");
        for (i, arg) in func.args.iter().enumerate() {
            if i > 0 {
                b.write(self.options.comma);
            }
            self.render_expr(b, arg);
        }
        b.write(")");
        if let Some(over) = &func.over {
            if !self.options.supports_window {
                b.set_error(Error::WindowNotSupported);
                return;
            }
            b.write(self.options.over_fragment);
            match over {
                WindowRef::Name(name) => b.write(&self.options.quote(name)),
                WindowRef::Inline(window) => self.render_window_def(b, window),
            }
        }
    }

    /// Renders the parenthesized window body: optional parent window,
    /// optional PARTITION BY, optional ORDER BY.
    pub(crate) fn render_window_def(&self, b: &mut SqlBuilder, window: &WindowExpr) {
        b.write("(");
        let mut spaced = false;
        if let Some(parent) = &window.parent {
            b.write(&self.options.quote(parent));
            spaced = true;
        }
        if !window.partition.is_empty() {
            if spaced {
                b.write(" ");
            }
            b.write(self.options.partition_by_fragment);
            self.render_column_list(b, &window.partition);
            spaced = true;
        }
        if !window.order.is_empty() {
            if spaced {
                b.write(" ");
            }
            b.write(self.options.window_order_by_fragment);
            self.render_column_list(b, &window.order);
        }
        b.write(")");
    }

    /// Renders a value, either as an inline literal or as a placeholder with
    /// a collected argument.
    ///
    /// NULL always renders literally, as do booleans in IS contexts. Byte
    /// sequences go down the string path, never the collection path.
    pub(crate) fn render_value(&self, b: &mut SqlBuilder, value: &Value, is_context: bool) {
        match value {
            Value::Null => b.write(self.options.null_literal),
            Value::Bool(v) if is_context => {
                if self.options.boolean_is_keyword {
                    b.write(if *v { "TRUE" } else { "FALSE" });
                } else {
                    b.write(if *v {
                        self.options.true_literal
                    } else {
                        self.options.false_literal
                    });
                }
            }
            Value::Expr(expr) => self.render_expr(b, expr),
            Value::List(items) => {
                b.write("(");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        b.write(self.options.comma);
                    }
                    self.render_value(b, item, false);
                }
                b.write(")");
            }
            scalar => {
                if b.prepared() {
                    let index = b.add_arg(scalar.clone());
                    self.write_placeholder(b, index);
                } else {
                    self.render_literal_value(b, scalar);
                }
            }
        }
    }

    pub(crate) fn write_placeholder(&self, b: &mut SqlBuilder, index: usize) {
        b.write(self.options.placeholder);
        if self.options.numbered_placeholders {
            b.write(&index.to_string());
        }
    }

    /// Encodes a scalar value directly into the text, fully quoted/escaped.
    fn render_literal_value(&self, b: &mut SqlBuilder, value: &Value) {
        match value {
            Value::Null => b.write(self.options.null_literal),
            Value::Bool(v) => b.write(if *v {
                self.options.true_literal
            } else {
                self.options.false_literal
            }),
            Value::Int(n) => b.write(&n.to_string()),
            Value::Uint(n) => b.write(&n.to_string()),
            Value::Float(n) => {
                if n.is_finite() {
                    b.write(&n.to_string());
                } else {
                    b.set_error(Error::UnencodableValue(value.to_string()));
                }
            }
            Value::Text(s) => self.write_quoted_string(b, s),
            Value::Bytes(bytes) => {
                let decoded = String::from_utf8_lossy(bytes);
                self.write_quoted_string(b, &decoded);
            }
            Value::Timestamp(t) => {
                let formatted = t.format(self.options.time_format).to_string();
                self.write_quoted_string(b, &formatted);
            }
            Value::Uuid(u) => self.write_quoted_string(b, &u.to_string()),
            Value::Decimal(d) => b.write(&d.to_string()),
            Value::Regex(pattern) => self.write_quoted_string(b, pattern),
            Value::List(items) => {
                b.write("(");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        b.write(self.options.comma);
                    }
                    self.render_literal_value(b, item);
                }
                b.write(")");
            }
            Value::Expr(expr) => self.render_expr(b, expr),
        }
    }

    fn write_quoted_string(&self, b: &mut SqlBuilder, s: &str) {
        b.write_char(self.options.string_quote);
        for ch in s.chars() {
            match self.options.escaped_runes.get(&ch) {
                Some(replacement) => b.write(replacement),
                None => b.write_char(ch),
            }
        }
        b.write_char(self.options.string_quote);
    }
}
