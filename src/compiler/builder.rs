use crate::ast::Value;
use crate::error::{Error, Result};

/// A compiled statement: SQL text plus the ordered argument list collected
/// in prepared mode.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSql {
    pub sql: String,
    pub args: Vec<Value>,
}

/// Accumulates output text and, in prepared mode, an ordered argument list,
/// with first-error-wins semantics.
///
/// Every write checks the recorded error first: once a failure occurs no
/// further output is produced and the original error is never overwritten,
/// so callers always see the first failure.
#[derive(Debug)]
pub struct SqlBuilder {
    prepared: bool,
    sql: String,
    args: Vec<Value>,
    error: Option<Error>,
}

impl SqlBuilder {
    pub fn new(prepared: bool) -> SqlBuilder {
        SqlBuilder {
            prepared,
            sql: String::new(),
            args: Vec::new(),
            error: None,
        }
    }

    /// Whether values should be collected as placeholder arguments.
    pub fn prepared(&self) -> bool {
        self.prepared
    }

    /// Appends raw text. No-op once an error has been recorded.
    pub fn write(&mut self, text: &str) {
        if self.error.is_none() {
            self.sql.push_str(text);
        }
    }

    /// Appends a single character. No-op once an error has been recorded.
    pub fn write_char(&mut self, ch: char) {
        if self.error.is_none() {
            self.sql.push(ch);
        }
    }

    /// Records an argument and returns its 1-based position, which numbered
    /// placeholders must match.
    pub fn add_arg(&mut self, value: Value) -> usize {
        if self.error.is_none() {
            self.args.push(value);
        }
        self.args.len()
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Records an error. Later errors are suppressed: the first one recorded
    /// is authoritative for the whole compile call.
    pub fn set_error(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn finish(self) -> Result<CompiledSql> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(CompiledSql {
                sql: self.sql,
                args: self.args,
            }),
        }
    }
}
