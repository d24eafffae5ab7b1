use serde::{Deserialize, Serialize};

use crate::ast::Expr;
use crate::error::{Error, Result};

/// The column component of an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IdentCol {
    /// A plain column name
    Name(String),
    /// All columns (*)
    Star,
    /// A computed column, rendered recursively without quoting
    Expr(Box<Expr>),
}

impl From<&str> for IdentCol {
    fn from(s: &str) -> Self {
        if s == "*" {
            IdentCol::Star
        } else {
            IdentCol::Name(s.to_string())
        }
    }
}

impl From<String> for IdentCol {
    fn from(s: String) -> Self {
        IdentCol::from(s.as_str())
    }
}

impl From<Expr> for IdentCol {
    fn from(e: Expr) -> Self {
        IdentCol::Expr(Box::new(e))
    }
}

/// A qualified identifier: optional schema, optional table, optional column.
///
/// An identifier with none of the three present is invalid and rejected at
/// render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Ident {
    pub schema: Option<String>,
    pub table: Option<String>,
    pub col: Option<IdentCol>,
}

impl Ident {
    /// Builds an identifier holding only a column component.
    pub fn new(col: impl Into<IdentCol>) -> Ident {
        Ident {
            schema: None,
            table: None,
            col: Some(col.into()),
        }
    }

    /// Splits a dotted path into 1-3 components:
    /// `column`, `table.column` or `schema.table.column`.
    ///
    /// More than three components is not a supported input.
    pub fn parse(path: &str) -> Result<Ident> {
        let parts: Vec<&str> = path.split('.').collect();
        match parts.as_slice() {
            [col] => Ok(Ident::new(*col)),
            [table, col] => Ok(Ident {
                schema: None,
                table: Some(table.to_string()),
                col: Some(IdentCol::from(*col)),
            }),
            [schema, table, col] => Ok(Ident {
                schema: Some(schema.to_string()),
                table: Some(table.to_string()),
                col: Some(IdentCol::from(*col)),
            }),
            _ => Err(Error::TooManyIdentifierParts(path.to_string())),
        }
    }

    /// Returns a copy with the schema set.
    pub fn schema(mut self, schema: impl Into<String>) -> Ident {
        self.schema = Some(schema.into());
        self
    }

    /// Returns a copy with the table set.
    pub fn table(mut self, table: impl Into<String>) -> Ident {
        self.table = Some(table.into());
        self
    }

    /// Returns a copy with the column set.
    ///
    /// If the identifier currently holds a bare column name and no table,
    /// the name is promoted to the table slot (`"t".col("c")` shorthand).
    pub fn col(mut self, col: impl Into<IdentCol>) -> Ident {
        if self.table.is_none() {
            if let Some(IdentCol::Name(name)) = self.col.take() {
                self.table = Some(name);
            }
        }
        self.col = Some(col.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.schema.is_none() && self.table.is_none() && self.col.is_none()
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for part in [self.schema.as_deref(), self.table.as_deref()]
            .into_iter()
            .flatten()
        {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", part)?;
            first = false;
        }
        match &self.col {
            Some(IdentCol::Name(name)) => {
                if !first {
                    write!(f, ".")?;
                }
                write!(f, "{}", name)
            }
            Some(IdentCol::Star) => {
                if !first {
                    write!(f, ".")?;
                }
                write!(f, "*")
            }
            Some(IdentCol::Expr(_)) => {
                if !first {
                    write!(f, ".")?;
                }
                write!(f, "(EXPR)")
            }
            None => Ok(()),
        }
    }
}
