pub mod ast;
pub mod compiler;
pub mod dialect;
pub mod error;

pub use compiler::{CompiledSql, Compiler, compile};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::compiler::{CompiledSql, Compiler, compile};
    pub use crate::dialect::{
        DialectOptions, DialectRegistry, deregister_dialect, dialect_options, register_dialect,
    };
    pub use crate::error::{Error, Result};
}
