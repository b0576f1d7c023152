#![forbid(unsafe_code)]

mod directive_ext;
mod error;
mod schema_document;

pub use directive_ext::{find_directive, has_directive, DirectiveExt};
pub use error::SchemaError;
pub use parser::types::{ConstDirective, DirectiveLocation};
pub use parser::{Pos, Positioned};
pub use schema_document::{
    MetaDirective, MetaField, MetaInputValue, MetaType, SchemaDocument, TypeKind,
};
pub use value::{ConstValue, Name};
