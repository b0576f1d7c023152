#![forbid(unsafe_code)]

mod assert;
mod config;
mod context;
mod error;
mod model;
mod resource;
mod transform;

pub use assert::{
    block_name, build_validation, input_reference, normalize_condition, AssertInvocation,
    AssertTransformer, DEFAULT_ERROR_TYPE, DEFAULT_MESSAGE,
};
pub use config::AssertConfig;
pub use context::TransformerContext;
pub use error::TransformError;
pub use model::{ModelTransformer, MODEL_DIRECTIVE};
pub use resource::{ResolverResource, ResolverResourceIds, ResourceReader, ResourceWriter};
pub use transform::{GraphQLTransform, Transformer};

pub type Result<T, E = TransformError> = ::std::result::Result<T, E>;
