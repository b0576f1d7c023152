#![forbid(unsafe_code)]

mod expression;
mod mapping_template;
mod print;

pub use expression::{
    and, block, compound, iff, not, parens, quote, raw, reference, AndNode, BlockNode,
    CompoundNode, Expression, IfNode, NotNode, ParensNode, RawNode, ReferenceNode,
};
pub use mapping_template::MappingTemplate;
pub use print::{print, print_block};
