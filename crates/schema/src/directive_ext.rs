use indexmap::IndexMap;
use parser::types::ConstDirective;
use parser::Positioned;
use value::{ConstValue, Name};

pub trait DirectiveExt {
    fn directive_name(&self) -> &str;
    fn argument(&self, name: &str) -> Option<&Positioned<ConstValue>>;
    fn argument_str(&self, name: &str) -> Option<Positioned<&str>>;
    fn arguments(&self) -> IndexMap<Name, ConstValue>;
}

impl DirectiveExt for ConstDirective {
    #[inline]
    fn directive_name(&self) -> &str {
        self.name.node.as_str()
    }

    fn argument(&self, name: &str) -> Option<&Positioned<ConstValue>> {
        self.arguments.iter().find_map(|d| {
            if d.0.node.as_str() == name {
                Some(&d.1)
            } else {
                None
            }
        })
    }

    fn argument_str(&self, name: &str) -> Option<Positioned<&str>> {
        self.argument(name).and_then(|value| match &value.node {
            ConstValue::String(s) => Some(Positioned::new(s.as_str(), value.pos)),
            _ => None,
        })
    }

    fn arguments(&self) -> IndexMap<Name, ConstValue> {
        self.arguments
            .iter()
            .map(|(name, value)| (name.node.clone(), value.node.clone()))
            .collect()
    }
}

pub fn find_directive<'a>(
    directives: &'a [Positioned<ConstDirective>],
    name: &str,
) -> Option<&'a Positioned<ConstDirective>> {
    directives
        .iter()
        .find(|directive| directive.node.name.node.as_str() == name)
}

pub fn has_directive(directives: &[Positioned<ConstDirective>], name: &str) -> bool {
    find_directive(directives, name).is_some()
}
