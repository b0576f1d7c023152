use indexmap::IndexMap;

use crate::resource::{ResolverResource, ResourceReader, ResourceWriter};

/// In-memory resolver store shared by the transformers of one run.
///
/// Resources keep the order in which they were first set.
#[derive(Debug)]
pub struct TransformerContext {
    mutation_type: String,
    resources: IndexMap<String, ResolverResource>,
}

impl Default for TransformerContext {
    fn default() -> Self {
        Self::new("Mutation")
    }
}

impl TransformerContext {
    pub fn new(mutation_type: impl Into<String>) -> Self {
        Self {
            mutation_type: mutation_type.into(),
            resources: Default::default(),
        }
    }

    /// Name of the root type mutation resolvers attach to.
    #[inline]
    pub fn mutation_type(&self) -> &str {
        &self.mutation_type
    }

    #[inline]
    pub fn resources(&self) -> &IndexMap<String, ResolverResource> {
        &self.resources
    }
}

impl ResourceReader for TransformerContext {
    fn resource_by_id(&self, id: &str) -> Option<ResolverResource> {
        self.resources.get(id).cloned()
    }
}

impl ResourceWriter for TransformerContext {
    fn set_resource_by_id(&mut self, id: &str, resource: ResolverResource) {
        self.resources.insert(id.to_string(), resource);
    }
}
