use graphassert_template::MappingTemplate;
use serde::Serialize;

/// A resolver attached to one field of a root type.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverResource {
    pub type_name: String,
    pub field_name: String,
    pub data_source: String,
    pub request_mapping_template: MappingTemplate,
    pub response_mapping_template: String,
}

/// Logical ids under which the model resolvers are stored.
pub struct ResolverResourceIds;

impl ResolverResourceIds {
    #[inline]
    pub fn create_resolver(type_name: &str) -> String {
        format!("Create{}Resolver", type_name)
    }

    #[inline]
    pub fn update_resolver(type_name: &str) -> String {
        format!("Update{}Resolver", type_name)
    }

    #[inline]
    pub fn delete_resolver(type_name: &str) -> String {
        format!("Delete{}Resolver", type_name)
    }
}

/// Read side of the resolver store.
pub trait ResourceReader {
    fn resource_by_id(&self, id: &str) -> Option<ResolverResource>;
}

/// Write side of the resolver store.
pub trait ResourceWriter {
    fn set_resource_by_id(&mut self, id: &str, resource: ResolverResource);
}
