use indexmap::map::Entry;
use indexmap::IndexMap;
use parser::types::{
    self, ConstDirective, DirectiveDefinition, DirectiveLocation, FieldDefinition,
    InputObjectType, InputValueDefinition, InterfaceType, ObjectType, SchemaDefinition,
    ServiceDocument, Type, TypeDefinition, TypeSystemDefinition,
};
use parser::{Pos, Positioned};
use value::{ConstValue, Name};

use crate::directive_ext::has_directive;
use crate::SchemaError;

type Result<T, E = SchemaError> = ::std::result::Result<T, E>;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct MetaInputValue {
    pub description: Option<String>,
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<ConstValue>,
}

#[derive(Debug, Clone)]
pub struct MetaField {
    pub description: Option<String>,
    pub name: Name,
    pub ty: Type,
    pub pos: Pos,
    pub directives: Vec<Positioned<ConstDirective>>,
}

impl MetaField {
    #[inline]
    pub fn has_directive(&self, name: &str) -> bool {
        has_directive(&self.directives, name)
    }
}

#[derive(Debug, Clone)]
pub struct MetaType {
    pub description: Option<String>,
    pub name: Name,
    pub kind: TypeKind,
    pub pos: Pos,
    pub directives: Vec<Positioned<ConstDirective>>,
    pub implements: Vec<Name>,
    pub fields: IndexMap<Name, MetaField>,
}

impl MetaType {
    #[inline]
    pub fn field_by_name(&self, name: &str) -> Option<&MetaField> {
        self.fields.get(name)
    }

    #[inline]
    pub fn has_directive(&self, name: &str) -> bool {
        has_directive(&self.directives, name)
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        self.kind == TypeKind::Object
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }
}

#[derive(Debug, Clone)]
pub struct MetaDirective {
    pub name: Name,
    pub description: Option<String>,
    pub locations: Vec<DirectiveLocation>,
    pub arguments: IndexMap<Name, MetaInputValue>,
}

impl MetaDirective {
    #[inline]
    pub fn allows(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }
}

/// Type and directive definitions of a single SDL document, in declaration order.
///
/// `extend type` definitions are merged into the type they extend.
#[derive(Debug, Default)]
pub struct SchemaDocument {
    pub(crate) mutation_type: Option<Name>,
    pub types: IndexMap<Name, MetaType>,
    pub directives: IndexMap<Name, MetaDirective>,
}

impl SchemaDocument {
    pub fn parse(document: &str) -> Result<SchemaDocument> {
        Self::new(parser::parse_schema(document)?)
    }

    pub fn new(document: ServiceDocument) -> Result<SchemaDocument> {
        let mut schema = SchemaDocument::default();

        for definition in document.definitions {
            match definition {
                TypeSystemDefinition::Schema(schema_definition) => {
                    convert_schema_definition(&mut schema, schema_definition.node);
                }
                TypeSystemDefinition::Type(type_definition) => {
                    let extend = type_definition.node.extend;
                    let meta_type = convert_type_definition(type_definition);
                    match schema.types.entry(meta_type.name.clone()) {
                        Entry::Occupied(mut entry) if extend => {
                            merge_type(entry.get_mut(), meta_type)?;
                        }
                        Entry::Occupied(_) => {
                            return Err(SchemaError::DefinitionConflicted {
                                type_name: meta_type.name.to_string(),
                            });
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(meta_type);
                        }
                    }
                }
                TypeSystemDefinition::Directive(directive_definition) => {
                    let directive = convert_directive_definition(directive_definition.node);
                    if schema.directives.contains_key(&directive.name) {
                        return Err(SchemaError::DirectiveConflicted {
                            directive_name: directive.name.to_string(),
                        });
                    }
                    schema.directives.insert(directive.name.clone(), directive);
                }
            }
        }

        Ok(schema)
    }

    #[inline]
    pub fn mutation_type(&self) -> &str {
        self.mutation_type
            .as_ref()
            .map(|name| name.as_str())
            .unwrap_or("Mutation")
    }

    #[inline]
    pub fn type_by_name(&self, name: &str) -> Option<&MetaType> {
        self.types.get(name)
    }

    #[inline]
    pub fn directive_by_name(&self, name: &str) -> Option<&MetaDirective> {
        self.directives.get(name)
    }
}

fn merge_type(meta_type: &mut MetaType, extension: MetaType) -> Result<()> {
    for (name, field) in extension.fields {
        if meta_type.fields.contains_key(&name) {
            return Err(SchemaError::FieldConflicted {
                type_name: meta_type.name.to_string(),
                field_name: name.to_string(),
            });
        }
        meta_type.fields.insert(name, field);
    }
    meta_type.directives.extend(extension.directives);
    meta_type.implements.extend(extension.implements);
    Ok(())
}

fn convert_schema_definition(schema: &mut SchemaDocument, schema_definition: SchemaDefinition) {
    if let Some(mutation) = schema_definition.mutation {
        schema.mutation_type = Some(mutation.node);
    }
}

fn convert_type_definition(definition: Positioned<TypeDefinition>) -> MetaType {
    let pos = definition.pos;
    let definition = definition.node;
    let mut type_definition = MetaType {
        description: definition.description.map(|description| description.node),
        name: definition.name.node,
        kind: TypeKind::Scalar,
        pos,
        directives: definition.directives,
        implements: Default::default(),
        fields: Default::default(),
    };

    match definition.kind {
        types::TypeKind::Scalar => type_definition.kind = TypeKind::Scalar,
        types::TypeKind::Object(ObjectType { implements, fields }) => {
            type_definition.kind = TypeKind::Object;
            type_definition.implements = implements
                .into_iter()
                .map(|implement| implement.node)
                .collect();
            type_definition.fields = fields.into_iter().map(convert_field_definition).collect();
        }
        types::TypeKind::Interface(InterfaceType { implements, fields }) => {
            type_definition.kind = TypeKind::Interface;
            type_definition.implements = implements.into_iter().map(|name| name.node).collect();
            type_definition.fields = fields.into_iter().map(convert_field_definition).collect();
        }
        types::TypeKind::Union(_) => type_definition.kind = TypeKind::Union,
        types::TypeKind::Enum(_) => type_definition.kind = TypeKind::Enum,
        types::TypeKind::InputObject(InputObjectType { fields }) => {
            type_definition.kind = TypeKind::InputObject;
            type_definition.fields = fields.into_iter().map(convert_input_field).collect();
        }
    }

    type_definition
}

fn convert_field_definition(definition: Positioned<FieldDefinition>) -> (Name, MetaField) {
    let pos = definition.pos;
    let definition = definition.node;
    (
        definition.name.node.clone(),
        MetaField {
            description: definition.description.map(|description| description.node),
            name: definition.name.node,
            ty: definition.ty.node,
            pos,
            directives: definition.directives,
        },
    )
}

fn convert_input_field(definition: Positioned<InputValueDefinition>) -> (Name, MetaField) {
    let pos = definition.pos;
    let definition = definition.node;
    (
        definition.name.node.clone(),
        MetaField {
            description: definition.description.map(|description| description.node),
            name: definition.name.node,
            ty: definition.ty.node,
            pos,
            directives: definition.directives,
        },
    )
}

fn convert_input_value_definition(arg: InputValueDefinition) -> MetaInputValue {
    MetaInputValue {
        description: arg.description.map(|description| description.node),
        name: arg.name.node,
        ty: arg.ty.node,
        default_value: arg.default_value.map(|default_value| default_value.node),
    }
}

fn convert_directive_definition(directive_definition: DirectiveDefinition) -> MetaDirective {
    MetaDirective {
        name: directive_definition.name.node,
        description: directive_definition
            .description
            .map(|description| description.node),
        locations: directive_definition
            .locations
            .into_iter()
            .map(|location| location.node)
            .collect(),
        arguments: directive_definition
            .arguments
            .into_iter()
            .map(|arg| {
                (
                    arg.node.name.node.clone(),
                    convert_input_value_definition(arg.node),
                )
            })
            .collect(),
    }
}
