use graphassert_schema::{
    ConstDirective, DirectiveExt, DirectiveLocation, MetaDirective, MetaField, MetaType,
    Positioned, SchemaDocument, TypeKind,
};

use crate::{Result, TransformError, TransformerContext};

/// A directive handler plugged into [`GraphQLTransform`].
///
/// `object` is called for every occurrence of the directive on a type, `field`
/// for every occurrence on one of its fields or input fields.
#[allow(unused_variables)]
pub trait Transformer: Send + Sync {
    fn name(&self) -> &'static str;

    /// SDL of the single directive handled by this transformer.
    fn directive_definition(&self) -> &'static str;

    fn object(
        &self,
        ty: &MetaType,
        directive: &ConstDirective,
        ctx: &mut TransformerContext,
    ) -> Result<()> {
        Ok(())
    }

    fn field(
        &self,
        parent: &MetaType,
        field: &MetaField,
        directive: &ConstDirective,
        ctx: &mut TransformerContext,
    ) -> Result<()> {
        Ok(())
    }
}

/// Runs a list of transformers over an SDL document.
#[derive(Default)]
pub struct GraphQLTransform {
    transformers: Vec<Box<dyn Transformer>>,
}

impl GraphQLTransform {
    pub fn new(transformers: Vec<Box<dyn Transformer>>) -> Self {
        Self { transformers }
    }

    #[must_use]
    pub fn with(mut self, transformer: impl Transformer + 'static) -> Self {
        self.transformers.push(Box::new(transformer));
        self
    }

    /// Transformers run in registration order. Each one visits types in
    /// declaration order, type directives before field directives.
    pub fn transform(&self, sdl: &str) -> Result<TransformerContext> {
        let definitions = self.directive_definitions()?;
        let schema = SchemaDocument::parse(sdl)?;

        for ty in schema.types.values() {
            check_directives(&ty.name, type_location(ty.kind), &ty.directives, &definitions)?;
            for field in ty.fields.values() {
                check_directives(
                    &format!("{}.{}", ty.name, field.name),
                    field_location(ty.kind),
                    &field.directives,
                    &definitions,
                )?;
            }
        }

        let mut ctx = TransformerContext::new(schema.mutation_type());
        for (transformer, definition) in self.transformers.iter().zip(&definitions) {
            let directive_name = definition.name.as_str();
            tracing::debug!(
                transformer = transformer.name(),
                directive = directive_name,
                "Run transformer."
            );

            for ty in schema.types.values() {
                for directive in named(&ty.directives, directive_name) {
                    transformer.object(ty, directive, &mut ctx)?;
                }
                for field in ty.fields.values() {
                    for directive in named(&field.directives, directive_name) {
                        transformer.field(ty, field, directive, &mut ctx)?;
                    }
                }
            }
        }

        tracing::info!(
            types = schema.types.len(),
            resources = ctx.resources().len(),
            "Schema transformed."
        );
        Ok(ctx)
    }

    fn directive_definitions(&self) -> Result<Vec<MetaDirective>> {
        self.transformers
            .iter()
            .map(|transformer| {
                let invalid = |reason: String| TransformError::InvalidDefinition {
                    transformer: transformer.name().to_string(),
                    reason,
                };
                let document = SchemaDocument::parse(transformer.directive_definition())
                    .map_err(|err| invalid(err.to_string()))?;
                let mut directives = document.directives.into_values();
                match (directives.next(), directives.next()) {
                    (Some(directive), None) => Ok(directive),
                    _ => Err(invalid(
                        "expected exactly one directive definition".to_string(),
                    )),
                }
            })
            .collect()
    }
}

fn named<'a>(
    directives: &'a [Positioned<ConstDirective>],
    name: &'a str,
) -> impl Iterator<Item = &'a ConstDirective> + 'a {
    directives
        .iter()
        .map(|directive| &directive.node)
        .filter(move |directive| directive.directive_name() == name)
}

fn type_location(kind: TypeKind) -> (DirectiveLocation, &'static str) {
    match kind {
        TypeKind::Scalar => (DirectiveLocation::Scalar, "scalar"),
        TypeKind::Object => (DirectiveLocation::Object, "object"),
        TypeKind::Interface => (DirectiveLocation::Interface, "interface"),
        TypeKind::Union => (DirectiveLocation::Union, "union"),
        TypeKind::Enum => (DirectiveLocation::Enum, "enum"),
        TypeKind::InputObject => (DirectiveLocation::InputObject, "input object"),
    }
}

fn field_location(kind: TypeKind) -> (DirectiveLocation, &'static str) {
    match kind {
        TypeKind::InputObject => (DirectiveLocation::InputFieldDefinition, "input field"),
        _ => (DirectiveLocation::FieldDefinition, "field"),
    }
}

/// Checks location and arguments of the directives owned by a transformer.
/// Directives no transformer declares are left alone.
fn check_directives(
    target: &str,
    (location, location_name): (DirectiveLocation, &'static str),
    directives: &[Positioned<ConstDirective>],
    definitions: &[MetaDirective],
) -> Result<()> {
    for directive in directives {
        let directive = &directive.node;
        let definition = match definitions
            .iter()
            .find(|definition| definition.name.as_str() == directive.directive_name())
        {
            Some(definition) => definition,
            None => continue,
        };

        if !definition.allows(location) {
            return Err(TransformError::InvalidLocation {
                directive: definition.name.to_string(),
                location: location_name,
                target: target.to_string(),
            });
        }

        for (name, _) in &directive.arguments {
            if !definition.arguments.contains_key(&name.node) {
                return Err(TransformError::UnknownArgument {
                    directive: definition.name.to_string(),
                    target: target.to_string(),
                    argument: name.node.to_string(),
                });
            }
        }

        for argument in definition.arguments.values() {
            let required = !argument.ty.nullable && argument.default_value.is_none();
            if required && directive.argument(&argument.name).is_none() {
                return Err(TransformError::MissingArgument {
                    directive: definition.name.to_string(),
                    target: target.to_string(),
                    argument: argument.name.to_string(),
                });
            }
        }
    }
    Ok(())
}
