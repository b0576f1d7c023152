mod condition;
mod validation;

use graphassert_schema::{ConstDirective, ConstValue, DirectiveExt, MetaField, MetaType};
use graphassert_template::print_block;

pub use condition::normalize_condition;
pub use validation::{
    block_name, build_validation, input_reference, DEFAULT_ERROR_TYPE, DEFAULT_MESSAGE,
};

use crate::model::MODEL_DIRECTIVE;
use crate::resource::{ResolverResourceIds, ResourceReader, ResourceWriter};
use crate::{AssertConfig, Result, TransformError, Transformer, TransformerContext};

const DIRECTIVE_NAME: &str = "assert";

/// One `@assert` occurrence on a model field.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AssertInvocation {
    pub type_name: String,
    pub field_name: String,
    pub condition: String,
    pub message: Option<String>,
    pub error_type: Option<String>,
}

impl AssertInvocation {
    pub fn from_directive(
        parent: &MetaType,
        field: &MetaField,
        directive: &ConstDirective,
    ) -> Result<Self> {
        let target = format!("{}.{}", parent.name, field.name);
        let condition = match string_argument(directive, "condition", &target)? {
            Some(condition) if !condition.is_empty() => condition,
            Some(_) => {
                return Err(TransformError::InvalidArgument {
                    directive: DIRECTIVE_NAME.to_string(),
                    target,
                    argument: "condition".to_string(),
                    reason: "must not be empty",
                })
            }
            None => {
                return Err(TransformError::MissingArgument {
                    directive: DIRECTIVE_NAME.to_string(),
                    target,
                    argument: "condition".to_string(),
                })
            }
        };

        Ok(Self {
            type_name: parent.name.to_string(),
            field_name: field.name.to_string(),
            condition,
            message: non_empty(string_argument(directive, "message", &target)?),
            error_type: non_empty(string_argument(directive, "type", &target)?),
        })
    }
}

fn string_argument(
    directive: &ConstDirective,
    name: &str,
    target: &str,
) -> Result<Option<String>> {
    match directive.argument(name).map(|value| &value.node) {
        None | Some(ConstValue::Null) => Ok(None),
        Some(ConstValue::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(TransformError::InvalidArgument {
            directive: DIRECTIVE_NAME.to_string(),
            target: target.to_string(),
            argument: name.to_string(),
            reason: "must be a string",
        }),
    }
}

/// An empty `message` or `type` falls back to the configured default.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Injects input validation into the create and update resolvers of `@model`
/// types.
#[derive(Debug, Default, Clone)]
pub struct AssertTransformer {
    config: AssertConfig,
}

impl AssertTransformer {
    pub fn new(config: AssertConfig) -> Self {
        Self { config }
    }

    /// Renders the labelled validation block of one assertion.
    pub fn render(&self, invocation: &AssertInvocation) -> String {
        let expr = build_validation(
            &invocation.field_name,
            &invocation.condition,
            Some(
                invocation
                    .message
                    .as_deref()
                    .unwrap_or(&self.config.default_message),
            ),
            Some(
                invocation
                    .error_type
                    .as_deref()
                    .unwrap_or(&self.config.default_error_type),
            ),
        );
        print_block(
            &block_name(&invocation.field_name, &invocation.condition),
            expr,
        )
    }

    /// Prepends the assertion to the create and update resolvers of the
    /// owning type. A resolver missing from `store` is skipped.
    pub fn apply<S>(&self, store: &mut S, invocation: &AssertInvocation)
    where
        S: ResourceReader + ResourceWriter,
    {
        let code = self.render(invocation);
        for id in [
            ResolverResourceIds::create_resolver(&invocation.type_name),
            ResolverResourceIds::update_resolver(&invocation.type_name),
        ] {
            prepend_to_resolver(store, &id, &code);
        }
    }
}

fn prepend_to_resolver<S>(store: &mut S, id: &str, code: &str)
where
    S: ResourceReader + ResourceWriter,
{
    match store.resource_by_id(id) {
        Some(mut resolver) => {
            resolver.request_mapping_template.prepend(code);
            store.set_resource_by_id(id, resolver);
        }
        None => {
            tracing::debug!(resource = id, "Resolver not found, assertion skipped.");
        }
    }
}

impl Transformer for AssertTransformer {
    fn name(&self) -> &'static str {
        "AssertTransformer"
    }

    fn directive_definition(&self) -> &'static str {
        "directive @assert(condition: String!, message: String, type: String) on FIELD_DEFINITION"
    }

    fn field(
        &self,
        parent: &MetaType,
        field: &MetaField,
        directive: &ConstDirective,
        ctx: &mut TransformerContext,
    ) -> Result<()> {
        if parent.is_interface() {
            return Err(TransformError::InterfaceField {
                directive: DIRECTIVE_NAME.to_string(),
                interface_name: parent.name.to_string(),
                field_name: field.name.to_string(),
            });
        }

        if !parent.has_directive(MODEL_DIRECTIVE) {
            return Err(TransformError::MissingModel {
                directive: DIRECTIVE_NAME.to_string(),
                model: MODEL_DIRECTIVE.to_string(),
                type_name: parent.name.to_string(),
                field_name: field.name.to_string(),
            });
        }

        let invocation = AssertInvocation::from_directive(parent, field, directive)?;
        tracing::debug!(
            type_name = %invocation.type_name,
            field_name = %invocation.field_name,
            condition = %invocation.condition,
            "Generate assertion."
        );
        self.apply(ctx, &invocation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use graphassert_schema::SchemaDocument;
    use graphassert_template::MappingTemplate;

    use super::*;
    use crate::resource::ResolverResource;
    use crate::{GraphQLTransform, ModelTransformer};

    fn transform(sdl: &str) -> Result<TransformerContext> {
        GraphQLTransform::default()
            .with(ModelTransformer)
            .with(AssertTransformer::default())
            .transform(sdl)
    }

    fn fragments(ctx: &TransformerContext, id: &str) -> Vec<String> {
        ctx.resource_by_id(id)
            .unwrap()
            .request_mapping_template
            .fragments()
            .map(ToString::to_string)
            .collect()
    }

    fn invocation(field_name: &str, condition: &str) -> AssertInvocation {
        AssertInvocation {
            type_name: "Post".to_string(),
            field_name: field_name.to_string(),
            condition: condition.to_string(),
            message: None,
            error_type: None,
        }
    }

    fn resolver(field_name: &str) -> ResolverResource {
        ResolverResource {
            type_name: "Mutation".to_string(),
            field_name: field_name.to_string(),
            data_source: "PostTable".to_string(),
            request_mapping_template: MappingTemplate::new("base"),
            response_mapping_template: "$util.toJson($ctx.result)".to_string(),
        }
    }

    #[derive(Default)]
    struct MapStore(HashMap<String, ResolverResource>);

    impl ResourceReader for MapStore {
        fn resource_by_id(&self, id: &str) -> Option<ResolverResource> {
            self.0.get(id).cloned()
        }
    }

    impl ResourceWriter for MapStore {
        fn set_resource_by_id(&mut self, id: &str, resource: ResolverResource) {
            self.0.insert(id.to_string(), resource);
        }
    }

    #[test]
    fn prepend_to_create_and_update() {
        let ctx = transform(
            r#"
            type Post @model {
                id: ID!
                title: String! @assert(condition: ".length() == 4")
            }
            "#,
        )
        .unwrap();

        let expected = AssertTransformer::default().render(&invocation("title", ".length() == 4"));
        for id in ["CreatePostResolver", "UpdatePostResolver"] {
            let fragments = fragments(&ctx, id);
            assert_eq!(fragments.len(), 2);
            assert_eq!(fragments[0], expected);
        }
        assert_eq!(fragments(&ctx, "DeletePostResolver").len(), 1);
    }

    #[test]
    fn later_assertion_runs_first() {
        let ctx = transform(
            r#"
            type Post @model {
                id: ID!
                title: String! @assert(condition: ".length() > 3")
                version: Int @assert(condition: ". > 0")
            }
            "#,
        )
        .unwrap();

        let transformer = AssertTransformer::default();
        let title = transformer.render(&invocation("title", ".length() > 3"));
        let version = transformer.render(&invocation("version", ". > 0"));
        for id in ["CreatePostResolver", "UpdatePostResolver"] {
            let fragments = fragments(&ctx, id);
            assert_eq!(fragments.len(), 3);
            assert_eq!(fragments[0], version);
            assert_eq!(fragments[1], title);
        }

        let rendered = ctx
            .resource_by_id("CreatePostResolver")
            .unwrap()
            .request_mapping_template
            .render();
        let version_at = rendered.find("Assert validation for \"version\"").unwrap();
        let title_at = rendered.find("Assert validation for \"title\"").unwrap();
        assert!(version_at < title_at);
    }

    #[test]
    fn repeated_on_one_field() {
        let ctx = transform(
            r#"
            type Post @model {
                id: ID!
                title: String! @assert(condition: ".length() > 3") @assert(condition: ".length() < 10")
            }
            "#,
        )
        .unwrap();

        let fragments = fragments(&ctx, "CreatePostResolver");
        assert_eq!(fragments.len(), 3);
        assert!(fragments[0].contains("(.length() < 10)"));
        assert!(fragments[1].contains("(.length() > 3)"));
    }

    #[test]
    fn requires_model() {
        let err = transform(
            r#"
            type Post {
                id: ID!
                title: String! @assert(condition: ".length() == 4")
            }
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingModel { ref type_name, ref field_name, .. }
                if type_name == "Post" && field_name == "title"
        ));
        assert!(err.is_invalid_directive());
    }

    #[test]
    fn requires_model_before_touching_resolvers() {
        let schema = SchemaDocument::parse(
            r#"type Post { title: String! @assert(condition: ".length() == 4") }"#,
        )
        .unwrap();
        let post = schema.type_by_name("Post").unwrap();
        let title = post.field_by_name("title").unwrap();

        let mut ctx = TransformerContext::default();
        ctx.set_resource_by_id("CreatePostResolver", resolver("createPost"));
        let result = AssertTransformer::default().field(
            post,
            title,
            &title.directives[0].node,
            &mut ctx,
        );
        assert!(matches!(result, Err(TransformError::MissingModel { .. })));
        assert_eq!(
            ctx.resource_by_id("CreatePostResolver"),
            Some(resolver("createPost"))
        );
    }

    #[test]
    fn rejects_interface_field() {
        let err = transform(
            r#"
            interface Node {
                id: ID! @assert(condition: ".length() > 0")
            }
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TransformError::InterfaceField { ref interface_name, ref field_name, .. }
                if interface_name == "Node" && field_name == "id"
        ));
        assert_eq!(
            err.to_string(),
            "The @assert directive cannot be placed on an interface's field. See Node.id"
        );
    }

    #[test]
    fn rejects_input_field() {
        let err = transform(
            r#"
            type Post @model { id: ID! title: String }
            input PostInput { title: String @assert(condition: ".length() > 3") }
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidLocation { location: "input field", ref target, .. }
                if target == "PostInput.title"
        ));
        assert!(err.is_invalid_directive());
    }

    #[test]
    fn invalid_arguments() {
        let err = transform(
            r#"type Post @model { id: ID! title: String @assert(condition: "") }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidArgument { ref argument, reason: "must not be empty", .. }
                if argument == "condition"
        ));

        let err = transform(
            r#"type Post @model { id: ID! title: String @assert(condition: ".x()", message: 1) }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidArgument { ref argument, reason: "must be a string", .. }
                if argument == "message"
        ));

        let err = transform("type Post @model { id: ID! title: String @assert }").unwrap_err();
        assert!(matches!(err, TransformError::MissingArgument { .. }));
    }

    #[test]
    fn optional_arguments() {
        let schema = SchemaDocument::parse(
            r#"type Post @model { title: String @assert(condition: ".x()", message: "bad", type: null) }"#,
        )
        .unwrap();
        let post = schema.type_by_name("Post").unwrap();
        let title = post.field_by_name("title").unwrap();
        let invocation =
            AssertInvocation::from_directive(post, title, &title.directives[0].node).unwrap();
        assert_eq!(invocation.condition, ".x()");
        assert_eq!(invocation.message.as_deref(), Some("bad"));
        assert_eq!(invocation.error_type, None);
    }

    #[test]
    fn empty_message_and_type_use_defaults() {
        let schema = SchemaDocument::parse(
            r#"type Post @model { title: String @assert(condition: ".length() > 3", message: "", type: "") }"#,
        )
        .unwrap();
        let post = schema.type_by_name("Post").unwrap();
        let title = post.field_by_name("title").unwrap();
        let invocation =
            AssertInvocation::from_directive(post, title, &title.directives[0].node).unwrap();
        assert_eq!(invocation.message, None);
        assert_eq!(invocation.error_type, None);

        let ctx = transform(
            r#"type Post @model { id: ID! title: String @assert(condition: ".length() > 3", message: "", type: "") }"#,
        )
        .unwrap();
        let create = fragments(&ctx, "CreatePostResolver");
        assert!(create[0].contains("$util.error('Input assertion error', 'AssertionError', null, {"));
    }

    #[test]
    fn whitespace_condition_is_kept() {
        let schema = SchemaDocument::parse(
            r#"type Post @model { title: String @assert(condition: " ") }"#,
        )
        .unwrap();
        let post = schema.type_by_name("Post").unwrap();
        let title = post.field_by_name("title").unwrap();
        let invocation =
            AssertInvocation::from_directive(post, title, &title.directives[0].node).unwrap();
        assert_eq!(invocation.condition, " ");
    }

    #[test]
    fn configured_defaults() {
        let transformer = AssertTransformer::new(AssertConfig {
            default_message: "Invalid input".to_string(),
            default_error_type: "ValidationError".to_string(),
        });
        let text = transformer.render(&invocation("title", ".length() > 3"));
        assert!(text.contains("$util.error('Invalid input', 'ValidationError', null, {"));

        let mut custom = invocation("title", ".length() > 3");
        custom.message = Some("Too short".to_string());
        let text = transformer.render(&custom);
        assert!(text.contains("$util.error('Too short', 'ValidationError', null, {"));
    }

    #[test]
    fn missing_resolver_is_skipped() {
        let mut store = MapStore::default();
        store.set_resource_by_id("UpdatePostResolver", resolver("updatePost"));

        let transformer = AssertTransformer::default();
        let invocation = invocation("title", ".length() > 3");
        transformer.apply(&mut store, &invocation);

        assert!(store.resource_by_id("CreatePostResolver").is_none());
        let update = store.resource_by_id("UpdatePostResolver").unwrap();
        assert_eq!(
            update.request_mapping_template.fragments().collect::<Vec<_>>(),
            vec![transformer.render(&invocation).as_str(), "base"]
        );
    }

    #[test]
    fn runs_only_after_model_resolvers_exist() {
        let ctx = GraphQLTransform::default()
            .with(AssertTransformer::default())
            .with(ModelTransformer)
            .transform(
                r#"type Post @model { id: ID! title: String @assert(condition: ".length() > 3") }"#,
            )
            .unwrap();
        assert_eq!(fragments(&ctx, "CreatePostResolver").len(), 1);
        assert_eq!(fragments(&ctx, "UpdatePostResolver").len(), 1);
    }
}
