use graphassert_schema::{ConstDirective, MetaType};
use graphassert_template::{compound, print_block, raw, reference, MappingTemplate};

use crate::resource::{ResolverResource, ResolverResourceIds, ResourceWriter};
use crate::{Result, Transformer, TransformerContext};

pub const MODEL_DIRECTIVE: &str = "model";

const RESPONSE_TEMPLATE: &str = "$util.toJson($context.result)";

const PUT_ITEM: &str = r##"{
  "version": "2017-02-28",
  "operation": "PutItem",
  "key": {
    "id": $util.dynamodb.toDynamoDBJson($util.defaultIfNullOrBlank($ctx.args.input.id, $util.autoId()))
  },
  "attributeValues": $util.dynamodb.toMapValuesJson($context.args.input),
  "condition": {
    "expression": "attribute_not_exists(#id)",
    "expressionNames": {
      "#id": "id"
    }
  }
}"##;

const UPDATE_ITEM: &str = r##"#set( $expression = "SET" )
#set( $expNames = {} )
#set( $expValues = {} )
#foreach( $entry in $util.map.copyAndRemoveAllKeys($context.args.input, ["id"]).entrySet() )
  #set( $expression = "$expression #$entry.key = :$entry.key" )
  #if( $foreach.hasNext )
    #set( $expression = "$expression," )
  #end
  $util.qr($expNames.put("#$entry.key", "$entry.key"))
  $util.qr($expValues.put(":$entry.key", $util.dynamodb.toDynamoDB($entry.value)))
#end
{
  "version": "2017-02-28",
  "operation": "UpdateItem",
  "key": {
    "id": $util.dynamodb.toDynamoDBJson($ctx.args.input.id)
  },
  "update": {
    "expression": "$expression",
    "expressionNames": $util.toJson($expNames),
    "expressionValues": $util.toJson($expValues)
  }
}"##;

const DELETE_ITEM: &str = r##"{
  "version": "2017-02-28",
  "operation": "DeleteItem",
  "key": {
    "id": $util.dynamodb.toDynamoDBJson($ctx.args.input.id)
  }
}"##;

/// Seeds the create/update/delete mutation resolvers of every `@model` type.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModelTransformer;

impl Transformer for ModelTransformer {
    fn name(&self) -> &'static str {
        "ModelTransformer"
    }

    fn directive_definition(&self) -> &'static str {
        "directive @model on OBJECT"
    }

    fn object(
        &self,
        ty: &MetaType,
        _directive: &ConstDirective,
        ctx: &mut TransformerContext,
    ) -> Result<()> {
        let type_name = ty.name.as_str();
        let mutation_type = ctx.mutation_type().to_string();

        let resolvers = [
            (
                ResolverResourceIds::create_resolver(type_name),
                format!("create{}", type_name),
                create_request_template(type_name),
            ),
            (
                ResolverResourceIds::update_resolver(type_name),
                format!("update{}", type_name),
                update_request_template(type_name),
            ),
            (
                ResolverResourceIds::delete_resolver(type_name),
                format!("delete{}", type_name),
                delete_request_template(),
            ),
        ];

        for (id, field_name, request) in resolvers {
            tracing::debug!(resource = %id, type_name, "Model resolver created.");
            ctx.set_resource_by_id(
                &id,
                ResolverResource {
                    type_name: mutation_type.clone(),
                    field_name,
                    data_source: format!("{}Table", type_name),
                    request_mapping_template: MappingTemplate::new(request),
                    response_mapping_template: RESPONSE_TEMPLATE.to_string(),
                },
            );
        }

        Ok(())
    }
}

fn typename_put(type_name: &str) -> String {
    format!(
        "util.qr($context.args.input.put(\"__typename\", \"{}\"))",
        type_name
    )
}

fn create_request_template(type_name: &str) -> String {
    print_block(
        "Prepare DynamoDB PutItem Request",
        compound([reference(typename_put(type_name)), raw(PUT_ITEM)]),
    )
}

fn update_request_template(type_name: &str) -> String {
    print_block(
        "Prepare DynamoDB UpdateItem Request",
        compound([reference(typename_put(type_name)), raw(UPDATE_ITEM)]),
    )
}

fn delete_request_template() -> String {
    print_block("Prepare DynamoDB DeleteItem Request", raw(DELETE_ITEM))
}
