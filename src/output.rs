use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use graphassert_transformer::ResolverResource;
use indexmap::IndexMap;

/// Writes each resolver as `resolvers/<Type>.<field>.req.vtl` and `.res.vtl`
/// under `dir`. Returns the written paths.
pub fn write_resolvers(
    dir: impl AsRef<Path>,
    resources: &IndexMap<String, ResolverResource>,
) -> Result<Vec<PathBuf>> {
    let resolvers_dir = dir.as_ref().join("resolvers");
    fs::create_dir_all(&resolvers_dir).with_context(|| {
        format!(
            "Failed to create output directory '{}'.",
            resolvers_dir.display()
        )
    })?;

    let mut paths = Vec::with_capacity(resources.len() * 2);
    for resolver in resources.values() {
        let stem = format!("{}.{}", resolver.type_name, resolver.field_name);
        for (suffix, content) in [
            ("req", resolver.request_mapping_template.render()),
            ("res", resolver.response_mapping_template.clone()),
        ] {
            let path = resolvers_dir.join(format!("{}.{}.vtl", stem, suffix));
            fs::write(&path, content)
                .with_context(|| format!("Failed to write '{}'.", path.display()))?;
            paths.push(path);
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use graphassert_transformer::{
        AssertTransformer, GraphQLTransform, ModelTransformer,
    };

    use super::*;

    #[test]
    fn write_templates() {
        let ctx = GraphQLTransform::default()
            .with(ModelTransformer)
            .with(AssertTransformer::default())
            .transform(
                r#"type Post @model { id: ID! title: String @assert(condition: ".length() > 3") }"#,
            )
            .unwrap();

        let dir = std::env::temp_dir().join(format!("graphassert-output-{}", std::process::id()));
        let paths = write_resolvers(&dir, ctx.resources()).unwrap();
        assert_eq!(paths.len(), 6);

        let request =
            fs::read_to_string(dir.join("resolvers").join("Mutation.createPost.req.vtl")).unwrap();
        assert!(request.starts_with("## [Start] Assert validation for \"title\""));
        let response =
            fs::read_to_string(dir.join("resolvers").join("Mutation.deletePost.res.vtl")).unwrap();
        assert_eq!(response, "$util.toJson($context.result)");

        fs::remove_dir_all(&dir).unwrap();
    }
}
