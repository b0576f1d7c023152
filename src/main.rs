#![forbid(unsafe_code)]

mod config;
mod options;
mod output;

use std::path::Path;

use anyhow::{Context, Result};
use graphassert_transformer::{AssertTransformer, GraphQLTransform, ModelTransformer};
use structopt::StructOpt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;
use options::Options;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn load_config(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        tracing::debug!(config = %path, "Config file not found, using defaults.");
        return Ok(Config::default());
    }

    toml::from_str::<Config>(
        &std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load config file '{}'.", path))?,
    )
    .with_context(|| format!("Failed to parse config file '{}'.", path))
}

fn main() -> Result<()> {
    let options: Options = Options::from_args();
    init_tracing();

    let config = load_config(&options.config)?;
    let sdl = std::fs::read_to_string(&options.schema)
        .with_context(|| format!("Failed to load schema file '{}'.", options.schema))?;

    let transform = GraphQLTransform::default()
        .with(ModelTransformer)
        .with(AssertTransformer::new(config.assert));
    let ctx = transform
        .transform(&sdl)
        .with_context(|| format!("Failed to transform schema '{}'.", options.schema))?;

    match options.output.or(config.output) {
        Some(dir) => {
            let paths = output::write_resolvers(&dir, ctx.resources())?;
            tracing::info!(output = %dir, files = paths.len(), "Resolvers written.");
        }
        None => {
            println!("{}", serde_json::to_string_pretty(ctx.resources())?);
        }
    }

    Ok(())
}
