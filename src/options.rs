use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Options {
    /// Path of the config file
    #[structopt(long, default_value = "config.toml")]
    pub config: String,

    /// Path of the GraphQL schema to transform
    pub schema: String,

    /// Directory to write resolver templates into, prints JSON to stdout when omitted
    #[structopt(long, short)]
    pub output: Option<String>,
}
