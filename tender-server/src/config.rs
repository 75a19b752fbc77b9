use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Args,
    Parser,
};

mod server;

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the tender server service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub postgres: PostgresOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Postgres Options")]
#[group(id = "Postgres")]
pub struct PostgresOptions {
    /// Connection string for the persistent Postgres storage.
    #[arg(long = "postgres-conn")]
    #[arg(env = "POSTGRES_CONN")]
    pub connection_url: String,

    /// Maximum number of pooled database connections.
    #[arg(long = "postgres-max-connections")]
    #[arg(env = "POSTGRES_MAX_CONNECTIONS")]
    #[arg(default_value = "10")]
    pub max_connections: u32,
}
