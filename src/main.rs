use clap::Parser as _;

mod cli;
mod commands;
mod config;
mod locate;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    commands::run(cli::Args::parse())
}
