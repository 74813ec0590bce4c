//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` and accepts the standard SeaORM subcommands
//! (`up`, `down`, `status`, `fresh`, `refresh`, `reset`). Log output is
//! configured by the SeaORM CLI itself (`-v` for debug).

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    cli::run_cli(migration::Migrator).await;
}
