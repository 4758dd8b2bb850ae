mod auth;
mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use wsdc_submissions::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
