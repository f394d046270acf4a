mod cli;
mod infra;
mod render;
mod routes;
mod server;

use child_cost::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
