use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use traintrack_backend::{
    config::{get_config, init_config},
    database::{pool::create_pool, seed::seed_initial_data},
    routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    seed_initial_data(&pool).await?;

    let app_state = AppState::new(pool);
    let app = routes::build_router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
