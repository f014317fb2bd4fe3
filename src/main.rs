use floorplan::{db, routes, services, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    if std::env::var("SEED_DEMO").is_ok() {
        match services::plan::seed_demo(&pool).await {
            Ok(true) => tracing::info!("demo plan seeded"),
            Ok(false) => tracing::info!("store not empty; demo seed skipped"),
            Err(e) => tracing::warn!(error = %e, "demo seed failed"),
        }
    }

    let state = state::AppState::new(pool);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "floorplan listening");
    axum::serve(listener, app).await.expect("server failed");
}
