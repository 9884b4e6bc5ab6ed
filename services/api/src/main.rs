use sea_orm::Database;
use tracing::info;

use stealthnap_api::config::ApiConfig;
use stealthnap_api::infra::geocoding::HttpGeocoder;
use stealthnap_api::router::build_router;
use stealthnap_api::state::AppState;
use stealthnap_core::config::Config;
use stealthnap_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing("info");

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.geocoding_api_key.is_none() {
        info!("GEOCODING_API_KEY not set, locations will not be geocoded");
    }

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        geocoder: HttpGeocoder::new(config.geocoding_url, config.geocoding_api_key),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
