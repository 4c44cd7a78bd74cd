use log::info;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use login_theme::config::Config;
use login_theme::state::AppState;

#[tokio::main]
async fn main() -> login_theme::Result<()> {
    let config = Config::default();
    let state = AppState::init(&config)?;

    let app = login_theme::app(state)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(config.env.allow_origin())
                .allow_methods(config.env.allow_methods())
                .allow_headers(config.env.allow_headers()),
        )
        .layer(TraceLayer::new_for_http());

    let addr = config.env.addr();
    info!("Starting server on {addr}");

    match config.env.ssl_config() {
        Some(ssl_config) => {
            axum_server::bind_openssl(addr, ssl_config)
                .serve(app.into_make_service())
                .await?
        }
        None => {
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await?
        }
    }

    Ok(())
}
