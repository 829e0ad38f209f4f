mod config;
mod proxy;
mod routes;
mod state;

use std::error::Error;

use leptos::config::get_configuration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let addr = config.listen_addr(conf.leptos_options.site_addr);
    tracing::info!(api_url = %config.api_url, "proxying /api/v1 to backend");

    let state = state::AppState::new(config)?;
    let app = routes::app(state, conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "nexops listening");
    axum::serve(listener, app).await?;
    Ok(())
}
