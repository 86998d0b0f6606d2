use actix_web::{web, App, HttpServer};
use silhouette_backend::config::AppConfig;
use silhouette_backend::infra::state::StateBuilder;
use silhouette_backend::middleware::{cors_middleware, StructuredLogger, TraceSpan};
use silhouette_backend::routes;
use silhouette_backend::services::spawn_reaper;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match StateBuilder::from_config(&config) {
        Ok(builder) => builder.build().await,
        Err(e) => Err(e),
    };
    let app_state = match app_state {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    let host = config.server.host.clone();
    let port = config.server.port;
    println!(
        "🚀 Starting Silhouette Backend on http://{host}:{port} ({} creatures)",
        app_state.catalog_size()
    );

    let limits = config.sessions;
    // Sweep often enough that idle sessions outlive their TTL by at most a minute
    let sweep_every = limits.idle_ttl.min(std::time::Duration::from_secs(60));
    spawn_reaper(app_state.sessions.clone(), sweep_every);
    println!(
        "🧹 Sessions expire after {}s idle (max {})",
        limits.idle_ttl.as_secs(),
        limits.max_sessions
    );

    let data = web::Data::new(app_state);
    let server = config.server.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&server))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
