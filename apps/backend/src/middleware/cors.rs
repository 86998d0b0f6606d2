use actix_cors::Cors;
use actix_web::http::header;

use crate::config::ServerConfig;

const DEV_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// CORS for the browser front end.
///
/// Origins come from `ServerConfig` (already filtered to http(s) entries),
/// falling back to localhost when none are configured.
pub fn cors_middleware(server: &ServerConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        // The download link needs to read the suggested filename
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::CONTENT_DISPOSITION,
        ])
        .max_age(3600);

    if server.allowed_origins.is_empty() {
        // Local dev front end
        for origin in DEV_ORIGINS {
            cors = cors.allowed_origin(origin);
        }
    }
    for origin in &server.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
