//! Game session HTTP routes.
//!
//! Every response that carries a snapshot also drains the session's pending
//! cues, so the browser plays each cue exactly once.

use actix_web::http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::config::CueUrls;
use crate::cues::Cue;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{SessionId, ValidatedJson};
use crate::gateway::images::fetch_image;
use crate::services::{GameSnapshot, GuessOutcome, Session};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct CueView {
    pub cue: Cue,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub snapshot: GameSnapshot,
    pub cues: Vec<CueView>,
}

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

#[derive(Debug, Serialize)]
pub struct GuessResponse {
    pub outcome: GuessOutcome,
    pub snapshot: GameSnapshot,
    pub cues: Vec<CueView>,
}

fn drain_cues(session: &Session, urls: &CueUrls) -> Vec<CueView> {
    session
        .cues
        .drain()
        .into_iter()
        .map(|cue| CueView {
            cue,
            url: urls.url_for(cue).to_string(),
        })
        .collect()
}

fn session_response(id: Uuid, session: &Session, urls: &CueUrls) -> SessionResponse {
    SessionResponse {
        session_id: id,
        snapshot: session.controller.snapshot(),
        cues: drain_cues(session, urls),
    }
}

/// POST /api/sessions
async fn create_session(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (id, session) = app_state.sessions.create()?;
    Ok(HttpResponse::Created().json(session_response(id, &session, &app_state.cue_urls)))
}

/// GET /api/sessions/{session_id}
async fn get_session(
    session_id: SessionId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = app_state.sessions.get(session_id.0)?;
    Ok(HttpResponse::Ok().json(session_response(session_id.0, &session, &app_state.cue_urls)))
}

/// POST /api/sessions/{session_id}/rounds
async fn start_round(
    session_id: SessionId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = app_state.sessions.get(session_id.0)?;
    session.controller.start_round()?;
    Ok(HttpResponse::Ok().json(session_response(session_id.0, &session, &app_state.cue_urls)))
}

/// POST /api/sessions/{session_id}/guesses
///
/// Waits for any hint or morph the guess triggers, so the returned snapshot
/// is already settled.
async fn submit_guess(
    session_id: SessionId,
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = app_state.sessions.get(session_id.0)?;
    let outcome = session.controller.submit_guess(&body.guess).await?;

    Ok(HttpResponse::Ok().json(GuessResponse {
        outcome,
        snapshot: session.controller.snapshot(),
        cues: drain_cues(&session, &app_state.cue_urls),
    }))
}

/// GET /api/sessions/{session_id}/result
///
/// Downloads the revealed image (morph, or the original sprite when the
/// morph failed) as `{target}-as-{silhouette}.png`. `Content-Type` follows
/// the fetched image, so a JPEG morph is served as `image/jpeg` under the
/// same `.png` name.
async fn download_result(
    session_id: SessionId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = app_state.sessions.get(session_id.0)?;
    let (image_url, filename) = session.controller.result_image()?;

    let image = fetch_image(&app_state.http, &image_url).await.map_err(|e| {
        warn!(error = %e, "result image unavailable");
        AppError::bad_gateway(
            ErrorCode::ImageUnavailable,
            "The result image could not be retrieved",
        )
    })?;

    // The filename always ends in .png for the client; the header reports
    // what the bytes actually are
    let content_type = image
        .mime_type
        .parse()
        .map(ContentType)
        .unwrap_or_else(|_| ContentType::png());

    Ok(HttpResponse::Ok()
        .insert_header(content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(image.bytes))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_session))
        .route("/{session_id}", web::get().to(get_session))
        .route("/{session_id}/rounds", web::post().to(start_round))
        .route("/{session_id}/guesses", web::post().to(submit_guess))
        .route("/{session_id}/result", web::get().to(download_result));
}
