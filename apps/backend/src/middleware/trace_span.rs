//! Request identity and the per-request `request` span.
//!
//! Assigns each request a trace id, works out which game session the path
//! addresses, and stores both as a [`RequestMeta`] extension. Downstream
//! runs inside a `request` span carrying `trace_id`, `method`, `route` and
//! (for session routes) `session_id`, and inside `trace_ctx` so problem
//! responses report the same id. The id is echoed in `x-request-id`.
//!
//! Wrap it outside `StructuredLogger` so the completion event can read the
//! extension:
//!
//! App::new()
//!     .wrap(StructuredLogger)
//!     .wrap(TraceSpan)

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{field, info_span, Instrument};
use uuid::Uuid;

use crate::trace_ctx;

const SESSIONS_PREFIX: &str = "/api/sessions/";
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Who a request is, as far as logging is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMeta {
    pub trace_id: String,
    /// Session addressed by `/api/sessions/{id}/...`, when the id parses.
    pub session_id: Option<Uuid>,
    /// Path with the session segment replaced by `{session_id}`.
    pub route: String,
}

impl RequestMeta {
    pub fn for_path(trace_id: String, path: &str) -> Self {
        let session_id = session_id_from_path(path);
        let route = match session_id {
            Some(_) => route_template(path),
            None => path.to_string(),
        };
        Self {
            trace_id,
            session_id,
            route,
        }
    }
}

pub fn session_id_from_path(path: &str) -> Option<Uuid> {
    let segment = path.strip_prefix(SESSIONS_PREFIX)?.split('/').next()?;
    Uuid::parse_str(segment).ok()
}

fn route_template(path: &str) -> String {
    let Some(rest) = path.strip_prefix(SESSIONS_PREFIX) else {
        return path.to_string();
    };
    match rest.split_once('/') {
        Some((_, tail)) => format!("{SESSIONS_PREFIX}{{session_id}}/{tail}"),
        None => format!("{SESSIONS_PREFIX}{{session_id}}"),
    }
}

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let meta = RequestMeta::for_path(Uuid::new_v4().to_string(), req.path());

        let span = info_span!(
            "request",
            trace_id = %meta.trace_id,
            method = %req.method(),
            route = %meta.route,
            session_id = field::Empty,
        );
        if let Some(session_id) = meta.session_id {
            span.record("session_id", field::display(session_id));
        }

        let trace_id = meta.trace_id.clone();
        req.extensions_mut().insert(meta);
        let fut = self.service.call(req);

        Box::pin(trace_ctx::with_trace_id(
            trace_id.clone(),
            async move {
                let mut res = fut.await?;
                if let Ok(value) = HeaderValue::from_str(&trace_id) {
                    res.headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }
                Ok(res)
            }
            .instrument(span),
        ))
    }
}
