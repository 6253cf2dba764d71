//! Request logging middleware and the CORS policy.

use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use actix_cors::Cors;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{info, warn};

use crate::config::HubConfig;

const ALLOWED_METHODS: [&str; 6] = ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"];
const PREFLIGHT_MAX_AGE: usize = 3600;

/// Logs method, path, status and latency of every request.
#[derive(Clone, Default)]
pub struct RequestLog;

impl<S, B> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLogMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogMiddleware { service }))
    }
}

pub struct RequestLogMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_string();
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await;
            let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
            match &res {
                Ok(response) => info!(
                    %method,
                    %path,
                    status = response.status().as_u16(),
                    latency_ms,
                    "request completed"
                ),
                Err(error) => warn!(%method, %path, %error, latency_ms, "request failed"),
            }
            res
        })
    }
}

/// Cross-origin access for the configured dashboard origins.
///
/// Allowed `Origin` headers are echoed back with credentials permitted;
/// preflight requests are answered by the middleware itself.
pub fn cors(config: Arc<HubConfig>) -> Cors {
    Cors::default()
        .allowed_origin_fn(move |origin, _head| {
            origin
                .to_str()
                .map(|o| config.allows_origin(o))
                .unwrap_or(false)
        })
        .allowed_methods(ALLOWED_METHODS)
        .allow_any_header()
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, Method, StatusCode};
    use actix_web::{test, web, App, HttpResponse};

    fn config() -> Arc<HubConfig> {
        Arc::new(HubConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..HubConfig::default()
        })
    }

    #[actix_web::test]
    async fn test_allowed_origin_is_echoed() {
        let app = test::init_service(
            App::new()
                .wrap(cors(config()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(
            res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            res.headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[actix_web::test]
    async fn test_unknown_origin_gets_no_cors_headers() {
        let app = test::init_service(
            App::new()
                .wrap(cors(config()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://elsewhere.test"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(!res
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_preflight_is_answered() {
        let app = test::init_service(
            App::new()
                .wrap(cors(config()))
                .route("/api/leagues", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/leagues")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        assert_eq!(
            res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        let methods = res
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(methods.contains("PATCH"));
        assert!(methods.contains("DELETE"));
        assert_eq!(
            res.headers().get(header::ACCESS_CONTROL_MAX_AGE).unwrap(),
            "3600"
        );
    }

    #[actix_web::test]
    async fn test_preflight_from_unknown_origin_is_refused() {
        let app = test::init_service(
            App::new()
                .wrap(cors(config()))
                .route("/api/leagues", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/leagues")
            .insert_header((header::ORIGIN, "http://elsewhere.test"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(!res
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_request_log_passes_response_through() {
        let app = test::init_service(
            App::new()
                .wrap(RequestLog)
                .route("/", web::get().to(|| async { HttpResponse::Accepted().finish() })),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::ACCEPTED);
    }
}
