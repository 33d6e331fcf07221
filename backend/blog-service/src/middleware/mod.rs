/// HTTP middleware utilities for the blog service
///
/// The identity provider lives upstream: a trusted gateway injects the
/// acting user as an `X-User-Id` header, and the extractors here only read
/// it. `CurrentUser` rejects anonymous requests; `MaybeUser` never fails and
/// is used by routes where anonymous access is legal.
pub mod permissions;

pub use permissions::*;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::time::Instant;
use uuid::Uuid;

use crate::error::AppError;

/// Header carrying the acting user's id, set by the upstream gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

fn acting_user(req: &HttpRequest) -> Option<Uuid> {
    req.headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
}

/// The authenticated acting user; extraction fails for anonymous requests.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Uuid);

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            acting_user(req)
                .map(CurrentUser)
                .ok_or_else(|| {
                    AppError::AuthenticationRequired(
                        "You need to be logged in to do that.".to_string(),
                    )
                    .into()
                }),
        )
    }
}

/// The acting user if present; anonymous requests extract as `None`.
#[derive(Debug, Clone, Copy)]
pub struct MaybeUser(pub Option<Uuid>);

impl FromRequest for MaybeUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(MaybeUser(acting_user(req))))
    }
}

// =====================================================================
// Request timing
// =====================================================================

pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct MetricsMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
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
        let service = self.service.clone();
        let path = req.path().to_string();
        let method = req.method().to_string();
        let start = Instant::now();

        Box::pin(async move {
            let res = service.call(req).await;
            let elapsed = start.elapsed().as_millis();
            tracing::debug!(%method, %path, %elapsed, "request completed");
            res
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_current_user_extracts_from_header() {
        let user_id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, user_id.to_string()))
            .to_http_request();

        let extracted = CurrentUser::extract(&req).await.unwrap();
        assert_eq!(extracted.0, user_id);
    }

    #[actix_web::test]
    async fn test_current_user_rejects_anonymous_request() {
        let req = TestRequest::default().to_http_request();
        assert!(CurrentUser::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_current_user_rejects_malformed_header() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "not-a-uuid"))
            .to_http_request();
        assert!(CurrentUser::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_maybe_user_is_none_for_anonymous_request() {
        let req = TestRequest::default().to_http_request();
        let extracted = MaybeUser::extract(&req).await.unwrap();
        assert!(extracted.0.is_none());
    }

    #[actix_web::test]
    async fn test_maybe_user_extracts_when_present() {
        let user_id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, user_id.to_string()))
            .to_http_request();

        let extracted = MaybeUser::extract(&req).await.unwrap();
        assert_eq!(extracted.0, Some(user_id));
    }
}
