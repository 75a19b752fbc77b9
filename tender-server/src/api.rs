use {
    crate::{
        bid,
        config::RunOptions,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        state::Store,
        tender,
    },
    anyhow::Result,
    axum::{
        http::StatusCode,
        response::{
            IntoResponse,
            Response,
        },
        routing::get,
        Json,
        Router,
    },
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tender_api_types::{
        ErrorBodyResponse,
        Route,
    },
    tower_http::cors::CorsLayer,
    utoipa::OpenApi,
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub enum RestError {
    /// The request contained invalid parameters
    BadParameters(String),
    /// The user is not allowed to perform this action
    Unauthorized,
    /// The tender was not found, or does not belong to the user
    TenderNotFound,
    /// The bid was not found, or does not belong to the user
    BidNotFound,
    /// The requested version has no recorded snapshot
    VersionNotFound,
    /// Internal error occurred during processing the request
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::Unauthorized => (
                StatusCode::FORBIDDEN,
                "The user is not allowed to perform this action".to_string(),
            ),
            RestError::TenderNotFound => (
                StatusCode::NOT_FOUND,
                "Tender with the specified id was not found".to_string(),
            ),
            RestError::BidNotFound => (
                StatusCode::NOT_FOUND,
                "Bid with the specified id was not found".to_string(),
            ),
            RestError::VersionNotFound => (
                StatusCode::NOT_FOUND,
                "Version with the specified number was not found".to_string(),
            ),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }
}

impl std::fmt::Display for RestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (_, msg) = self.to_status_and_message();
        write!(f, "{}", msg)
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, msg) = self.to_status_and_message();
        (status, Json(ErrorBodyResponse { reason: msg })).into_response()
    }
}

pub async fn live() -> Response {
    (StatusCode::OK, "ok").into_response()
}

/// Rollback targets come in as a path segment and must be a positive integer.
pub(crate) fn parse_rollback_version(version: &str) -> Result<i32, RestError> {
    match version.parse::<i32>() {
        Ok(version) if version > 0 => Ok(version),
        _ => Err(RestError::BadParameters("version is invalid".to_string())),
    }
}

pub async fn start_api(run_options: RunOptions, store: Arc<Store>) -> Result<()> {
    // Make sure functions included in the paths section have distinct names, otherwise some api generators will fail
    #[derive(OpenApi)]
    #[openapi(
    paths(
    tender::api::create_tender,
    tender::api::get_tenders,
    tender::api::get_user_tenders,
    tender::api::get_tender_status,
    tender::api::update_tender_status,
    tender::api::edit_tender,
    tender::api::rollback_tender,
    bid::api::create_bid,
    bid::api::get_user_bids,
    bid::api::get_bids_for_tender,
    bid::api::get_bid_status,
    bid::api::update_bid_status,
    bid::api::edit_bid,
    bid::api::rollback_bid,
    ),
    components(
    schemas(
    tender_api_types::tender::Tender,
    tender_api_types::tender::TenderStatus,
    tender_api_types::tender::CreateTender,
    tender_api_types::tender::EditTender,
    tender_api_types::bid::Bid,
    tender_api_types::bid::BidStatus,
    tender_api_types::bid::BidAuthorType,
    tender_api_types::bid::CreateBid,
    tender_api_types::bid::EditBid,
    ErrorBodyResponse,
    ),
    responses(
    ErrorBodyResponse,
    ),
    ),
    tags(
    (name = "Tender Server", description = "Tender Server handles the procurement workflow: organizations \
    publish tenders, responsible employees submit bids against them, and every edit is tracked as a new version.")
    )
    )]
    struct ApiDoc;

    let api_routes = Router::new()
        .nest(Route::Tenders.as_ref(), tender::api::get_routes())
        .nest(Route::Bids.as_ref(), bid::api::get_routes())
        .route(Route::Ping.as_ref(), get(live));

    let app: Router<()> = Router::new()
        .merge(Redoc::with_url(Route::Docs.as_ref(), ApiDoc::openapi()))
        .route(
            Route::OpenApi.as_ref(),
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest(Route::Api.as_ref(), api_routes)
        .layer(CorsLayer::permissive())
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    tracing::info!("Listening on {}", run_options.server.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down REST server...");
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rollback_version_must_be_a_positive_integer() {
        assert_eq!(parse_rollback_version("1").unwrap(), 1);
        assert_eq!(parse_rollback_version("42").unwrap(), 42);
        assert!(parse_rollback_version("0").is_err());
        assert!(parse_rollback_version("-2").is_err());
        assert!(parse_rollback_version("first").is_err());
        assert!(parse_rollback_version("1.5").is_err());
        assert!(parse_rollback_version("").is_err());
    }

    #[test]
    fn test_error_statuses() {
        let (status, _) = RestError::BadParameters("oops".to_string()).to_status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = RestError::Unauthorized.to_status_and_message();
        assert_eq!(status, StatusCode::FORBIDDEN);
        let (status, _) = RestError::TenderNotFound.to_status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = RestError::BidNotFound.to_status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = RestError::VersionNotFound.to_status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = RestError::TemporarilyUnavailable.to_status_and_message();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
