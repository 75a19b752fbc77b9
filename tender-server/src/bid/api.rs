use {
    super::service::{
        create_bid::CreateBidInput,
        edit_bid::EditBidInput,
        get_bid_status::GetBidStatusInput,
        get_bids_for_tender::GetBidsForTenderInput,
        get_user_bids::GetUserBidsInput,
        rollback_bid::RollbackBidInput,
        update_bid_status::UpdateBidStatusInput,
    },
    crate::{
        api::{
            parse_rollback_version,
            RestError,
        },
        state::Store,
    },
    axum::{
        extract::{
            rejection::JsonRejection,
            Path,
            State,
        },
        routing::{
            get,
            patch,
            post,
            put,
        },
        Json,
        Router,
    },
    axum_extra::extract::Query,
    std::sync::Arc,
    tender_api_types::{
        bid::{
            Bid,
            BidId,
            BidStatus,
            BidUsernameQueryParams,
            CreateBid,
            EditBid,
            GetUserBidsQueryParams,
            UpdateBidStatusQueryParams,
        },
        ErrorBodyResponse,
    },
    uuid::Uuid,
};

fn parse_bid_id(bid_id: &str) -> Result<BidId, RestError> {
    Uuid::parse_str(bid_id).map_err(|_| RestError::BadParameters("bid id is invalid".to_string()))
}

fn parse_tender_id(tender_id: &str) -> Result<Uuid, RestError> {
    Uuid::parse_str(tender_id)
        .map_err(|_| RestError::BadParameters("tender id is invalid".to_string()))
}

fn parse_status(status: Option<String>) -> Result<BidStatus, RestError> {
    status
        .unwrap_or_default()
        .parse::<BidStatus>()
        .map_err(|_| RestError::BadParameters("status is invalid".to_string()))
}

/// Submit a new bid against a tender.
///
/// The author must be registered as responsible for an organization.
#[utoipa::path(post, path = "/api/bids/new", request_body = CreateBid, responses(
    (status = 200, description = "The created bid", body = Bid),
    (status = 400, response = ErrorBodyResponse),
    (status = 403, description = "The author is not responsible for any organization", body = ErrorBodyResponse),
),)]
pub async fn create_bid(
    State(store): State<Arc<Store>>,
    body: Result<Json<CreateBid>, JsonRejection>,
) -> Result<Json<Bid>, RestError> {
    let Json(body) = body.map_err(|rejection| {
        RestError::BadParameters(format!("invalid body: {}", rejection.body_text()))
    })?;
    let bid = store
        .bid_service
        .create_bid(CreateBidInput { bid: body.into() })
        .await?;
    Ok(Json(bid.into()))
}

/// List bids authored by a user, newest first.
#[utoipa::path(get, path = "/api/bids/my", params(GetUserBidsQueryParams), responses(
    (status = 200, description = "The user's bids", body = Vec<Bid>),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn get_user_bids(
    State(store): State<Arc<Store>>,
    Query(query): Query<GetUserBidsQueryParams>,
) -> Result<Json<Vec<Bid>>, RestError> {
    let bids = store
        .bid_service
        .get_user_bids(GetUserBidsInput {
            username: query.username,
            limit:    query.limit,
            offset:   query.offset,
        })
        .await?;
    Ok(Json(bids.into_iter().map(Into::into).collect()))
}

/// List the user's bids on one tender, newest first.
#[utoipa::path(get, path = "/api/bids/{tender_id}/list",
    params(
        ("tender_id" = String, Path, description = "The tender the bids were submitted against"),
        GetUserBidsQueryParams,
    ),
    responses(
        (status = 200, description = "The user's bids on the tender", body = Vec<Bid>),
        (status = 400, response = ErrorBodyResponse),
    ),
)]
pub async fn get_bids_for_tender(
    State(store): State<Arc<Store>>,
    Path(tender_id): Path<String>,
    Query(query): Query<GetUserBidsQueryParams>,
) -> Result<Json<Vec<Bid>>, RestError> {
    let tender_id = parse_tender_id(&tender_id)?;
    let bids = store
        .bid_service
        .get_bids_for_tender(GetBidsForTenderInput {
            tender_id,
            username: query.username,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;
    Ok(Json(bids.into_iter().map(Into::into).collect()))
}

/// Get the status of a bid.
///
/// Only the author may query it.
#[utoipa::path(get, path = "/api/bids/{bid_id}/status",
    params(
        ("bid_id" = String, Path, description = "The id of the bid"),
        BidUsernameQueryParams,
    ),
    responses(
        (status = 200, description = "The bid status", body = BidStatus),
        (status = 400, response = ErrorBodyResponse),
        (status = 404, description = "Bid was not found", body = ErrorBodyResponse),
    ),
)]
pub async fn get_bid_status(
    State(store): State<Arc<Store>>,
    Path(bid_id): Path<String>,
    Query(query): Query<BidUsernameQueryParams>,
) -> Result<Json<BidStatus>, RestError> {
    let bid_id = parse_bid_id(&bid_id)?;
    let status = store
        .bid_service
        .get_bid_status(GetBidStatusInput {
            bid_id,
            username: query.username,
        })
        .await?;
    Ok(Json(status.into()))
}

/// Replace the status of a bid.
///
/// Only the author may change it. Any status value is accepted for any
/// current status.
#[utoipa::path(put, path = "/api/bids/{bid_id}/status",
    params(
        ("bid_id" = String, Path, description = "The id of the bid"),
        UpdateBidStatusQueryParams,
    ),
    responses(
        (status = 200, description = "The updated bid", body = Bid),
        (status = 400, response = ErrorBodyResponse),
        (status = 404, description = "Bid was not found", body = ErrorBodyResponse),
    ),
)]
pub async fn update_bid_status(
    State(store): State<Arc<Store>>,
    Path(bid_id): Path<String>,
    Query(query): Query<UpdateBidStatusQueryParams>,
) -> Result<Json<Bid>, RestError> {
    let bid_id = parse_bid_id(&bid_id)?;
    let status = parse_status(query.status)?;
    let bid = store
        .bid_service
        .update_bid_status(UpdateBidStatusInput {
            bid_id,
            username: query.username,
            status: status.into(),
        })
        .await?;
    Ok(Json(bid.into()))
}

/// Edit the fields of a bid.
///
/// Absent and empty fields keep their stored value. The version is
/// incremented even when nothing changed.
#[utoipa::path(patch, path = "/api/bids/{bid_id}/edit", request_body = EditBid,
    params(
        ("bid_id" = String, Path, description = "The id of the bid"),
        BidUsernameQueryParams,
    ),
    responses(
        (status = 200, description = "The edited bid", body = Bid),
        (status = 400, response = ErrorBodyResponse),
        (status = 404, description = "Bid was not found", body = ErrorBodyResponse),
    ),
)]
pub async fn edit_bid(
    State(store): State<Arc<Store>>,
    Path(bid_id): Path<String>,
    Query(query): Query<BidUsernameQueryParams>,
    body: Result<Json<EditBid>, JsonRejection>,
) -> Result<Json<Bid>, RestError> {
    let bid_id = parse_bid_id(&bid_id)?;
    // A missing body is a valid empty patch, only malformed JSON is rejected.
    let changes = match body {
        Ok(Json(changes)) => changes,
        Err(JsonRejection::MissingJsonContentType(_)) => EditBid::default(),
        Err(rejection) => {
            return Err(RestError::BadParameters(format!(
                "invalid body: {}",
                rejection.body_text()
            )))
        }
    };
    let bid = store
        .bid_service
        .edit_bid(EditBidInput {
            bid_id,
            username: query.username,
            changes: changes.into(),
        })
        .await?;
    Ok(Json(bid.into()))
}

/// Roll a bid back to an earlier version.
///
/// The editable fields are restored from the version snapshot and the
/// version counter keeps moving forward.
#[utoipa::path(put, path = "/api/bids/{bid_id}/rollback/{version}",
    params(
        ("bid_id" = String, Path, description = "The id of the bid"),
        ("version" = String, Path, description = "The version to restore"),
        BidUsernameQueryParams,
    ),
    responses(
        (status = 200, description = "The rolled back bid", body = Bid),
        (status = 400, response = ErrorBodyResponse),
        (status = 404, description = "Bid or version was not found", body = ErrorBodyResponse),
    ),
)]
pub async fn rollback_bid(
    State(store): State<Arc<Store>>,
    Path((bid_id, version)): Path<(String, String)>,
    Query(query): Query<BidUsernameQueryParams>,
) -> Result<Json<Bid>, RestError> {
    let bid_id = parse_bid_id(&bid_id)?;
    let version = parse_rollback_version(&version)?;
    let bid = store
        .bid_service
        .rollback_bid(RollbackBidInput {
            bid_id,
            username: query.username,
            version,
        })
        .await?;
    Ok(Json(bid.into()))
}

pub fn get_routes() -> Router<Arc<Store>> {
    Router::new()
        .route("/new", post(create_bid))
        .route("/my", get(get_user_bids))
        .route("/:tender_id/list", get(get_bids_for_tender))
        .route("/:bid_id/status", get(get_bid_status).put(update_bid_status))
        .route("/:bid_id/edit", patch(edit_bid))
        .route("/:bid_id/rollback/:version", put(rollback_bid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_id_must_be_a_uuid() {
        assert!(parse_bid_id("36b5c0c8-d5cf-441f-8d51-dae2f8292d88").is_ok());
        assert!(parse_bid_id("36b5c0c8").is_err());
        assert!(parse_bid_id("").is_err());
    }

    #[test]
    fn test_status_must_be_a_known_value() {
        assert_eq!(
            parse_status(Some("Canceled".to_string())).unwrap(),
            BidStatus::Canceled
        );
        assert!(parse_status(Some("Cancelled".to_string())).is_err());
        assert!(parse_status(None).is_err());
    }
}
