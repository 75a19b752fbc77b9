use {
    super::service::{
        create_tender::CreateTenderInput,
        edit_tender::EditTenderInput,
        get_tender_status::GetTenderStatusInput,
        get_tenders::GetTendersInput,
        get_user_tenders::GetUserTendersInput,
        rollback_tender::RollbackTenderInput,
        update_tender_status::UpdateTenderStatusInput,
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
        tender::{
            CreateTender,
            EditTender,
            GetTendersQueryParams,
            GetUserTendersQueryParams,
            Tender,
            TenderId,
            TenderStatus,
            TenderUsernameQueryParams,
            UpdateTenderStatusQueryParams,
        },
        ErrorBodyResponse,
    },
    uuid::Uuid,
};

fn parse_tender_id(tender_id: &str) -> Result<TenderId, RestError> {
    Uuid::parse_str(tender_id)
        .map_err(|_| RestError::BadParameters("tender id is invalid".to_string()))
}

fn parse_status(status: Option<String>) -> Result<TenderStatus, RestError> {
    status
        .unwrap_or_default()
        .parse::<TenderStatus>()
        .map_err(|_| RestError::BadParameters("status is invalid".to_string()))
}

/// Create a new tender.
///
/// The creator must be responsible for the organization the tender is
/// published on behalf of.
#[utoipa::path(post, path = "/api/tenders/new", request_body = CreateTender, responses(
    (status = 200, description = "The created tender", body = Tender),
    (status = 400, response = ErrorBodyResponse),
    (status = 403, description = "The creator is not responsible for the organization", body = ErrorBodyResponse),
),)]
pub async fn create_tender(
    State(store): State<Arc<Store>>,
    body: Result<Json<CreateTender>, JsonRejection>,
) -> Result<Json<Tender>, RestError> {
    let Json(body) = body.map_err(|rejection| {
        RestError::BadParameters(format!("invalid body: {}", rejection.body_text()))
    })?;
    let tender = store
        .tender_service
        .create_tender(CreateTenderInput {
            tender: body.into(),
        })
        .await?;
    Ok(Json(tender.into()))
}

/// List published tenders, ordered by name.
///
/// The service type filter may be repeated to select several categories.
#[utoipa::path(get, path = "/api/tenders", params(GetTendersQueryParams), responses(
    (status = 200, description = "Published tenders", body = Vec<Tender>),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn get_tenders(
    State(store): State<Arc<Store>>,
    Query(query): Query<GetTendersQueryParams>,
) -> Result<Json<Vec<Tender>>, RestError> {
    let tenders = store
        .tender_service
        .get_tenders(GetTendersInput {
            service_types: query.service_type,
            limit:         query.limit,
            offset:        query.offset,
        })
        .await?;
    Ok(Json(tenders.into_iter().map(Into::into).collect()))
}

/// List tenders created by a user, newest first.
#[utoipa::path(get, path = "/api/tenders/my", params(GetUserTendersQueryParams), responses(
    (status = 200, description = "The user's tenders", body = Vec<Tender>),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn get_user_tenders(
    State(store): State<Arc<Store>>,
    Query(query): Query<GetUserTendersQueryParams>,
) -> Result<Json<Vec<Tender>>, RestError> {
    let tenders = store
        .tender_service
        .get_user_tenders(GetUserTendersInput {
            username: query.username,
            limit:    query.limit,
            offset:   query.offset,
        })
        .await?;
    Ok(Json(tenders.into_iter().map(Into::into).collect()))
}

/// Get the status of a tender.
///
/// Published tenders may be queried without a username.
#[utoipa::path(get, path = "/api/tenders/{tender_id}/status",
    params(
        ("tender_id" = String, Path, description = "The id of the tender"),
        TenderUsernameQueryParams,
    ),
    responses(
        (status = 200, description = "The tender status", body = TenderStatus),
        (status = 400, response = ErrorBodyResponse),
        (status = 404, description = "Tender was not found", body = ErrorBodyResponse),
    ),
)]
pub async fn get_tender_status(
    State(store): State<Arc<Store>>,
    Path(tender_id): Path<String>,
    Query(query): Query<TenderUsernameQueryParams>,
) -> Result<Json<TenderStatus>, RestError> {
    let tender_id = parse_tender_id(&tender_id)?;
    let status = store
        .tender_service
        .get_tender_status(GetTenderStatusInput {
            tender_id,
            username: query.username,
        })
        .await?;
    Ok(Json(status.into()))
}

/// Replace the status of a tender.
///
/// Only the creator may change it. Any status value is accepted for any
/// current status.
#[utoipa::path(put, path = "/api/tenders/{tender_id}/status",
    params(
        ("tender_id" = String, Path, description = "The id of the tender"),
        UpdateTenderStatusQueryParams,
    ),
    responses(
        (status = 200, description = "The updated tender", body = Tender),
        (status = 400, response = ErrorBodyResponse),
        (status = 404, description = "Tender was not found", body = ErrorBodyResponse),
    ),
)]
pub async fn update_tender_status(
    State(store): State<Arc<Store>>,
    Path(tender_id): Path<String>,
    Query(query): Query<UpdateTenderStatusQueryParams>,
) -> Result<Json<Tender>, RestError> {
    let tender_id = parse_tender_id(&tender_id)?;
    let status = parse_status(query.status)?;
    let tender = store
        .tender_service
        .update_tender_status(UpdateTenderStatusInput {
            tender_id,
            username: query.username,
            status: status.into(),
        })
        .await?;
    Ok(Json(tender.into()))
}

/// Edit the fields of a tender.
///
/// Absent and empty fields keep their stored value. The version is
/// incremented even when nothing changed.
#[utoipa::path(patch, path = "/api/tenders/{tender_id}/edit", request_body = EditTender,
    params(
        ("tender_id" = String, Path, description = "The id of the tender"),
        TenderUsernameQueryParams,
    ),
    responses(
        (status = 200, description = "The edited tender", body = Tender),
        (status = 400, response = ErrorBodyResponse),
        (status = 404, description = "Tender was not found", body = ErrorBodyResponse),
    ),
)]
pub async fn edit_tender(
    State(store): State<Arc<Store>>,
    Path(tender_id): Path<String>,
    Query(query): Query<TenderUsernameQueryParams>,
    body: Result<Json<EditTender>, JsonRejection>,
) -> Result<Json<Tender>, RestError> {
    let tender_id = parse_tender_id(&tender_id)?;
    // A missing body is a valid empty patch, only malformed JSON is rejected.
    let changes = match body {
        Ok(Json(changes)) => changes,
        Err(JsonRejection::MissingJsonContentType(_)) => EditTender::default(),
        Err(rejection) => {
            return Err(RestError::BadParameters(format!(
                "invalid body: {}",
                rejection.body_text()
            )))
        }
    };
    let tender = store
        .tender_service
        .edit_tender(EditTenderInput {
            tender_id,
            username: query.username,
            changes: changes.into(),
        })
        .await?;
    Ok(Json(tender.into()))
}

/// Roll a tender back to an earlier version.
///
/// The editable fields are restored from the version snapshot and the
/// version counter keeps moving forward.
#[utoipa::path(put, path = "/api/tenders/{tender_id}/rollback/{version}",
    params(
        ("tender_id" = String, Path, description = "The id of the tender"),
        ("version" = String, Path, description = "The version to restore"),
        TenderUsernameQueryParams,
    ),
    responses(
        (status = 200, description = "The rolled back tender", body = Tender),
        (status = 400, response = ErrorBodyResponse),
        (status = 404, description = "Tender or version was not found", body = ErrorBodyResponse),
    ),
)]
pub async fn rollback_tender(
    State(store): State<Arc<Store>>,
    Path((tender_id, version)): Path<(String, String)>,
    Query(query): Query<TenderUsernameQueryParams>,
) -> Result<Json<Tender>, RestError> {
    let tender_id = parse_tender_id(&tender_id)?;
    let version = parse_rollback_version(&version)?;
    let tender = store
        .tender_service
        .rollback_tender(RollbackTenderInput {
            tender_id,
            username: query.username,
            version,
        })
        .await?;
    Ok(Json(tender.into()))
}

pub fn get_routes() -> Router<Arc<Store>> {
    Router::new()
        .route("/new", post(create_tender))
        .route("/", get(get_tenders))
        .route("/my", get(get_user_tenders))
        .route(
            "/:tender_id/status",
            get(get_tender_status).put(update_tender_status),
        )
        .route("/:tender_id/edit", patch(edit_tender))
        .route("/:tender_id/rollback/:version", put(rollback_tender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tender_id_must_be_a_uuid() {
        assert!(parse_tender_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(parse_tender_id("not-a-uuid").is_err());
        assert!(parse_tender_id("").is_err());
    }

    #[test]
    fn test_status_must_be_a_known_value() {
        assert_eq!(
            parse_status(Some("Closed".to_string())).unwrap(),
            TenderStatus::Closed
        );
        assert!(parse_status(Some("Archived".to_string())).is_err());
        assert!(parse_status(Some(String::new())).is_err());
        assert!(parse_status(None).is_err());
    }
}
