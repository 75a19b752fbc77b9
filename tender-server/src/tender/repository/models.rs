#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        kernel::{
            db::DB,
            entities::{
                PageParams,
                Username,
            },
        },
        tender::entities,
    },
    axum::async_trait,
    sqlx::{
        prelude::FromRow,
        QueryBuilder,
    },
    time::OffsetDateTime,
    tracing::instrument,
    uuid::Uuid,
};

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "tender_status")]
pub enum TenderStatus {
    Created,
    Published,
    Closed,
}

#[derive(Clone, Debug, FromRow)]
pub struct Tender {
    pub id:               Uuid,
    pub name:             String,
    pub description:      String,
    pub status:           TenderStatus,
    pub service_type:     String,
    pub organization_id:  Uuid,
    pub creator_username: String,
    pub version:          i32,
    pub created_at:       OffsetDateTime,
}

#[derive(Clone, Debug, FromRow)]
struct TenderSnapshot {
    pub name:         String,
    pub description:  String,
    pub service_type: String,
}

impl From<TenderStatus> for entities::TenderStatus {
    fn from(status: TenderStatus) -> Self {
        match status {
            TenderStatus::Created => entities::TenderStatus::Created,
            TenderStatus::Published => entities::TenderStatus::Published,
            TenderStatus::Closed => entities::TenderStatus::Closed,
        }
    }
}

impl From<entities::TenderStatus> for TenderStatus {
    fn from(status: entities::TenderStatus) -> Self {
        match status {
            entities::TenderStatus::Created => TenderStatus::Created,
            entities::TenderStatus::Published => TenderStatus::Published,
            entities::TenderStatus::Closed => TenderStatus::Closed,
        }
    }
}

impl From<Tender> for entities::Tender {
    fn from(tender: Tender) -> Self {
        Self {
            id:               tender.id,
            name:             tender.name,
            description:      tender.description,
            status:           tender.status.into(),
            service_type:     tender.service_type,
            organization_id:  tender.organization_id,
            creator_username: tender.creator_username,
            version:          tender.version,
            created_at:       tender.created_at,
        }
    }
}

const TENDER_COLUMNS: &str =
    "id, name, description, status, service_type, organization_id, creator_username, version, created_at";

// Every mutation records the editable fields of the new version in the same
// transaction, so any version number can later be rolled back to.
async fn add_tender_snapshot(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    tender: &Tender,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO tender_version (tender_id, version, name, description, service_type)
        VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(tender.id)
    .bind(tender.version)
    .bind(&tender.name)
    .bind(&tender.description)
    .bind(&tender.service_type)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Send + Sync + 'static {
    async fn is_user_responsible(
        &self,
        username: Username,
        organization_id: entities::OrganizationId,
    ) -> Result<bool, RestError>;
    async fn add_tender(
        &self,
        tender: entities::TenderCreate,
    ) -> Result<entities::Tender, RestError>;
    async fn get_tenders(
        &self,
        service_types: Vec<String>,
        page: PageParams,
    ) -> Result<Vec<entities::Tender>, RestError>;
    async fn get_user_tenders(
        &self,
        username: Username,
        page: PageParams,
    ) -> Result<Vec<entities::Tender>, RestError>;
    async fn get_tender_status(
        &self,
        tender_id: entities::TenderId,
        username: Option<Username>,
    ) -> Result<entities::TenderStatus, RestError>;
    async fn update_tender_status(
        &self,
        tender_id: entities::TenderId,
        username: Username,
        status: entities::TenderStatus,
    ) -> Result<entities::Tender, RestError>;
    async fn edit_tender(
        &self,
        tender_id: entities::TenderId,
        username: Username,
        changes: entities::TenderEdit,
    ) -> Result<entities::Tender, RestError>;
    async fn rollback_tender(
        &self,
        tender_id: entities::TenderId,
        username: Username,
        version: i32,
    ) -> Result<entities::Tender, RestError>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        target = "metrics",
        name = "db_is_user_responsible",
        fields(
            category = "db_queries",
            result = "success",
            name = "is_user_responsible",
            tracing_enabled
        ),
        skip_all
    )]
    async fn is_user_responsible(
        &self,
        username: Username,
        organization_id: entities::OrganizationId,
    ) -> Result<bool, RestError> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1
                FROM organization_responsible
                WHERE organization_id = $1
                AND user_id = (SELECT id FROM employee WHERE username = $2)
            )",
        )
        .bind(organization_id)
        .bind(&username)
        .fetch_one(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(
                "DB: Failed to check organization responsibility for {}: {}",
                username,
                e
            );
            RestError::TemporarilyUnavailable
        })
    }

    #[instrument(
        target = "metrics",
        name = "db_add_tender",
        fields(
            category = "db_queries",
            result = "success",
            name = "add_tender",
            tracing_enabled
        ),
        skip_all
    )]
    async fn add_tender(
        &self,
        tender: entities::TenderCreate,
    ) -> Result<entities::Tender, RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to start tender insert transaction: {}", e);
            RestError::TemporarilyUnavailable
        })?;
        let created: Tender = sqlx::query_as(&format!(
            "INSERT INTO tender (name, description, service_type, organization_id, creator_username)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}",
            TENDER_COLUMNS
        ))
        .bind(&tender.name)
        .bind(&tender.description)
        .bind(&tender.service_type)
        .bind(tender.organization_id)
        .bind(&tender.creator_username)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to insert tender: {}", e);
            RestError::TemporarilyUnavailable
        })?;
        add_tender_snapshot(&mut tx, &created).await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to insert tender snapshot {}: {}", created.id, e);
            RestError::TemporarilyUnavailable
        })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to commit tender insert {}: {}", created.id, e);
            RestError::TemporarilyUnavailable
        })?;
        Ok(created.into())
    }

    #[instrument(
        target = "metrics",
        name = "db_get_tenders",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_tenders",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_tenders(
        &self,
        service_types: Vec<String>,
        page: PageParams,
    ) -> Result<Vec<entities::Tender>, RestError> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {} FROM tender WHERE status = ",
            TENDER_COLUMNS
        ));
        query.push_bind(TenderStatus::Published);
        if !service_types.is_empty() {
            query.push(" AND service_type = ANY(");
            query.push_bind(service_types);
            query.push(")");
        }
        query.push(" ORDER BY name ASC LIMIT ");
        query.push_bind(page.limit);
        query.push(" OFFSET ");
        query.push_bind(page.offset);
        let tenders: Vec<Tender> =
            query.build_query_as().fetch_all(self).await.map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!("DB: Failed to fetch published tenders: {}", e);
                RestError::TemporarilyUnavailable
            })?;
        Ok(tenders.into_iter().map(Into::into).collect())
    }

    #[instrument(
        target = "metrics",
        name = "db_get_user_tenders",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_user_tenders",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_user_tenders(
        &self,
        username: Username,
        page: PageParams,
    ) -> Result<Vec<entities::Tender>, RestError> {
        let tenders: Vec<Tender> = sqlx::query_as(&format!(
            "SELECT {} FROM tender
            WHERE creator_username = $1
            ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            TENDER_COLUMNS
        ))
        .bind(&username)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to fetch tenders of {}: {}", username, e);
            RestError::TemporarilyUnavailable
        })?;
        Ok(tenders.into_iter().map(Into::into).collect())
    }

    #[instrument(
        target = "metrics",
        name = "db_get_tender_status",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_tender_status",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_tender_status(
        &self,
        tender_id: entities::TenderId,
        username: Option<Username>,
    ) -> Result<entities::TenderStatus, RestError> {
        let status: TenderStatus = match username {
            Some(username) => {
                sqlx::query_scalar(
                    "SELECT status FROM tender WHERE id = $1 AND creator_username = $2",
                )
                .bind(tender_id)
                .bind(username)
                .fetch_one(self)
                .await
            }
            None => {
                sqlx::query_scalar("SELECT status FROM tender WHERE id = $1")
                    .bind(tender_id)
                    .fetch_one(self)
                    .await
            }
        }
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::TenderNotFound,
            _ => {
                tracing::Span::current().record("result", "error");
                tracing::error!("DB: Failed to fetch status of tender {}: {}", tender_id, e);
                RestError::TemporarilyUnavailable
            }
        })?;
        Ok(status.into())
    }

    #[instrument(
        target = "metrics",
        name = "db_update_tender_status",
        fields(
            category = "db_queries",
            result = "success",
            name = "update_tender_status",
            tracing_enabled
        ),
        skip_all
    )]
    async fn update_tender_status(
        &self,
        tender_id: entities::TenderId,
        username: Username,
        status: entities::TenderStatus,
    ) -> Result<entities::Tender, RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to start tender status transaction: {}", e);
            RestError::TemporarilyUnavailable
        })?;
        let updated: Tender = sqlx::query_as(&format!(
            "UPDATE tender
            SET status = $1, version = version + 1
            WHERE id = $2 AND creator_username = $3
            RETURNING {}",
            TENDER_COLUMNS
        ))
        .bind(TenderStatus::from(status))
        .bind(tender_id)
        .bind(&username)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::TenderNotFound,
            _ => {
                tracing::Span::current().record("result", "error");
                tracing::error!("DB: Failed to update status of tender {}: {}", tender_id, e);
                RestError::TemporarilyUnavailable
            }
        })?;
        add_tender_snapshot(&mut tx, &updated).await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to insert tender snapshot {}: {}", tender_id, e);
            RestError::TemporarilyUnavailable
        })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to commit tender status update {}: {}", tender_id, e);
            RestError::TemporarilyUnavailable
        })?;
        Ok(updated.into())
    }

    #[instrument(
        target = "metrics",
        name = "db_edit_tender",
        fields(
            category = "db_queries",
            result = "success",
            name = "edit_tender",
            tracing_enabled
        ),
        skip_all
    )]
    async fn edit_tender(
        &self,
        tender_id: entities::TenderId,
        username: Username,
        changes: entities::TenderEdit,
    ) -> Result<entities::Tender, RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to start tender edit transaction: {}", e);
            RestError::TemporarilyUnavailable
        })?;
        // The version moves forward even when every field is left unchanged.
        let updated: Tender = sqlx::query_as(&format!(
            "UPDATE tender
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                service_type = COALESCE($3, service_type),
                version = version + 1
            WHERE id = $4 AND creator_username = $5
            RETURNING {}",
            TENDER_COLUMNS
        ))
        .bind(changes.name)
        .bind(changes.description)
        .bind(changes.service_type)
        .bind(tender_id)
        .bind(&username)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::TenderNotFound,
            _ => {
                tracing::Span::current().record("result", "error");
                tracing::error!("DB: Failed to edit tender {}: {}", tender_id, e);
                RestError::TemporarilyUnavailable
            }
        })?;
        add_tender_snapshot(&mut tx, &updated).await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to insert tender snapshot {}: {}", tender_id, e);
            RestError::TemporarilyUnavailable
        })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to commit tender edit {}: {}", tender_id, e);
            RestError::TemporarilyUnavailable
        })?;
        Ok(updated.into())
    }

    #[instrument(
        target = "metrics",
        name = "db_rollback_tender",
        fields(
            category = "db_queries",
            result = "success",
            name = "rollback_tender",
            tracing_enabled
        ),
        skip_all
    )]
    async fn rollback_tender(
        &self,
        tender_id: entities::TenderId,
        username: Username,
        version: i32,
    ) -> Result<entities::Tender, RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to start tender rollback transaction: {}", e);
            RestError::TemporarilyUnavailable
        })?;
        // Ownership is checked before the snapshot lookup so a foreign tender
        // reports not-found rather than leaking which versions exist.
        sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM tender WHERE id = $1 AND creator_username = $2 FOR UPDATE",
        )
        .bind(tender_id)
        .bind(&username)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::TenderNotFound,
            _ => {
                tracing::Span::current().record("result", "error");
                tracing::error!("DB: Failed to lock tender {} for rollback: {}", tender_id, e);
                RestError::TemporarilyUnavailable
            }
        })?;
        let snapshot: TenderSnapshot = sqlx::query_as(
            "SELECT name, description, service_type FROM tender_version
            WHERE tender_id = $1 AND version = $2",
        )
        .bind(tender_id)
        .bind(version)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::VersionNotFound,
            _ => {
                tracing::Span::current().record("result", "error");
                tracing::error!(
                    "DB: Failed to fetch snapshot {} of tender {}: {}",
                    version,
                    tender_id,
                    e
                );
                RestError::TemporarilyUnavailable
            }
        })?;
        let updated: Tender = sqlx::query_as(&format!(
            "UPDATE tender
            SET name = $1, description = $2, service_type = $3, version = version + 1
            WHERE id = $4
            RETURNING {}",
            TENDER_COLUMNS
        ))
        .bind(&snapshot.name)
        .bind(&snapshot.description)
        .bind(&snapshot.service_type)
        .bind(tender_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to roll back tender {}: {}", tender_id, e);
            RestError::TemporarilyUnavailable
        })?;
        add_tender_snapshot(&mut tx, &updated).await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to insert tender snapshot {}: {}", tender_id, e);
            RestError::TemporarilyUnavailable
        })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to commit tender rollback {}: {}", tender_id, e);
            RestError::TemporarilyUnavailable
        })?;
        Ok(updated.into())
    }
}
