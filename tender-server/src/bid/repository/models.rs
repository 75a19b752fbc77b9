#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        bid::entities,
        kernel::{
            db::DB,
            entities::{
                PageParams,
                Username,
            },
        },
        tender::entities::TenderId,
    },
    axum::async_trait,
    sqlx::prelude::FromRow,
    time::OffsetDateTime,
    tracing::instrument,
    uuid::Uuid,
};

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "bid_status")]
pub enum BidStatus {
    Created,
    Published,
    Canceled,
    Approved,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "bid_author_type")]
pub enum BidAuthorType {
    Organization,
    User,
}

#[derive(Clone, Debug, FromRow)]
pub struct Bid {
    pub id:          Uuid,
    pub name:        String,
    pub description: String,
    pub status:      BidStatus,
    pub tender_id:   Uuid,
    pub author_type: BidAuthorType,
    pub author_id:   Uuid,
    pub version:     i32,
    pub created_at:  OffsetDateTime,
}

#[derive(Clone, Debug, FromRow)]
struct BidSnapshot {
    pub name:        String,
    pub description: String,
}

impl From<BidStatus> for entities::BidStatus {
    fn from(status: BidStatus) -> Self {
        match status {
            BidStatus::Created => entities::BidStatus::Created,
            BidStatus::Published => entities::BidStatus::Published,
            BidStatus::Canceled => entities::BidStatus::Canceled,
            BidStatus::Approved => entities::BidStatus::Approved,
            BidStatus::Rejected => entities::BidStatus::Rejected,
        }
    }
}

impl From<entities::BidStatus> for BidStatus {
    fn from(status: entities::BidStatus) -> Self {
        match status {
            entities::BidStatus::Created => BidStatus::Created,
            entities::BidStatus::Published => BidStatus::Published,
            entities::BidStatus::Canceled => BidStatus::Canceled,
            entities::BidStatus::Approved => BidStatus::Approved,
            entities::BidStatus::Rejected => BidStatus::Rejected,
        }
    }
}

impl From<BidAuthorType> for entities::BidAuthorType {
    fn from(author_type: BidAuthorType) -> Self {
        match author_type {
            BidAuthorType::Organization => entities::BidAuthorType::Organization,
            BidAuthorType::User => entities::BidAuthorType::User,
        }
    }
}

impl From<entities::BidAuthorType> for BidAuthorType {
    fn from(author_type: entities::BidAuthorType) -> Self {
        match author_type {
            entities::BidAuthorType::Organization => BidAuthorType::Organization,
            entities::BidAuthorType::User => BidAuthorType::User,
        }
    }
}

impl From<Bid> for entities::Bid {
    fn from(bid: Bid) -> Self {
        Self {
            id:          bid.id,
            name:        bid.name,
            description: bid.description,
            status:      bid.status.into(),
            tender_id:   bid.tender_id,
            author_type: bid.author_type.into(),
            author_id:   bid.author_id,
            version:     bid.version,
            created_at:  bid.created_at,
        }
    }
}

const BID_COLUMNS: &str =
    "id, name, description, status, tender_id, author_type, author_id, version, created_at";

// Every mutation records the editable fields of the new version in the same
// transaction, so any version number can later be rolled back to.
async fn add_bid_snapshot(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    bid: &Bid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO bid_version (bid_id, version, name, description)
        VALUES ($1, $2, $3, $4)",
    )
    .bind(bid.id)
    .bind(bid.version)
    .bind(&bid.name)
    .bind(&bid.description)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Send + Sync + 'static {
    async fn is_author_responsible(
        &self,
        author_id: entities::AuthorId,
    ) -> Result<bool, RestError>;
    async fn add_bid(&self, bid: entities::BidCreate) -> Result<entities::Bid, RestError>;
    async fn get_user_bids(
        &self,
        username: Username,
        page: PageParams,
    ) -> Result<Vec<entities::Bid>, RestError>;
    async fn get_bids_for_tender(
        &self,
        tender_id: TenderId,
        username: Username,
        page: PageParams,
    ) -> Result<Vec<entities::Bid>, RestError>;
    async fn get_bid_status(
        &self,
        bid_id: entities::BidId,
        username: Username,
    ) -> Result<entities::BidStatus, RestError>;
    async fn update_bid_status(
        &self,
        bid_id: entities::BidId,
        username: Username,
        status: entities::BidStatus,
    ) -> Result<entities::Bid, RestError>;
    async fn edit_bid(
        &self,
        bid_id: entities::BidId,
        username: Username,
        changes: entities::BidEdit,
    ) -> Result<entities::Bid, RestError>;
    async fn rollback_bid(
        &self,
        bid_id: entities::BidId,
        username: Username,
        version: i32,
    ) -> Result<entities::Bid, RestError>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        target = "metrics",
        name = "db_is_author_responsible",
        fields(
            category = "db_queries",
            result = "success",
            name = "is_author_responsible",
            tracing_enabled
        ),
        skip_all
    )]
    async fn is_author_responsible(
        &self,
        author_id: entities::AuthorId,
    ) -> Result<bool, RestError> {
        // The author only has to be responsible for some organization, not a
        // particular one. Tender creation is the stricter gate.
        sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1
                FROM organization_responsible
                WHERE user_id = $1
            )",
        )
        .bind(author_id)
        .fetch_one(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(
                "DB: Failed to check author responsibility for {}: {}",
                author_id,
                e
            );
            RestError::TemporarilyUnavailable
        })
    }

    #[instrument(
        target = "metrics",
        name = "db_add_bid",
        fields(category = "db_queries", result = "success", name = "add_bid", tracing_enabled),
        skip_all
    )]
    async fn add_bid(&self, bid: entities::BidCreate) -> Result<entities::Bid, RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to start bid insert transaction: {}", e);
            RestError::TemporarilyUnavailable
        })?;
        let created: Bid = sqlx::query_as(&format!(
            "INSERT INTO bid (name, description, tender_id, author_type, author_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}",
            BID_COLUMNS
        ))
        .bind(&bid.name)
        .bind(&bid.description)
        .bind(bid.tender_id)
        .bind(BidAuthorType::from(bid.author_type))
        .bind(bid.author_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to insert bid: {}", e);
            RestError::TemporarilyUnavailable
        })?;
        add_bid_snapshot(&mut tx, &created).await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to insert bid snapshot {}: {}", created.id, e);
            RestError::TemporarilyUnavailable
        })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to commit bid insert {}: {}", created.id, e);
            RestError::TemporarilyUnavailable
        })?;
        Ok(created.into())
    }

    #[instrument(
        target = "metrics",
        name = "db_get_user_bids",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_user_bids",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_user_bids(
        &self,
        username: Username,
        page: PageParams,
    ) -> Result<Vec<entities::Bid>, RestError> {
        let bids: Vec<Bid> = sqlx::query_as(&format!(
            "SELECT {} FROM bid
            WHERE author_id = (SELECT id FROM employee WHERE username = $1)
            ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            BID_COLUMNS
        ))
        .bind(&username)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to fetch bids of {}: {}", username, e);
            RestError::TemporarilyUnavailable
        })?;
        Ok(bids.into_iter().map(Into::into).collect())
    }

    #[instrument(
        target = "metrics",
        name = "db_get_bids_for_tender",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_bids_for_tender",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_bids_for_tender(
        &self,
        tender_id: TenderId,
        username: Username,
        page: PageParams,
    ) -> Result<Vec<entities::Bid>, RestError> {
        let bids: Vec<Bid> = sqlx::query_as(&format!(
            "SELECT {} FROM bid
            WHERE tender_id = $1
            AND author_id = (SELECT id FROM employee WHERE username = $2)
            ORDER BY created_at DESC LIMIT $3 OFFSET $4",
            BID_COLUMNS
        ))
        .bind(tender_id)
        .bind(&username)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(
                "DB: Failed to fetch bids of {} for tender {}: {}",
                username,
                tender_id,
                e
            );
            RestError::TemporarilyUnavailable
        })?;
        Ok(bids.into_iter().map(Into::into).collect())
    }

    #[instrument(
        target = "metrics",
        name = "db_get_bid_status",
        fields(
            category = "db_queries",
            result = "success",
            name = "get_bid_status",
            tracing_enabled
        ),
        skip_all
    )]
    async fn get_bid_status(
        &self,
        bid_id: entities::BidId,
        username: Username,
    ) -> Result<entities::BidStatus, RestError> {
        let status: BidStatus = sqlx::query_scalar(
            "SELECT status FROM bid
            WHERE id = $1 AND author_id = (SELECT id FROM employee WHERE username = $2)",
        )
        .bind(bid_id)
        .bind(username)
        .fetch_one(self)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::BidNotFound,
            _ => {
                tracing::Span::current().record("result", "error");
                tracing::error!("DB: Failed to fetch status of bid {}: {}", bid_id, e);
                RestError::TemporarilyUnavailable
            }
        })?;
        Ok(status.into())
    }

    #[instrument(
        target = "metrics",
        name = "db_update_bid_status",
        fields(
            category = "db_queries",
            result = "success",
            name = "update_bid_status",
            tracing_enabled
        ),
        skip_all
    )]
    async fn update_bid_status(
        &self,
        bid_id: entities::BidId,
        username: Username,
        status: entities::BidStatus,
    ) -> Result<entities::Bid, RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to start bid status transaction: {}", e);
            RestError::TemporarilyUnavailable
        })?;
        let updated: Bid = sqlx::query_as(&format!(
            "UPDATE bid
            SET status = $1, version = version + 1
            WHERE id = $2 AND author_id = (SELECT id FROM employee WHERE username = $3)
            RETURNING {}",
            BID_COLUMNS
        ))
        .bind(BidStatus::from(status))
        .bind(bid_id)
        .bind(&username)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::BidNotFound,
            _ => {
                tracing::Span::current().record("result", "error");
                tracing::error!("DB: Failed to update status of bid {}: {}", bid_id, e);
                RestError::TemporarilyUnavailable
            }
        })?;
        add_bid_snapshot(&mut tx, &updated).await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to insert bid snapshot {}: {}", bid_id, e);
            RestError::TemporarilyUnavailable
        })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to commit bid status update {}: {}", bid_id, e);
            RestError::TemporarilyUnavailable
        })?;
        Ok(updated.into())
    }

    #[instrument(
        target = "metrics",
        name = "db_edit_bid",
        fields(category = "db_queries", result = "success", name = "edit_bid", tracing_enabled),
        skip_all
    )]
    async fn edit_bid(
        &self,
        bid_id: entities::BidId,
        username: Username,
        changes: entities::BidEdit,
    ) -> Result<entities::Bid, RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to start bid edit transaction: {}", e);
            RestError::TemporarilyUnavailable
        })?;
        // The version moves forward even when every field is left unchanged.
        let updated: Bid = sqlx::query_as(&format!(
            "UPDATE bid
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                version = version + 1
            WHERE id = $3 AND author_id = (SELECT id FROM employee WHERE username = $4)
            RETURNING {}",
            BID_COLUMNS
        ))
        .bind(changes.name)
        .bind(changes.description)
        .bind(bid_id)
        .bind(&username)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::BidNotFound,
            _ => {
                tracing::Span::current().record("result", "error");
                tracing::error!("DB: Failed to edit bid {}: {}", bid_id, e);
                RestError::TemporarilyUnavailable
            }
        })?;
        add_bid_snapshot(&mut tx, &updated).await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to insert bid snapshot {}: {}", bid_id, e);
            RestError::TemporarilyUnavailable
        })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to commit bid edit {}: {}", bid_id, e);
            RestError::TemporarilyUnavailable
        })?;
        Ok(updated.into())
    }

    #[instrument(
        target = "metrics",
        name = "db_rollback_bid",
        fields(
            category = "db_queries",
            result = "success",
            name = "rollback_bid",
            tracing_enabled
        ),
        skip_all
    )]
    async fn rollback_bid(
        &self,
        bid_id: entities::BidId,
        username: Username,
        version: i32,
    ) -> Result<entities::Bid, RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to start bid rollback transaction: {}", e);
            RestError::TemporarilyUnavailable
        })?;
        // Ownership is checked before the snapshot lookup so a foreign bid
        // reports not-found rather than leaking which versions exist.
        sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM bid
            WHERE id = $1 AND author_id = (SELECT id FROM employee WHERE username = $2)
            FOR UPDATE",
        )
        .bind(bid_id)
        .bind(&username)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::BidNotFound,
            _ => {
                tracing::Span::current().record("result", "error");
                tracing::error!("DB: Failed to lock bid {} for rollback: {}", bid_id, e);
                RestError::TemporarilyUnavailable
            }
        })?;
        let snapshot: BidSnapshot = sqlx::query_as(
            "SELECT name, description FROM bid_version
            WHERE bid_id = $1 AND version = $2",
        )
        .bind(bid_id)
        .bind(version)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RestError::VersionNotFound,
            _ => {
                tracing::Span::current().record("result", "error");
                tracing::error!(
                    "DB: Failed to fetch snapshot {} of bid {}: {}",
                    version,
                    bid_id,
                    e
                );
                RestError::TemporarilyUnavailable
            }
        })?;
        let updated: Bid = sqlx::query_as(&format!(
            "UPDATE bid
            SET name = $1, description = $2, version = version + 1
            WHERE id = $3
            RETURNING {}",
            BID_COLUMNS
        ))
        .bind(&snapshot.name)
        .bind(&snapshot.description)
        .bind(bid_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to roll back bid {}: {}", bid_id, e);
            RestError::TemporarilyUnavailable
        })?;
        add_bid_snapshot(&mut tx, &updated).await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to insert bid snapshot {}: {}", bid_id, e);
            RestError::TemporarilyUnavailable
        })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to commit bid rollback {}: {}", bid_id, e);
            RestError::TemporarilyUnavailable
        })?;
        Ok(updated.into())
    }
}
