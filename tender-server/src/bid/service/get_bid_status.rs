use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::Username,
    },
};

#[derive(Debug, Clone)]
pub struct GetBidStatusInput {
    pub bid_id:   entities::BidId,
    pub username: Option<Username>,
}

impl Service {
    /// Bids are never public, the owner check always applies.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn get_bid_status(
        &self,
        input: GetBidStatusInput,
    ) -> Result<entities::BidStatus, RestError> {
        self.repo
            .get_bid_status(input.bid_id, input.username.unwrap_or_default())
            .await
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::bid::repository::{
            MockDatabase,
            Repository,
        },
        uuid::Uuid,
    };

    #[tokio::test]
    async fn test_absent_username_misses_the_owner_check() {
        let bid_id = Uuid::new_v4();
        let mut db = MockDatabase::default();
        db.expect_get_bid_status()
            .withf(move |id, username| *id == bid_id && username.is_empty())
            .returning(|_, _| Err(RestError::BidNotFound));

        let service = Service::new(Repository::new(db));
        let result = service
            .get_bid_status(GetBidStatusInput {
                bid_id,
                username: None,
            })
            .await;
        assert_eq!(result.unwrap_err(), RestError::BidNotFound);
    }

    #[tokio::test]
    async fn test_owner_sees_the_status() {
        let bid_id = Uuid::new_v4();
        let mut db = MockDatabase::default();
        db.expect_get_bid_status()
            .withf(move |id, username| *id == bid_id && username == "bidder1")
            .returning(|_, _| Ok(entities::BidStatus::Published));

        let service = Service::new(Repository::new(db));
        let status = service
            .get_bid_status(GetBidStatusInput {
                bid_id,
                username: Some("bidder1".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(status, entities::BidStatus::Published);
    }
}
