use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
    },
};

#[derive(Debug, Clone)]
pub struct CreateBidInput {
    pub bid: entities::BidCreate,
}

impl Service {
    /// Unlike tender creation, the author only has to be responsible for some
    /// organization, not the one behind the tender.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn create_bid(&self, input: CreateBidInput) -> Result<entities::Bid, RestError> {
        let responsible = self
            .repo
            .is_author_responsible(input.bid.author_id)
            .await?;
        if !responsible {
            return Err(RestError::Unauthorized);
        }
        self.repo.add_bid(input.bid).await
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
        time::OffsetDateTime,
        uuid::Uuid,
    };

    fn bid_create() -> entities::BidCreate {
        entities::BidCreate {
            name:        "Delivery operations".to_string(),
            description: "Full logistics support".to_string(),
            tender_id:   Uuid::new_v4(),
            author_type: entities::BidAuthorType::User,
            author_id:   Uuid::new_v4(),
        }
    }

    fn created_bid(create: &entities::BidCreate) -> entities::Bid {
        entities::Bid {
            id:          Uuid::new_v4(),
            name:        create.name.clone(),
            description: create.description.clone(),
            status:      entities::BidStatus::Created,
            tender_id:   create.tender_id,
            author_type: create.author_type,
            author_id:   create.author_id,
            version:     1,
            created_at:  OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn test_create_bid_rejects_unresponsible_author() {
        let mut db = MockDatabase::default();
        db.expect_is_author_responsible().returning(|_| Ok(false));
        db.expect_add_bid().never();

        let service = Service::new(Repository::new(db));
        let result = service
            .create_bid(CreateBidInput { bid: bid_create() })
            .await;
        assert_eq!(result.unwrap_err(), RestError::Unauthorized);
    }

    #[tokio::test]
    async fn test_create_bid_starts_in_created_state() {
        let create = bid_create();
        let expected_author = create.author_id;

        let mut db = MockDatabase::default();
        db.expect_is_author_responsible()
            .withf(move |author_id| *author_id == expected_author)
            .returning(|_| Ok(true));
        let response = created_bid(&create);
        db.expect_add_bid().returning(move |_| Ok(response.clone()));

        let service = Service::new(Repository::new(db));
        let bid = service
            .create_bid(CreateBidInput { bid: create })
            .await
            .unwrap();
        assert_eq!(bid.version, 1);
        assert_eq!(bid.status, entities::BidStatus::Created);
    }
}
