use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::{
            non_empty,
            Username,
        },
    },
};

#[derive(Debug, Clone)]
pub struct EditBidInput {
    pub bid_id:   entities::BidId,
    pub username: Option<Username>,
    pub changes:  entities::BidEdit,
}

impl Service {
    /// Empty strings collapse to "keep the stored value" before the update,
    /// matching the wire convention. Clearing a field is not possible.
    #[tracing::instrument(
        skip_all,
        fields(bid_id = %input.bid_id),
        err(level = tracing::Level::TRACE)
    )]
    pub async fn edit_bid(&self, input: EditBidInput) -> Result<entities::Bid, RestError> {
        let changes = entities::BidEdit {
            name:        non_empty(input.changes.name),
            description: non_empty(input.changes.description),
        };
        self.repo
            .edit_bid(input.bid_id, input.username.unwrap_or_default(), changes)
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
        time::OffsetDateTime,
        uuid::Uuid,
    };

    fn edited_bid(bid_id: entities::BidId) -> entities::Bid {
        entities::Bid {
            id:          bid_id,
            name:        "Delivery operations".to_string(),
            description: "Updated logistics scope".to_string(),
            status:      entities::BidStatus::Created,
            tender_id:   Uuid::new_v4(),
            author_type: entities::BidAuthorType::User,
            author_id:   Uuid::new_v4(),
            version:     2,
            created_at:  OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn test_empty_fields_keep_the_stored_value() {
        let bid_id = Uuid::new_v4();
        let mut db = MockDatabase::default();
        db.expect_edit_bid()
            .withf(move |id, username, changes| {
                *id == bid_id
                    && username == "bidder1"
                    && *changes
                        == entities::BidEdit {
                            name:        None,
                            description: Some("Updated logistics scope".to_string()),
                        }
            })
            .returning(move |id, _, _| Ok(edited_bid(id)));

        let service = Service::new(Repository::new(db));
        let bid = service
            .edit_bid(EditBidInput {
                bid_id,
                username: Some("bidder1".to_string()),
                changes: entities::BidEdit {
                    name:        Some(String::new()),
                    description: Some("Updated logistics scope".to_string()),
                },
            })
            .await
            .unwrap();
        assert_eq!(bid.version, 2);
    }
}
