use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::{
            PageParams,
            Username,
        },
    },
};

#[derive(Debug, Clone)]
pub struct GetUserBidsInput {
    pub username: Option<Username>,
    pub limit:    Option<String>,
    pub offset:   Option<String>,
}

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn get_user_bids(
        &self,
        input: GetUserBidsInput,
    ) -> Result<Vec<entities::Bid>, RestError> {
        let page = PageParams::clamped(input.limit, input.offset);
        self.repo
            .get_user_bids(input.username.unwrap_or_default(), page)
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
    };

    #[tokio::test]
    async fn test_get_user_bids_clamps_pagination() {
        let mut db = MockDatabase::default();
        db.expect_get_user_bids()
            .withf(|username, page| {
                username == "bidder1"
                    && *page
                        == PageParams {
                            limit:  5,
                            offset: 0,
                        }
            })
            .returning(|_, _| Ok(vec![]));

        let service = Service::new(Repository::new(db));
        let bids = service
            .get_user_bids(GetUserBidsInput {
                username: Some("bidder1".to_string()),
                limit:    Some("0".to_string()),
                offset:   Some("oops".to_string()),
            })
            .await
            .unwrap();
        assert!(bids.is_empty());
    }
}
