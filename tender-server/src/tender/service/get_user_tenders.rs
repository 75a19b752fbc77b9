use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            PageParams,
            Username,
        },
        tender::entities,
    },
};

#[derive(Debug, Clone)]
pub struct GetUserTendersInput {
    pub username: Option<Username>,
    pub limit:    Option<String>,
    pub offset:   Option<String>,
}

impl Service {
    /// An absent username matches no creator, so the listing comes back empty
    /// rather than failing.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn get_user_tenders(
        &self,
        input: GetUserTendersInput,
    ) -> Result<Vec<entities::Tender>, RestError> {
        let page = PageParams::clamped(input.limit, input.offset);
        self.repo
            .get_user_tenders(input.username.unwrap_or_default(), page)
            .await
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::tender::repository::{
            MockDatabase,
            Repository,
        },
    };

    #[tokio::test]
    async fn test_absent_username_lists_nothing() {
        let mut db = MockDatabase::default();
        db.expect_get_user_tenders()
            .withf(|username, page| username.is_empty() && *page == PageParams::default())
            .returning(|_, _| Ok(vec![]));

        let service = Service::new(Repository::new(db));
        let tenders = service
            .get_user_tenders(GetUserTendersInput {
                username: None,
                limit:    None,
                offset:   None,
            })
            .await
            .unwrap();
        assert!(tenders.is_empty());
    }
}
