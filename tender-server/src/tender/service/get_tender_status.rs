use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            non_empty,
            Username,
        },
        tender::entities,
    },
};

#[derive(Debug, Clone)]
pub struct GetTenderStatusInput {
    pub tender_id: entities::TenderId,
    pub username:  Option<Username>,
}

impl Service {
    /// Without a username the request is anonymous and the owner check is
    /// skipped, so only published tenders are visible.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn get_tender_status(
        &self,
        input: GetTenderStatusInput,
    ) -> Result<entities::TenderStatus, RestError> {
        self.repo
            .get_tender_status(input.tender_id, non_empty(input.username))
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
        uuid::Uuid,
    };

    #[tokio::test]
    async fn test_empty_username_queries_anonymously() {
        let tender_id = Uuid::new_v4();
        let mut db = MockDatabase::default();
        db.expect_get_tender_status()
            .withf(move |id, username| *id == tender_id && username.is_none())
            .returning(|_, _| Ok(entities::TenderStatus::Published));

        let service = Service::new(Repository::new(db));
        let status = service
            .get_tender_status(GetTenderStatusInput {
                tender_id,
                username: Some(String::new()),
            })
            .await
            .unwrap();
        assert_eq!(status, entities::TenderStatus::Published);
    }

    #[tokio::test]
    async fn test_supplied_username_scopes_the_check() {
        let tender_id = Uuid::new_v4();
        let mut db = MockDatabase::default();
        db.expect_get_tender_status()
            .withf(move |id, username| {
                *id == tender_id && username.as_deref() == Some("sysadmin1")
            })
            .returning(|_, _| Ok(entities::TenderStatus::Created));

        let service = Service::new(Repository::new(db));
        let status = service
            .get_tender_status(GetTenderStatusInput {
                tender_id,
                username: Some("sysadmin1".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(status, entities::TenderStatus::Created);
    }
}
