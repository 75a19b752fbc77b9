use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::Username,
        tender::entities,
    },
};

#[derive(Debug, Clone)]
pub struct RollbackTenderInput {
    pub tender_id: entities::TenderId,
    pub username:  Option<Username>,
    pub version:   i32,
}

impl Service {
    #[tracing::instrument(
        skip_all,
        fields(tender_id = %input.tender_id, version = input.version),
        err(level = tracing::Level::TRACE)
    )]
    pub async fn rollback_tender(
        &self,
        input: RollbackTenderInput,
    ) -> Result<entities::Tender, RestError> {
        self.repo
            .rollback_tender(
                input.tender_id,
                input.username.unwrap_or_default(),
                input.version,
            )
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
    async fn test_missing_snapshot_passes_through() {
        let tender_id = Uuid::new_v4();
        let mut db = MockDatabase::default();
        db.expect_rollback_tender()
            .withf(move |id, username, version| {
                *id == tender_id && username == "sysadmin1" && *version == 9
            })
            .returning(|_, _, _| Err(RestError::VersionNotFound));

        let service = Service::new(Repository::new(db));
        let result = service
            .rollback_tender(RollbackTenderInput {
                tender_id,
                username: Some("sysadmin1".to_string()),
                version: 9,
            })
            .await;
        assert_eq!(result.unwrap_err(), RestError::VersionNotFound);
    }
}
