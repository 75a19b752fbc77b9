use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::Username,
        tender::entities,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateTenderStatusInput {
    pub tender_id: entities::TenderId,
    pub username:  Option<Username>,
    pub status:    entities::TenderStatus,
}

impl Service {
    /// Any status may replace any other, there is no transition validation.
    #[tracing::instrument(
        skip_all,
        fields(tender_id = %input.tender_id),
        err(level = tracing::Level::TRACE)
    )]
    pub async fn update_tender_status(
        &self,
        input: UpdateTenderStatusInput,
    ) -> Result<entities::Tender, RestError> {
        self.repo
            .update_tender_status(
                input.tender_id,
                input.username.unwrap_or_default(),
                input.status,
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
        time::OffsetDateTime,
        uuid::Uuid,
    };

    fn tender(status: entities::TenderStatus) -> entities::Tender {
        entities::Tender {
            id:               Uuid::new_v4(),
            name:             "Office renovation".to_string(),
            description:      "Fourth floor".to_string(),
            status,
            service_type:     "Construction".to_string(),
            organization_id:  Uuid::new_v4(),
            creator_username: "sysadmin1".to_string(),
            version:          2,
            created_at:       OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn test_every_status_value_is_accepted() {
        for status in [
            entities::TenderStatus::Created,
            entities::TenderStatus::Published,
            entities::TenderStatus::Closed,
        ] {
            let mut db = MockDatabase::default();
            db.expect_update_tender_status()
                .withf(move |_, username, new_status| {
                    username == "sysadmin1" && *new_status == status
                })
                .returning(move |_, _, _| Ok(tender(status)));

            let service = Service::new(Repository::new(db));
            let updated = service
                .update_tender_status(UpdateTenderStatusInput {
                    tender_id: Uuid::new_v4(),
                    username: Some("sysadmin1".to_string()),
                    status,
                })
                .await
                .unwrap();
            assert_eq!(updated.status, status);
        }
    }

    #[tokio::test]
    async fn test_absent_username_turns_into_owner_miss() {
        let mut db = MockDatabase::default();
        db.expect_update_tender_status()
            .withf(|_, username, _| username.is_empty())
            .returning(|_, _, _| Err(RestError::TenderNotFound));

        let service = Service::new(Repository::new(db));
        let result = service
            .update_tender_status(UpdateTenderStatusInput {
                tender_id: Uuid::new_v4(),
                username:  None,
                status:    entities::TenderStatus::Closed,
            })
            .await;
        assert_eq!(result.unwrap_err(), RestError::TenderNotFound);
    }
}
