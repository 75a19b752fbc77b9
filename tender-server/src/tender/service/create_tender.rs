use {
    super::Service,
    crate::{
        api::RestError,
        tender::entities,
    },
};

#[derive(Debug, Clone)]
pub struct CreateTenderInput {
    pub tender: entities::TenderCreate,
}

impl Service {
    /// Creation is the only operation gated on the responsibility relation.
    /// Later mutations check creator identity instead.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn create_tender(
        &self,
        input: CreateTenderInput,
    ) -> Result<entities::Tender, RestError> {
        let responsible = self
            .repo
            .is_user_responsible(
                input.tender.creator_username.clone(),
                input.tender.organization_id,
            )
            .await?;
        if !responsible {
            return Err(RestError::Unauthorized);
        }
        self.repo.add_tender(input.tender).await
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

    fn tender_create() -> entities::TenderCreate {
        entities::TenderCreate {
            name:             "Office renovation".to_string(),
            description:      "Fourth floor".to_string(),
            service_type:     "Construction".to_string(),
            organization_id:  Uuid::new_v4(),
            creator_username: "sysadmin1".to_string(),
        }
    }

    fn created_tender(create: &entities::TenderCreate) -> entities::Tender {
        entities::Tender {
            id:               Uuid::new_v4(),
            name:             create.name.clone(),
            description:      create.description.clone(),
            status:           entities::TenderStatus::Published,
            service_type:     create.service_type.clone(),
            organization_id:  create.organization_id,
            creator_username: create.creator_username.clone(),
            version:          1,
            created_at:       OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn test_create_tender_rejects_unresponsible_user() {
        let mut db = MockDatabase::default();
        db.expect_is_user_responsible().returning(|_, _| Ok(false));
        db.expect_add_tender().never();

        let service = Service::new(Repository::new(db));
        let result = service
            .create_tender(CreateTenderInput {
                tender: tender_create(),
            })
            .await;
        assert_eq!(result.unwrap_err(), RestError::Unauthorized);
    }

    #[tokio::test]
    async fn test_create_tender_checks_the_named_organization() {
        let create = tender_create();
        let expected_username = create.creator_username.clone();
        let expected_organization = create.organization_id;

        let mut db = MockDatabase::default();
        db.expect_is_user_responsible()
            .withf(move |username, organization_id| {
                *username == expected_username && *organization_id == expected_organization
            })
            .returning(|_, _| Ok(true));
        let response = created_tender(&create);
        db.expect_add_tender()
            .returning(move |_| Ok(response.clone()));

        let service = Service::new(Repository::new(db));
        let tender = service
            .create_tender(CreateTenderInput { tender: create })
            .await
            .unwrap();
        assert_eq!(tender.version, 1);
        assert_eq!(tender.status, entities::TenderStatus::Published);
    }
}
