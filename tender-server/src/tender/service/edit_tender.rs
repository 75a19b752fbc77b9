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
pub struct EditTenderInput {
    pub tender_id: entities::TenderId,
    pub username:  Option<Username>,
    pub changes:   entities::TenderEdit,
}

impl Service {
    /// Empty strings collapse to "keep the stored value" before the update,
    /// matching the wire convention. Clearing a field is not possible.
    #[tracing::instrument(
        skip_all,
        fields(tender_id = %input.tender_id),
        err(level = tracing::Level::TRACE)
    )]
    pub async fn edit_tender(
        &self,
        input: EditTenderInput,
    ) -> Result<entities::Tender, RestError> {
        let changes = entities::TenderEdit {
            name:         non_empty(input.changes.name),
            description:  non_empty(input.changes.description),
            service_type: non_empty(input.changes.service_type),
        };
        self.repo
            .edit_tender(input.tender_id, input.username.unwrap_or_default(), changes)
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

    fn edited_tender(tender_id: entities::TenderId) -> entities::Tender {
        entities::Tender {
            id:               tender_id,
            name:             "New name".to_string(),
            description:      "Fourth floor".to_string(),
            status:           entities::TenderStatus::Published,
            service_type:     "Construction".to_string(),
            organization_id:  Uuid::new_v4(),
            creator_username: "sysadmin1".to_string(),
            version:          2,
            created_at:       OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn test_empty_fields_keep_the_stored_value() {
        let tender_id = Uuid::new_v4();
        let mut db = MockDatabase::default();
        db.expect_edit_tender()
            .withf(move |id, username, changes| {
                *id == tender_id
                    && username == "sysadmin1"
                    && *changes
                        == entities::TenderEdit {
                            name:         Some("New name".to_string()),
                            description:  None,
                            service_type: None,
                        }
            })
            .returning(move |id, _, _| Ok(edited_tender(id)));

        let service = Service::new(Repository::new(db));
        let tender = service
            .edit_tender(EditTenderInput {
                tender_id,
                username: Some("sysadmin1".to_string()),
                changes: entities::TenderEdit {
                    name:         Some("New name".to_string()),
                    description:  Some(String::new()),
                    service_type: None,
                },
            })
            .await
            .unwrap();
        assert_eq!(tender.version, 2);
    }

    #[tokio::test]
    async fn test_owner_mismatch_passes_through_as_not_found() {
        let mut db = MockDatabase::default();
        db.expect_edit_tender()
            .returning(|_, _, _| Err(RestError::TenderNotFound));

        let service = Service::new(Repository::new(db));
        let result = service
            .edit_tender(EditTenderInput {
                tender_id: Uuid::new_v4(),
                username:  Some("intruder".to_string()),
                changes:   entities::TenderEdit::default(),
            })
            .await;
        assert_eq!(result.unwrap_err(), RestError::TenderNotFound);
    }
}
