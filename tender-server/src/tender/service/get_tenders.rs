use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::PageParams,
        tender::entities,
    },
};

#[derive(Debug, Clone)]
pub struct GetTendersInput {
    pub service_types: Vec<String>,
    pub limit:         Option<String>,
    pub offset:        Option<String>,
}

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn get_tenders(
        &self,
        input: GetTendersInput,
    ) -> Result<Vec<entities::Tender>, RestError> {
        let page = PageParams::clamped(input.limit, input.offset);
        self.repo.get_tenders(input.service_types, page).await
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
    async fn test_get_tenders_clamps_pagination() {
        let mut db = MockDatabase::default();
        db.expect_get_tenders()
            .withf(|_, page| {
                *page
                    == PageParams {
                        limit:  50,
                        offset: 0,
                    }
            })
            .returning(|_, _| Ok(vec![]));

        let service = Service::new(Repository::new(db));
        let tenders = service
            .get_tenders(GetTendersInput {
                service_types: vec![],
                limit:         Some("500".to_string()),
                offset:        Some("-3".to_string()),
            })
            .await
            .unwrap();
        assert!(tenders.is_empty());
    }

    #[tokio::test]
    async fn test_get_tenders_passes_service_type_filter() {
        let mut db = MockDatabase::default();
        db.expect_get_tenders()
            .withf(|service_types, page| {
                *service_types == vec!["Construction".to_string(), "Delivery".to_string()]
                    && *page == PageParams::default()
            })
            .returning(|_, _| Ok(vec![]));

        let service = Service::new(Repository::new(db));
        service
            .get_tenders(GetTendersInput {
                service_types: vec!["Construction".to_string(), "Delivery".to_string()],
                limit:         None,
                offset:        None,
            })
            .await
            .unwrap();
    }
}
