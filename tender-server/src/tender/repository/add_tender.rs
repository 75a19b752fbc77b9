use {
    super::Repository,
    crate::{
        api::RestError,
        tender::entities,
    },
};

impl Repository {
    pub async fn add_tender(
        &self,
        tender: entities::TenderCreate,
    ) -> Result<entities::Tender, RestError> {
        self.db.add_tender(tender).await
    }
}
