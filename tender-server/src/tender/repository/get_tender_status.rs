use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::Username,
        tender::entities,
    },
};

impl Repository {
    pub async fn get_tender_status(
        &self,
        tender_id: entities::TenderId,
        username: Option<Username>,
    ) -> Result<entities::TenderStatus, RestError> {
        self.db.get_tender_status(tender_id, username).await
    }
}
