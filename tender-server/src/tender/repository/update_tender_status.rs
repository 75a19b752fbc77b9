use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::Username,
        tender::entities,
    },
};

impl Repository {
    pub async fn update_tender_status(
        &self,
        tender_id: entities::TenderId,
        username: Username,
        status: entities::TenderStatus,
    ) -> Result<entities::Tender, RestError> {
        self.db
            .update_tender_status(tender_id, username, status)
            .await
    }
}
