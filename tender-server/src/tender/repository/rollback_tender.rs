use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::Username,
        tender::entities,
    },
};

impl Repository {
    pub async fn rollback_tender(
        &self,
        tender_id: entities::TenderId,
        username: Username,
        version: i32,
    ) -> Result<entities::Tender, RestError> {
        self.db.rollback_tender(tender_id, username, version).await
    }
}
