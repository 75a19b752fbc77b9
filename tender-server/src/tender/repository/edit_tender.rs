use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::Username,
        tender::entities,
    },
};

impl Repository {
    pub async fn edit_tender(
        &self,
        tender_id: entities::TenderId,
        username: Username,
        changes: entities::TenderEdit,
    ) -> Result<entities::Tender, RestError> {
        self.db.edit_tender(tender_id, username, changes).await
    }
}
