use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::{
            PageParams,
            Username,
        },
        tender::entities::TenderId,
    },
};

impl Repository {
    pub async fn get_bids_for_tender(
        &self,
        tender_id: TenderId,
        username: Username,
        page: PageParams,
    ) -> Result<Vec<entities::Bid>, RestError> {
        self.db.get_bids_for_tender(tender_id, username, page).await
    }
}
