use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::Username,
    },
};

impl Repository {
    pub async fn get_bid_status(
        &self,
        bid_id: entities::BidId,
        username: Username,
    ) -> Result<entities::BidStatus, RestError> {
        self.db.get_bid_status(bid_id, username).await
    }
}
