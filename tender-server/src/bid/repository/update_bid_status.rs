use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::Username,
    },
};

impl Repository {
    pub async fn update_bid_status(
        &self,
        bid_id: entities::BidId,
        username: Username,
        status: entities::BidStatus,
    ) -> Result<entities::Bid, RestError> {
        self.db.update_bid_status(bid_id, username, status).await
    }
}
