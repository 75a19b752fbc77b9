use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::Username,
    },
};

impl Repository {
    pub async fn rollback_bid(
        &self,
        bid_id: entities::BidId,
        username: Username,
        version: i32,
    ) -> Result<entities::Bid, RestError> {
        self.db.rollback_bid(bid_id, username, version).await
    }
}
