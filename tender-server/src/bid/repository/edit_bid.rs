use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::Username,
    },
};

impl Repository {
    pub async fn edit_bid(
        &self,
        bid_id: entities::BidId,
        username: Username,
        changes: entities::BidEdit,
    ) -> Result<entities::Bid, RestError> {
        self.db.edit_bid(bid_id, username, changes).await
    }
}
