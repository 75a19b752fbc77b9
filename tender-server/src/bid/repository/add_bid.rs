use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
    },
};

impl Repository {
    pub async fn add_bid(&self, bid: entities::BidCreate) -> Result<entities::Bid, RestError> {
        self.db.add_bid(bid).await
    }
}
