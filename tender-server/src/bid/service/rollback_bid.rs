use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::Username,
    },
};

#[derive(Debug, Clone)]
pub struct RollbackBidInput {
    pub bid_id:   entities::BidId,
    pub username: Option<Username>,
    pub version:  i32,
}

impl Service {
    #[tracing::instrument(
        skip_all,
        fields(bid_id = %input.bid_id, version = input.version),
        err(level = tracing::Level::TRACE)
    )]
    pub async fn rollback_bid(&self, input: RollbackBidInput) -> Result<entities::Bid, RestError> {
        self.repo
            .rollback_bid(input.bid_id, input.username.unwrap_or_default(), input.version)
            .await
    }
}
