use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::Username,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateBidStatusInput {
    pub bid_id:   entities::BidId,
    pub username: Option<Username>,
    pub status:   entities::BidStatus,
}

impl Service {
    /// Any status may replace any other, there is no transition validation.
    #[tracing::instrument(
        skip_all,
        fields(bid_id = %input.bid_id),
        err(level = tracing::Level::TRACE)
    )]
    pub async fn update_bid_status(
        &self,
        input: UpdateBidStatusInput,
    ) -> Result<entities::Bid, RestError> {
        self.repo
            .update_bid_status(input.bid_id, input.username.unwrap_or_default(), input.status)
            .await
    }
}
