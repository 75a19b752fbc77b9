use {
    super::Service,
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

#[derive(Debug, Clone)]
pub struct GetBidsForTenderInput {
    pub tender_id: TenderId,
    pub username:  Option<Username>,
    pub limit:     Option<String>,
    pub offset:    Option<String>,
}

impl Service {
    /// Lists the requesting user's own bids on the tender, not all bids.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn get_bids_for_tender(
        &self,
        input: GetBidsForTenderInput,
    ) -> Result<Vec<entities::Bid>, RestError> {
        let page = PageParams::clamped(input.limit, input.offset);
        self.repo
            .get_bids_for_tender(input.tender_id, input.username.unwrap_or_default(), page)
            .await
    }
}
