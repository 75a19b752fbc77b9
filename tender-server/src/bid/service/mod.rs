use {
    super::repository::Repository,
    std::sync::Arc,
};

pub mod create_bid;
pub mod edit_bid;
pub mod get_bid_status;
pub mod get_bids_for_tender;
pub mod get_user_bids;
pub mod rollback_bid;
pub mod update_bid_status;

pub struct Service {
    repo: Arc<Repository>,
}

impl Service {
    pub fn new(repo: Repository) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}
