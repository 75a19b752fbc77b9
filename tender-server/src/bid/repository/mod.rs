mod add_bid;
mod edit_bid;
mod get_bid_status;
mod get_bids_for_tender;
mod get_user_bids;
mod is_author_responsible;
mod models;
mod rollback_bid;
mod update_bid_status;

pub use models::*;

pub struct Repository {
    db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self { db: Box::new(db) }
    }
}
