use {
    super::repository::Repository,
    std::sync::Arc,
};

pub mod create_tender;
pub mod edit_tender;
pub mod get_tender_status;
pub mod get_tenders;
pub mod get_user_tenders;
pub mod rollback_tender;
pub mod update_tender_status;

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
