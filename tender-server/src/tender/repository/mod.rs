mod add_tender;
mod edit_tender;
mod get_tender_status;
mod get_tenders;
mod get_user_tenders;
mod is_user_responsible;
mod models;
mod rollback_tender;
mod update_tender_status;

pub use models::*;

pub struct Repository {
    db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self { db: Box::new(db) }
    }
}
