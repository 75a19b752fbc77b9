use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::{
            PageParams,
            Username,
        },
        tender::entities,
    },
};

impl Repository {
    pub async fn get_user_tenders(
        &self,
        username: Username,
        page: PageParams,
    ) -> Result<Vec<entities::Tender>, RestError> {
        self.db.get_user_tenders(username, page).await
    }
}
