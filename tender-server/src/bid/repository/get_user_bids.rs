use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::{
            PageParams,
            Username,
        },
    },
};

impl Repository {
    pub async fn get_user_bids(
        &self,
        username: Username,
        page: PageParams,
    ) -> Result<Vec<entities::Bid>, RestError> {
        self.db.get_user_bids(username, page).await
    }
}
