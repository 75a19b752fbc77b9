use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
    },
};

impl Repository {
    pub async fn is_author_responsible(
        &self,
        author_id: entities::AuthorId,
    ) -> Result<bool, RestError> {
        self.db.is_author_responsible(author_id).await
    }
}
