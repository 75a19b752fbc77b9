use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::Username,
        tender::entities,
    },
};

impl Repository {
    pub async fn is_user_responsible(
        &self,
        username: Username,
        organization_id: entities::OrganizationId,
    ) -> Result<bool, RestError> {
        self.db.is_user_responsible(username, organization_id).await
    }
}
