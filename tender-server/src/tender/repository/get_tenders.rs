use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::PageParams,
        tender::entities,
    },
};

impl Repository {
    pub async fn get_tenders(
        &self,
        service_types: Vec<String>,
        page: PageParams,
    ) -> Result<Vec<entities::Tender>, RestError> {
        self.db.get_tenders(service_types, page).await
    }
}
