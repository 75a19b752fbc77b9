use {
    tender_api_types::tender as api_types,
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type TenderId = Uuid;
pub type OrganizationId = Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TenderStatus {
    Created,
    Published,
    Closed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tender {
    pub id:               TenderId,
    pub name:             String,
    pub description:      String,
    pub status:           TenderStatus,
    pub service_type:     String,
    pub organization_id:  OrganizationId,
    pub creator_username: String,
    pub version:          i32,
    pub created_at:       OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TenderCreate {
    pub name:             String,
    pub description:      String,
    pub service_type:     String,
    pub organization_id:  OrganizationId,
    pub creator_username: String,
}

/// Fields an edit may change. `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TenderEdit {
    pub name:         Option<String>,
    pub description:  Option<String>,
    pub service_type: Option<String>,
}

impl From<api_types::TenderStatus> for TenderStatus {
    fn from(status: api_types::TenderStatus) -> Self {
        match status {
            api_types::TenderStatus::Created => TenderStatus::Created,
            api_types::TenderStatus::Published => TenderStatus::Published,
            api_types::TenderStatus::Closed => TenderStatus::Closed,
        }
    }
}

impl From<TenderStatus> for api_types::TenderStatus {
    fn from(status: TenderStatus) -> Self {
        match status {
            TenderStatus::Created => api_types::TenderStatus::Created,
            TenderStatus::Published => api_types::TenderStatus::Published,
            TenderStatus::Closed => api_types::TenderStatus::Closed,
        }
    }
}

impl From<Tender> for api_types::Tender {
    fn from(tender: Tender) -> Self {
        Self {
            id:              tender.id,
            name:            tender.name,
            description:     tender.description,
            status:          tender.status.into(),
            service_type:    tender.service_type,
            organization_id: tender.organization_id,
            version:         tender.version,
            created_at:      tender.created_at,
        }
    }
}

impl From<api_types::CreateTender> for TenderCreate {
    fn from(body: api_types::CreateTender) -> Self {
        Self {
            name:             body.name,
            description:      body.description,
            service_type:     body.service_type,
            organization_id:  body.organization_id,
            creator_username: body.creator_username,
        }
    }
}

impl From<api_types::EditTender> for TenderEdit {
    fn from(body: api_types::EditTender) -> Self {
        Self {
            name:         body.name,
            description:  body.description,
            service_type: body.service_type,
        }
    }
}
