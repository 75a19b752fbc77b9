use {
    crate::tender::entities::TenderId,
    tender_api_types::bid as api_types,
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type BidId = Uuid;
pub type AuthorId = Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidStatus {
    Created,
    Published,
    Canceled,
    Approved,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidAuthorType {
    Organization,
    User,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub id:          BidId,
    pub name:        String,
    pub description: String,
    pub status:      BidStatus,
    pub tender_id:   TenderId,
    pub author_type: BidAuthorType,
    pub author_id:   AuthorId,
    pub version:     i32,
    pub created_at:  OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BidCreate {
    pub name:        String,
    pub description: String,
    pub tender_id:   TenderId,
    pub author_type: BidAuthorType,
    pub author_id:   AuthorId,
}

/// Fields an edit may change. `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BidEdit {
    pub name:        Option<String>,
    pub description: Option<String>,
}

impl From<api_types::BidStatus> for BidStatus {
    fn from(status: api_types::BidStatus) -> Self {
        match status {
            api_types::BidStatus::Created => BidStatus::Created,
            api_types::BidStatus::Published => BidStatus::Published,
            api_types::BidStatus::Canceled => BidStatus::Canceled,
            api_types::BidStatus::Approved => BidStatus::Approved,
            api_types::BidStatus::Rejected => BidStatus::Rejected,
        }
    }
}

impl From<BidStatus> for api_types::BidStatus {
    fn from(status: BidStatus) -> Self {
        match status {
            BidStatus::Created => api_types::BidStatus::Created,
            BidStatus::Published => api_types::BidStatus::Published,
            BidStatus::Canceled => api_types::BidStatus::Canceled,
            BidStatus::Approved => api_types::BidStatus::Approved,
            BidStatus::Rejected => api_types::BidStatus::Rejected,
        }
    }
}

impl From<api_types::BidAuthorType> for BidAuthorType {
    fn from(author_type: api_types::BidAuthorType) -> Self {
        match author_type {
            api_types::BidAuthorType::Organization => BidAuthorType::Organization,
            api_types::BidAuthorType::User => BidAuthorType::User,
        }
    }
}

impl From<BidAuthorType> for api_types::BidAuthorType {
    fn from(author_type: BidAuthorType) -> Self {
        match author_type {
            BidAuthorType::Organization => api_types::BidAuthorType::Organization,
            BidAuthorType::User => api_types::BidAuthorType::User,
        }
    }
}

impl From<Bid> for api_types::Bid {
    fn from(bid: Bid) -> Self {
        Self {
            id:          bid.id,
            name:        bid.name,
            description: bid.description,
            status:      bid.status.into(),
            tender_id:   bid.tender_id,
            author_type: bid.author_type.into(),
            author_id:   bid.author_id,
            version:     bid.version,
            created_at:  bid.created_at,
        }
    }
}

impl From<api_types::CreateBid> for BidCreate {
    fn from(body: api_types::CreateBid) -> Self {
        Self {
            name:        body.name,
            description: body.description,
            tender_id:   body.tender_id,
            author_type: body.author_type.into(),
            author_id:   body.author_id,
        }
    }
}

impl From<api_types::EditBid> for BidEdit {
    fn from(body: api_types::EditBid) -> Self {
        Self {
            name:        body.name,
            description: body.description,
        }
    }
}
