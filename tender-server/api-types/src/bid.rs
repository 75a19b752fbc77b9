use {
    serde::{
        Deserialize,
        Serialize,
    },
    strum::{
        Display,
        EnumString,
    },
    time::OffsetDateTime,
    utoipa::{
        IntoParams,
        ToResponse,
        ToSchema,
    },
    uuid::Uuid,
};

pub type BidId = Uuid;

/// Lifecycle state of a bid. The author may set any state at any time,
/// approval and rejection are plain status writes with no quorum logic.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug, Display, EnumString)]
pub enum BidStatus {
    Created,
    Published,
    Canceled,
    Approved,
    Rejected,
}

/// Whether the bid is submitted on behalf of an organization or a single user.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug, Display, EnumString)]
pub enum BidAuthorType {
    Organization,
    User,
}

#[derive(Serialize, Deserialize, ToResponse, ToSchema, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    /// The unique id of the bid.
    #[schema(example = "36b5c0c8-d5cf-441f-8d51-dae2f8292d88", value_type = String)]
    pub id:          BidId,
    #[schema(example = "Renovation crew bid")]
    pub name:        String,
    #[schema(example = "We can start next month")]
    pub description: String,
    #[schema(example = "Created")]
    pub status:      BidStatus,
    /// The tender the bid was submitted against.
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000", value_type = String)]
    pub tender_id:   Uuid,
    #[schema(example = "User")]
    pub author_type: BidAuthorType,
    /// The author the bid was submitted by.
    #[schema(example = "61a485f0-2056-49e7-b66e-9c2061b7dd1c", value_type = String)]
    pub author_id:   Uuid,
    /// Monotonic revision counter, incremented on every successful mutation.
    #[schema(example = 1)]
    pub version:     i32,
    #[schema(example = "2024-08-02T09:30:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at:  OffsetDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateBid {
    #[schema(example = "Renovation crew bid")]
    pub name:        String,
    #[schema(example = "We can start next month")]
    pub description: String,
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000", value_type = String)]
    pub tender_id:   Uuid,
    #[schema(example = "User")]
    pub author_type: BidAuthorType,
    /// The author must be registered as responsible for an organization.
    #[schema(example = "61a485f0-2056-49e7-b66e-9c2061b7dd1c", value_type = String)]
    pub author_id:   Uuid,
}

/// Partial update for a bid. Absent and empty fields keep the stored value.
#[derive(Serialize, Deserialize, ToSchema, Clone, Default, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EditBid {
    #[schema(example = "Renovation crew bid")]
    pub name:        Option<String>,
    #[schema(example = "Updated terms")]
    pub description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, IntoParams)]
pub struct GetUserBidsQueryParams {
    #[param(example = "5", value_type = Option<String>)]
    pub limit:    Option<String>,
    #[param(example = "0", value_type = Option<String>)]
    pub offset:   Option<String>,
    /// Username of the bid author.
    #[param(example = "sysadmin1", value_type = Option<String>)]
    pub username: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, IntoParams)]
pub struct BidUsernameQueryParams {
    /// Username of the requesting employee.
    #[param(example = "sysadmin1", value_type = Option<String>)]
    pub username: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, IntoParams)]
pub struct UpdateBidStatusQueryParams {
    /// New status for the bid.
    #[param(example = "Published", value_type = String)]
    pub status:   Option<String>,
    #[param(example = "sysadmin1", value_type = Option<String>)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::str::FromStr,
    };

    #[test]
    fn test_bid_status_parsing() {
        assert_eq!(BidStatus::from_str("Canceled").unwrap(), BidStatus::Canceled);
        assert_eq!(BidStatus::from_str("Approved").unwrap(), BidStatus::Approved);
        assert!(BidStatus::from_str("Cancelled").is_err());
        assert!(BidStatus::from_str("approved").is_err());
    }

    #[test]
    fn test_author_type_parsing() {
        assert_eq!(BidAuthorType::from_str("Organization").unwrap(), BidAuthorType::Organization);
        assert_eq!(BidAuthorType::from_str("User").unwrap(), BidAuthorType::User);
        assert!(BidAuthorType::from_str("Employee").is_err());
    }
}
