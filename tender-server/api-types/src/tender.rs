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

pub type TenderId = Uuid;

/// Lifecycle state of a tender. Any state may be set by the creator at any
/// time, a closed tender can be published again.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Debug, Display, EnumString)]
pub enum TenderStatus {
    Created,
    Published,
    Closed,
}

#[derive(Serialize, Deserialize, ToResponse, ToSchema, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    /// The unique id of the tender.
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000", value_type = String)]
    pub id:              TenderId,
    /// Short human readable name of the tender.
    #[schema(example = "Office renovation")]
    pub name:            String,
    /// Free form description of the work being procured.
    #[schema(example = "Full renovation of the fourth floor offices")]
    pub description:     String,
    #[schema(example = "Published")]
    pub status:          TenderStatus,
    /// Category of the procured service, free form.
    #[schema(example = "Construction")]
    pub service_type:    String,
    /// The organization the tender is published on behalf of.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6", value_type = String)]
    pub organization_id: Uuid,
    /// Monotonic revision counter, incremented on every successful mutation.
    #[schema(example = 1)]
    pub version:         i32,
    #[schema(example = "2024-08-01T12:00:00Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at:      OffsetDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTender {
    #[schema(example = "Office renovation")]
    pub name:             String,
    #[schema(example = "Full renovation of the fourth floor offices")]
    pub description:      String,
    #[schema(example = "Construction")]
    pub service_type:     String,
    /// The organization the tender belongs to. The creator must be
    /// responsible for this organization.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6", value_type = String)]
    pub organization_id:  Uuid,
    #[schema(example = "sysadmin1")]
    pub creator_username: String,
}

/// Partial update for a tender. Absent and empty fields keep the stored value.
#[derive(Serialize, Deserialize, ToSchema, Clone, Default, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EditTender {
    #[schema(example = "Office renovation")]
    pub name:         Option<String>,
    #[schema(example = "Updated scope of work")]
    pub description:  Option<String>,
    #[schema(example = "Construction")]
    pub service_type: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, IntoParams)]
pub struct GetTendersQueryParams {
    /// Maximum number of tenders to return. Out of range values fall back to
    /// the server defaults.
    #[param(example = "5", value_type = Option<String>)]
    pub limit:        Option<String>,
    /// Number of tenders to skip from the beginning of the listing.
    #[param(example = "0", value_type = Option<String>)]
    pub offset:       Option<String>,
    /// Service types to filter by. May be repeated.
    #[param(example = "Construction", value_type = Option<Vec<String>>)]
    #[serde(default)]
    pub service_type: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, IntoParams)]
pub struct GetUserTendersQueryParams {
    #[param(example = "5", value_type = Option<String>)]
    pub limit:    Option<String>,
    #[param(example = "0", value_type = Option<String>)]
    pub offset:   Option<String>,
    /// Username of the tender creator.
    #[param(example = "sysadmin1", value_type = Option<String>)]
    pub username: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, IntoParams)]
pub struct TenderUsernameQueryParams {
    /// Username of the requesting employee.
    #[param(example = "sysadmin1", value_type = Option<String>)]
    pub username: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, IntoParams)]
pub struct UpdateTenderStatusQueryParams {
    /// New status for the tender.
    #[param(example = "Closed", value_type = String)]
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
    fn test_tender_status_parsing() {
        assert_eq!(TenderStatus::from_str("Created").unwrap(), TenderStatus::Created);
        assert_eq!(TenderStatus::from_str("Published").unwrap(), TenderStatus::Published);
        assert_eq!(TenderStatus::from_str("Closed").unwrap(), TenderStatus::Closed);
        assert!(TenderStatus::from_str("published").is_err());
        assert!(TenderStatus::from_str("Cancelled").is_err());
        assert!(TenderStatus::from_str("").is_err());
    }

    #[test]
    fn test_tender_wire_shape() {
        let tender = Tender {
            id:              Uuid::nil(),
            name:            "Office renovation".to_string(),
            description:     "Fourth floor".to_string(),
            status:          TenderStatus::Published,
            service_type:    "Construction".to_string(),
            organization_id: Uuid::nil(),
            version:         3,
            created_at:      time::macros::datetime!(2024-08-01 12:00:00 UTC),
        };
        let json = serde_json::to_value(&tender).unwrap();
        assert_eq!(json["serviceType"], "Construction");
        assert_eq!(json["organizationId"], Uuid::nil().to_string());
        assert_eq!(json["status"], "Published");
        assert_eq!(json["version"], 3);
        assert_eq!(json["createdAt"], "2024-08-01T12:00:00Z");
    }
}
