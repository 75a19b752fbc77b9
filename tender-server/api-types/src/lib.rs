use {
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

pub mod bid;
pub mod tender;

#[derive(ToResponse, ToSchema, Serialize, Deserialize, Clone, Debug)]
#[response(description = "An error occurred processing the request")]
pub struct ErrorBodyResponse {
    pub reason: String,
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "api")]
    Api,
    #[strum(serialize = "tenders")]
    Tenders,
    #[strum(serialize = "bids")]
    Bids,
    #[strum(serialize = "ping")]
    Ping,
    #[strum(serialize = "docs")]
    Docs,
    #[strum(serialize = "docs/openapi.json")]
    OpenApi,
}
