use crate::{
    bid,
    tender,
};

pub struct Store {
    pub tender_service: tender::service::Service,
    pub bid_service:    bid::service::Service,
}
