use serde::{Deserialize, Serialize};

use crate::domain::Order;

/// Success body of the order-listing endpoint. A missing `data` field is the
/// same as an empty collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    #[serde(default)]
    pub data: Vec<Order>,
}

/// Error body accompanying a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
