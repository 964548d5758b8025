use shared::domain::Order;

/// Events queued from the backend worker to the UI thread. Fetch results
/// carry the generation of the request that produced them; the UI drops any
/// event whose generation is no longer current.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    OrdersLoaded {
        generation: u64,
        orders: Vec<Order>,
    },
    OrdersFetchFailed {
        generation: u64,
        message: String,
    },
    BackendUnavailable(String),
}
