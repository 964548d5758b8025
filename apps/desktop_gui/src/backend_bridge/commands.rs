/// Commands queued from the UI thread to the backend worker.
///
/// `generation` tags each fetch with the page activation that requested it,
/// so results that arrive after the page was left (or re-entered) can be
/// discarded instead of clobbering newer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    FetchOrders { generation: u64 },
}
