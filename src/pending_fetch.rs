use super::*;

pub(crate) struct PendingFetch {
  pub(crate) request_id: u64,
}
