#[derive(Clone)]
pub(crate) enum Effect {
  FetchComments { request_id: u64 },
  OpenUrl { url: String },
}
