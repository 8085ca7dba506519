#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
  Empty,
  Error,
  Loading,
  Populated,
}
