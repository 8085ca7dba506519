#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CloseReplies,
  FirstCard,
  HideHelp,
  LastCard,
  NextCard,
  None,
  OpenInBrowser,
  OpenReplies,
  PreviousCard,
  Quit,
  Refresh,
  ShowHelp,
  SwitchView,
  ToggleNotes,
}
