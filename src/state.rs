use super::*;

pub(crate) struct State {
  comments: Vec<Comment>,
  help: HelpView,
  list_height: usize,
  message: String,
  mode: Mode,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_fetch: Option<PendingFetch>,
  phase: Phase,
  replies_modal: Option<RepliesModal>,
  transient_message: Option<TransientMessage>,
}

impl State {
  fn close_replies(&mut self) {
    self.replies_modal = None;

    if !self.help.is_visible() {
      self.message = self.mode_status().into();
    }
  }

  pub(crate) fn count_label(&self) -> String {
    match self.phase {
      Phase::Empty => "0 top-level".to_string(),
      Phase::Error => "—".to_string(),
      Phase::Loading => "Loading...".to_string(),
      Phase::Populated => match &self.mode {
        Mode::Card(view) => format!(
          "pick {} of {}",
          view.index().saturating_add(1),
          view.len()
        ),
        Mode::Feed(view) => format!("{} top-level", view.len()),
      },
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => should_exit = true,
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::Refresh => self.refresh(),
      Command::SwitchView => self.switch_view(),
      Command::NextCard => self.next_card(),
      Command::PreviousCard => self.previous_card(),
      Command::FirstCard => self.first_card(),
      Command::LastCard => self.last_card(),
      Command::OpenReplies => self.open_replies(),
      Command::CloseReplies => self.close_replies(),
      Command::OpenInBrowser => self.open_in_browser(),
      Command::ToggleNotes => self.toggle_notes(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  fn first_card(&mut self) {
    if self.phase == Phase::Loading {
      return;
    }

    if let Mode::Card(view) = &mut self.mode {
      view.select_first();
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Comments { request_id, result } => {
        let Some(pending) = self.pending_fetch.as_ref() else {
          return;
        };

        if pending.request_id != request_id {
          return;
        }

        self.pending_fetch = None;

        match result {
          Ok(comments) => {
            self.phase = if comments.is_empty() {
              Phase::Empty
            } else {
              Phase::Populated
            };

            self.comments = comments;

            self.rebuild_mode();

            if !self.help.is_visible() && self.replies_modal.is_none() {
              self.message = self.mode_status().into();
            }
          }
          Err(error) => {
            self.phase = Phase::Error;

            if !self.help.is_visible() {
              self.set_transient_message(format!(
                "Could not load picks: {error}"
              ));
            }
          }
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn last_card(&mut self) {
    if self.phase == Phase::Loading {
      return;
    }

    if let Mode::Card(view) = &mut self.mode {
      view.select_last();
    }
  }

  pub(crate) fn list_height(&self) -> usize {
    self.list_height
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  fn mode_status(&self) -> &'static str {
    match self.mode {
      Mode::Card(_) => CARD_STATUS,
      Mode::Feed(_) => FEED_STATUS,
    }
  }

  pub(crate) fn new() -> Self {
    Self {
      comments: Vec::new(),
      help: HelpView::new(),
      list_height: 0,
      message: FEED_STATUS.into(),
      mode: Mode::Feed(FeedView::new(&[])),
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_fetch: None,
      phase: Phase::Loading,
      replies_modal: None,
      transient_message: None,
    }
  }

  fn next_card(&mut self) {
    if self.phase == Phase::Loading {
      return;
    }

    if let Mode::Card(view) = &mut self.mode {
      view.select_next();
    }
  }

  fn open_in_browser(&mut self) {
    if self.phase != Phase::Populated {
      return;
    }

    let card = match &self.mode {
      Mode::Card(view) => view.current(),
      Mode::Feed(view) => view.selected_card(),
    };

    if let Some(card) = card {
      self.pending_effects.push(Effect::OpenUrl {
        url: card.comment.permalink(),
      });
    }
  }

  fn open_replies(&mut self) {
    if self.phase != Phase::Populated {
      return;
    }

    let Mode::Feed(view) = &self.mode else {
      return;
    };

    let Some(card) = view.selected_card() else {
      return;
    };

    if !card.has_replies() {
      return;
    }

    self.replies_modal = Some(RepliesModal::new(card));

    if !self.help.is_visible() {
      self.message = MODAL_STATUS.into();
    }
  }

  pub(crate) fn phase(&self) -> Phase {
    self.phase
  }

  fn previous_card(&mut self) {
    if self.phase == Phase::Loading {
      return;
    }

    if let Mode::Card(view) = &mut self.mode {
      view.select_previous();
    }
  }

  fn rebuild_mode(&mut self) {
    self.mode = match self.mode {
      Mode::Card(_) => Mode::Card(CardView::new(&self.comments)),
      Mode::Feed(_) => Mode::Feed(FeedView::new(&self.comments)),
    };
  }

  fn refresh(&mut self) {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_fetch = Some(PendingFetch { request_id });

    self.phase = Phase::Loading;

    self.pending_effects.push(Effect::FetchComments { request_id });
  }

  pub(crate) fn replies_modal_mut(&mut self) -> Option<&mut RepliesModal> {
    self.replies_modal.as_mut()
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  fn switch_view(&mut self) {
    self.mode = match self.mode {
      Mode::Card(_) => Mode::Feed(FeedView::new(&self.comments)),
      Mode::Feed(_) => Mode::Card(CardView::new(&self.comments)),
    };

    if !self.help.is_visible() {
      self.message = self.mode_status().into();
    }
  }

  fn toggle_notes(&mut self) {
    if self.phase != Phase::Populated {
      return;
    }

    match &mut self.mode {
      Mode::Card(view) => view.toggle_notes(),
      Mode::Feed(view) => view.toggle_selected_notes(),
    }
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}
