use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  next_refresh: Instant,
  state: State,
}

impl App {
  fn card_lines(
    card: &Card,
    is_first: bool,
    is_last: bool,
    available_width: u16,
  ) -> Vec<Line<'static>> {
    let width = usize::from(available_width)
      .saturating_sub(BASE_INDENT.len())
      .max(1);

    let mut lines = vec![Line::from(Span::raw(BASE_INDENT))];

    for pick in card.pick_lines() {
      for wrapped in wrap_text(&pick, width) {
        lines.push(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(
            wrapped,
            Style::default()
              .fg(Color::White)
              .add_modifier(Modifier::BOLD),
          ),
        ]));
      }
    }

    lines.push(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        format_votes(card.comment.ups, card.comment.downs),
        Style::default().fg(Color::DarkGray),
      ),
    ]));

    if card.has_notes() {
      lines.push(Line::from(Span::raw(BASE_INDENT)));

      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          card.notes_toggle_label(),
          Style::default().fg(Color::Cyan),
        ),
      ]));

      if card.notes_open {
        for quote in card.quotes() {
          lines.push(Line::from(Span::raw(BASE_INDENT)));

          for wrapped in wrap_text(&quote.text, width.saturating_sub(2).max(1))
          {
            lines.push(Line::from(vec![
              Span::raw(BASE_INDENT),
              Span::raw("> "),
              Span::styled(wrapped, Style::default().fg(Color::White)),
            ]));
          }

          lines.push(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(
              format!("— {}", quote.author),
              Style::default().fg(Color::DarkGray),
            ),
          ]));
        }
      }
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    let previous_style = if is_first {
      Style::default().fg(Color::DarkGray)
    } else {
      Style::default().fg(Color::Cyan)
    };

    let next_style = if is_last {
      Style::default().fg(Color::DarkGray)
    } else {
      Style::default().fg(Color::Cyan)
    };

    lines.push(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled("← previous", previous_style),
      Span::raw("   "),
      Span::styled("next →", next_style),
    ]));

    lines
  }

  fn dispatch(&mut self, command: Command) -> bool {
    let dispatch = self.state.dispatch_command(command);

    for effect in dispatch.effects {
      self.execute_effect(effect);
    }

    dispatch.should_exit
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(usize::from(layout[1].height));

    let header = Line::from(vec![
      Span::styled(
        TITLE,
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      Span::raw("  "),
      Span::styled(
        self.state.count_label(),
        Style::default().fg(Color::DarkGray),
      ),
    ]);

    frame.render_widget(Paragraph::new(header), layout[0]);

    match self.state.phase() {
      Phase::Empty => Self::draw_placeholder(frame, layout[1], EMPTY_TEXT),
      Phase::Error => Self::draw_placeholder(frame, layout[1], ERROR_TEXT),
      Phase::Loading => Self::draw_placeholder(frame, layout[1], LOADING_TEXT),
      Phase::Populated => self.draw_body(frame, layout[1]),
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    if let Some(modal) = self.state.replies_modal_mut() {
      modal.draw(frame);
    }

    self.state.help().draw(frame);
  }

  fn draw_body(&mut self, frame: &mut Frame, area: Rect) {
    match self.state.mode_mut() {
      Mode::Card(view) => {
        let lines = view.current().map_or_else(Vec::new, |card| {
          Self::card_lines(card, view.is_first(), view.is_last(), area.width)
        });

        frame.render_widget(Paragraph::new(lines), area);
      }
      Mode::Feed(view) => {
        let selected_index = view.selected_index();
        let offset = view.offset();

        let list_items: Vec<ListItem> = view
          .cards
          .iter()
          .map(|card| Self::feed_list_item(card, area.width))
          .collect();

        let mut list_state = ListState::default()
          .with_selected(selected_index)
          .with_offset(offset);

        let list = List::new(list_items)
          .highlight_style(
            Style::default()
              .fg(Color::Cyan)
              .add_modifier(Modifier::BOLD),
          )
          .highlight_symbol("");

        frame.render_stateful_widget(list, area, &mut list_state);

        view.set_offset(list_state.offset());
      }
    }
  }

  fn draw_placeholder(frame: &mut Frame, area: Rect, text: &'static str) {
    let placeholder = Paragraph::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(text, Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(placeholder, area);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchComments { request_id } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::Comments {
            request_id,
            result: client.fetch_comments().await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn feed_list_item(card: &Card, available_width: u16) -> ListItem<'static> {
    let width = usize::from(available_width)
      .saturating_sub(BASE_INDENT.len())
      .max(1);

    let mut lines = vec![Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(card.header(), Style::default().fg(Color::White)),
    ])];

    for pick in card.pick_lines() {
      for wrapped in wrap_text(&pick, width) {
        lines.push(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(
            wrapped,
            Style::default()
              .fg(Color::White)
              .add_modifier(Modifier::BOLD),
          ),
        ]));
      }
    }

    let mut footer = Vec::new();

    if card.has_notes() {
      footer.push(Span::styled(
        card.notes_toggle_label(),
        Style::default().fg(Color::Cyan),
      ));
    }

    if let Some(label) = card.replies_label() {
      if !footer.is_empty() {
        footer.push(Span::raw("  "));
      }

      footer.push(Span::styled(label, Style::default().fg(Color::Cyan)));
    }

    if !footer.is_empty() {
      let mut line = vec![Span::raw(BASE_INDENT)];
      line.extend(footer);
      lines.push(Line::from(line));
    }

    if card.notes_open {
      for note in card.notes_lines() {
        for wrapped in wrap_text(&note, width) {
          lines.push(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(wrapped, Style::default().fg(Color::DarkGray)),
          ]));
        }
      }
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  pub(crate) fn new(client: Client) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      next_refresh: Instant::now() + REFRESH_INTERVAL,
      state: State::new(),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    self.dispatch(Command::Refresh);

    loop {
      self.process_pending_events();

      if Instant::now() >= self.next_refresh {
        self.next_refresh = Instant::now() + REFRESH_INTERVAL;
        self.dispatch(Command::Refresh);
      }

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let page = self.state.list_height().max(1);

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(modal) = self.state.replies_modal_mut() {
        modal.handle_key(key, page)
      } else {
        self.state.mode_mut().handle_key(key, page)
      };

      if self.dispatch(command) {
        break;
      }

      self.process_pending_events();
    }

    Ok(())
  }
}
