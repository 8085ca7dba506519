use super::*;

pub(crate) struct RepliesModal {
  author: String,
  entries: Vec<ReplyEntry>,
  scroll: usize,
}

impl RepliesModal {
  pub(crate) fn clamp_scroll(&mut self, max: usize) {
    self.scroll = self.scroll.min(max);
  }

  pub(crate) fn draw(&mut self, frame: &mut Frame) {
    fn saturating_usize_to_u16(value: usize) -> u16 {
      u16::try_from(value).unwrap_or(u16::MAX)
    }

    let area = Self::modal_area(frame.area());

    frame.render_widget(Clear, area);

    let inner_width = usize::from(area.width.saturating_sub(2)).max(1);

    let mut lines = Vec::new();

    if self.entries.is_empty() {
      lines.push(Line::from(Span::raw("No replies yet.")));
    } else {
      for entry in &self.entries {
        let indent = "  ".repeat(entry.depth);

        lines.push(Line::from(vec![
          Span::raw(indent.clone()),
          Span::styled(entry.header(), Style::default().fg(Color::White)),
        ]));

        let wrap_width =
          inner_width.saturating_sub(indent.chars().count()).max(1);

        for pick in &entry.picks {
          for line in wrap_text(pick, wrap_width) {
            lines.push(Line::from(vec![
              Span::raw(indent.clone()),
              Span::styled(
                line,
                Style::default()
                  .fg(Color::White)
                  .add_modifier(Modifier::BOLD),
              ),
            ]));
          }
        }

        for line in wrap_text(&entry.body, wrap_width) {
          lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(line, Style::default().fg(Color::DarkGray)),
          ]));
        }

        lines.push(Line::from(Span::raw(indent)));
      }
    }

    let visible_height = usize::from(area.height.saturating_sub(2)).max(1);

    self.clamp_scroll(lines.len().saturating_sub(visible_height));

    let replies = Paragraph::new(lines)
      .block(Block::default().title(self.title()).borders(Borders::ALL))
      .scroll((saturating_usize_to_u16(self.scroll), 0));

    frame.render_widget(replies, area);
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') => Command::Quit,
      KeyCode::Esc | KeyCode::Char('x' | 'X') => Command::CloseReplies,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Down | KeyCode::Char('j') => {
        self.scroll_down();
        Command::None
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.scroll_up();
        Command::None
      }
      KeyCode::PageDown => {
        self.page_down(page);
        Command::None
      }
      KeyCode::PageUp => {
        self.page_up(page);
        Command::None
      }
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        self.page_down(page);
        Command::None
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        self.page_up(page);
        Command::None
      }
      KeyCode::Home => {
        self.scroll = 0;
        Command::None
      }
      KeyCode::End => {
        self.scroll = usize::MAX;
        Command::None
      }
      _ => Command::None,
    }
  }

  fn modal_area(area: Rect) -> Rect {
    let available_width = area.width.saturating_sub(4).max(1);
    let available_height = area.height.saturating_sub(2).max(1);

    let width = available_width.min(76).min(area.width);
    let height = available_height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
  }

  pub(crate) fn new(card: &Card) -> Self {
    Self {
      author: card.author().to_string(),
      entries: ReplyEntry::flatten(&card.comment.replies),
      scroll: 0,
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.scroll = self.scroll.saturating_add(step);
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.scroll = self.scroll.saturating_sub(step);
  }

  pub(crate) fn scroll_down(&mut self) {
    self.scroll = self.scroll.saturating_add(1);
  }

  pub(crate) fn scroll_up(&mut self) {
    self.scroll = self.scroll.saturating_sub(1);
  }

  fn title(&self) -> String {
    format!("Replies to {} (esc closes)", self.author)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn card_with_replies() -> Card {
    Card::new(Comment {
      author: Some("bettor".to_string()),
      body: None,
      downs: 0,
      id: None,
      notes: None,
      picks: Some("Lyon +0.5".to_string()),
      replies: vec![Comment {
        author: Some("skeptic".to_string()),
        body: Some("their away form is poor".to_string()),
        downs: 2,
        id: None,
        notes: None,
        picks: None,
        replies: vec![Comment {
          author: None,
          body: Some("agreed".to_string()),
          downs: 0,
          id: None,
          notes: None,
          picks: None,
          replies: Vec::new(),
          ups: 1,
        }],
        ups: 5,
      }],
      ups: 9,
    })
  }

  #[test]
  fn new_flattens_replies_and_titles_after_the_author() {
    let modal = RepliesModal::new(&card_with_replies());

    assert_eq!(modal.title(), "Replies to bettor (esc closes)");
    assert_eq!(modal.entries.len(), 2);
    assert_eq!(modal.entries[0].depth, 0);
    assert_eq!(modal.entries[1].depth, 1);
    assert_eq!(modal.entries[1].author, "unknown");
  }

  #[test]
  fn scroll_saturates_at_the_top() {
    let mut modal = RepliesModal::new(&card_with_replies());

    modal.scroll_up();
    assert_eq!(modal.scroll, 0);

    modal.scroll_down();
    modal.scroll_down();
    modal.scroll_up();
    assert_eq!(modal.scroll, 1);
  }

  #[test]
  fn page_moves_keep_one_line_of_context() {
    let mut modal = RepliesModal::new(&card_with_replies());

    modal.page_down(10);
    assert_eq!(modal.scroll, 9);

    modal.page_up(4);
    assert_eq!(modal.scroll, 6);
  }

  #[test]
  fn clamp_scroll_caps_overshoot() {
    let mut modal = RepliesModal::new(&card_with_replies());

    modal.page_down(100);
    modal.clamp_scroll(5);

    assert_eq!(modal.scroll, 5);
  }
}
