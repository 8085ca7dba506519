use super::*;

pub(crate) enum Mode {
  Card(CardView),
  Feed(FeedView),
}

impl Mode {
  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    match self {
      Mode::Card(_) => {
        let modifiers = key.modifiers;

        match key.code {
          KeyCode::Char('q' | 'Q') => Command::Quit,
          KeyCode::Esc | KeyCode::Tab | KeyCode::Char('v' | 'V') => {
            Command::SwitchView
          }
          KeyCode::Char('?') => Command::ShowHelp,
          KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => {
            Command::PreviousCard
          }
          KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => {
            Command::NextCard
          }
          KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
            Command::NextCard
          }
          KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            Command::PreviousCard
          }
          KeyCode::Home => Command::FirstCard,
          KeyCode::End => Command::LastCard,
          KeyCode::Enter | KeyCode::Char('n' | 'N' | ' ') => {
            Command::ToggleNotes
          }
          KeyCode::Char('r' | 'R') => Command::Refresh,
          KeyCode::Char('o' | 'O') => Command::OpenInBrowser,
          _ => Command::None,
        }
      }
      Mode::Feed(view) => {
        let modifiers = key.modifiers;

        match key.code {
          KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
          KeyCode::Char('?') => Command::ShowHelp,
          KeyCode::Down | KeyCode::Char('j') => {
            view.select_next();
            Command::None
          }
          KeyCode::Up | KeyCode::Char('k') => {
            view.select_previous();
            Command::None
          }
          KeyCode::PageDown => {
            view.page_down(page);
            Command::None
          }
          KeyCode::PageUp => {
            view.page_up(page);
            Command::None
          }
          KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
            view.page_down(page);
            Command::None
          }
          KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            view.page_up(page);
            Command::None
          }
          KeyCode::Home => {
            view.select_first();
            Command::None
          }
          KeyCode::End => {
            view.select_last();
            Command::None
          }
          KeyCode::Enter => Command::OpenReplies,
          KeyCode::Char('n' | 'N' | ' ') => Command::ToggleNotes,
          KeyCode::Char('r' | 'R') => Command::Refresh,
          KeyCode::Char('o' | 'O') => Command::OpenInBrowser,
          KeyCode::Tab | KeyCode::Char('v' | 'V') => Command::SwitchView,
          _ => Command::None,
        }
      }
    }
  }
}
