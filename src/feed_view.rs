use super::*;

pub(crate) struct FeedView {
  pub(crate) cards: Vec<Card>,
  offset: usize,
  selected: usize,
}

impl FeedView {
  pub(crate) fn len(&self) -> usize {
    self.cards.len()
  }

  pub(crate) fn new(comments: &[Comment]) -> Self {
    Self {
      cards: comments.iter().cloned().map(Card::new).collect(),
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.cards.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.set_selected(self.selected.saturating_add(step));
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.set_selected(self.selected.saturating_sub(step));
  }

  pub(crate) fn select_first(&mut self) {
    self.set_selected(0);
  }

  pub(crate) fn select_last(&mut self) {
    self.set_selected(self.cards.len().saturating_sub(1));
  }

  pub(crate) fn select_next(&mut self) {
    self.set_selected(self.selected.saturating_add(1));
  }

  pub(crate) fn select_previous(&mut self) {
    self.set_selected(self.selected.saturating_sub(1));
  }

  pub(crate) fn selected_card(&self) -> Option<&Card> {
    self
      .selected_index()
      .and_then(|index| self.cards.get(index))
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.cards.is_empty() {
      None
    } else {
      Some(self.selected.min(self.cards.len().saturating_sub(1)))
    }
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.cards.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.cards.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.cards.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.cards.len().saturating_sub(1));
    }
  }

  pub(crate) fn toggle_selected_notes(&mut self) {
    if let Some(index) = self.selected_index()
      && let Some(card) = self.cards.get_mut(index)
    {
      card.toggle_notes();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_comment(author: &str, notes: Option<&str>) -> Comment {
    Comment {
      author: Some(author.to_string()),
      body: None,
      downs: 0,
      id: None,
      notes: notes.map(str::to_string),
      picks: Some("Arsenal ML".to_string()),
      replies: Vec::new(),
      ups: 1,
    }
  }

  fn sample_view() -> FeedView {
    FeedView::new(&[
      sample_comment("alpha", Some("**alpha:** line")),
      sample_comment("beta", None),
      sample_comment("gamma", Some("**gamma:** line")),
    ])
  }

  #[test]
  fn empty_view_has_no_selection() {
    let view = FeedView::new(&[]);
    assert_eq!(view.selected_index(), None);
    assert!(view.selected_card().is_none());
  }

  #[test]
  fn selection_is_clamped_to_bounds() {
    let mut view = sample_view();

    view.select_previous();
    assert_eq!(view.selected_index(), Some(0));

    view.set_selected(10);
    assert_eq!(view.selected_index(), Some(2));

    view.select_next();
    assert_eq!(view.selected_index(), Some(2));
  }

  #[test]
  fn page_moves_jump_by_page_size() {
    let mut view = sample_view();

    view.page_down(3);
    assert_eq!(view.selected_index(), Some(2));

    view.page_up(3);
    assert_eq!(view.selected_index(), Some(0));
  }

  #[test]
  fn toggles_are_independent_across_cards() {
    let mut view = sample_view();

    view.toggle_selected_notes();
    assert!(view.cards[0].notes_open);
    assert!(!view.cards[2].notes_open);

    view.select_next();
    view.select_next();
    view.toggle_selected_notes();
    assert!(view.cards[0].notes_open);
    assert!(view.cards[2].notes_open);
  }

  #[test]
  fn toggle_on_card_without_notes_changes_nothing() {
    let mut view = sample_view();

    view.select_next();
    view.toggle_selected_notes();

    assert!(view.cards.iter().all(|card| !card.notes_open));
  }

  #[test]
  fn even_number_of_toggles_restores_original_state() {
    let mut view = sample_view();
    let original_label = view.cards[0].notes_toggle_label();

    for _ in 0..4 {
      view.toggle_selected_notes();
    }

    assert!(!view.cards[0].notes_open);
    assert_eq!(view.cards[0].notes_toggle_label(), original_label);
  }
}
