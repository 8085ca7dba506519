use super::*;

pub(crate) struct CardView {
  pub(crate) cards: Vec<Card>,
  index: usize,
}

impl CardView {
  pub(crate) fn current(&self) -> Option<&Card> {
    self.cards.get(self.index)
  }

  pub(crate) fn index(&self) -> usize {
    self.index
  }

  pub(crate) fn is_first(&self) -> bool {
    self.index == 0
  }

  pub(crate) fn is_last(&self) -> bool {
    self.index.saturating_add(1) >= self.cards.len()
  }

  pub(crate) fn len(&self) -> usize {
    self.cards.len()
  }

  pub(crate) fn new(comments: &[Comment]) -> Self {
    Self {
      cards: comments.iter().cloned().map(Card::new).collect(),
      index: 0,
    }
  }

  pub(crate) fn select_first(&mut self) {
    self.index = 0;
  }

  pub(crate) fn select_last(&mut self) {
    self.index = self.cards.len().saturating_sub(1);
  }

  pub(crate) fn select_next(&mut self) {
    if !self.is_last() {
      self.index = self.index.saturating_add(1);
    }
  }

  pub(crate) fn select_previous(&mut self) {
    self.index = self.index.saturating_sub(1);
  }

  pub(crate) fn toggle_notes(&mut self) {
    if let Some(card) = self.cards.get_mut(self.index) {
      card.toggle_notes();
    }
  }
}
