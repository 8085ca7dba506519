use super::*;

pub(crate) struct Card {
  pub(crate) comment: Comment,
  pub(crate) notes_open: bool,
}

impl Card {
  const MAX_QUOTES: usize = 2;

  pub(crate) fn author(&self) -> &str {
    self.comment.author()
  }

  pub(crate) fn has_notes(&self) -> bool {
    self.comment.notes().is_some()
  }

  pub(crate) fn has_replies(&self) -> bool {
    !self.comment.replies.is_empty()
  }

  pub(crate) fn header(&self) -> String {
    format!(
      "{} · {}",
      self.author(),
      format_votes(self.comment.ups, self.comment.downs)
    )
  }

  pub(crate) fn new(comment: Comment) -> Self {
    Self {
      comment,
      notes_open: false,
    }
  }

  pub(crate) fn notes_lines(&self) -> Vec<String> {
    self.comment.notes().map_or_else(Vec::new, clean_lines)
  }

  pub(crate) fn notes_toggle_label(&self) -> &'static str {
    if self.notes_open {
      "[-] analysis"
    } else {
      "[+] analysis"
    }
  }

  pub(crate) fn pick_lines(&self) -> Vec<String> {
    self.comment.picks().map_or_else(Vec::new, clean_lines)
  }

  pub(crate) fn quotes(&self) -> Vec<Quote> {
    let mut quotes = self.comment.notes().map_or_else(Vec::new, Quote::parse);

    quotes.truncate(Self::MAX_QUOTES);

    quotes
  }

  pub(crate) fn replies_label(&self) -> Option<String> {
    self
      .has_replies()
      .then(|| format!("[{}]", format_replies(self.comment.reply_count())))
  }

  pub(crate) fn toggle_notes(&mut self) {
    if self.has_notes() {
      self.notes_open = !self.notes_open;
    }
  }
}
