use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Comment {
  pub(crate) author: Option<String>,
  pub(crate) body: Option<String>,
  #[serde(default)]
  pub(crate) downs: u64,
  pub(crate) id: Option<String>,
  pub(crate) notes: Option<String>,
  pub(crate) picks: Option<String>,
  #[serde(default)]
  pub(crate) replies: Vec<Comment>,
  #[serde(default)]
  pub(crate) ups: u64,
}

impl Comment {
  const THREAD_URL: &str = "https://www.reddit.com/r/SoccerBetting/comments/1q19f1t/daily_picks_thread_friday_2nd_january_2026/";

  pub(crate) fn author(&self) -> &str {
    self
      .author
      .as_deref()
      .filter(|author| !author.is_empty())
      .unwrap_or("unknown")
  }

  pub(crate) fn body(&self) -> Option<&str> {
    self
      .body
      .as_deref()
      .filter(|body| !body.trim().is_empty())
  }

  pub(crate) fn notes(&self) -> Option<&str> {
    self
      .notes
      .as_deref()
      .filter(|notes| !notes.trim().is_empty())
  }

  pub(crate) fn permalink(&self) -> String {
    self
      .id
      .as_deref()
      .filter(|id| !id.is_empty())
      .map_or_else(
        || Self::THREAD_URL.to_string(),
        |id| format!("{}{id}/", Self::THREAD_URL),
      )
  }

  pub(crate) fn picks(&self) -> Option<&str> {
    self
      .picks
      .as_deref()
      .filter(|picks| !picks.trim().is_empty())
  }

  pub(crate) fn reply_count(&self) -> usize {
    self.replies.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn bare_comment() -> Comment {
    Comment {
      author: None,
      body: None,
      downs: 0,
      id: None,
      notes: None,
      picks: None,
      replies: Vec::new(),
      ups: 0,
    }
  }

  #[test]
  fn author_falls_back_to_unknown() {
    let mut comment = bare_comment();
    assert_eq!(comment.author(), "unknown");

    comment.author = Some(String::new());
    assert_eq!(comment.author(), "unknown");

    comment.author = Some("tipster".to_string());
    assert_eq!(comment.author(), "tipster");
  }

  #[test]
  fn blank_picks_and_notes_count_as_absent() {
    let mut comment = bare_comment();
    comment.picks = Some("  ".to_string());
    comment.notes = Some(String::new());

    assert_eq!(comment.picks(), None);
    assert_eq!(comment.notes(), None);

    comment.picks = Some("Arsenal ML @ 1.85".to_string());
    assert_eq!(comment.picks(), Some("Arsenal ML @ 1.85"));
  }

  #[test]
  fn permalink_appends_comment_id_when_present() {
    let mut comment = bare_comment();
    assert_eq!(comment.permalink(), Comment::THREAD_URL);

    comment.id = Some("abc123".to_string());
    assert_eq!(
      comment.permalink(),
      format!("{}abc123/", Comment::THREAD_URL)
    );
  }
}
