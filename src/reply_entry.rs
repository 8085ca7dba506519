use super::*;

#[derive(Clone, Debug)]
pub(crate) struct ReplyEntry {
  pub(crate) author: String,
  pub(crate) body: String,
  pub(crate) depth: usize,
  pub(crate) downs: u64,
  pub(crate) picks: Vec<String>,
  pub(crate) ups: u64,
}

impl ReplyEntry {
  pub(crate) fn flatten(replies: &[Comment]) -> Vec<Self> {
    let mut entries = Vec::new();

    for reply in replies {
      Self::push_reply(&mut entries, reply, 0);
    }

    entries
  }

  pub(crate) fn header(&self) -> String {
    format!("{} · {}", self.author, format_votes(self.ups, self.downs))
  }

  fn push_reply(entries: &mut Vec<Self>, reply: &Comment, depth: usize) {
    entries.push(Self {
      author: reply.author().to_string(),
      body: reply.body().map_or_else(String::new, clean_text),
      depth,
      downs: reply.downs,
      picks: reply.picks().map_or_else(Vec::new, clean_lines),
      ups: reply.ups,
    });

    for child in &reply.replies {
      Self::push_reply(entries, child, depth.saturating_add(1));
    }
  }
}
