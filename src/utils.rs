pub(crate) fn clean_lines(text: &str) -> Vec<String> {
  text
    .lines()
    .map(clean_text)
    .filter(|line| !line.is_empty())
    .collect()
}

pub(crate) fn clean_text(text: &str) -> String {
  let decoded = html_escape::decode_html_entities(text);

  decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn format_replies(count: usize) -> String {
  match count {
    1 => "1 reply".to_string(),
    _ => format!("{count} replies"),
  }
}

pub(crate) fn format_votes(ups: u64, downs: u64) -> String {
  format!("▲ {ups} ▼ {downs}")
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(current);
      current = word.to_string();
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clean_lines_drops_blank_lines_and_decodes_each() {
    assert_eq!(
      clean_lines("Inter ML &amp; over\n\n  Draw no bet  "),
      vec!["Inter ML & over".to_string(), "Draw no bet".to_string()]
    );
  }

  #[test]
  fn clean_text_decodes_entities_and_collapses_whitespace() {
    assert_eq!(
      clean_text("Sporting ML &amp; BTTS   @ 2.38\n\tgood value"),
      "Sporting ML & BTTS @ 2.38 good value"
    );
  }

  #[test]
  fn clean_text_decodes_numeric_entities() {
    assert_eq!(
      clean_text("odds &#x2F; lines &#47; value"),
      "odds / lines / value"
    );
  }

  #[test]
  fn format_replies_handles_singular_and_plural() {
    assert_eq!(format_replies(1), "1 reply");
    assert_eq!(format_replies(2), "2 replies");
    assert_eq!(format_replies(0), "0 replies");
  }

  #[test]
  fn format_votes_shows_both_directions() {
    assert_eq!(format_votes(12, 3), "▲ 12 ▼ 3");
    assert_eq!(format_votes(0, 0), "▲ 0 ▼ 0");
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }

  #[test]
  fn wrap_text_does_not_wrap_when_within_width() {
    assert_eq!(wrap_text("short text", 20), vec!["short text".to_string()]);
  }
}
