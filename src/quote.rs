use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Quote {
  pub(crate) author: String,
  pub(crate) text: String,
}

impl Quote {
  fn from_section(section: &str) -> Option<Self> {
    let section = section.trim();

    let rest = section.strip_prefix("**")?;

    let (author, text) = rest.split_once(":**")?;

    let author = clean_text(author);
    let text = clean_text(text);

    if author.is_empty() || text.is_empty() {
      return None;
    }

    Some(Self { author, text })
  }

  fn is_delimiter(line: &str) -> bool {
    let line = line.trim();

    line.len() >= 3 && line.chars().all(|ch| ch == '-')
  }

  pub(crate) fn parse(notes: &str) -> Vec<Self> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for line in notes.lines() {
      if Self::is_delimiter(line) {
        sections.push(std::mem::take(&mut current));
      } else {
        if !current.is_empty() {
          current.push('\n');
        }

        current.push_str(line);
      }
    }

    sections.push(current);

    sections
      .iter()
      .filter_map(|section| Self::from_section(section))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_splits_sections_and_strips_markers() {
    let quotes = Quote::parse("**Alice:** Great point\n---\n**Bob:** Disagree");

    assert_eq!(
      quotes,
      vec![
        Quote {
          author: "Alice".to_string(),
          text: "Great point".to_string(),
        },
        Quote {
          author: "Bob".to_string(),
          text: "Disagree".to_string(),
        },
      ]
    );
  }

  #[test]
  fn parse_decodes_html_entities() {
    let quotes =
      Quote::parse("**Alice &amp; Bob:** Over 2.5 &amp; BTTS looks live");

    assert_eq!(
      quotes,
      vec![Quote {
        author: "Alice & Bob".to_string(),
        text: "Over 2.5 & BTTS looks live".to_string(),
      }]
    );
  }

  #[test]
  fn parse_accepts_longer_delimiter_lines() {
    let quotes = Quote::parse(
      "**Alice:** First\n-------\n**Bob:** Second\n----\n**Cara:** Third",
    );

    let authors: Vec<&str> =
      quotes.iter().map(|quote| quote.author.as_str()).collect();

    assert_eq!(authors, vec!["Alice", "Bob", "Cara"]);
  }

  #[test]
  fn parse_skips_sections_without_marker() {
    let quotes = Quote::parse("just some rambling\n---\n**Bob:** Disagree");

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].author, "Bob");
  }

  #[test]
  fn parse_skips_sections_that_reduce_to_empty_text() {
    let quotes = Quote::parse("**Alice:**   \n---\n**:** orphaned text");

    assert!(quotes.is_empty());
  }

  #[test]
  fn parse_joins_multiline_section_text() {
    let quotes = Quote::parse(
      "**Alice:** Great point\nand a second line\n---\n**Bob:** Disagree",
    );

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].text, "Great point and a second line");
  }

  #[test]
  fn parse_ignores_short_dash_runs_and_inline_dashes() {
    let quotes = Quote::parse("**Alice:** a -- b\n--\nstill Alice's section");

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].text, "a -- b -- still Alice's section");
  }

  #[test]
  fn parse_returns_empty_for_empty_notes() {
    assert!(Quote::parse("").is_empty());
  }
}
