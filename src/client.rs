use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
  feed_url: String,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      client: reqwest::Client::new(),
      feed_url: Self::feed_url(),
    }
  }
}

impl Client {
  const DEFAULT_FEED_URL: &str = "http://127.0.0.1:5000/api/comments";

  const FEED_URL_VAR: &str = "PICKS_FEED_URL";

  fn feed_url() -> String {
    env::var(Self::FEED_URL_VAR)
      .unwrap_or_else(|_| Self::DEFAULT_FEED_URL.to_string())
  }

  pub(crate) async fn fetch_comments(&self) -> Result<Vec<Comment>> {
    Ok(
      self
        .client
        .get(self.feed_url.as_str())
        .send()
        .await?
        .error_for_status()?
        .json::<CommentResponse>()
        .await?
        .comments,
    )
  }
}
