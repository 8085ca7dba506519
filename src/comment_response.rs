use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentResponse {
  #[serde(default)]
  pub(crate) comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_comments_field_defaults_to_empty() {
    let response = serde_json::from_str::<CommentResponse>("{}").unwrap();
    assert!(response.comments.is_empty());
  }

  #[test]
  fn payload_parses_nested_replies_and_vote_defaults() {
    let payload = r#"{
      "comments": [
        {
          "id": "aaa",
          "author": "tipster",
          "body": "Arsenal ML @ 1.85\nfeeling good about this one",
          "picks": "Arsenal ML @ 1.85",
          "notes": "**tipster:** feeling good about this one",
          "ups": 12,
          "downs": 1,
          "replies": [
            {
              "id": "bbb",
              "author": "doubter",
              "body": "Chelsea's press will smother them",
              "picks": "",
              "notes": "",
              "replies": []
            }
          ]
        }
      ]
    }"#;

    let response = serde_json::from_str::<CommentResponse>(payload).unwrap();

    assert_eq!(response.comments.len(), 1);

    let comment = &response.comments[0];
    assert_eq!(comment.author(), "tipster");
    assert_eq!(comment.ups, 12);
    assert_eq!(comment.reply_count(), 1);

    let reply = &comment.replies[0];
    assert_eq!(reply.ups, 0);
    assert_eq!(reply.downs, 0);
    assert_eq!(reply.picks(), None);
    assert_eq!(reply.body(), Some("Chelsea's press will smother them"));
  }
}
