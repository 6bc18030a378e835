use serde::{Deserialize, Serialize};

/// Post entity - the only resource served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub body: String,
    #[serde(alias = "userId")]
    pub user_id: i32,
}

/// A validated create payload; the id is assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: i32,
}

impl NewPost {
    /// Attach a backend-assigned id.
    pub fn with_id(self, id: i32) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
            user_id: self.user_id,
        }
    }
}

/// A validated partial update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: Option<i32>,
}

impl PostPatch {
    /// Overwrite the supplied fields of `post` in place.
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(body) = self.body {
            post.body = body;
        }
        if let Some(user_id) = self.user_id {
            post.user_id = user_id;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.user_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post {
            id: 1,
            title: "first".to_string(),
            body: "line one\nline two".to_string(),
            user_id: 7,
        }
    }

    #[test]
    fn test_apply_overwrites_only_supplied_fields() {
        let mut post = sample();
        PostPatch {
            title: Some("T".to_string()),
            ..Default::default()
        }
        .apply(&mut post);

        assert_eq!(post.title, "T");
        assert_eq!(post.body, "line one\nline two");
        assert_eq!(post.user_id, 7);
        assert_eq!(post.id, 1);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut post = sample();
        let patch = PostPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut post);
        assert_eq!(post, sample());
    }

    #[test]
    fn test_serializes_snake_case_and_accepts_camel_alias() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["user_id"], 7);
        assert!(json.get("userId").is_none());

        let parsed: Post =
            serde_json::from_str(r#"{"id":2,"title":"a","body":"b","userId":3}"#).unwrap();
        assert_eq!(parsed.user_id, 3);
    }
}
