use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured author value stored on a post. Both parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Author {
    /// Display name: `"first last"` with missing parts skipped,
    /// trimmed of surrounding whitespace.
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }
}

/// Post entity - a single blog post record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: Option<String>,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post with generated ID and creation timestamp.
    pub fn new(title: String, author: Author, content: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
            created: Utc::now(),
        }
    }

    /// The derived author display name exposed in the public view.
    pub fn author_name(&self) -> String {
        self.author.full_name()
    }
}

/// A validated create payload. `id` and `created` are assigned by
/// [`Post::new`] when the record is stored.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub author: Author,
    pub content: Option<String>,
}

/// Partial update carrier. `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub author: Option<Author>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.content.is_none()
    }
}
