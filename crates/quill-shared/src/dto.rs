//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use quill_core::domain::{Author, NewPost, Post, PostPatch};

/// Author fields as they appear on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl From<AuthorPayload> for Author {
    fn from(payload: AuthorPayload) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
        }
    }
}

/// Request to create a post. Every field is checked by [`validate`]
/// before the record is built.
///
/// [`validate`]: CreatePostRequest::validate
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorPayload>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreatePostRequest {
    /// Check the payload against the record schema: `title`, `author` and
    /// `content` must all be present, and `title` must be non-empty.
    /// Returns the validated record or the list of field errors.
    pub fn validate(self) -> Result<NewPost, Vec<String>> {
        let mut errors = Vec::new();

        let title = match self.title {
            Some(title) if !title.trim().is_empty() => Some(title),
            Some(_) => {
                errors.push("`title` must be a non-empty string".to_string());
                None
            }
            None => {
                errors.push(missing("title"));
                None
            }
        };

        let author = match self.author {
            Some(author) => Some(Author::from(author)),
            None => {
                errors.push(missing("author"));
                None
            }
        };

        if self.content.is_none() {
            errors.push(missing("content"));
        }

        match (title, author) {
            (Some(title), Some(author)) if errors.is_empty() => Ok(NewPost {
                title,
                author,
                content: self.content,
            }),
            _ => Err(errors),
        }
    }
}

fn missing(field: &str) -> String {
    format!("Missing `{field}` in request body")
}

/// Request to update a post. Fields left out of the body keep their
/// stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorPayload>,
    #[serde(default)]
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn into_patch(self) -> PostPatch {
        PostPatch {
            title: self.title,
            author: self.author.map(Into::into),
            content: self.content,
        }
    }
}

/// Public view of a stored post. This is the only projection the API
/// exposes; the raw author sub-object never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub author: String,
    pub created: String,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author_name(),
            created: post.created.to_rfc3339(),
        }
    }
}
