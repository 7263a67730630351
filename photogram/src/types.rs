use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::ValidationResult;

/// Trait for externally supplied records that are checked before use.
///
/// This trait is automatically implemented by `#[derive(Draft)]`. Fields opt into
/// `#[draft(required)]`, `#[draft(email)]` and `#[draft(max_len = N)]`.
pub trait Draft {
    /// Name used in log output for this draft kind.
    const KIND: &'static str;

    /// Check every field rule and collect all failures.
    fn validate(&self) -> ValidationResult<()>;
}

/// A registered account and its outgoing follow edges.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub image: String,
    /// Ids of the users this user follows, in the order the follows were made.
    pub following: Vec<String>,
}

impl User {
    /// Whether this user currently follows `user_id`.
    pub fn follows(&self, user_id: &str) -> bool {
        self.following.iter().any(|id| id == user_id)
    }

    pub(crate) fn toggle_following(&mut self, user_id: &str) -> bool {
        toggle_membership(&mut self.following, user_id)
    }
}

/// A published photo with its discussion and likes.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: String,
    pub image: String,
    pub description: String,
    /// Id of the owning user.
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub comments: Vec<Comment>,
    /// Ids of the users who currently like the post.
    pub likes: Vec<String>,
}

impl Post {
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub(crate) fn toggle_like(&mut self, user_id: &str) -> bool {
        toggle_membership(&mut self.likes, user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: String,
    pub body: String,
    pub user_id: String,
}

/// Removes `id` if present, appends it otherwise. Returns true when the id is now a member.
fn toggle_membership(members: &mut Vec<String>, id: &str) -> bool {
    match members.iter().position(|member| member == id) {
        Some(index) => {
            members.remove(index);
            false
        }
        None => {
            members.push(id.to_string());
            true
        }
    }
}
