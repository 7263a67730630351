//! The in-memory social graph: users, posts and the relationships between them.
//!
//! Records refer to each other by id. A post's owner, a comment's author, a like and a
//! follow edge all resolve back to the single `User` held by the graph, so nothing is
//! copied between records.
//!
//! Operations take `&mut self` for writes and `&self` for reads; callers sharing a graph
//! across threads must serialize writers themselves.

mod queries;

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::clock::{Clock, SystemClock};
use crate::drafts::{DraftComment, DraftPost, DraftUser};
use crate::errors::{PostError, SocialError, UserError};
use crate::id::{IdGenerator, IdStrategy};
use crate::types::{Comment, Post, User};

/// Construction options for [`SocialGraph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

/// Owns every user and post and exposes the operations over them.
pub struct SocialGraph {
    users: Vec<User>,
    posts: Vec<Post>,
    ids: IdGenerator,
    clock: Box<dyn Clock>,
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SocialGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocialGraph")
            .field("users", &self.users.len())
            .field("posts", &self.posts.len())
            .field("comments_issued", &self.ids.comments_issued())
            .field("id_strategy", &self.ids.strategy())
            .finish()
    }
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            users: Vec::new(),
            posts: Vec::new(),
            ids: IdGenerator::new(options.id_strategy),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the timestamp source used for new posts.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Registered users in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Live posts in creation order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Number of comments ever created, including those removed with their post.
    pub fn comments_issued(&self) -> u64 {
        self.ids.comments_issued()
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.ids.strategy()
    }

    /// Create a user from `draft`. Emails must be unique across the graph.
    pub fn register(&mut self, draft: DraftUser) -> Result<&User, UserError> {
        if self.users.iter().any(|user| user.email == draft.email) {
            return Err(UserError::AlreadyExists { email: draft.email });
        }

        let DraftUser {
            name,
            email,
            password,
            image,
        } = draft;
        let id = self.ids.next_user_id(self.users.len());
        debug!("registered {id} <{email}>");
        self.users.push(User {
            id,
            name,
            email,
            password,
            image,
            following: Vec::new(),
        });
        Ok(&self.users[self.users.len() - 1])
    }

    /// Find the user with exactly this email and password.
    pub fn login(&self, email: &str, password: &str) -> Result<&User, UserError> {
        self.users
            .iter()
            .find(|user| user.email == email && user.password == password)
            .ok_or(UserError::InvalidCredentials)
    }

    pub fn get_user(&self, id: &str) -> Result<&User, UserError> {
        self.user_index(id).map(|index| &self.users[index])
    }

    pub fn get_post(&self, id: &str) -> Result<&Post, PostError> {
        self.post_index(id).map(|index| &self.posts[index])
    }

    /// Publish a new post owned by `user_id`, stamped with the graph's clock.
    pub fn add_post(&mut self, user_id: &str, draft: DraftPost) -> Result<&Post, SocialError> {
        self.user_index(user_id)?;

        let id = self.ids.next_post_id(self.posts.len());
        debug!("{user_id} published {id}");
        self.posts.push(Post {
            id,
            image: draft.image,
            description: draft.description,
            user_id: user_id.to_string(),
            date: self.clock.now(),
            comments: Vec::new(),
            likes: Vec::new(),
        });
        Ok(&self.posts[self.posts.len() - 1])
    }

    /// Overwrite a post's image and description. Everything else is left as is.
    pub fn edit_post(&mut self, id: &str, draft: DraftPost) -> Result<&Post, PostError> {
        let index = self.post_index(id)?;

        let post = &mut self.posts[index];
        post.image = draft.image;
        post.description = draft.description;
        debug!("edited {id}");
        Ok(&*post)
    }

    /// Remove a post together with its comments and likes, returning it.
    pub fn delete_post(&mut self, id: &str) -> Result<Post, PostError> {
        let index = self.post_index(id)?;
        let post = self.posts.remove(index);
        debug!(
            "deleted {id} with {} comments and {} likes",
            post.comments.len(),
            post.likes.len()
        );
        Ok(post)
    }

    /// Append a comment by `user_id` to the post and return the updated post.
    pub fn add_comment(&mut self, post_id: &str, user_id: &str, draft: DraftComment) -> Result<&Post, SocialError> {
        self.user_index(user_id)?;
        let index = self.post_index(post_id)?;

        let id = self.ids.next_comment_id();
        debug!("{user_id} commented {id} on {post_id}");
        let post = &mut self.posts[index];
        post.comments.push(Comment {
            id,
            body: draft.body,
            user_id: user_id.to_string(),
        });
        Ok(&*post)
    }

    /// Toggle whether `user_id` likes the post.
    pub fn update_like(&mut self, post_id: &str, user_id: &str) -> Result<&Post, SocialError> {
        self.user_index(user_id)?;
        let index = self.post_index(post_id)?;

        let post = &mut self.posts[index];
        let liked = post.toggle_like(user_id);
        debug!("{user_id} {} {post_id}", if liked { "liked" } else { "unliked" });
        Ok(&*post)
    }

    /// Toggle whether `from_user_id` follows `to_user_id`.
    ///
    /// The edge lives on the follower's record (`User::following`), which is what
    /// [`SocialGraph::timeline`] reads.
    pub fn update_follower(&mut self, from_user_id: &str, to_user_id: &str) -> Result<&User, UserError> {
        let from = self.user_index(from_user_id)?;
        self.user_index(to_user_id)?;
        if from_user_id == to_user_id {
            return Err(UserError::SelfFollow {
                user_id: from_user_id.to_string(),
            });
        }

        let user = &mut self.users[from];
        let following = user.toggle_following(to_user_id);
        debug!(
            "{from_user_id} {} {to_user_id}",
            if following { "followed" } else { "unfollowed" }
        );
        Ok(&*user)
    }

    fn user_index(&self, id: &str) -> Result<usize, UserError> {
        self.users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| UserError::NotFound { user_id: id.to_string() })
    }

    fn post_index(&self, id: &str) -> Result<usize, PostError> {
        self.posts
            .iter()
            .position(|post| post.id == id)
            .ok_or_else(|| PostError::NotFound { post_id: id.to_string() })
    }
}
