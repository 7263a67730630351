use log::trace;

use super::SocialGraph;
use crate::errors::UserError;
use crate::types::{Post, User};

impl SocialGraph {
    /// Posts whose description contains `#{tag}`, newest first.
    ///
    /// Matching is a case-sensitive substring test, so `"travel"` also matches `#travelling`.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Post> {
        let needle = format!("#{tag}");
        let found = newest_first(self.posts.iter().filter(|post| post.description.contains(&needle)));
        trace!("tag {needle} matched {} posts", found.len());
        found
    }

    /// Posts owned by any user whose name contains `name`, newest first.
    pub fn search_by_user_name(&self, name: &str) -> Vec<&Post> {
        let owners: Vec<&str> = self
            .users
            .iter()
            .filter(|user| user.name.contains(name))
            .map(|user| user.id.as_str())
            .collect();
        newest_first(
            self.posts
                .iter()
                .filter(|post| owners.contains(&post.user_id.as_str())),
        )
    }

    /// Posts owned by `user_id`, newest first.
    pub fn search_by_user_id(&self, user_id: &str) -> Result<Vec<&Post>, UserError> {
        let user = self.get_user(user_id)?;
        Ok(newest_first(self.posts.iter().filter(|post| post.user_id == user.id)))
    }

    /// Users whose name contains `name`, alphabetical. An empty query matches nobody.
    pub fn search_by_name(&self, name: &str) -> Vec<&User> {
        if name.is_empty() {
            return Vec::new();
        }
        let mut found: Vec<&User> = self.users.iter().filter(|user| user.name.contains(name)).collect();
        found.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        found
    }

    /// Posts by the accounts `user_id` follows, newest first.
    pub fn timeline(&self, user_id: &str) -> Result<Vec<&Post>, UserError> {
        let user = self.get_user(user_id)?;
        let found = newest_first(self.posts.iter().filter(|post| user.follows(&post.user_id)));
        trace!("timeline for {user_id} holds {} posts", found.len());
        Ok(found)
    }
}

/// Collects and sorts by date descending. The sort is stable, so equal
/// timestamps keep creation order.
fn newest_first<'a>(posts: impl Iterator<Item = &'a Post>) -> Vec<&'a Post> {
    let mut posts: Vec<&Post> = posts.collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}
