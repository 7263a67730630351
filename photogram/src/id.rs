use serde::{Deserialize, Serialize};

const USER_ID_PREFIX: &str = "user";
const POST_ID_PREFIX: &str = "post";
const COMMENT_ID_PREFIX: &str = "comment";

/// How user and post identifiers are derived.
///
/// Comment identifiers ignore the strategy: they always come from a single
/// store-wide counter that never resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `{kind}_{len + 1}` where `len` is the collection size before insertion.
    /// Deleting a post lets a later post reuse an id that is still live.
    CollectionSize,
    /// Per-kind counters that only ever grow.
    #[default]
    Monotonic,
}

/// Issues identifiers for new records. Counters advance only when an id is issued,
/// so callers must request ids after every precondition has passed.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdGenerator {
    strategy: IdStrategy,
    users_issued: u64,
    posts_issued: u64,
    comments_issued: u64,
}

impl IdGenerator {
    pub(crate) fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub(crate) fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub(crate) fn next_user_id(&mut self, current_len: usize) -> String {
        self.users_issued += 1;
        format_id(USER_ID_PREFIX, self.sequence(self.users_issued, current_len))
    }

    pub(crate) fn next_post_id(&mut self, current_len: usize) -> String {
        self.posts_issued += 1;
        format_id(POST_ID_PREFIX, self.sequence(self.posts_issued, current_len))
    }

    pub(crate) fn next_comment_id(&mut self) -> String {
        self.comments_issued += 1;
        format_id(COMMENT_ID_PREFIX, self.comments_issued)
    }

    pub(crate) fn comments_issued(&self) -> u64 {
        self.comments_issued
    }

    fn sequence(&self, issued: u64, current_len: usize) -> u64 {
        match self.strategy {
            IdStrategy::CollectionSize => current_len as u64 + 1,
            IdStrategy::Monotonic => issued,
        }
    }
}

fn format_id(prefix: &str, n: u64) -> String {
    format!("{prefix}_{n}")
}
