//! Demo data generation.
//!
//! The seeder is an ordinary client of [`SocialGraph`]: it only calls `register`,
//! `add_post`, `update_follower`, `add_comment` and `update_like`. Picks come from a
//! seeded RNG, so a given [`SeedConfig`] always produces the same graph.

pub mod fixtures;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::drafts::DraftComment;
use crate::errors::{SocialError, UserError, ValidationError};
use crate::graph::SocialGraph;

pub use fixtures::{Fixtures, PhotoFixture, UserFixture};

/// Errors raised while preparing fixtures or populating a graph.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read fixtures from {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixtures: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fixture pool `{pool}` is empty")]
    EmptyFixtures { pool: &'static str },

    #[error("fixture `{pool}[{index}]` is invalid")]
    InvalidFixture {
        pool: &'static str,
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Social(#[from] SocialError),
}

/// How much activity the seeder generates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_posts_per_user")]
    pub posts_per_user: usize,
    /// Follow toggles attempted per user. Picks landing on the user themselves are skipped,
    /// and picking the same account twice unfollows it again.
    #[serde(default = "default_follows_per_user")]
    pub follows_per_user: usize,
    #[serde(default = "default_comments_per_post")]
    pub comments_per_post: usize,
    /// Like toggles per user; repeated picks of one post cancel out.
    #[serde(default = "default_likes_per_user")]
    pub likes_per_user: usize,
    /// JSON file replacing the built-in fixtures.
    #[serde(default)]
    pub fixtures: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            posts_per_user: default_posts_per_user(),
            follows_per_user: default_follows_per_user(),
            comments_per_post: default_comments_per_post(),
            likes_per_user: default_likes_per_user(),
            fixtures: None,
        }
    }
}

fn default_seed() -> u64 {
    42
}

fn default_posts_per_user() -> usize {
    15
}

fn default_follows_per_user() -> usize {
    15
}

fn default_comments_per_post() -> usize {
    7
}

fn default_likes_per_user() -> usize {
    75
}

/// Totals describing a seeded graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub users: usize,
    pub posts: usize,
    pub follows: usize,
    pub comments: usize,
    pub likes: usize,
}

impl SeedReport {
    pub fn from_graph(graph: &SocialGraph) -> Self {
        Self {
            users: graph.users().len(),
            posts: graph.posts().len(),
            follows: graph.users().iter().map(|user| user.following.len()).sum(),
            comments: graph.posts().iter().map(|post| post.comments.len()).sum(),
            likes: graph.posts().iter().map(|post| post.likes.len()).sum(),
        }
    }
}

pub struct Seeder {
    config: SeedConfig,
    fixtures: Fixtures,
    rng: StdRng,
}

impl Seeder {
    /// Build a seeder, loading fixtures from `config.fixtures` when set.
    pub fn new(config: SeedConfig) -> Result<Self, SeedError> {
        let fixtures = match &config.fixtures {
            Some(path) => Fixtures::from_json_file(path)?,
            None => Fixtures::default(),
        };
        Self::with_fixtures(config, fixtures)
    }

    pub fn with_fixtures(config: SeedConfig, fixtures: Fixtures) -> Result<Self, SeedError> {
        fixtures.check()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self { config, fixtures, rng })
    }

    /// Populate `graph` and report what it holds afterwards.
    pub fn populate(mut self, graph: &mut SocialGraph) -> Result<SeedReport, SeedError> {
        self.add_users(graph)?;
        self.add_posts(graph)?;
        self.add_follows(graph)?;
        self.add_comments(graph)?;
        self.add_likes(graph)?;

        let report = SeedReport::from_graph(graph);
        info!(
            "seeded {} users, {} posts, {} follows, {} comments, {} likes",
            report.users, report.posts, report.follows, report.comments, report.likes
        );
        Ok(report)
    }

    fn add_users(&mut self, graph: &mut SocialGraph) -> Result<(), SeedError> {
        for user in &self.fixtures.users {
            graph.register(user.into())?;
        }
        debug!("registered {} fixture users", self.fixtures.users.len());
        Ok(())
    }

    fn add_posts(&mut self, graph: &mut SocialGraph) -> Result<(), SeedError> {
        for user_id in user_ids(graph) {
            for _ in 0..self.config.posts_per_user {
                let photo = &self.fixtures.photos[self.rng.gen_range(0..self.fixtures.photos.len())];
                graph.add_post(&user_id, photo.into())?;
            }
        }
        Ok(())
    }

    fn add_follows(&mut self, graph: &mut SocialGraph) -> Result<(), SeedError> {
        let ids = user_ids(graph);
        for user_id in &ids {
            for _ in 0..self.config.follows_per_user {
                let target = &ids[self.rng.gen_range(0..ids.len())];
                if target != user_id {
                    graph.update_follower(user_id, target)?;
                }
            }
        }
        Ok(())
    }

    fn add_comments(&mut self, graph: &mut SocialGraph) -> Result<(), SeedError> {
        let users = user_ids(graph);
        let posts: Vec<String> = graph.posts().iter().map(|post| post.id.clone()).collect();
        for post_id in &posts {
            for _ in 0..self.config.comments_per_post {
                let body = &self.fixtures.comments[self.rng.gen_range(0..self.fixtures.comments.len())];
                let author = &users[self.rng.gen_range(0..users.len())];
                graph.add_comment(post_id, author, DraftComment::new(body.as_str()))?;
            }
        }
        Ok(())
    }

    fn add_likes(&mut self, graph: &mut SocialGraph) -> Result<(), SeedError> {
        let posts: Vec<String> = graph.posts().iter().map(|post| post.id.clone()).collect();
        if posts.is_empty() {
            return Ok(());
        }
        for user_id in user_ids(graph) {
            for _ in 0..self.config.likes_per_user {
                let post_id = &posts[self.rng.gen_range(0..posts.len())];
                graph.update_like(post_id, &user_id)?;
            }
        }
        Ok(())
    }
}

fn user_ids(graph: &SocialGraph) -> Vec<String> {
    graph.users().iter().map(|user| user.id.clone()).collect()
}
