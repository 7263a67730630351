//! Demo content used by the seeder.
//!
//! Fixture records are stricter than the store's drafts: seeded accounts must be able
//! to log in from the CLI, so every user needs a usable email and password.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::SeedError;
use crate::Draft;
use crate::drafts::{DraftPost, DraftUser};
use crate::errors::ValidationError;

/// An account the seeder registers.
#[derive(Draft, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFixture {
    #[draft(required)]
    pub name: String,
    #[draft(required, email)]
    pub email: String,
    #[draft(required)]
    pub password: String,
    pub image: String,
}

/// A photo the seeder publishes, possibly many times.
#[derive(Draft, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoFixture {
    #[draft(required)]
    pub image: String,
    pub description: String,
}

/// The pools the seeder draws users, photos and comment bodies from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixtures {
    pub users: Vec<UserFixture>,
    pub photos: Vec<PhotoFixture>,
    pub comments: Vec<String>,
}

impl From<&UserFixture> for DraftUser {
    fn from(user: &UserFixture) -> Self {
        DraftUser::new(&user.name, &user.email, &user.password, &user.image)
    }
}

impl From<&PhotoFixture> for DraftPost {
    fn from(photo: &PhotoFixture) -> Self {
        DraftPost::new(&photo.image, &photo.description)
    }
}

const USERS: &[(&str, &str)] = &[
    ("Valentina Gómez", "valentina"),
    ("Mateo Fernández", "mateo"),
    ("Camila Rodríguez", "camila"),
    ("Santiago López", "santiago"),
    ("Lucía Martínez", "lucia"),
    ("Benjamín Díaz", "benjamin"),
    ("Martina Pérez", "martina"),
    ("Joaquín Romero", "joaquin"),
    ("Sofía Álvarez", "sofia"),
    ("Tomás Acosta", "tomas"),
    ("Emilia Benítez", "emilia"),
    ("Thiago Medina", "thiago"),
];

const PHOTOS: &[&str] = &[
    "Golden hour at the pier #sunset #travel",
    "Morning espresso before work #coffee",
    "Trail run through the hills #running #nature",
    "Street food night market #food #travel",
    "New plant, who dis #plants",
    "Snow on the peaks again #mountains #nature",
    "Homemade pasta from scratch #food #cooking",
    "Late shift views from the office #city",
    "Lazy sunday with the dog #dogs",
    "Old town alleys #travel #architecture",
    "First attempt at latte art #coffee",
    "Rainy window, good book #reading",
    "Concert lights #music",
    "Weekend market haul #food",
    "Lake so still it looks fake #nature #sunset",
    "Skyline from the rooftop #city #architecture",
    "Ceramics class results #art",
    "Bike commute in the fog #city",
    "Tiny beach nobody knows about #travel #beach",
    "Sketchbook page of the day #art #drawing",
];

const COMMENTS: &[&str] = &[
    "Love this!",
    "Where is this?",
    "Amazing colors",
    "So jealous right now",
    "Take me with you next time",
    "This made my day",
    "Incredible shot",
    "Need the recipe",
    "Wow",
    "Great vibes",
    "Looks peaceful",
    "Goals",
    "Beautiful",
    "Haha perfect caption",
    "Can't stop looking at this",
];

impl Default for Fixtures {
    fn default() -> Self {
        let users = USERS
            .iter()
            .map(|(name, handle)| UserFixture {
                name: name.to_string(),
                email: format!("{handle}@photogram.dev"),
                password: format!("{handle}-password"),
                image: format!("https://i.pravatar.cc/150?u={handle}"),
            })
            .collect();
        let photos = PHOTOS
            .iter()
            .enumerate()
            .map(|(index, description)| PhotoFixture {
                image: format!("https://picsum.photos/id/{}/600/600", index + 10),
                description: description.to_string(),
            })
            .collect();
        let comments = COMMENTS.iter().map(|body| body.to_string()).collect();

        Self {
            users,
            photos,
            comments,
        }
    }
}

impl Fixtures {
    /// Load fixtures from a JSON file with `users`, `photos` and `comments` arrays.
    pub fn from_json_file(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixtures: Fixtures = serde_json::from_str(&content)?;
        fixtures.check()?;
        Ok(fixtures)
    }

    /// Every pool must be non-empty and every user and photo must pass its rules.
    pub fn check(&self) -> Result<(), SeedError> {
        self.ensure_non_empty()?;
        validate_pool("users", &self.users)?;
        validate_pool("photos", &self.photos)
    }

    fn ensure_non_empty(&self) -> Result<(), SeedError> {
        let empty = if self.users.is_empty() {
            Some("users")
        } else if self.photos.is_empty() {
            Some("photos")
        } else if self.comments.is_empty() {
            Some("comments")
        } else {
            None
        };
        match empty {
            Some(pool) => Err(SeedError::EmptyFixtures { pool }),
            None => Ok(()),
        }
    }
}

fn validate_pool<D: Draft>(pool: &'static str, records: &[D]) -> Result<(), SeedError> {
    for (index, record) in records.iter().enumerate() {
        record.validate().map_err(|source: ValidationError| {
            debug!("rejected {} #{index} with {} issue(s)", D::KIND, source.issues.len());
            SeedError::InvalidFixture { pool, index, source }
        })?;
    }
    Ok(())
}
