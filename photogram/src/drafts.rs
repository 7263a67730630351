//! Input records accepted by the store's mutating operations.
//!
//! Fields are free-form: the store accepts any string, including empty ones.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DraftUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DraftPost {
    pub image: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DraftComment {
    pub body: String,
}

impl DraftUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            image: image.into(),
        }
    }
}

impl DraftPost {
    pub fn new(image: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            description: description.into(),
        }
    }
}

impl DraftComment {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
