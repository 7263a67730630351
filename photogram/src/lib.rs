//! Photogram core library.
//!
//! An in-memory social graph for a photo-sharing prototype: users register and log in,
//! publish posts, comment, like and follow, and query posts by tag, author or timeline.
//! [`SocialGraph`] owns every record; the [`seed`] module populates one for demos.

extern crate self as photogram;

pub mod clock;
pub mod drafts;
pub mod errors;
pub mod graph;
pub mod id;
pub mod seed;
pub mod types;
pub mod validators;

pub use clock::{Clock, SystemClock};
pub use drafts::{DraftComment, DraftPost, DraftUser};
pub use errors::*;
pub use graph::{GraphOptions, SocialGraph};
pub use id::IdStrategy;
pub use photogram_macros::Draft;
pub use types::{Comment, Draft, Post, User};
