//! Presentation wrappers pairing graph records with the names they reference.

use comfy_table::{Cell, Table};
use serde::Serialize;

use photogram::seed::SeedReport;
use photogram::{Comment, Post, SocialGraph, User};

use crate::output::{OutputManager, TableDisplay};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DESCRIPTION_PREVIEW: usize = 48;

#[derive(Serialize)]
pub struct PostView<'a> {
    #[serde(flatten)]
    pub post: &'a Post,
    pub author: &'a str,
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct PostList<'a>(pub Vec<PostView<'a>>);

#[derive(Serialize)]
#[serde(transparent)]
pub struct UserList<'a>(pub Vec<&'a User>);

#[derive(Serialize)]
pub struct CommentView<'a> {
    #[serde(flatten)]
    pub comment: &'a Comment,
    pub author: &'a str,
}

#[derive(Serialize)]
pub struct PostDetail<'a> {
    #[serde(flatten)]
    pub view: PostView<'a>,
    pub comments: Vec<CommentView<'a>>,
    pub liked_by: Vec<&'a str>,
}

/// Resolve a user id to a display name.
pub fn user_name<'a>(graph: &'a SocialGraph, user_id: &str) -> &'a str {
    graph.get_user(user_id).map(|user| user.name.as_str()).unwrap_or("unknown")
}

impl<'a> PostList<'a> {
    pub fn new(graph: &'a SocialGraph, posts: Vec<&'a Post>) -> Self {
        Self(
            posts
                .into_iter()
                .map(|post| PostView {
                    post,
                    author: user_name(graph, &post.user_id),
                })
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> PostDetail<'a> {
    pub fn new(graph: &'a SocialGraph, post: &'a Post) -> Self {
        Self {
            view: PostView {
                post,
                author: user_name(graph, &post.user_id),
            },
            comments: post
                .comments
                .iter()
                .map(|comment| CommentView {
                    comment,
                    author: user_name(graph, &comment.user_id),
                })
                .collect(),
            liked_by: post.likes.iter().map(|id| user_name(graph, id)).collect(),
        }
    }
}

impl TableDisplay for PostList<'_> {
    fn to_table(&self, output: &OutputManager) -> Table {
        let mut table = output.create_table();
        output.add_table_header(&mut table, &["Id", "Author", "Date", "Likes", "Comments", "Description"]);
        for view in &self.0 {
            table.add_row(vec![
                Cell::new(&view.post.id),
                Cell::new(view.author),
                Cell::new(view.post.date.format(DATE_FORMAT)),
                Cell::new(view.post.like_count()),
                Cell::new(view.post.comments.len()),
                Cell::new(preview(&view.post.description)),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.0
            .iter()
            .map(|view| format!("{} @{} {}", view.post.id, view.author, view.post.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TableDisplay for UserList<'_> {
    fn to_table(&self, output: &OutputManager) -> Table {
        let mut table = output.create_table();
        output.add_table_header(&mut table, &["Id", "Name", "Email", "Following"]);
        for user in &self.0 {
            table.add_row(vec![
                Cell::new(&user.id),
                Cell::new(&user.name),
                Cell::new(&user.email),
                Cell::new(user.following.len()),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.0
            .iter()
            .map(|user| format!("{} {} <{}>", user.id, user.name, user.email))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TableDisplay for SeedReport {
    fn to_table(&self, output: &OutputManager) -> Table {
        let mut table = output.create_table();
        output.add_table_header(&mut table, &["Records", "Count"]);
        for (label, count) in [
            ("users", self.users),
            ("posts", self.posts),
            ("follows", self.follows),
            ("comments", self.comments),
            ("likes", self.likes),
        ] {
            table.add_row(vec![Cell::new(label), Cell::new(count)]);
        }
        table
    }

    fn to_compact(&self) -> String {
        format!(
            "users={} posts={} follows={} comments={} likes={}",
            self.users, self.posts, self.follows, self.comments, self.likes
        )
    }
}

impl TableDisplay for PostDetail<'_> {
    fn to_table(&self, output: &OutputManager) -> Table {
        let mut table = output.create_table();
        output.add_table_header(&mut table, &["Author", "Comment"]);
        for view in &self.comments {
            table.add_row(vec![Cell::new(view.author), Cell::new(&view.comment.body)]);
        }
        table
    }

    fn to_compact(&self) -> String {
        format!(
            "{} @{} likes={} comments={}",
            self.view.post.id,
            self.view.author,
            self.liked_by.len(),
            self.comments.len()
        )
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_PREVIEW {
        return text.to_string();
    }
    let cut: String = text.chars().take(DESCRIPTION_PREVIEW - 1).collect();
    format!("{cut}…")
}
