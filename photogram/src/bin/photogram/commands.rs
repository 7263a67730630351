use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use photogram::SocialGraph;
use photogram::seed::{SeedReport, Seeder};

use crate::config::AppConfig;
use crate::output::OutputManager;
use crate::views::{PostDetail, PostList, UserList};

#[derive(Subcommand)]
pub enum Commands {
    /// Seed a demo graph and print what it holds
    Seed,

    /// Find users whose name contains a substring
    Users {
        /// Case-sensitive substring of the user's name
        name: String,
    },

    /// List posts tagged with #<tag>, newest first
    Tag {
        /// Tag without the leading '#'
        tag: String,
    },

    /// List posts by author, newest first
    Posts(PostsArgs),

    /// Show posts from the accounts a user follows
    Timeline {
        /// Id of the user whose timeline to show (e.g. user_1)
        user_id: String,
    },

    /// Show one post with its comments and likes
    Show {
        /// Post id (e.g. post_3)
        post_id: String,
    },

    /// Check a demo account's credentials
    Login {
        email: String,
        password: String,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct PostsArgs {
    /// Match authors whose name contains this substring
    #[arg(long)]
    user_name: Option<String>,

    /// Match a single author by id
    #[arg(long)]
    user_id: Option<String>,
}

/// Sample invocations shown under a subcommand's `--help`.
pub fn examples(subcommand: &str) -> &'static [&'static str] {
    match subcommand {
        "seed" => &["photogram seed", "photogram --config demo.toml seed --output json"],
        "users" => &["photogram users Ma", "photogram users Sof --output compact"],
        "tag" => &["photogram tag travel", "photogram tag coffee --output json"],
        "posts" => &["photogram posts --user-name Sof", "photogram posts --user-id user_2"],
        "timeline" => &["photogram timeline user_3 --output compact"],
        "show" => &["photogram show post_3"],
        "login" => &["photogram login sofia@photogram.dev sofia-password"],
        _ => &[],
    }
}

/// Build a fresh graph from the configuration and populate it.
pub fn seeded_graph(config: &AppConfig) -> Result<(SocialGraph, SeedReport)> {
    let mut graph = SocialGraph::with_options(config.graph);
    let report = Seeder::new(config.seed.clone())
        .context("Failed to prepare seed fixtures")?
        .populate(&mut graph)
        .context("Failed to seed demo graph")?;
    Ok((graph, report))
}

pub fn handle_command(command: Commands, config: &AppConfig, output: &OutputManager) -> Result<()> {
    let (graph, report) = seeded_graph(config)?;

    match command {
        Commands::Seed => output.display(&report)?,
        Commands::Users { name } => {
            let users = graph.search_by_name(&name);
            if users.is_empty() && !output.is_json() {
                output.warning(&format!("No users match '{name}'"));
                return Ok(());
            }
            output.display(&UserList(users))?;
        }
        Commands::Tag { tag } => {
            let posts = PostList::new(&graph, graph.search_by_tag(&tag));
            display_posts(output, &posts, &format!("No posts tagged #{tag}"))?;
        }
        Commands::Posts(args) => {
            let found = match (args.user_id, args.user_name) {
                (Some(user_id), _) => graph.search_by_user_id(&user_id)?,
                (None, Some(name)) => graph.search_by_user_name(&name),
                (None, None) => Vec::new(),
            };
            display_posts(output, &PostList::new(&graph, found), "No posts by matching authors")?;
        }
        Commands::Timeline { user_id } => {
            let posts = PostList::new(&graph, graph.timeline(&user_id)?);
            display_posts(output, &posts, &format!("{user_id} follows nobody with posts"))?;
        }
        Commands::Show { post_id } => {
            let post = graph.get_post(&post_id)?;
            let detail = PostDetail::new(&graph, post);
            if output.is_json() {
                output.display(&detail)?;
            } else {
                show_post(output, &detail);
            }
        }
        Commands::Login { email, password } => {
            let user = graph.login(&email, &password)?;
            output.success(&format!("Logged in as {} ({})", user.name, user.id));
            output.display(&UserList(vec![user]))?;
        }
    }

    Ok(())
}

fn display_posts(output: &OutputManager, posts: &PostList<'_>, empty_message: &str) -> Result<()> {
    if posts.is_empty() && !output.is_json() {
        output.warning(empty_message);
        return Ok(());
    }
    output.display(posts)
}

fn show_post(output: &OutputManager, detail: &PostDetail<'_>) {
    let post = detail.view.post;
    output.heading(&format!("{} by {}", post.id, detail.view.author));
    output.key_value("Image", &post.image);
    output.key_value("Description", &post.description);
    output.key_value("Date", &post.date.to_rfc3339());
    output.key_value("Liked by", &detail.liked_by.join(", "));

    if detail.comments.is_empty() {
        output.key_value("Comments", "none");
        return;
    }
    output.key_value("Comments", &detail.comments.len().to_string());
    for view in &detail.comments {
        output.bullet(&format!("{}: {}", view.author, view.comment.body));
    }
}
