//! # Inkwell Blog Client
//!
//! Loads the post list, optionally adds one post, and prints the page.
//!
//! ```text
//! blog-client                    # list
//! blog-client "Title" "Content"  # add, then list
//! ```

use anyhow::bail;
use blog_client::{BlogApp, HttpPostsApi, view};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,blog_client=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let base_url =
        std::env::var("BLOG_API_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
    tracing::info!(api = %base_url, "Loading posts");

    let new_post = parse_args(std::env::args().skip(1))?;

    let mut app = BlogApp::new(HttpPostsApi::new(&base_url)?);
    app.mount().await?;

    if let Some((title, content)) = new_post {
        app.set_title(title);
        app.set_content(content);
        let post = app.submit().await?;
        tracing::info!(post_id = %post.id, "Post added");
    }

    print!("{}", view::render(&app));
    Ok(())
}

const USAGE: &str = "usage: blog-client [TITLE CONTENT]";

/// No arguments lists only; exactly two add a post first.
fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Option<(String, String)>> {
    let args: Vec<String> = args.into_iter().collect();
    match <[String; 2]>::try_from(args) {
        Ok([title, content]) => Ok(Some((title, content))),
        Err(args) if args.is_empty() => Ok(None),
        Err(_) => bail!(USAGE),
    }
}
