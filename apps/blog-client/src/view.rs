//! Page rendering.

use inkwell_shared::PostResponse;

use crate::api::PostsApi;
use crate::app::{BlogApp, PostForm};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the heading, one entry per post, then the create form.
pub fn render_page(posts: &[PostResponse], form: &PostForm) -> String {
    let mut html = String::from("<div class=\"App\">\n  <h1>Blog Posts</h1>\n");

    for post in posts {
        html.push_str(&format!(
            "  <div class=\"post\" data-id=\"{}\">\n    <h2>{}</h2>\n    <p>{}</p>\n  </div>\n",
            post.id,
            escape(&post.title),
            escape(&post.content),
        ));
    }

    html.push_str(&format!(
        "  <form method=\"post\">\n    \
         <input name=\"title\" value=\"{}\" placeholder=\"Title\" required>\n    \
         <textarea name=\"content\" placeholder=\"Content\" required>{}</textarea>\n    \
         <button type=\"submit\">Add Post</button>\n  \
         </form>\n</div>\n",
        escape(&form.title),
        escape(&form.content),
    ));

    html
}

/// Render the current state of `app`.
pub fn render<A: PostsApi>(app: &BlogApp<A>) -> String {
    render_page(app.posts(), app.form())
}
