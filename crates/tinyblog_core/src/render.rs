//! Comment form rendering.
//!
//! # Responsibility
//! - Render the add-comment form with validation errors and prior input.
//!
//! # Invariants
//! - Every interpolated value is HTML-escaped before insertion.
//! - Rendering is pure: same inputs, same markup, no I/O, no state.

use crate::model::comment::CommentDraft;
use std::fmt::Write;

/// Renders the add-comment form fragment.
///
/// Validation errors render as a bullet list above the form, in input
/// order; an empty list omits the block entirely. Draft values are escaped
/// and pre-filled so a rejected submission keeps the visitor's input.
pub fn render_comment_form(errors: &[String], draft: &CommentDraft) -> String {
    let mut html = String::new();

    if !errors.is_empty() {
        html.push_str("<div class=\"error box\">\n    <ul>\n");
        for error in errors {
            let _ = writeln!(html, "        <li>{}</li>", escape_html(error));
        }
        html.push_str("    </ul>\n</div>\n\n");
    }

    let _ = write!(
        html,
        r#"<h3>Add your comment</h3>

<form method="post">
    <p>
        <label for="comment-name">Name:</label>
        <input id="comment-name" type="text" name="comment-name" value="{name}">
    </p>
    <p>
        <label for="comment-website">Website:</label>
        <input id="comment-website" type="text" name="comment-website" value="{website}">
    </p>
    <p>
        <label for="comment-text">Comment:</label>
        <textarea id="comment-text" name="comment-text" rows="8" cols="70">{text}</textarea>
    </p>

    <input type="submit" value="Submit comment">
</form>
"#,
        name = escape_html(&draft.name),
        website = escape_html(&draft.website),
        text = escape_html(&draft.text),
    );

    html
}

/// Escapes text for interpolation into HTML body or attribute position.
///
/// Covers both quote styles so escaped values are safe inside
/// single- and double-quoted attributes alike.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escape_html_covers_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }
}
