//! Post rendering: front matter, body, and comment section
//!
//! Rendering is pure string building so that a failure (a malformed
//! event time) can never leave a truncated file on disk; the caller
//! writes the finished post in one step.

use crate::domain::record::{Comment, CommentState, JournalRecord};
use crate::domain::text::escape_html;
use crate::error::{Lj2HugoError, Result};
use chrono::NaiveDateTime;
use std::path::Path;

/// Event times in ljdump exports use this fixed format.
pub const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flags controlling which comment states are rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityPolicy {
    pub show_spam: bool,
    pub show_banned: bool,
    pub show_deleted: bool,
}

impl VisibilityPolicy {
    pub fn is_visible(&self, comment: &Comment) -> bool {
        match comment.state {
            CommentState::Spam => self.show_spam,
            CommentState::Banned => self.show_banned,
            CommentState::Deleted => self.show_deleted,
            CommentState::Normal(_) => true,
        }
    }
}

/// Write a key with a quoted scalar value in front-matter form
fn push_param(out: &mut String, param: &str, value: &str) {
    out.push_str(&format!("{} = \"{}\"\n", param, value));
}

/// Write a key with a quoted-string list value in front-matter form
fn push_list_param(out: &mut String, param: &str, values: &[String]) {
    let quoted: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
    out.push_str(&format!("{} = [{}]\n", param, quoted.join(",")));
}

fn push_comment(out: &mut String, comment: &Comment) {
    out.push_str(&format!(
        "<h4>Comment #{} from {} at {}:</h4>\n<p>",
        comment.id, comment.user, comment.date
    ));
    if !comment.subject.is_empty() {
        out.push_str(&format!("<b>Subject:</b> {}<br/>\n", comment.subject));
    }
    if !comment.parent_id.is_empty() {
        out.push_str(&format!("<b>In-Reply-To:</b> {}<br/>\n", comment.parent_id));
    }
    out.push_str(&comment.body);
    out.push_str("</p>\n\n");
}

/// Render a record into the full text of its Hugo post.
///
/// `source` only labels parse errors; no file is touched here.
pub fn render_post(
    record: &JournalRecord,
    policy: &VisibilityPolicy,
    source: &Path,
) -> Result<String> {
    let mut out = String::new();

    out.push_str("+++\n");
    push_param(&mut out, "title", &escape_html(&record.subject));

    // Splitting an empty tag list yields one empty tag, so the tags
    // line is always present, as "" when the entry has none.
    let mut tags: Vec<String> = record.tag_list.split(',').map(str::to_string).collect();
    if !record.mood.is_empty() {
        tags.push(format!("mood: {}", record.mood));
    }
    push_list_param(&mut out, "tags", &tags);

    if !record.picture_keyword.is_empty() {
        let image = format!("{}.png", record.picture_keyword);
        push_list_param(&mut out, "images", std::slice::from_ref(&image));
    }

    let when = NaiveDateTime::parse_from_str(&record.event_time, EVENT_TIME_FORMAT).map_err(
        |e| Lj2HugoError::Parse {
            path: source.to_path_buf(),
            message: format!("bad event time [{}]: {}", record.event_time, e),
        },
    )?;
    push_param(
        &mut out,
        "date",
        &when.format(EVENT_TIME_FORMAT).to_string(),
    );
    out.push_str("+++\n\n");

    if record.preformatted {
        out.push_str("<pre>\n");
    }
    out.push_str(&record.body.replace('\r', ""));
    if record.preformatted {
        out.push_str("</pre>\n");
    }

    if record.comments.is_empty() {
        return Ok(out);
    }
    out.push_str("\n<p/>\n<p/>\n<hr/><h3>Comments:</h3>\n");
    for comment in &record.comments {
        if policy.is_visible(comment) {
            push_comment(&mut out, comment);
        }
    }

    Ok(out)
}
