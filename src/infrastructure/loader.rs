//! XML record loading
//!
//! Reads ljdump export files: one `<event>` document per entry, plus an
//! optional sibling `<comments>` document found by swapping the `L-`
//! filename marker for `C-`.

use crate::domain::text::unescape_html;
use crate::domain::{Comment, CommentState, JournalRecord};
use crate::error::{Lj2HugoError, Result};
use roxmltree::{Document, Node};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Filename marker of an entry export
const ENTRY_MARKER: &str = "L-";
/// Filename marker of the matching comment export
const COMMENT_MARKER: &str = "C-";

/// Loads journal records from export files
pub struct RecordLoader;

impl RecordLoader {
    /// Load the entry at `path`, pulling in its companion comment file
    /// when `include_comments` is set. A missing companion file leaves
    /// the comment list empty; any other failure is an error.
    pub fn load(path: &Path, include_comments: bool) -> Result<JournalRecord> {
        let raw = fs::read_to_string(path).map_err(|e| Lj2HugoError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut record = parse_record(&raw, path)?;

        if include_comments {
            let comment_path = companion_path(path);
            match fs::read_to_string(&comment_path) {
                Ok(raw) => record.comments = parse_comments(&raw, &comment_path)?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(Lj2HugoError::Read {
                        path: comment_path,
                        source: e,
                    })
                }
            }
        }

        Ok(record)
    }
}

/// Derive the comment file path for an entry: comments for L-99 live in
/// C-99 (which may not exist). Only the first marker is replaced.
pub fn companion_path(path: &Path) -> PathBuf {
    PathBuf::from(
        path.to_string_lossy()
            .replacen(ENTRY_MARKER, COMMENT_MARKER, 1),
    )
}

fn parse_error(path: &Path, message: impl Into<String>) -> Lj2HugoError {
    Lj2HugoError::Parse {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

/// Text content of the first child element with the given name, or ""
/// when the element is absent (exports omit empty fields freely).
fn child_text<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.children()
        .find(|n| n.has_tag_name(name))
        .and_then(|n| n.text())
        .unwrap_or("")
}

/// Numeric child element; absent elements default to zero, present but
/// non-numeric text is a parse error.
fn child_number<T: FromStr + Default>(node: Node, name: &str, path: &Path) -> Result<T> {
    let text = child_text(node, name);
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse()
        .map_err(|_| parse_error(path, format!("element <{}> has non-numeric value [{}]", name, text)))
}

fn parse_record(raw: &str, path: &Path) -> Result<JournalRecord> {
    let doc = Document::parse(raw).map_err(|e| parse_error(path, e.to_string()))?;
    let root = doc.root_element();
    if !root.has_tag_name("event") {
        return Err(parse_error(
            path,
            format!("expected <event> root element, found <{}>", root.tag_name().name()),
        ));
    }

    // The entry body is HTML-escaped inside the XML; one round of
    // unescaping here recovers the literal text.
    let body = unescape_html(child_text(root, "event"));

    let tag_list = root
        .children()
        .find(|n| n.has_tag_name("props"))
        .map(|props| child_text(props, "taglist").to_string())
        .unwrap_or_default();

    Ok(JournalRecord {
        item_id: child_number(root, "itemid", path)?,
        subject: child_text(root, "subject").to_string(),
        event_time: child_text(root, "eventtime").to_string(),
        event_timestamp: child_number(root, "event_timestamp", path)?,
        url: child_text(root, "url").to_string(),
        mood: child_text(root, "current_mood").to_string(),
        preformatted: child_number::<i32>(root, "opt_preformatted", path)? == 1,
        music: child_text(root, "current_music").to_string(),
        location: child_text(root, "current_location").to_string(),
        tag_list,
        reply_count: child_number(root, "reply_count", path)?,
        picture_keyword: child_text(root, "picture_keyword").to_string(),
        body,
        comments: Vec::new(),
    })
}

fn parse_comments(raw: &str, path: &Path) -> Result<Vec<Comment>> {
    let doc = Document::parse(raw).map_err(|e| parse_error(path, e.to_string()))?;
    let root = doc.root_element();
    if !root.has_tag_name("comments") {
        return Err(parse_error(
            path,
            format!("expected <comments> root element, found <{}>", root.tag_name().name()),
        ));
    }

    root.children()
        .filter(|n| n.has_tag_name("comment"))
        .map(|node| {
            Ok(Comment {
                id: child_number(node, "id", path)?,
                subject: child_text(node, "subject").to_string(),
                user: child_text(node, "user").to_string(),
                parent_id: child_text(node, "parentid").to_string(),
                state: CommentState::from_code(child_text(node, "state")),
                date: child_text(node, "date").to_string(),
                body: child_text(node, "body").to_string(),
            })
        })
        .collect()
}
