//! Journal entry and comment models

/// Moderation state of a comment, from the single-letter code in the
/// export. Anything that is not one of the three known codes renders
/// unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentState {
    Normal(String),
    Spam,
    Banned,
    Deleted,
}

impl CommentState {
    pub fn from_code(code: &str) -> Self {
        match code {
            "S" => CommentState::Spam,
            "B" => CommentState::Banned,
            "D" => CommentState::Deleted,
            other => CommentState::Normal(other.to_string()),
        }
    }
}

/// One reply attached to a journal entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i32,
    pub subject: String,
    pub user: String,
    /// Id of the comment this replies to; empty for top-level comments
    pub parent_id: String,
    pub state: CommentState,
    pub date: String,
    /// Raw markup, passed through to the output verbatim
    pub body: String,
}

/// One journal entry decoded from its export file
#[derive(Debug, Clone, Default)]
pub struct JournalRecord {
    pub item_id: i64,
    pub subject: String,
    /// Event time in "YYYY-MM-DD HH:MM:SS" form
    pub event_time: String,
    /// Unix timestamp of the event; decoded but not used by the output
    pub event_timestamp: u64,
    pub url: String,
    pub mood: String,
    pub preformatted: bool,
    pub music: String,
    pub location: String,
    /// Comma-separated tag names from the entry's props
    pub tag_list: String,
    pub reply_count: i32,
    pub picture_keyword: String,
    /// Entry text with HTML entities already unescaped at load time
    pub body: String,
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_known_codes() {
        assert_eq!(CommentState::from_code("S"), CommentState::Spam);
        assert_eq!(CommentState::from_code("B"), CommentState::Banned);
        assert_eq!(CommentState::from_code("D"), CommentState::Deleted);
    }

    #[test]
    fn test_state_from_unknown_code_is_normal() {
        assert_eq!(
            CommentState::from_code(""),
            CommentState::Normal(String::new())
        );
        assert_eq!(
            CommentState::from_code("A"),
            CommentState::Normal("A".to_string())
        );
        // Codes are case-sensitive; lowercase is not a known state
        assert_eq!(
            CommentState::from_code("s"),
            CommentState::Normal("s".to_string())
        );
    }
}
