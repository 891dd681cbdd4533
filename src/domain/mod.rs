//! Domain layer - Entry data and rendering policy

pub mod moods;
pub mod post;
pub mod record;
pub mod text;

pub use post::{render_post, VisibilityPolicy};
pub use record::{Comment, CommentState, JournalRecord};
