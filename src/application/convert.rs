//! Convert use case: one export file in, one Hugo post out

use crate::domain::{render_post, VisibilityPolicy};
use crate::error::{Lj2HugoError, Result};
use crate::infrastructure::RecordLoader;
use std::fs;
use std::path::{Path, PathBuf};

/// Options controlling comment inclusion and visibility
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    pub include_comments: bool,
    pub show_spam: bool,
    pub show_banned: bool,
    pub show_deleted: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            include_comments: true,
            show_spam: false,
            show_banned: false,
            show_deleted: false,
        }
    }
}

impl ConvertOptions {
    fn policy(&self) -> VisibilityPolicy {
        VisibilityPolicy {
            show_spam: self.show_spam,
            show_banned: self.show_banned,
            show_deleted: self.show_deleted,
        }
    }
}

/// Service converting entry exports to Hugo posts
pub struct ConvertService {
    options: ConvertOptions,
}

impl ConvertService {
    pub fn new(options: ConvertOptions) -> Self {
        ConvertService { options }
    }

    /// Convert the entry at `path` into `<path>.md`, returning the
    /// output path. The post is rendered in full before the output file
    /// is created, so a failed record never leaves a partial file.
    pub fn execute(&self, path: &Path) -> Result<PathBuf> {
        let record = RecordLoader::load(path, self.options.include_comments)?;
        let post = render_post(&record, &self.options.policy(), path)?;

        let mut out_path = path.as_os_str().to_os_string();
        out_path.push(".md");
        let out_path = PathBuf::from(out_path);

        fs::write(&out_path, post).map_err(|e| Lj2HugoError::Write {
            path: out_path.clone(),
            source: e,
        })?;

        Ok(out_path)
    }
}
