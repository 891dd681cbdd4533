//! Output formatting utilities

use std::path::Path;

/// Format the per-file progress line printed on a successful conversion
pub fn format_conversion(input: &Path, output: &Path) -> String {
    format!("{} -> {}", input.display(), output.display())
}
