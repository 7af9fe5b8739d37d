// crates/engine/src/filesystem.rs
use crate::report::LogSink;
use ignore::WalkBuilder;
use std::io::ErrorKind;
use std::path::Path;

/// Sequential recursive walk of `root`, calling `on_file` for every regular
/// file. `root` may itself be a file.
///
/// Nothing is filtered out: hidden files and ignore files are not honored.
/// Entries that cannot be listed or stat'ed are reported to `sink` as
/// warnings and skipped, as is a root whose existence cannot be checked.
/// A root that does not exist produces nothing.
///
/// Returns the number of warnings emitted.
pub fn walk_root<F>(
    root: &Path,
    follow_links: bool,
    sink: &dyn LogSink,
    mut on_file: F,
) -> usize
where
    F: FnMut(&Path),
{
    match root.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!(root = %root.display(), "root does not exist, skipping");
            return 0;
        }
        Err(err) => {
            sink.warn(&format!("skipping unreadable root {}: {err}", root.display()));
            return 1;
        }
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(follow_links)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut warnings = 0;
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    on_file(entry.path());
                }
            }
            // Dangling symlinks and files removed mid-walk.
            Err(err) if err.io_error().is_some_and(|e| e.kind() == ErrorKind::NotFound) => {
                tracing::debug!("skipping vanished entry: {err}");
            }
            Err(err) => {
                sink.warn(&format!("skipping unreadable entry: {err}"));
                warnings += 1;
            }
        }
    }
    warnings
}
