//! Path helpers

use std::env;
use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the user's home directory
///
/// Paths without the prefix, or with no `HOME` set, are returned as given.
pub fn full_path(p: &str) -> PathBuf {
    match (p.strip_prefix("~/"), env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(p),
    }
}

/// File name of a path as an owned string, if it has a UTF-8 one
pub fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|n| n.to_str()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_untouched() {
        assert_eq!(full_path("/tmp/walls"), PathBuf::from("/tmp/walls"));
        assert_eq!(full_path("relative/dir"), PathBuf::from("relative/dir"));
    }

    #[test]
    fn tilde_expands_under_home() {
        if let Some(home) = env::var_os("HOME") {
            assert_eq!(full_path("~/Pictures"), PathBuf::from(home).join("Pictures"));
        }
    }

    #[test]
    fn file_name_of_path() {
        assert_eq!(file_name(Path::new("/a/b/wall.png")), Some("wall.png".to_string()));
        assert_eq!(file_name(Path::new("/")), None);
    }
}
