use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use fs_extra::file::read_to_string;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VARIABLE_NAME: Regex = Regex::new(r"^[a-zA-Z_$][a-zA-Z_$0-9]*$").unwrap();
}

/// Environment variables read from a directory, keyed by file name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvironmentList(HashMap<String, String>);

impl EnvironmentList {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, name: String, value: String) {
        self.0.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

/// Scan the direct children of `dir` and build a variable per regular file
/// whose name is a valid identifier. The file content, minus any trailing
/// newlines, becomes the value; files left empty after trimming produce no
/// entry at all.
///
/// A file that cannot be read is reported on stdout and skipped, so one bad
/// file does not abort the scan. An unlistable `dir` is an error.
pub fn read_dir(dir: &Path) -> Result<EnvironmentList> {
    let mut env = EnvironmentList::new();

    let entries =
        fs::read_dir(dir).with_context(|| format!("could not read directory {:?}", dir))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("could not read directory {:?}", dir))?;
        if entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false) {
            continue;
        }

        let file_name = entry.file_name();
        let name = match file_name.to_str() {
            Some(name) if VARIABLE_NAME.is_match(name) => name,
            _ => continue,
        };

        let content = match read_to_string(entry.path()) {
            Ok(content) => content,
            Err(err) => {
                println!("warning: could not read file {}: {}", name, err);
                continue;
            }
        };

        let value = content.trim_end_matches('\n');
        if !value.is_empty() {
            env.insert(name.to_string(), value.to_string());
        }
    }

    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn simple_file_becomes_variable() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("A"), "123").unwrap();

        let env = read_dir(dir.path()).unwrap();
        assert_eq!(env.get("A"), Some("123"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn trailing_newlines_are_stripped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("B_B"), "456\n").unwrap();
        fs::write(dir.path().join("C"), "789\n\n\n").unwrap();

        let env = read_dir(dir.path()).unwrap();
        assert_eq!(env.get("B_B"), Some("456"));
        assert_eq!(env.get("C"), Some("789"));
    }

    #[test]
    fn internal_newlines_are_preserved() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Dd12"), "1011\n\n12").unwrap();

        let env = read_dir(dir.path()).unwrap();
        assert_eq!(env.get("Dd12"), Some("1011\n\n12"));
    }

    #[test]
    fn newline_only_content_produces_no_entry() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("EMPTY"), "\n\n").unwrap();

        let env = read_dir(dir.path()).unwrap();
        assert!(env.is_empty());
        assert_eq!(env.get("EMPTY"), None);
    }

    #[test]
    fn invalid_names_and_subdirectories_are_skipped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1BAD"), "value").unwrap();
        fs::write(dir.path().join("not-a-name"), "value").unwrap();
        fs::write(dir.path().join("with.dot"), "value").unwrap();
        fs::create_dir(dir.path().join("SUBDIR")).unwrap();

        let env = read_dir(dir.path()).unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn dollar_and_underscore_names_are_accepted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("_UNDER"), "a").unwrap();
        fs::write(dir.path().join("$DOLLAR"), "b").unwrap();

        let env = read_dir(dir.path()).unwrap();
        assert_eq!(env.get("_UNDER"), Some("a"));
        assert_eq!(env.get("$DOLLAR"), Some("b"));
    }

    #[test]
    fn nonexistent_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        let result = read_dir(&missing);
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("could not read directory"));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_is_skipped_and_scan_continues() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("GOOD"), "ok").unwrap();
        // dangling symlink: valid name, read fails
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("BROKEN")).unwrap();

        let env = read_dir(dir.path()).unwrap();
        assert_eq!(env.get("GOOD"), Some("ok"));
        assert_eq!(env.get("BROKEN"), None);
        assert_eq!(env.len(), 1);
    }
}
