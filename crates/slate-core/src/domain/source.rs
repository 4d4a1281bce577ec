//! Starter source resolution.
//!
//! A starter is named by a single string which either points at a hosted
//! repository (`owner/name`, optionally pinned with `#branch-or-commit`) or
//! at a local directory. The ambiguity is resolved exactly once, up front,
//! into a tagged [`SourceDescriptor`]; nothing downstream re-probes the
//! string.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// File whose presence marks a directory as an existing theme project.
///
/// This is the sole conflict signal checked before staging begins.
pub const MANIFEST_MARKER: &str = "package.json";

/// Path segments that must never be materialized into a scaffolded theme,
/// at any nesting depth.
pub const EXCLUDED_DIRS: [&str; 2] = ["node_modules", ".git"];

/// Whether a directory entry name is excluded from materialization.
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}

/// A hosted starter repository, identified by `owner/name` with an optional
/// pinned reference (branch name or commit hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSource {
    pub owner: String,
    pub name: String,
    pub reference: Option<String>,
}

impl RemoteSource {
    /// Remote URL, built from the fixed host template.
    pub fn clone_url(&self) -> String {
        format!("git@github.com:{}/{}.git", self.owner, self.name)
    }

    /// Arguments for the shallow single-branch fetch of this repository into
    /// `target`. The reference selector is present exactly when a reference
    /// was pinned.
    pub fn clone_args(&self, target: &Path) -> Vec<String> {
        let mut args = vec!["clone".to_string()];
        if let Some(reference) = &self.reference {
            args.push("-b".to_string());
            args.push(reference.clone());
        }
        args.push(self.clone_url());
        args.push(target.display().to_string());
        args.push("--single-branch".to_string());
        args
    }
}

impl fmt::Display for RemoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)?;
        if let Some(reference) = &self.reference {
            write!(f, "#{reference}")?;
        }
        Ok(())
    }
}

/// Where the initial theme content comes from, decided once at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceDescriptor {
    /// A hosted repository to clone.
    Remote(RemoteSource),
    /// A local directory to copy (existence is verified by the caller).
    Local(PathBuf),
}

impl SourceDescriptor {
    /// Parse a raw starter string into a descriptor.
    ///
    /// `exists` is the filesystem probe used to decide whether the string
    /// names something already on disk — an existing entry always wins over
    /// the repository-shorthand reading, so a checked-out starter next to the
    /// current directory is copied rather than cloned.
    ///
    /// Strings that are neither on disk nor shaped like `owner/name[#ref]`
    /// fall through to [`SourceDescriptor::Local`]; the caller's existence
    /// check then reports them as missing local sources.
    pub fn parse(raw: &str, exists: impl Fn(&Path) -> bool) -> Result<Self, DomainError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::InvalidSource {
                input: raw.to_string(),
                reason: "starter cannot be empty".to_string(),
            });
        }

        let path = Path::new(raw);
        if exists(path) {
            return Ok(Self::Local(path.to_path_buf()));
        }

        if let Some(remote) = parse_repo_shorthand(raw) {
            return Ok(Self::Remote(remote));
        }

        Ok(Self::Local(path.to_path_buf()))
    }
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(remote) => remote.fmt(f),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Try to read `raw` as the hosted-repository shorthand `owner/name[#ref]`.
///
/// Exactly one `/`, no backslashes, and neither segment may be empty or
/// start with `.` — that shape cannot be confused with a relative path like
/// `./starter` or `themes/starter/v2`.
fn parse_repo_shorthand(raw: &str) -> Option<RemoteSource> {
    if raw.contains('\\') {
        return None;
    }

    let (repo, reference) = match raw.split_once('#') {
        Some((_, suffix)) if suffix.is_empty() => return None,
        Some((repo, suffix)) => (repo, Some(suffix.to_string())),
        None => (raw, None),
    };

    let (owner, name) = repo.split_once('/')?;
    if name.contains('/') {
        return None;
    }
    if owner.is_empty() || name.is_empty() || owner.starts_with('.') || name.starts_with('.') {
        return None;
    }

    let segment_ok = |s: &str| {
        s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    if !segment_ok(owner) || !segment_ok(name) {
        return None;
    }

    Some(RemoteSource {
        owner: owner.to_string(),
        name: name.to_string(),
        reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never_exists(_: &Path) -> bool {
        false
    }

    #[test]
    fn repo_shorthand_parses_as_remote() {
        let descriptor = SourceDescriptor::parse("shopify/starter-theme", never_exists).unwrap();
        assert_eq!(
            descriptor,
            SourceDescriptor::Remote(RemoteSource {
                owner: "shopify".into(),
                name: "starter-theme".into(),
                reference: None,
            })
        );
    }

    #[test]
    fn committish_suffix_is_split_off() {
        let descriptor = SourceDescriptor::parse("shopify/starter-theme#123456", never_exists).unwrap();
        match descriptor {
            SourceDescriptor::Remote(remote) => {
                assert_eq!(remote.reference.as_deref(), Some("123456"));
                assert_eq!(remote.name, "starter-theme");
            }
            other => panic!("expected remote, got {other:?}"),
        }
    }

    #[test]
    fn existing_path_wins_over_shorthand() {
        let descriptor =
            SourceDescriptor::parse("shopify/starter-theme", |_| true).unwrap();
        assert_eq!(
            descriptor,
            SourceDescriptor::Local(PathBuf::from("shopify/starter-theme"))
        );
    }

    #[test]
    fn plain_name_is_local() {
        let descriptor = SourceDescriptor::parse("old-project", never_exists).unwrap();
        assert_eq!(descriptor, SourceDescriptor::Local(PathBuf::from("old-project")));
    }

    #[test]
    fn relative_path_is_local() {
        let descriptor = SourceDescriptor::parse("./themes/starter", never_exists).unwrap();
        assert!(matches!(descriptor, SourceDescriptor::Local(_)));
    }

    #[test]
    fn backslash_path_is_local() {
        let descriptor = SourceDescriptor::parse("themes\\starter", never_exists).unwrap();
        assert!(matches!(descriptor, SourceDescriptor::Local(_)));
    }

    #[test]
    fn empty_starter_is_invalid() {
        assert!(matches!(
            SourceDescriptor::parse("", never_exists),
            Err(DomainError::InvalidSource { .. })
        ));
    }

    #[test]
    fn empty_reference_is_not_remote() {
        let descriptor = SourceDescriptor::parse("shopify/starter-theme#", never_exists).unwrap();
        assert!(matches!(descriptor, SourceDescriptor::Local(_)));
    }

    #[test]
    fn clone_url_uses_host_template() {
        let remote = RemoteSource {
            owner: "shopify".into(),
            name: "test-repo".into(),
            reference: None,
        };
        assert_eq!(remote.clone_url(), "git@github.com:shopify/test-repo.git");
    }

    #[test]
    fn clone_args_without_reference() {
        let remote = RemoteSource {
            owner: "shopify".into(),
            name: "test-repo".into(),
            reference: None,
        };
        assert_eq!(
            remote.clone_args(Path::new("/work/test-project")),
            vec![
                "clone",
                "git@github.com:shopify/test-repo.git",
                "/work/test-project",
                "--single-branch",
            ]
        );
    }

    #[test]
    fn clone_args_with_reference() {
        let remote = RemoteSource {
            owner: "shopify".into(),
            name: "test-repo".into(),
            reference: Some("123456".into()),
        };
        assert_eq!(
            remote.clone_args(Path::new("/work/test-project")),
            vec![
                "clone",
                "-b",
                "123456",
                "git@github.com:shopify/test-repo.git",
                "/work/test-project",
                "--single-branch",
            ]
        );
    }

    #[test]
    fn excluded_dirs_match_exact_names() {
        assert!(is_excluded("node_modules"));
        assert!(is_excluded(".git"));
        assert!(!is_excluded("src"));
        assert!(!is_excluded(".github"));
    }
}
