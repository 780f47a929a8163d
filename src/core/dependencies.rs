//! Splitting requirement tokens into plain dependencies and git sources.

use crate::domain::model::DependencySet;
use crate::utils::error::{MigratorError, Result};
use url::Url;

const GITHUB_HOST: &str = "github.com";

pub fn is_github_url(requirement: &str) -> bool {
    requirement.to_ascii_lowercase().contains(GITHUB_HOST)
}

fn is_github_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == GITHUB_HOST || host.ends_with(".github.com")
}

/// Derives a package name from a GitHub repository URL.
///
/// The last path segment is taken, a trailing `.git` is dropped, and the
/// result is lower-cased with underscores turned into hyphens:
/// `https://github.com/org/session_manager.git` gives `session-manager`.
pub fn github_url_to_package_name(url: &str) -> Result<String> {
    let malformed = |reason: &str| MigratorError::MalformedSourceUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let parsed = Url::parse(url).map_err(|e| malformed(&format!("not a URL ({})", e)))?;

    match parsed.host_str() {
        Some(host) if is_github_host(host) => {}
        _ => return Err(malformed("not a GitHub URL")),
    }

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let repo = match segments.as_slice() {
        [_owner, .., repo] => *repo,
        _ => return Err(malformed("expected https://github.com/<owner>/<repo>")),
    };

    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if repo.is_empty() {
        return Err(malformed("repository name is empty"));
    }

    Ok(repo.to_lowercase().replace('_', "-"))
}

/// Classifies descriptor requirements in order.
///
/// Malformed GitHub URLs are logged and dropped; they never fail the batch.
pub fn classify_requirements(requirements: &[String]) -> DependencySet {
    let mut set = DependencySet::default();

    for requirement in requirements {
        let requirement = requirement.trim();
        if requirement.is_empty() {
            continue;
        }

        if !is_github_url(requirement) {
            set.push_plain(requirement.to_string());
            continue;
        }

        match github_url_to_package_name(requirement) {
            Ok(package) => {
                tracing::debug!("Resolved {} -> {}", requirement, package);
                set.push_git(package, requirement.to_string());
            }
            Err(e) => {
                tracing::warn!("Skipping malformed GitHub URL: {} - {}", requirement, e);
            }
        }
    }

    set
}
