//! GitHub URL rewriting.
//!
//! Turns a human-facing GitHub "blob" page URL into the raw-content URL that
//! serves the file's exact bytes.

use url::Url;

/// Host serving raw repository content.
pub const RAW_HOST: &str = "raw.githubusercontent.com";

/// Hosts serving the GitHub web UI.
const GITHUB_HOSTS: &[&str] = &["github.com", "www.github.com"];

/// The input is neither a GitHub blob URL nor a raw-content URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid GitHub URL")]
pub struct InvalidGithubUrl;

/// Rewrites a GitHub URL to its raw-content form.
///
/// # Rewriting Rules
///
/// 1. **Blob URLs** (`https://github.com/{owner}/{repo}/blob/{ref}/{path}`):
///    host becomes [`RAW_HOST`] and the `blob` segment is dropped. Everything
///    else (scheme, remaining path, query, fragment) is preserved.
/// 2. **Raw URLs** (host is already [`RAW_HOST`]): returned unchanged.
/// 3. **Anything else**: rejected.
///
/// Surrounding whitespace is ignored. The rewrite is idempotent: feeding the
/// output back in returns it unchanged.
///
/// # Errors
///
/// Returns [`InvalidGithubUrl`] for unparsable input, non-HTTP(S) schemes,
/// foreign hosts, and GitHub URLs that do not point at a file blob.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     to_raw_url("https://github.com/org/repo/blob/main/audio/a.mp3").unwrap(),
///     "https://raw.githubusercontent.com/org/repo/main/audio/a.mp3"
/// );
/// ```
pub fn to_raw_url(input: &str) -> Result<String, InvalidGithubUrl> {
    let input = input.trim();
    let url = Url::parse(input).map_err(|_| InvalidGithubUrl)?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(InvalidGithubUrl),
    }

    match url.host_str() {
        Some(RAW_HOST) => Ok(input.to_string()),
        Some(host) if GITHUB_HOSTS.contains(&host) => blob_to_raw(url),
        _ => Err(InvalidGithubUrl),
    }
}

fn blob_to_raw(mut url: Url) -> Result<String, InvalidGithubUrl> {
    let segments: Vec<String> = url
        .path_segments()
        .ok_or(InvalidGithubUrl)?
        .map(str::to_string)
        .collect();

    let [owner, repo, blob, reference, file @ ..] = segments.as_slice() else {
        return Err(InvalidGithubUrl);
    };

    if blob != "blob" || file.is_empty() {
        return Err(InvalidGithubUrl);
    }

    let all_present = [owner, repo, reference]
        .into_iter()
        .chain(file.iter())
        .all(|segment| !segment.is_empty());
    if !all_present {
        return Err(InvalidGithubUrl);
    }

    let path = format!("/{owner}/{repo}/{reference}/{}", file.join("/"));

    url.set_host(Some(RAW_HOST)).map_err(|_| InvalidGithubUrl)?;
    url.set_path(&path);

    Ok(url.to_string())
}
