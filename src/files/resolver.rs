use std::path::PathBuf;

/// Path fragment that routes a request to the add-numbers endpoint.
pub const CGI_MARKER: &str = "cgi/addnums.fake-cgi";

/// Two adjacent ascent steps. Any request path containing this is refused.
const TRAVERSAL: &str = "../..";

/// What a request path turned out to point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// An existing regular file
    File,
    /// Anything existing, requested with a trailing `/`
    Directory,
    /// The add-numbers endpoint, with everything after `?` if there was one
    PseudoEndpoint { query: Option<String> },
    /// Nothing exists at the path
    Missing,
    /// Traversal attempt, or an existing entry that is not a regular file
    Forbidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Filesystem location under the document root
    pub path: PathBuf,
    pub kind: TargetKind,
}

/// Maps request paths onto a document root.
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Classifies `raw_path`.
    ///
    /// Traversal and pseudo-endpoint checks are pure string checks and run
    /// before the filesystem is consulted. Lookup errors of any kind are
    /// reported as [`TargetKind::Missing`].
    pub async fn resolve(&self, raw_path: &str) -> ResolvedTarget {
        let scoped = format!(".{raw_path}");
        let path = self.root.join(raw_path.trim_start_matches('/'));

        let kind = if scoped.contains(TRAVERSAL) || climbs_above_root(raw_path) {
            TargetKind::Forbidden
        } else if scoped.contains(CGI_MARKER) {
            let query = raw_path.split_once('?').map(|(_, q)| q.to_string());
            TargetKind::PseudoEndpoint { query }
        } else if raw_path.ends_with('/') {
            // Existence alone decides; `/a.txt/` lists as an empty directory.
            let trimmed: PathBuf = path.components().collect();
            match tokio::fs::metadata(&trimmed).await {
                Ok(_) => TargetKind::Directory,
                Err(_) => TargetKind::Missing,
            }
        } else {
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => TargetKind::File,
                Ok(_) => TargetKind::Forbidden,
                Err(_) => TargetKind::Missing,
            }
        };

        tracing::debug!(path = %path.display(), ?kind, "resolved request path");

        ResolvedTarget { path, kind }
    }
}

/// True when the `..` segments of `raw_path` walk out of the root at any point.
fn climbs_above_root(raw_path: &str) -> bool {
    let mut depth: usize = 0;

    for segment in raw_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return true,
            },
            _ => depth += 1,
        }
    }

    false
}
