use std::path::Path;

use crate::html;

/// Display name of the first entry of every listing.
pub const PARENT_NAME: &str = "Parent Directory";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub href: String,
}

/// Index page for one directory.
///
/// Entry 0 always points upward: `../` below the root, `./` at the root so
/// the generated link cannot leave it. Children follow in the order the
/// filesystem enumerates them, directories suffixed with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub raw_path: String,
    pub entries: Vec<ListingEntry>,
}

impl DirectoryListing {
    pub async fn read(dir: &Path, raw_path: &str) -> Self {
        let parent = if is_root(raw_path) { "./" } else { "../" };
        let mut entries = vec![ListingEntry {
            name: PARENT_NAME.to_string(),
            href: parent.to_string(),
        }];

        match tokio::fs::read_dir(dir).await {
            Ok(mut children) => loop {
                match children.next_entry().await {
                    Ok(Some(child)) => {
                        let mut name = child.file_name().to_string_lossy().into_owned();
                        let is_dir = tokio::fs::metadata(child.path())
                            .await
                            .map(|m| m.is_dir())
                            .unwrap_or(false);
                        if is_dir {
                            name.push('/');
                        }
                        entries.push(ListingEntry {
                            href: name.clone(),
                            name,
                        });
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(dir = %dir.display(), "stopped listing directory: {}", e);
                        break;
                    }
                }
            },
            Err(e) => {
                tracing::warn!(dir = %dir.display(), "cannot list directory: {}", e);
            }
        }

        Self {
            raw_path: raw_path.to_string(),
            entries,
        }
    }

    pub fn render(&self) -> String {
        let mut page = html::heading(&format!("Index of {}", self.raw_path));
        for entry in &self.entries {
            page.push_str(&html::anchor(&entry.name, &entry.href));
        }
        html::document(&html::preformatted(&page))
    }
}

/// True when `raw_path` names the document root itself.
pub fn is_root(raw_path: &str) -> bool {
    raw_path
        .split('/')
        .all(|segment| segment.is_empty() || segment == ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_detection() {
        assert!(is_root("/"));
        assert!(is_root("//./"));
        assert!(!is_root("/docs/"));
    }

    #[test]
    fn render_lists_parent_first() {
        let listing = DirectoryListing {
            raw_path: "/docs/".to_string(),
            entries: vec![
                ListingEntry { name: PARENT_NAME.to_string(), href: "../".to_string() },
                ListingEntry { name: "a.txt".to_string(), href: "a.txt".to_string() },
            ],
        };

        assert_eq!(
            listing.render(),
            "<html>\r\n<pre>\r\n<h1>Index of /docs/</h1>\r\n\
             <a href=\"../\">Parent Directory</a><br>\r\n\
             <a href=\"a.txt\">a.txt</a><br>\r\n</pre>\r\n</html>\r\n"
        );
    }
}
