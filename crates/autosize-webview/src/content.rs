//! Local content serving via custom protocol.
//!
//! Registers an `autosize://` custom protocol so the embedded document and
//! the `files` it links can load from a base directory without a local
//! HTTP server. Inline HTML sources are served from the same origin so
//! relative links resolve against the base directory.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Custom protocol scheme.
pub const PROTOCOL: &str = "autosize";

/// Path under which an inline HTML source is served.
pub const INLINE_DOCUMENT: &str = "index.html";

/// URL of an asset served by the custom protocol.
pub fn asset_url(path: &str) -> String {
    format!("{PROTOCOL}://localhost/{}", path.trim_start_matches('/'))
}

/// Strip the scheme and host from a custom protocol request URI.
///
/// WebView2 on Windows rewrites `autosize://localhost/…` to
/// `http://autosize.localhost/…`, so both forms are accepted.
pub fn request_path(uri: &str) -> &str {
    uri.strip_prefix("autosize://localhost/")
        .or_else(|| uri.strip_prefix("autosize://localhost"))
        .or_else(|| uri.strip_prefix("http://autosize.localhost/"))
        .or_else(|| uri.strip_prefix("autosize:///"))
        .or_else(|| uri.strip_prefix("autosize://"))
        .unwrap_or("")
}

/// Serves local files from a base directory via custom protocol.
///
/// A request for `autosize://localhost/css/article.css` resolves to
/// `{base_dir}/css/article.css` and returns the file contents with the
/// appropriate MIME type.
pub struct ContentProvider {
    /// Base directory for resolving asset paths.
    base_dir: PathBuf,
    /// In-memory overrides (inline documents).
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    /// Create a new content provider rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Register an in-memory asset override.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        let path = path.into();
        self.overrides.insert(
            path.trim_start_matches('/').to_string(),
            (mime.into(), data.into()),
        );
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or("")
            .trim_start_matches('/');

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        let file_path = self.base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }

    /// The base directory for assets.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("txt") => "text/plain",
        Some("xml") => "application/xml",
        _ => "application/octet-stream",
    }
}
