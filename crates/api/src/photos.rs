// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Photo storage path to URL resolution.

use loppis_domain::is_valid_photo_path;

/// Resolves a stored photo path to a URL a client can fetch.
pub trait PhotoUrlResolver: Send + Sync {
    /// Returns the public URL of a storage path.
    fn public_url(&self, path: &str) -> String;
}

/// A publicly readable bucket: URLs are `{base_url}/{path}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicBucket {
    base_url: String,
}

impl PublicBucket {
    /// Creates a resolver for a bucket base URL.
    ///
    /// A trailing slash on the base URL is ignored.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PhotoUrlResolver for PublicBucket {
    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Resolves the valid paths of a photo list, preserving order.
#[must_use]
pub fn resolve_photo_urls<R>(paths: &[String], resolver: &R) -> Vec<String>
where
    R: PhotoUrlResolver + ?Sized,
{
    paths
        .iter()
        .filter(|path| is_valid_photo_path(path))
        .map(|path| resolver.public_url(path))
        .collect()
}
