//! `[base]` section configuration.
//!
//! Public site information used when generating the sitemap.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - public site metadata.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://example.com"
/// static_routes = ["", "/work", "/about", "/blog", "/contact"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Base URL for absolute links in the sitemap.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Site pages that exist outside the content collections.
    #[serde(default = "defaults::base::static_routes")]
    #[educe(Default = defaults::base::static_routes())]
    pub static_routes: Vec<String>,
}
