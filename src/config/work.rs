//! `[work]` section configuration.
//!
//! How exported projects are grouped by organization and how the work
//! collection is ordered.

use super::defaults;
use crate::extract::ProjectRules;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `[work]` section in folio.toml.
///
/// # Example
/// ```toml
/// [work]
/// org_order = ["dansu", "laced", "exinity"]
///
/// [work.roles]
/// LACED = "Product & Growth, Laced"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct WorkConfig {
    /// All-caps heading that titles the export rather than naming an organization.
    #[serde(default = "defaults::work::sentinel")]
    #[educe(Default = defaults::work::sentinel())]
    pub sentinel: String,

    /// Organization of projects listed before any organization heading.
    #[serde(default = "defaults::work::fallback_org")]
    #[educe(Default = defaults::work::fallback_org())]
    pub fallback_org: String,

    /// Organization heading → role label shown on the project.
    #[serde(default)]
    pub roles: HashMap<String, String>,

    /// Keywords matched against role and slug, highest priority first.
    #[serde(default)]
    pub org_order: Vec<String>,
}

impl WorkConfig {
    pub fn project_rules(&self) -> ProjectRules<'_> {
        ProjectRules {
            sentinel: &self.sentinel,
            fallback_org: &self.fallback_org,
            roles: &self.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_work_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.work.sentinel, "MASTER PROJECT LIST");
        assert_eq!(config.work.fallback_org, "OTHER");
        assert!(config.work.roles.is_empty());
        assert!(config.work.org_order.is_empty());
    }

    #[test]
    fn test_work_roles_with_spaces() {
        let config = r#"
            [work]
            org_order = ["dansu", "salary finance"]

            [work.roles]
            DANSU = "Founder, Dansu"
            "SALARY FINANCE" = "Product Manager, Salary Finance"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let rules = config.work.project_rules();
        assert_eq!(rules.roles.get("SALARY FINANCE").map(String::as_str), Some("Product Manager, Salary Finance"));
        assert_eq!(rules.sentinel, "MASTER PROJECT LIST");
        assert_eq!(config.work.org_order, vec!["dansu", "salary finance"]);
    }
}
