//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn static_routes() -> Vec<String> {
        ["", "/work", "/about", "/blog", "/contact"].map(String::from).to_vec()
    }
}

// ============================================================================
// [paths] Section Defaults
// ============================================================================

pub mod paths {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn blog() -> PathBuf {
        "content/blog".into()
    }

    pub fn work() -> PathBuf {
        "content/work".into()
    }

    pub fn public() -> PathBuf {
        "public".into()
    }

    pub fn card_images() -> PathBuf {
        "public/assets/images/cards".into()
    }

    pub fn hero_images() -> PathBuf {
        "public/assets/images/widescreen".into()
    }

    pub fn blog_source() -> PathBuf {
        "content/blog/alm-blog.html".into()
    }

    pub fn projects_source() -> PathBuf {
        "content/blog/alm_projects.html".into()
    }

    pub fn card_url() -> String {
        "/assets/images/cards".into()
    }

    pub fn hero_url() -> String {
        "/assets/images/widescreen".into()
    }

    pub fn sitemap() -> PathBuf {
        "sitemap.xml".into()
    }
}

// ============================================================================
// [import] Section Defaults
// ============================================================================

pub mod import {
    pub fn min_article_chars() -> usize {
        80
    }

    pub fn slug_max_len() -> usize {
        80
    }

    pub fn words_per_minute() -> u32 {
        220
    }

    pub fn min_reading_minutes() -> u32 {
        2
    }

    pub fn spread_days() -> u32 {
        365
    }

    pub fn publish_hour() -> u32 {
        9
    }

    pub fn image_extensions() -> Vec<String> {
        ["jpg", "jpeg", "png"].map(String::from).to_vec()
    }

    pub fn blog_tags() -> Vec<String> {
        vec!["blog".into()]
    }

    pub fn fallback_tags() -> Vec<String> {
        vec!["projects".into()]
    }
}

// ============================================================================
// [work] Section Defaults
// ============================================================================

pub mod work {
    pub fn sentinel() -> String {
        "MASTER PROJECT LIST".into()
    }

    pub fn fallback_org() -> String {
        "OTHER".into()
    }
}
