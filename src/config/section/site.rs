//! `[site]` configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Yi Sun's Blog"
//! description = "This is Yi Sun's blog."
//! math = true
//!
//! [[site.nav]]
//! text = "Posts"
//! link = "/posts/prologue"
//!
//! [[site.social]]
//! icon = "github"
//! link = "https://github.com/boreas618"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::is_absolute_url;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata, top navigation bar and social links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title shown in the header.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Whether pages use math rendering.
    pub math: bool,

    /// Top navigation bar, in display order.
    pub nav: Vec<NavItem>,

    /// Social links shown in the header.
    pub social: Vec<SocialLink>,
}

/// One navigation link (used by both the nav bar and sidebar entries)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

/// Icon link to an external profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (e.g., "github", "twitter").
    pub icon: String,
    pub link: String,
}

impl SiteSectionConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - nav items need text and a link
    /// - social links must be absolute URLs
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let site = FieldPath::new("site");

        if self.title.trim().is_empty() {
            diag.error(site.field("title"), "site title must not be empty");
        }

        let nav = site.field("nav");
        for (i, item) in self.nav.iter().enumerate() {
            item.validate(&nav.index(i), diag);
        }

        let social = site.field("social");
        for (i, link) in self.social.iter().enumerate() {
            let field = social.index(i);
            if link.icon.trim().is_empty() {
                diag.error(field.field("icon"), "icon must not be empty");
            }
            if !is_absolute_url(&link.link) {
                diag.error_with_hint(
                    field.field("link"),
                    format!("`{}` is not an absolute URL", link.link),
                    "social links point off-site, e.g. \"https://github.com/you\"",
                );
            }
        }
    }
}

impl NavItem {
    /// Validate text and link are present.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.field("text"), "link text must not be empty");
        }
        if self.link.trim().is_empty() {
            diag.error_with_hint(
                field.field("link"),
                "link must not be empty",
                "use \"/\" for the home page",
            );
        }
    }
}
