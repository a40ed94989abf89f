//! Configuration section definitions.
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[site]`      | Title, description, nav bar, social links      |
//! | `[build]`     | Content root and document scanning             |
//! | `[validate]`  | Failure level, duplicate policy, nav checks    |
//! | `[[sidebar]]` | Sidebar sections, groups and links             |

mod build;
mod sidebar;
mod site;
mod validate;

pub use build::BuildSectionConfig;
pub use sidebar::SidebarSection;
pub use site::{NavItem, SiteSectionConfig, SocialLink};
pub use validate::{ValidateConfig, ValidateLevel};
