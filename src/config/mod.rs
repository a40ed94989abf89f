//! Site configuration management for `sitenav.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── site       # [site], [[site.nav]], [[site.social]]
//! │   ├── sidebar    # [[sidebar]], [[sidebar.groups]]
//! │   └── validate   # [validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # Config discovery, URL checks
//! └── mod.rs         # SiteConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{
    BuildSectionConfig, NavItem, SidebarSection, SiteSectionConfig, SocialLink, ValidateConfig,
    ValidateLevel,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{CheckArgs, Cli, Commands},
    content::ScanOptions,
    index::SectionSpec,
    log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{find_config_file, normalize_path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitenav.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata and top navigation
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Content scanning settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,

    /// Sidebar sections, in declaration order
    #[serde(default)]
    pub sidebar: Vec<SidebarSection>,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cli.config, &cwd)
            .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        config.config_path = normalize_path(&config_path);
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.root = root;

        if let Some(content) = &cli.content {
            self.build.content = content.clone();
        }
        self.build.content = normalize_path(&self.root.join(&self.build.content));

        crate::logger::set_verbose(cli.verbose);
        self.apply_command_options(cli);
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Check { args } => self.apply_check_args(args),
            Commands::Render { .. } | Commands::Lookup { .. } | Commands::Docs => {}
        }
    }

    /// Apply check arguments from CLI (CLI flags override config).
    fn apply_check_args(&mut self, args: &CheckArgs) {
        Self::update_option(&mut self.validate.duplicates, args.duplicates.as_ref());
        Self::update_option(&mut self.validate.nav, args.nav.as_ref());
        if args.warn_only {
            self.validate.level = ValidateLevel::Warn;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        Ok(diag.into_result()?)
    }

    /// Run every section check without printing.
    fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);

        let sidebar = FieldPath::new("sidebar");
        for (i, section) in self.sidebar.iter().enumerate() {
            section.validate(&sidebar.index(i), &mut diag);
        }

        diag
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Absolute content directory.
    pub fn content_dir(&self) -> &Path {
        &self.build.content
    }

    /// Scanner options from `[build]`.
    pub fn scan_options(&self) -> ScanOptions<'_> {
        ScanOptions {
            extensions: &self.build.extensions,
            exclude: &self.build.exclude,
        }
    }

    /// Sidebar sections in the content index's input form.
    pub fn sidebar_specs(&self) -> Vec<SectionSpec> {
        self.sidebar.iter().map(SidebarSection::to_spec).collect()
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config with a minimal `[site]` table.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
