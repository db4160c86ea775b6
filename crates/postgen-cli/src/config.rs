//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ScaffoldContext`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `POSTGEN_<SECTION>__<KEY>`
//!    (e.g. `POSTGEN_BLOG__CONTENTS_DIR=content`)
//! 3. Config file (`--config`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use postgen_core::{
    application::{DEFAULT_IGNORED_DIRS, ScaffoldContext},
    domain::{BlogLayout, DEFAULT_EMOJI},
};

const ENV_PREFIX: &str = "POSTGEN";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Blog layout and generated content.
    pub blog: BlogConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Directory under the blog root that holds the categories.
    pub contents_dir: String,
    /// Directory under each category that holds the posts.
    pub posts_dir: String,
    /// Extension of generated post files, without the dot.
    pub post_extension: String,
    /// Emoji written into new description files.
    pub default_emoji: String,
    /// Directory names never offered as a blog directory.
    pub ignored_dirs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let layout = BlogLayout::default();
        Self {
            blog: BlogConfig {
                contents_dir: layout.contents_dir,
                posts_dir: layout.posts_dir,
                post_extension: layout.post_extension,
                default_emoji: DEFAULT_EMOJI.into(),
                ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the
    /// environment.
    ///
    /// A file passed with `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Self::environment())
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise default config")?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("blog.ignored_dirs")
            .try_parsing(true)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.postgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "postgen", "postgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".postgen.toml"))
    }

    /// TOML text written by `postgen init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }

    pub fn layout(&self) -> BlogLayout {
        BlogLayout {
            contents_dir: self.blog.contents_dir.clone(),
            posts_dir: self.blog.posts_dir.clone(),
            post_extension: self.blog.post_extension.clone(),
            ..BlogLayout::default()
        }
    }

    /// Apply the blog settings to a fresh context.
    pub fn apply(&self, ctx: ScaffoldContext) -> ScaffoldContext {
        ctx.with_layout(self.layout())
            .with_emoji(self.blog.default_emoji.clone())
            .with_ignored_dirs(self.blog.ignored_dirs.clone())
    }
}
