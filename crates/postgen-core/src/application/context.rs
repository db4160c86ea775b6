//! Explicit per-invocation context.
//!
//! Everything the services would otherwise read from process globals (the
//! working directory, the clock, configuration) is carried here.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::application::ports::DirEntry;
use crate::domain::{BlogLayout, DEFAULT_EMOJI, PostDate};

/// Directory names never offered as a blog directory.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "src",
    "public",
    "scripts",
    "build",
    "dist",
    "target",
    "config",
    "app",
];

#[derive(Debug, Clone)]
pub struct ScaffoldContext {
    /// Directory searched for blog directories.
    pub working_dir: PathBuf,
    /// Date written into `update:`.
    pub today: PostDate,
    pub layout: BlogLayout,
    /// Emoji written into new description files.
    pub emoji: String,
    pub ignored_dirs: Vec<String>,
}

impl ScaffoldContext {
    pub fn new(working_dir: impl Into<PathBuf>, today: NaiveDate) -> Self {
        Self {
            working_dir: working_dir.into(),
            today: PostDate::new(today),
            layout: BlogLayout::default(),
            emoji: DEFAULT_EMOJI.into(),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_layout(mut self, layout: BlogLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    pub fn with_ignored_dirs(mut self, ignored: Vec<String>) -> Self {
        self.ignored_dirs = ignored;
        self
    }

    /// Directories without a `.` in their name that are not ignored.
    pub fn is_blog_candidate(&self, entry: &DirEntry) -> bool {
        entry.is_dir
            && !entry.name.contains('.')
            && !self.ignored_dirs.iter().any(|ignored| *ignored == entry.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ScaffoldContext {
        ScaffoldContext::new("/work", NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
    }

    #[test]
    fn defaults() {
        let ctx = ctx();
        assert_eq!(ctx.today.to_string(), "2026/10/17");
        assert_eq!(ctx.emoji, "🌏");
        assert_eq!(ctx.layout, BlogLayout::default());
    }

    #[test]
    fn blog_candidates_exclude_files_dotted_and_ignored() {
        let ctx = ctx();
        assert!(ctx.is_blog_candidate(&DirEntry::dir("blog")));
        assert!(!ctx.is_blog_candidate(&DirEntry::file("blog")));
        assert!(!ctx.is_blog_candidate(&DirEntry::dir(".git")));
        assert!(!ctx.is_blog_candidate(&DirEntry::dir("next.config")));
        assert!(!ctx.is_blog_candidate(&DirEntry::dir("node_modules")));
    }

    #[test]
    fn ignored_dirs_are_configurable() {
        let ctx = ctx().with_ignored_dirs(vec!["drafts".into()]);
        assert!(ctx.is_blog_candidate(&DirEntry::dir("src")));
        assert!(!ctx.is_blog_candidate(&DirEntry::dir("drafts")));
    }
}
