//! Scaffold Service - writes posts and categories.
//!
//! Category generation runs four steps in order:
//! 1. Create the category directory (exclusive)
//! 2. Write the description file
//! 3. Create the posts directory
//! 4. Write the first post
//!
//! Nothing is rolled back. A failure reports the object, the step and the path,
//! and whatever was created before it stays on disk.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ScaffoldContext,
        ports::{ColorSource, Filesystem},
    },
    domain::{CategoryDescription, CategoryName, DescriptionFormat, PostTemplate, PostTitle},
    error::{Context, PostgenError, PostgenResult},
};

/// Progress of a category generation.
///
/// `Naming` precedes any filesystem write. A failure carries the stage that
/// was being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Naming,
    DirectoryCreated,
    DescriptionWritten,
    PostsDirCreated,
    PostWritten,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Naming => "resolving the category name",
            Self::DirectoryCreated => "creating the category directory",
            Self::DescriptionWritten => "writing the description file",
            Self::PostsDirCreated => "creating the posts directory",
            Self::PostWritten => "writing the post",
        })
    }
}

/// Everything needed to create a new category with its first post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPlan {
    pub name: CategoryName,
    pub description: String,
    pub format: DescriptionFormat,
    pub title: PostTitle,
}

/// Paths created by a successful category generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub name: CategoryName,
    pub category_dir: PathBuf,
    pub description_path: PathBuf,
    pub posts_dir: PathBuf,
    pub post_path: PathBuf,
}

/// Post and category writer.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    colors: Box<dyn ColorSource>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>, colors: Box<dyn ColorSource>) -> Self {
        Self { filesystem, colors }
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    /// Write a new post into `posts_dir`, creating the directory if needed.
    ///
    /// Fails with `AlreadyExists` (wrapped in `GenerationFailed`) when a post
    /// with the same slug is already there.
    #[instrument(skip_all, fields(title = %title, posts_dir = %posts_dir.display()))]
    pub fn generate_post(
        &self,
        ctx: &ScaffoldContext,
        posts_dir: &Path,
        title: &PostTitle,
    ) -> PostgenResult<PathBuf> {
        self.filesystem
            .create_dir_all(posts_dir)
            .map_err(|e| failed("posts directory", GenerationStage::PostsDirCreated, posts_dir, e))?;

        self.write_post(ctx, posts_dir, title)
    }

    /// Create a category directory, its description, its posts directory and
    /// its first post.
    #[instrument(skip_all, fields(category = %plan.name, blog = %blog_root.display()))]
    pub fn generate_category(
        &self,
        ctx: &ScaffoldContext,
        blog_root: &Path,
        plan: &CategoryPlan,
    ) -> PostgenResult<CategoryReport> {
        info!(format = %plan.format, "Generating category");

        // 1. Category directory
        let contents_dir = ctx.layout.contents_dir(blog_root);
        self.filesystem.create_dir_all(&contents_dir).map_err(|e| {
            failed("contents directory", GenerationStage::DirectoryCreated, &contents_dir, e)
        })?;

        let category_dir = ctx.layout.category_dir(blog_root, &plan.name);
        self.filesystem.create_dir(&category_dir).map_err(|e| {
            failed("category directory", GenerationStage::DirectoryCreated, &category_dir, e)
        })?;
        debug!(stage = %GenerationStage::DirectoryCreated, path = %category_dir.display());

        // 2. Description file
        let description_path = ctx.layout.description_path(&category_dir, plan.format);
        let description =
            CategoryDescription::new(&plan.description, self.colors.next_color(), &ctx.emoji);
        let content = description
            .render(plan.format)
            .context("Failed to serialize category description")?;
        self.filesystem
            .create_file(&description_path, &content)
            .map_err(|e| {
                failed(
                    "description file",
                    GenerationStage::DescriptionWritten,
                    &description_path,
                    e,
                )
            })?;
        debug!(stage = %GenerationStage::DescriptionWritten, path = %description_path.display());

        // 3. Posts directory
        let posts_dir = ctx.layout.posts_dir(&category_dir);
        self.filesystem.create_dir(&posts_dir).map_err(|e| {
            failed("posts directory", GenerationStage::PostsDirCreated, &posts_dir, e)
        })?;
        debug!(stage = %GenerationStage::PostsDirCreated, path = %posts_dir.display());

        // 4. First post
        let post_path = self.write_post(ctx, &posts_dir, &plan.title)?;

        info!(category = %plan.name, "Category generated");
        Ok(CategoryReport {
            name: plan.name.clone(),
            category_dir,
            description_path,
            posts_dir,
            post_path,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_post(
        &self,
        ctx: &ScaffoldContext,
        posts_dir: &Path,
        title: &PostTitle,
    ) -> PostgenResult<PathBuf> {
        let template = PostTemplate::new(title.clone(), ctx.today, self.colors.next_color());
        let path = ctx.layout.post_path(posts_dir, title.slug());

        self.filesystem
            .create_file(&path, &template.render())
            .map_err(|e| failed("post", GenerationStage::PostWritten, &path, e))?;

        debug!(stage = %GenerationStage::PostWritten, path = %path.display());
        Ok(path)
    }
}

fn failed(object: &str, stage: GenerationStage, path: &Path, source: PostgenError) -> PostgenError {
    warn!(object, %stage, path = %path.display(), error = %source, "Generation step failed");
    ApplicationError::GenerationFailed {
        object: object.into(),
        stage,
        path: path.to_path_buf(),
        source: Box::new(source),
    }
    .into()
}
