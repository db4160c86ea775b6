//! The interactive blog flow: pick a blog, pick a category (or make one),
//! write a post.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ScaffoldContext,
        ports::{ColorSource, Filesystem, Prompter},
        services::{
            category_namer::{CATEGORY_PROMPT, CategoryNamer, collision_message},
            prompting,
            scaffold_service::{CategoryPlan, CategoryReport, GenerationStage, ScaffoldService},
        },
    },
    domain::{DescriptionFormat, DomainError, PostTitle, PostingType},
    error::{PostgenError, PostgenResult},
};

pub const BLOG_DIR_PROMPT: &str = "Blog Post Directory Name";
pub const POSTING_TYPE_PROMPT: &str = "Post Generation Type";
pub const CATEGORY_CHOICE_PROMPT: &str = "Category";
pub const DESCRIPTION_PROMPT: &str = "Category Description";
pub const FORMAT_PROMPT: &str = "Description Format";
pub const TITLE_PROMPT: &str = "Post Title";

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    PostCreated { category: String, path: PathBuf },
    CategoryCreated(CategoryReport),
}

pub struct BlogWorkflow {
    scaffold: ScaffoldService,
    prompter: Box<dyn Prompter>,
}

impl BlogWorkflow {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        prompter: Box<dyn Prompter>,
        colors: Box<dyn ColorSource>,
    ) -> Self {
        Self {
            scaffold: ScaffoldService::new(filesystem, colors),
            prompter,
        }
    }

    /// Run the whole flow once.
    #[instrument(skip_all, fields(working_dir = %ctx.working_dir.display()))]
    pub fn run(&self, ctx: &ScaffoldContext) -> PostgenResult<WorkflowOutcome> {
        let blog_root = self.select_blog_dir(ctx)?;

        let options: Vec<String> = PostingType::ALL
            .iter()
            .map(|t| t.label().to_string())
            .collect();
        let posting: PostingType = prompting::ask_choice(
            self.prompter.as_ref(),
            "posting type",
            POSTING_TYPE_PROMPT,
            &options,
        )?
        .parse()?;
        info!(blog = %blog_root.display(), %posting, "Starting post generation");

        match posting {
            PostingType::CurrentCategory => self.post_in_current_category(ctx, &blog_root),
            PostingType::NewCategory => self.post_in_new_category(ctx, &blog_root),
        }
    }

    /// Candidate blog directories in the working directory, sorted by name.
    pub fn discover_blog_dirs(&self, ctx: &ScaffoldContext) -> PostgenResult<Vec<String>> {
        let entries = self
            .scaffold
            .filesystem()
            .read_dir(&ctx.working_dir)
            .map_err(|e| discovery_failed(&ctx.working_dir, &e))?;

        let mut dirs: Vec<String> = entries
            .into_iter()
            .filter(|entry| ctx.is_blog_candidate(entry))
            .map(|entry| entry.name)
            .collect();
        dirs.sort();

        debug!(count = dirs.len(), "Discovered blog directories");
        Ok(dirs)
    }

    /// A single candidate is taken without asking.
    pub fn select_blog_dir(&self, ctx: &ScaffoldContext) -> PostgenResult<PathBuf> {
        let dirs = self.discover_blog_dirs(ctx)?;

        let chosen = match dirs.as_slice() {
            [] => {
                return Err(DomainError::EmptyChoiceSet {
                    subject: "blog directory".into(),
                }
                .into());
            }
            [only] => {
                self.prompter.notify(&format!("{BLOG_DIR_PROMPT}: {only}"));
                only.clone()
            }
            _ => prompting::ask_choice(
                self.prompter.as_ref(),
                "blog directory",
                BLOG_DIR_PROMPT,
                &dirs,
            )?,
        };

        Ok(ctx.working_dir.join(chosen))
    }

    /// Category directories under `<blog>/contents`, sorted by name.
    pub fn list_categories(
        &self,
        ctx: &ScaffoldContext,
        blog_root: &Path,
    ) -> PostgenResult<Vec<String>> {
        let contents_dir = ctx.layout.contents_dir(blog_root);
        let entries = self
            .scaffold
            .filesystem()
            .read_dir(&contents_dir)
            .map_err(|e| discovery_failed(&contents_dir, &e))?;

        let mut categories: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.is_dir && !entry.name.starts_with('.'))
            .map(|entry| entry.name)
            .collect();
        categories.sort();
        Ok(categories)
    }

    #[instrument(skip_all)]
    pub fn post_in_current_category(
        &self,
        ctx: &ScaffoldContext,
        blog_root: &Path,
    ) -> PostgenResult<WorkflowOutcome> {
        let categories = self.list_categories(ctx, blog_root)?;
        let category = prompting::ask_choice(
            self.prompter.as_ref(),
            "category",
            CATEGORY_CHOICE_PROMPT,
            &categories,
        )?;
        let title: PostTitle = prompting::ask_parsed(self.prompter.as_ref(), TITLE_PROMPT)?;

        let posts_dir = ctx
            .layout
            .posts_dir(&ctx.layout.contents_dir(blog_root).join(&category));
        let path = self.scaffold.generate_post(ctx, &posts_dir, &title)?;

        Ok(WorkflowOutcome::PostCreated { category, path })
    }

    /// New category with its first post.
    ///
    /// If the category directory appears between the name check and its
    /// creation, the user is asked for another name and generation restarts.
    #[instrument(skip_all)]
    pub fn post_in_new_category(
        &self,
        ctx: &ScaffoldContext,
        blog_root: &Path,
    ) -> PostgenResult<WorkflowOutcome> {
        let prompter = self.prompter.as_ref();
        let contents_dir = ctx.layout.contents_dir(blog_root);
        let namer = CategoryNamer::new(self.scaffold.filesystem(), prompter);

        let candidate = prompter.ask_text(CATEGORY_PROMPT)?;
        let name = namer.resolve(&contents_dir, &candidate)?;
        let description = prompting::ask_text(prompter, DESCRIPTION_PROMPT)?;

        let formats: Vec<String> = DescriptionFormat::ALL
            .iter()
            .map(|f| f.extension().to_string())
            .collect();
        let format: DescriptionFormat =
            prompting::ask_choice(prompter, "description format", FORMAT_PROMPT, &formats)?
                .parse()?;
        let title: PostTitle = prompting::ask_parsed(prompter, TITLE_PROMPT)?;

        let mut plan = CategoryPlan {
            name,
            description,
            format,
            title,
        };

        loop {
            match self.scaffold.generate_category(ctx, blog_root, &plan) {
                Ok(report) => return Ok(WorkflowOutcome::CategoryCreated(report)),
                Err(e)
                    if is_category_collision(
                        &e,
                        &ctx.layout.category_dir(blog_root, &plan.name),
                    ) =>
                {
                    warn!(category = %plan.name, "Category appeared before it could be created");
                    prompter.notify(&collision_message(&plan.name));
                    let candidate = prompter.ask_text(CATEGORY_PROMPT)?;
                    plan.name = namer.resolve(&contents_dir, &candidate)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn discovery_failed(path: &Path, cause: &PostgenError) -> PostgenError {
    ApplicationError::DirectoryDiscovery {
        path: path.to_path_buf(),
        reason: cause.to_string(),
    }
    .into()
}

fn is_category_collision(err: &PostgenError, category_dir: &Path) -> bool {
    matches!(
        err,
        PostgenError::Application(ApplicationError::GenerationFailed {
            stage: GenerationStage::DirectoryCreated,
            path,
            ..
        }) if path == category_dir
    ) && err.is_already_exists()
}
