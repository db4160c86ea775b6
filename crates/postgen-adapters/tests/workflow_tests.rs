//! End-to-end runs of the blog workflow against the in-memory filesystem.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use postgen_adapters::{FixedColorSource, LocalFilesystem, MemoryFilesystem, ScriptedPrompter};
use postgen_core::{
    application::{
        ApplicationError, BlogWorkflow, GenerationStage, ScaffoldContext, WorkflowOutcome,
        ports::{DirEntry, Filesystem},
    },
    domain::{DomainError, HexColor},
    error::{PostgenError, PostgenResult},
};

const COLOR: HexColor = HexColor::from_rgb(0x1a2b3c);

fn ctx() -> ScaffoldContext {
    ScaffoldContext::new("/work", NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
}

fn blog() -> MemoryFilesystem {
    MemoryFilesystem::new()
        .with_dir("/work/blog/contents/tech/posts")
        .with_dir("/work/node_modules")
        .with_file("/work/package.json", "{}")
}

fn run(fs: &MemoryFilesystem, prompter: &ScriptedPrompter) -> PostgenResult<WorkflowOutcome> {
    BlogWorkflow::new(
        Box::new(fs.clone()),
        Box::new(prompter.clone()),
        Box::new(FixedColorSource::single(COLOR)),
    )
    .run(&ctx())
}

#[test]
fn post_in_current_category() {
    let fs = blog();
    let prompter = ScriptedPrompter::new(["Current Category", "tech", "My First Post: Hello"]);

    let outcome = run(&fs, &prompter).unwrap();

    let expected = PathBuf::from("/work/blog/contents/tech/posts/My-First-Post-Hello.mdx");
    assert_eq!(
        outcome,
        WorkflowOutcome::PostCreated {
            category: "tech".into(),
            path: expected.clone(),
        }
    );
    assert_eq!(
        fs.read_file(&expected).unwrap(),
        "---\n\
         title: My First Post Hello\n\
         preview: PREVIEW\n\
         author: AUTHOR\n\
         update: 2026/10/17\n\
         color: \"#1a2b3c\"\n\
         tags: TAG1, TAG2\n\
         ---\n\
         \n\
         # Post Title\n"
    );
    assert_eq!(
        prompter.prompts(),
        vec!["Post Generation Type", "Category", "Post Title"]
    );
    assert_eq!(prompter.notifications(), vec!["Blog Post Directory Name: blog"]);
}

#[test]
fn posts_dir_is_created_for_a_bare_category() {
    let fs = MemoryFilesystem::new().with_dir("/work/blog/contents/go");
    let prompter = ScriptedPrompter::new(["Current Category", "go", "Generics"]);

    run(&fs, &prompter).unwrap();

    assert!(fs.is_dir(Path::new("/work/blog/contents/go/posts")));
    assert!(
        fs.read_file(Path::new("/work/blog/contents/go/posts/Generics.mdx"))
            .is_some()
    );
}

#[test]
fn same_title_twice_keeps_the_first_post() {
    let fs = blog();
    let answers = ["Current Category", "tech", "Hello"];

    run(&fs, &ScriptedPrompter::new(answers)).unwrap();
    let path = Path::new("/work/blog/contents/tech/posts/Hello.mdx");
    let first = fs.read_file(path).unwrap();

    let err = run(&fs, &ScriptedPrompter::new(answers)).unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(fs.read_file(path).unwrap(), first);
}

#[test]
fn new_category_after_collision() {
    let fs = blog();
    let prompter = ScriptedPrompter::new([
        "New Category",
        "tech",
        "tech2",
        "A blog about Go",
        "json",
        "Hello",
    ]);

    let outcome = run(&fs, &prompter).unwrap();

    let report = match outcome {
        WorkflowOutcome::CategoryCreated(report) => report,
        other => panic!("expected a new category, got {other:?}"),
    };
    assert_eq!(report.name.as_str(), "tech2");
    assert_eq!(
        fs.read_file(&report.description_path).unwrap(),
        r##"{"emoji":"🌏","description":"A blog about Go","color":"#1a2b3c"}"##
    );
    assert_eq!(
        report.post_path,
        PathBuf::from("/work/blog/contents/tech2/posts/Hello.mdx")
    );
    assert!(fs.read_file(&report.post_path).is_some());
    assert!(
        prompter
            .notifications()
            .iter()
            .any(|n| n.contains("'tech' already exists"))
    );
}

#[test]
fn new_category_with_text_description() {
    let fs = blog();
    let prompter =
        ScriptedPrompter::new(["New Category", "rust", "Notes on Rust", "txt", "Ownership"]);

    let WorkflowOutcome::CategoryCreated(report) = run(&fs, &prompter).unwrap() else {
        panic!("expected a new category");
    };

    assert_eq!(
        report.description_path,
        PathBuf::from("/work/blog/contents/rust/description.txt")
    );
    assert_eq!(
        fs.read_file(&report.description_path).unwrap(),
        "Notes on Rust\ncolor: #1a2b3c\nemoji: 🌏\n"
    );
}

#[test]
fn description_json_is_valid_for_awkward_text() {
    let fs = blog();
    let prompter =
        ScriptedPrompter::new(["New Category", "misc", "say \"hi\" \\ bye", "json", "Post"]);

    let WorkflowOutcome::CategoryCreated(report) = run(&fs, &prompter).unwrap() else {
        panic!("expected a new category");
    };

    let value: serde_json::Value =
        serde_json::from_str(&fs.read_file(&report.description_path).unwrap()).unwrap();
    assert_eq!(value["description"], "say \"hi\" \\ bye");
}

#[test]
fn failing_posts_dir_leaves_earlier_steps_in_place() {
    let fs = blog();
    fs.fail_on("/work/blog/contents/go/posts");
    let prompter = ScriptedPrompter::new(["New Category", "go", "Go things", "txt", "First"]);

    let err = run(&fs, &prompter).unwrap_err();

    match &err {
        PostgenError::Application(ApplicationError::GenerationFailed { stage, path, .. }) => {
            assert_eq!(*stage, GenerationStage::PostsDirCreated);
            assert_eq!(path, Path::new("/work/blog/contents/go/posts"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(fs.is_dir(Path::new("/work/blog/contents/go")));
    assert!(
        fs.read_file(Path::new("/work/blog/contents/go/description.txt"))
            .is_some()
    );
    assert!(!fs.exists(Path::new("/work/blog/contents/go/posts")));
}

#[test]
fn no_blog_directory_is_fatal() {
    let fs = MemoryFilesystem::new()
        .with_dir("/work/src")
        .with_file("/work/README.md", "");
    let prompter = ScriptedPrompter::new(Vec::<String>::new());

    let err = run(&fs, &prompter).unwrap_err();

    assert!(matches!(
        err,
        PostgenError::Domain(DomainError::EmptyChoiceSet { .. })
    ));
    assert!(prompter.prompts().is_empty());
}

#[test]
fn empty_category_list_is_fatal() {
    let fs = MemoryFilesystem::new()
        .with_dir("/work/blog/contents")
        .with_file("/work/blog/contents/.DS_Store", "");
    let prompter = ScriptedPrompter::new(["Current Category"]);

    let err = run(&fs, &prompter).unwrap_err();
    assert_eq!(err.to_string(), "No category found");
}

#[test]
fn missing_contents_dir_is_a_discovery_failure() {
    let fs = MemoryFilesystem::new().with_dir("/work/blog");
    let prompter = ScriptedPrompter::new(["Current Category"]);

    let err = run(&fs, &prompter).unwrap_err();
    assert!(matches!(
        err,
        PostgenError::Application(ApplicationError::DirectoryDiscovery { .. })
    ));
}

/// Hides one directory from `exists` so the name check passes and the
/// exclusive create is what catches the collision.
struct RacingFilesystem {
    inner: MemoryFilesystem,
    hidden: PathBuf,
}

impl Filesystem for RacingFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path != self.hidden && self.inner.exists(path)
    }

    fn create_dir(&self, path: &Path) -> PostgenResult<()> {
        self.inner.create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> PostgenResult<()> {
        self.inner.create_dir_all(path)
    }

    fn create_file(&self, path: &Path, content: &str) -> PostgenResult<()> {
        self.inner.create_file(path, content)
    }

    fn read_dir(&self, path: &Path) -> PostgenResult<Vec<DirEntry>> {
        self.inner.read_dir(path)
    }
}

#[test]
fn exclusive_create_collision_goes_back_to_naming() {
    let fs = blog();
    let racing = RacingFilesystem {
        inner: fs.clone(),
        hidden: PathBuf::from("/work/blog/contents/tech"),
    };
    let prompter = ScriptedPrompter::new([
        "New Category",
        "tech",
        "About things",
        "json",
        "Hello",
        "rust",
    ]);

    let outcome = BlogWorkflow::new(
        Box::new(racing),
        Box::new(prompter.clone()),
        Box::new(FixedColorSource::single(COLOR)),
    )
    .run(&ctx())
    .unwrap();

    let WorkflowOutcome::CategoryCreated(report) = outcome else {
        panic!("expected a new category");
    };
    assert_eq!(report.name.as_str(), "rust");
    assert_eq!(
        prompter.prompts(),
        vec![
            "Post Generation Type",
            "New Category",
            "Category Description",
            "Description Format",
            "Post Title",
            "New Category",
        ]
    );
    assert!(fs.read_file(&report.post_path).is_some());
    assert!(
        fs.read_file(Path::new("/work/blog/contents/tech/description.json"))
            .is_none()
    );
}

#[test]
fn local_filesystem_runs_the_whole_flow() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("site/contents/tech")).unwrap();
    std::fs::create_dir(dir.path().join("node_modules")).unwrap();

    let ctx = ScaffoldContext::new(dir.path(), NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    let prompter = ScriptedPrompter::new(["New Category", "tech", "web", "Web notes", "txt", "Hi"]);

    let outcome = BlogWorkflow::new(
        Box::new(LocalFilesystem::new()),
        Box::new(prompter),
        Box::new(FixedColorSource::single(COLOR)),
    )
    .run(&ctx)
    .unwrap();

    let WorkflowOutcome::CategoryCreated(report) = outcome else {
        panic!("expected a new category");
    };
    let post = dir.path().join("site/contents/web/posts/Hi.mdx");
    assert_eq!(report.post_path, post);
    assert!(std::fs::read_to_string(post).unwrap().contains("title: Hi\n"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("site/contents/web/description.txt")).unwrap(),
        "Web notes\ncolor: #1a2b3c\nemoji: 🌏\n"
    );
}
