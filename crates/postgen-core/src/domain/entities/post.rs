use std::fmt::Write;

use crate::domain::value_objects::{HexColor, PostDate, PostTitle};

pub const PREVIEW_PLACEHOLDER: &str = "PREVIEW";
pub const AUTHOR_PLACEHOLDER: &str = "AUTHOR";
pub const TAGS_PLACEHOLDER: &str = "TAG1, TAG2";
pub const BODY_PLACEHOLDER: &str = "# Post Title";

const FRONT_MATTER_FENCE: &str = "---";

/// A new post: front matter plus a placeholder body.
///
/// Rendering is pure. Date and color are decided by the caller so the same
/// inputs always produce the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTemplate {
    title: PostTitle,
    update: PostDate,
    color: HexColor,
}

impl PostTemplate {
    pub fn new(title: PostTitle, update: PostDate, color: HexColor) -> Self {
        Self {
            title,
            update,
            color,
        }
    }

    pub fn title(&self) -> &PostTitle {
        &self.title
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    /// `<slug>.<extension>`
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.title.slug(), extension)
    }

    /// The `---` delimited metadata block, fields in fixed order.
    pub fn front_matter(&self) -> String {
        let mut buf = String::new();

        let _ = writeln!(&mut buf, "{FRONT_MATTER_FENCE}");
        let _ = writeln!(&mut buf, "title: {}", self.title);
        let _ = writeln!(&mut buf, "preview: {PREVIEW_PLACEHOLDER}");
        let _ = writeln!(&mut buf, "author: {AUTHOR_PLACEHOLDER}");
        let _ = writeln!(&mut buf, "update: {}", self.update);
        let _ = writeln!(&mut buf, "color: \"{}\"", self.color);
        let _ = writeln!(&mut buf, "tags: {TAGS_PLACEHOLDER}");
        let _ = write!(&mut buf, "{FRONT_MATTER_FENCE}");
        buf
    }

    /// Full file content.
    pub fn render(&self) -> String {
        format!("{}\n\n{BODY_PLACEHOLDER}\n", self.front_matter())
    }
}
