use std::path::{Path, PathBuf};

use crate::domain::value_objects::{CategoryName, DescriptionFormat, Slug};

/// Directory and file names that make up a blog's content tree.
///
/// ```text
/// <blog>/<contents>/<category>/<description>.<json|txt>
/// <blog>/<contents>/<category>/<posts>/<slug>.<post_extension>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogLayout {
    pub contents_dir: String,
    pub posts_dir: String,
    pub post_extension: String,
    pub description_stem: String,
}

impl Default for BlogLayout {
    fn default() -> Self {
        Self {
            contents_dir: "contents".into(),
            posts_dir: "posts".into(),
            post_extension: "mdx".into(),
            description_stem: "description".into(),
        }
    }
}

impl BlogLayout {
    pub fn contents_dir(&self, blog_root: &Path) -> PathBuf {
        blog_root.join(&self.contents_dir)
    }

    pub fn category_dir(&self, blog_root: &Path, category: &CategoryName) -> PathBuf {
        self.contents_dir(blog_root).join(category.as_str())
    }

    pub fn posts_dir(&self, category_dir: &Path) -> PathBuf {
        category_dir.join(&self.posts_dir)
    }

    pub fn description_path(&self, category_dir: &Path, format: DescriptionFormat) -> PathBuf {
        category_dir.join(format!("{}.{}", self.description_stem, format.extension()))
    }

    pub fn post_path(&self, posts_dir: &Path, slug: &Slug) -> PathBuf {
        posts_dir.join(format!("{}.{}", slug, self.post_extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_paths() {
        let layout = BlogLayout::default();
        let root = Path::new("/site/blog");
        let category: CategoryName = "tech".parse().unwrap();

        let category_dir = layout.category_dir(root, &category);
        assert_eq!(category_dir, PathBuf::from("/site/blog/contents/tech"));

        assert_eq!(
            layout.description_path(&category_dir, DescriptionFormat::Json),
            PathBuf::from("/site/blog/contents/tech/description.json")
        );
        assert_eq!(
            layout.description_path(&category_dir, DescriptionFormat::Text),
            PathBuf::from("/site/blog/contents/tech/description.txt")
        );

        let posts = layout.posts_dir(&category_dir);
        assert_eq!(posts, PathBuf::from("/site/blog/contents/tech/posts"));
        assert_eq!(
            layout.post_path(&posts, &Slug::from_title("Hello World")),
            PathBuf::from("/site/blog/contents/tech/posts/Hello-World.mdx")
        );
    }

    #[test]
    fn custom_extension_is_used() {
        let layout = BlogLayout {
            post_extension: "md".into(),
            ..BlogLayout::default()
        };
        assert_eq!(
            layout.post_path(Path::new("p"), &Slug::from_title("x")),
            PathBuf::from("p/x.md")
        );
    }
}
