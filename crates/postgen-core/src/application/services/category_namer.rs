//! Category name collision resolution.
//!
//! The namer never overwrites: a candidate whose directory already exists is
//! reported and the user is asked again, as many times as it takes. Every
//! replacement is checked again before it is accepted.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, Prompter},
    domain::CategoryName,
    error::PostgenResult,
};

pub const CATEGORY_PROMPT: &str = "New Category";

/// Resolves a candidate category name to one that is free under a contents
/// directory.
pub struct CategoryNamer<'a> {
    filesystem: &'a dyn Filesystem,
    prompter: &'a dyn Prompter,
}

impl<'a> CategoryNamer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, prompter: &'a dyn Prompter) -> Self {
        Self {
            filesystem,
            prompter,
        }
    }

    /// Return a name such that `contents_dir/name` does not exist.
    ///
    /// Invalid candidates (blank, or nothing left after sanitizing) are
    /// re-prompted without touching the filesystem. Each valid candidate costs
    /// exactly one existence check.
    #[instrument(skip_all, fields(contents_dir = %contents_dir.display()))]
    pub fn resolve(&self, contents_dir: &Path, candidate: &str) -> PostgenResult<CategoryName> {
        let mut candidate = candidate.to_string();

        loop {
            let name = match candidate.parse::<CategoryName>() {
                Ok(name) => name,
                Err(e) => {
                    debug!(candidate = %candidate, error = %e, "Rejected category name");
                    self.prompter.notify(&e.to_string());
                    candidate = self.prompter.ask_text(CATEGORY_PROMPT)?;
                    continue;
                }
            };

            if !self.filesystem.exists(&contents_dir.join(name.as_str())) {
                info!(category = %name, "Category name accepted");
                return Ok(name);
            }

            warn!(category = %name, "Category already exists");
            self.prompter.notify(&collision_message(&name));
            candidate = self.prompter.ask_text(CATEGORY_PROMPT)?;
        }
    }
}

pub(crate) fn collision_message(name: &CategoryName) -> String {
    format!("'{name}' already exists. Please type another category name")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use mockall::Sequence;

    use super::*;
    use crate::application::ports::{MockFilesystem, MockPrompter};

    fn contents() -> PathBuf {
        PathBuf::from("/blog/contents")
    }

    #[test]
    fn free_name_is_returned_after_one_check() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/blog/contents/tech"))
            .times(1)
            .return_const(false);
        let mut prompter = MockPrompter::new();
        prompter.expect_ask_text().never();
        prompter.expect_notify().never();

        let name = CategoryNamer::new(&fs, &prompter)
            .resolve(&contents(), "tech")
            .unwrap();
        assert_eq!(name.as_str(), "tech");
    }

    #[test]
    fn collision_scenario_tech_then_tech2() {
        let mut fs = MockFilesystem::new();
        let mut seq = Sequence::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/blog/contents/tech"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(true);
        fs.expect_exists()
            .withf(|p| p == Path::new("/blog/contents/tech2"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(false);

        let mut prompter = MockPrompter::new();
        prompter
            .expect_notify()
            .withf(|m| m.contains("'tech' already exists"))
            .times(1)
            .return_const(());
        prompter
            .expect_ask_text()
            .withf(|p| p == CATEGORY_PROMPT)
            .times(1)
            .returning(|_| Ok("tech2".into()));

        let name = CategoryNamer::new(&fs, &prompter)
            .resolve(&contents(), "tech")
            .unwrap();
        assert_eq!(name.as_str(), "tech2");
    }

    #[test]
    fn n_collisions_cost_n_plus_one_checks() {
        let taken = ["a", "b", "c", "d"];
        let checks = Arc::new(Mutex::new(0usize));

        let mut fs = MockFilesystem::new();
        let counter = Arc::clone(&checks);
        fs.expect_exists().returning(move |path| {
            *counter.lock().unwrap() += 1;
            let name = path.file_name().unwrap().to_str().unwrap();
            taken.contains(&name)
        });

        let replies = Arc::new(Mutex::new(vec!["free", "d", "c", "b"]));
        let mut prompter = MockPrompter::new();
        prompter.expect_notify().times(4).return_const(());
        prompter
            .expect_ask_text()
            .times(4)
            .returning(move |_| Ok(replies.lock().unwrap().pop().unwrap().to_string()));

        let name = CategoryNamer::new(&fs, &prompter)
            .resolve(&contents(), "a")
            .unwrap();
        assert_eq!(name.as_str(), "free");
        assert_eq!(*checks.lock().unwrap(), taken.len() + 1);
    }

    #[test]
    fn blank_candidate_is_reprompted_before_any_check() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/blog/contents/go"))
            .times(1)
            .return_const(false);

        let mut prompter = MockPrompter::new();
        prompter
            .expect_notify()
            .withf(|m| m == "Input cannot be empty")
            .times(1)
            .return_const(());
        prompter
            .expect_ask_text()
            .times(1)
            .returning(|_| Ok("go".into()));

        let name = CategoryNamer::new(&fs, &prompter)
            .resolve(&contents(), "   ")
            .unwrap();
        assert_eq!(name.as_str(), "go");
    }

    #[test]
    fn sanitized_name_is_what_gets_checked() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/blog/contents/ab"))
            .times(1)
            .return_const(false);
        let prompter = MockPrompter::new();

        let name = CategoryNamer::new(&fs, &prompter)
            .resolve(&contents(), "a/b?")
            .unwrap();
        assert_eq!(name.as_str(), "ab");
    }
}
