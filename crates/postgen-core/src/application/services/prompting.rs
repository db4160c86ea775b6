//! Validated prompting on top of the raw [`Prompter`] port.
//!
//! Free text is retried until it is non-empty (and parses, for typed
//! answers). Choices are never retried: an empty option set means the blog is
//! missing folders, which no amount of re-asking fixes.

use std::str::FromStr;

use tracing::debug;

use crate::{
    application::ports::Prompter,
    domain::{DomainError, DomainValidator},
    error::PostgenResult,
};

/// Ask until the trimmed answer is non-empty; returns the trimmed answer.
pub fn ask_text(prompter: &dyn Prompter, prompt: &str) -> PostgenResult<String> {
    loop {
        let answer = prompter.ask_text(prompt)?;
        match DomainValidator::non_empty(&answer) {
            Ok(value) => return Ok(value.to_string()),
            Err(e) => {
                debug!(prompt, "Rejected empty answer");
                prompter.notify(&e.to_string());
            }
        }
    }
}

/// Ask until the answer parses into `T`, reporting every rejection.
pub fn ask_parsed<T>(prompter: &dyn Prompter, prompt: &str) -> PostgenResult<T>
where
    T: FromStr<Err = DomainError>,
{
    loop {
        let answer = ask_text(prompter, prompt)?;
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(prompt, error = %e, "Rejected answer");
                prompter.notify(&e.to_string());
            }
        }
    }
}

/// Ask the user to pick one of `options`.
///
/// Fails with `EmptyChoiceSet` before prompting when `options` is empty.
pub fn ask_choice(
    prompter: &dyn Prompter,
    subject: &str,
    prompt: &str,
    options: &[String],
) -> PostgenResult<String> {
    DomainValidator::choice_set(subject, options)?;
    let answer = prompter.ask_choice(prompt, options)?;
    Ok(DomainValidator::chosen(subject, options, &answer)?.to_string())
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::application::ports::MockPrompter;
    use crate::domain::PostTitle;
    use crate::error::PostgenError;

    fn scripted_text(answers: &'static [&'static str]) -> MockPrompter {
        let mut prompter = MockPrompter::new();
        let mut seq = Sequence::new();
        for answer in answers {
            prompter
                .expect_ask_text()
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| Ok(answer.to_string()));
        }
        prompter
    }

    #[test]
    fn text_is_trimmed() {
        let mut prompter = scripted_text(&["  hello  "]);
        prompter.expect_notify().never();
        assert_eq!(ask_text(&prompter, "Title").unwrap(), "hello");
    }

    #[test]
    fn empty_text_is_reprompted() {
        let mut prompter = scripted_text(&["", "   ", "ok"]);
        prompter
            .expect_notify()
            .withf(|m| m == "Input cannot be empty")
            .times(2)
            .return_const(());
        assert_eq!(ask_text(&prompter, "Title").unwrap(), "ok");
    }

    #[test]
    fn unparsable_answer_is_reprompted() {
        let mut prompter = scripted_text(&["://", "Fine Title"]);
        prompter.expect_notify().times(1).return_const(());
        let title: PostTitle = ask_parsed(&prompter, "Post Title").unwrap();
        assert_eq!(title.slug().as_str(), "Fine-Title");
    }

    #[test]
    fn empty_choice_set_fails_without_prompting() {
        let mut prompter = MockPrompter::new();
        prompter.expect_ask_choice().never();
        let err = ask_choice(&prompter, "category", "Category", &[]).unwrap_err();
        assert!(matches!(
            err,
            PostgenError::Domain(DomainError::EmptyChoiceSet { .. })
        ));
    }

    #[test]
    fn choice_outside_options_is_rejected() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_ask_choice()
            .returning(|_, _| Ok("other".into()));
        let options = vec!["tech".to_string()];
        assert!(ask_choice(&prompter, "category", "Category", &options).is_err());
    }

    #[test]
    fn prompter_failure_propagates() {
        let mut prompter = MockPrompter::new();
        prompter.expect_ask_text().returning(|_| {
            Err(crate::application::ApplicationError::PromptFailed {
                reason: "interrupted".into(),
            }
            .into())
        });
        assert!(ask_text(&prompter, "Title").is_err());
    }
}
