use crate::domain::error::DomainError;

/// Centralized input validation.
///
/// Prompt loops decide whether to retry; these checks only say what is wrong.
pub struct DomainValidator;

impl DomainValidator {
    /// Trimmed text, or `EmptyInput` when nothing but whitespace was typed.
    pub fn non_empty(input: &str) -> Result<&str, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyInput);
        }
        Ok(trimmed)
    }

    /// A choice prompt needs at least one option.
    pub fn choice_set(subject: &str, options: &[String]) -> Result<(), DomainError> {
        if options.is_empty() {
            return Err(DomainError::EmptyChoiceSet {
                subject: subject.into(),
            });
        }
        Ok(())
    }

    /// The answer must be one of the offered options.
    pub fn chosen<'a>(
        subject: &str,
        options: &'a [String],
        answer: &str,
    ) -> Result<&'a str, DomainError> {
        options
            .iter()
            .find(|o| o.as_str() == answer)
            .map(String::as_str)
            .ok_or_else(|| DomainError::UnknownChoice {
                subject: subject.into(),
                choice: answer.into(),
            })
    }
}
