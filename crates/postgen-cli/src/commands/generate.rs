//! The default command: interactive post generation.
//!
//! Responsibility: wire the real adapters into the core workflow, run it in
//! the current directory, and report what was written. No blog logic lives
//! here.

use tracing::{info, instrument};

use postgen_adapters::{LocalFilesystem, RandomColorSource};
use postgen_core::{
    application::{ApplicationError, BlogWorkflow, ScaffoldContext, WorkflowOutcome},
    error::PostgenError,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{INTERRUPTED, TerminalPrompter},
};

#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let working_dir = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "Failed to read the current directory".into(),
        source: e,
    })?;
    let today = chrono::Local::now().date_naive();
    let ctx = config.apply(ScaffoldContext::new(working_dir, today));

    output.header("postgen")?;
    if output.is_verbose() {
        output.info(&format!("Looking for blogs in {}", ctx.working_dir.display()))?;
    }

    let workflow = BlogWorkflow::new(
        Box::new(LocalFilesystem::new()),
        Box::new(TerminalPrompter::new(!output.supports_color())),
        Box::new(RandomColorSource::new()),
    );

    let outcome = workflow.run(&ctx).map_err(into_cli_error)?;
    report(&outcome, &output)?;

    info!("Generation finished");
    Ok(())
}

fn into_cli_error(err: PostgenError) -> CliError {
    match err {
        PostgenError::Application(ApplicationError::PromptFailed { ref reason })
            if reason == INTERRUPTED =>
        {
            CliError::Cancelled
        }
        other => CliError::Core(other),
    }
}

fn report(outcome: &WorkflowOutcome, output: &OutputManager) -> CliResult<()> {
    match outcome {
        WorkflowOutcome::PostCreated { category, path } => {
            output.success(&format!("New post created in '{category}'"))?;
            output.detail("post", &path.display().to_string())?;
        }
        WorkflowOutcome::CategoryCreated(report) => {
            output.success(&format!("New category '{}' created", report.name))?;
            output.detail("description", &report.description_path.display().to_string())?;
            output.detail("post", &report.post_path.display().to_string())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use postgen_core::domain::DomainError;

    use super::*;

    #[test]
    fn interrupted_prompt_is_a_cancellation() {
        let err = into_cli_error(
            ApplicationError::PromptFailed {
                reason: INTERRUPTED.into(),
            }
            .into(),
        );
        assert!(matches!(err, CliError::Cancelled));
    }

    #[test]
    fn other_failures_stay_core_errors() {
        let err = into_cli_error(DomainError::EmptyInput.into());
        assert!(matches!(err, CliError::Core(_)));

        let err = into_cli_error(
            ApplicationError::PromptFailed {
                reason: "not a terminal".into(),
            }
            .into(),
        );
        assert!(matches!(err, CliError::Core(_)));
    }
}
