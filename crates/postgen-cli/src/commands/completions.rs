//! Shell completion generation.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN_NAME: &str = "postgen";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    write_completions(args.shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    match shell {
        Shell::Bash => render(shells::Bash, out),
        Shell::Zsh => render(shells::Zsh, out),
        Shell::Fish => render(shells::Fish, out),
        Shell::PowerShell => render(shells::PowerShell, out),
        Shell::Elvish => render(shells::Elvish, out),
    }
}

fn render<G: Generator>(generator: G, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(generator, &mut cmd, BIN_NAME, out);
}
