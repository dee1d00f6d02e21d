use std::{
    borrow::Cow,
    env, fmt,
    io::{self, BufRead},
    path::PathBuf,
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;
use tracing::debug;

use super::commands::{CliMode, LoopControl, ShellContext};
use super::output::{self, OutputPreferences};
use crate::config::ConfigManager;
use crate::errors::CliError;

const SCRIPT_ENV: &str = "CONTACT_FORM_CLI_SCRIPT";

/// Runs the shell, reading the config from `config_path` or the default
/// location.
pub fn run_cli(config_path: Option<PathBuf>) -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let manager = match config_path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    debug!(path = %manager.path().display(), "loading form config");
    let config = manager.load()?;
    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_output,
        quiet_mode: config.quiet_output,
    });

    let mut context = ShellContext::new(mode, &config)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let helper = CommandHelper::new(ShellContext::command_names());
    editor.set_helper(Some(helper));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output::info("Type `help` for commands.");

    loop {
        let prompt = context.prompt();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                editor.add_history_entry(trimmed).ok();

                match handle_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(&err);
            return Ok(LoopControl::Continue);
        }
    };

    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    if raw.starts_with('#') {
        return Ok(LoopControl::Continue);
    }

    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    context.dispatch(&command, &args)
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);

        // Only the first word is a command.
        if !prefix[..start].trim().is_empty() {
            return Ok((start, Vec::new()));
        }

        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
