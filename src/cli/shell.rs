//! Interactive shell mode for Scribe CLI
//!
//! Provides a REPL with command history and tab completion, so several
//! batches can be run without restarting.

use anyhow::Result;
use clap::Parser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};

use super::{Cli, Commands};

/// Command completer for the shell
struct ShellCompleter {
    commands: Vec<(&'static str, Vec<&'static str>)>,
}

impl ShellCompleter {
    fn new() -> Self {
        Self {
            commands: vec![
                ("generate", vec![]),
                ("presets", vec![]),
                ("config", vec!["show", "get", "set", "path"]),
                ("help", vec![]),
                ("exit", vec![]),
                ("quit", vec![]),
            ],
        }
    }

    fn pairs<'a>(words: impl Iterator<Item = &'a &'static str>) -> Vec<Pair> {
        words
            .map(|w| Pair {
                display: w.to_string(),
                replacement: w.to_string(),
            })
            .collect()
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let words: Vec<&str> = line.split_whitespace().collect();
        let start = line.rfind(' ').map(|i| i + 1).unwrap_or(0);

        match (words.as_slice(), line.ends_with(' ')) {
            ([], _) => Ok((0, Self::pairs(self.commands.iter().map(|(cmd, _)| cmd)))),
            ([prefix], false) => Ok((
                start,
                Self::pairs(
                    self.commands
                        .iter()
                        .map(|(cmd, _)| cmd)
                        .filter(|cmd| cmd.starts_with(prefix)),
                ),
            )),
            ([cmd], true) | ([cmd, _], false) => {
                let prefix = if line.ends_with(' ') { "" } else { words[1] };
                let subs = self
                    .commands
                    .iter()
                    .find(|(c, _)| c == cmd)
                    .map(|(_, subs)| Self::pairs(subs.iter().filter(|s| s.starts_with(prefix))))
                    .unwrap_or_default();
                Ok((start, subs))
            }
            _ => Ok((pos, vec![])),
        }
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellCompleter {}
impl Validator for ShellCompleter {}
impl Helper for ShellCompleter {}

/// Parse a command line into arguments, handling quotes
fn parse_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (c, quote) {
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            (' ', None) => {
                if !current.is_empty() {
                    args.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        args.push(current);
    }

    args
}

/// Run a single command in the shell.
/// Returns Ok(true) to continue, Ok(false) to exit gracefully.
async fn run_command(args: Vec<String>) -> Result<bool> {
    let Some(first) = args.first() else {
        return Ok(true);
    };

    match first.as_str() {
        "help" => {
            print_help();
            return Ok(true);
        }
        "exit" | "quit" => return Ok(false),
        _ => {}
    }

    // Build a fake argv for clap: ["scribe", ...args]
    let mut argv: Vec<String> = vec!["scribe".to_string()];
    argv.extend(args);

    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            println!("{}", e);
            return Ok(true);
        }
    };

    match cli.command {
        None => print_help(),
        Some(Commands::Shell) => println!("Already in shell mode."),
        Some(command) => Box::pin(super::run(command, &cli.output)).await?,
    }

    Ok(true)
}

fn print_help() {
    println!(
        r#"Scribe Interactive Shell

Commands:
  generate -t <topic> -p <platform> [options]
                           Generate posts (quote topics with spaces)
      --template <id>      Template id
      --tone <id>          Tone id
      -w, --words <n>      Approximate words per post
      --hashtags / --no-hashtags
      --emojis / --no-emojis
      -n, --count <n>      Number of posts
      --copy               Copy all posts to the clipboard

  presets                  List template, platform and tone ids

  config show              Show current configuration
  config get <key>         Get a specific setting
  config set <key> <value> Set a configuration value
  config path              Show config file path

  help                     Show this help
  exit, quit               Exit the shell

Flags (can be added to any command):
  --json                   Output in JSON format
  --quiet, -q              Suppress non-essential output
"#
    );
}

/// Get the history file path
fn history_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "scribe", "Scribe")
        .map(|dirs| dirs.data_dir().join("shell_history"))
}

/// Run the interactive shell
pub async fn run() -> Result<()> {
    println!("Scribe Interactive Shell v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for available commands, 'exit' to quit.\n");

    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(ShellCompleter::new()));

    if let Some(path) = history_path() {
        let _ = rl.load_history(&path);
    }

    loop {
        match rl.readline("scribe> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                match run_command(parse_args(line)).await {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(e) => super::print_error(&e.to_string()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(path) = history_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.save_history(&path);
    }

    Ok(())
}
