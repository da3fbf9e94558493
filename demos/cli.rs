use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mython::Mython;
use rustyline::error::ReadlineError;
use rustyline::Editor;

#[derive(Parser)]
#[command(name = "mython", version, about = "Run a Mython script, or start a REPL")]
struct Cli {
  /// Script to run; starts a REPL when omitted.
  script: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
  let cli = Cli::parse();
  match cli.script {
    Some(path) => run_file(path),
    None => repl(),
  }
}

fn run_file(path: PathBuf) -> anyhow::Result<ExitCode> {
  let src = std::fs::read_to_string(&path)?;
  let vm = Mython::default();
  if let Err(e) = vm.eval(&src) {
    eprintln!("{e}");
    return Ok(ExitCode::FAILURE);
  }
  Ok(ExitCode::SUCCESS)
}

fn repl() -> anyhow::Result<ExitCode> {
  let vm = Mython::default();
  let mut editor = Editor::<()>::new()?;
  let mut buffer = String::new();
  loop {
    let prompt = if buffer.is_empty() { ">>> " } else { "... " };
    match editor.readline(prompt) {
      Ok(line) => {
        editor.add_history_entry(&line);
        buffer.push_str(&line);
        buffer.push('\n');
        if is_incomplete(&buffer) {
          continue;
        }
        if let Err(e) = vm.eval(&buffer) {
          eprintln!("{e}");
        }
        buffer.clear();
      }
      Err(ReadlineError::Interrupted) => buffer.clear(),
      Err(ReadlineError::Eof) => break,
      Err(e) => return Err(e.into()),
    }
  }
  Ok(ExitCode::SUCCESS)
}

/// A block stays open until an empty line closes it, so multi-line
/// classes and conditionals can be typed the way a script would be.
fn is_incomplete(input: &str) -> bool {
  fn is_empty(line: &str) -> bool {
    line.trim().is_empty()
  }

  fn is_indented(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_whitespace())
  }

  fn begins_block(line: &str) -> bool {
    line.trim_end().ends_with(':')
  }

  let input = input.trim_end_matches('\n');
  match input.rsplit_once('\n') {
    Some((_, last)) => !is_empty(last) && (is_indented(last) || begins_block(last)),
    None => begins_block(input),
  }
}
