use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use darja::interpreter::session::{Session, SessionConfig};
use rustyline::{DefaultEditor, error::ReadlineError};

/// darja runs DarjaLang programs line by line, from a file, a pipe, or an
/// interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the program from this file instead of standard input.
    file: Option<PathBuf>,

    /// Print the value of every expression statement, like a REPL.
    #[arg(short, long)]
    echo: bool,

    /// Abort any `mazal` loop that runs more than this many iterations.
    #[arg(short, long, value_name = "N")]
    max_iterations: Option<u64>,

    /// Do not print the banner and the completion message.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("darja: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = SessionConfig { echo_results:        args.echo,
                                 max_loop_iterations: args.max_iterations, };
    let mut session = Session::new(config);
    let mut out = io::stdout();

    if !args.quiet {
        writeln!(out, "DarjaLang v0.4 interactive mode")?;
        writeln!(out, "Type your program line by line. Finish with 'khlas' on a line.")?;
        out.flush()?;
    }

    match &args.file {
        Some(path) => {
            let file = File::open(path).with_context(|| {
                                           format!("failed to open '{}'", path.display())
                                       })?;
            session.run(BufReader::new(file).lines(), &mut out)
                   .with_context(|| format!("failed while running '{}'", path.display()))?;
        },
        None if io::stdin().is_terminal() => run_interactive(&mut session, &mut out)?,
        None => {
            session.run(io::stdin().lock().lines(), &mut out)?;
        },
    }

    if !args.quiet {
        writeln!(out, "Program finished!")?;
    }
    out.flush()?;
    Ok(())
}

/// Feeds lines typed at the terminal to the session, with history and a
/// continuation prompt while a block is open.
fn run_interactive(session: &mut Session, out: &mut impl Write) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;

    while !session.is_terminated() {
        let prompt = if session.awaiting_block() { ".. " } else { ">> " };
        match editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                session.feed_line(&line, out)?;
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                session.finish(out)?;
            },
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
