//! Console front end for the task list store.
//!
//! Usage:
//!
//! ```text
//! tasklist [state-dir]
//! ```
//!
//! Reads one intent per line from standard input:
//!
//! ```text
//! add <text>    append a task
//! rm <n>        delete task n
//! up <n>        move task n up one position
//! down <n>      move task n down one position
//! ls            print the list
//! quit          exit
//! ```
//!
//! Positions are 1-based as displayed. State persists as `tasks.json` inside
//! the state directory (default: the current directory), so quitting and
//! restarting against the same directory resumes the same list.

use std::env;
use std::io::{self, BufRead, Write};

use tasklist::task_list::{
    adapters::fs::DirStateStore, domain::MoveDirection, ports::StateStore,
    services::TaskListStore,
};

fn main() -> io::Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(flexi_logger::Logger::start)
        .map_err(io::Error::other)?;

    let state_dir = env::args().nth(1).unwrap_or_else(|| ".".to_owned());
    let store = DirStateStore::open(&state_dir)?;
    let mut tasks = TaskListStore::load(store);

    let mut out = io::stdout().lock();
    render(&mut out, &tasks)?;
    for line in io::stdin().lock().lines() {
        let command = line?;
        if !dispatch(&mut tasks, command.trim(), &mut out)? {
            break;
        }
        render(&mut out, &tasks)?;
    }
    Ok(())
}

/// Applies one command line. Returns `false` when the session should end.
fn dispatch<S: StateStore>(
    tasks: &mut TaskListStore<S>,
    command: &str,
    out: &mut impl Write,
) -> io::Result<bool> {
    let (verb, rest) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(verb, rest)| (verb, rest.trim()));
    match verb {
        "quit" | "exit" => return Ok(false),
        "ls" | "" => {}
        "add" => {
            // A rejection records the visible error state; render shows it.
            let _outcome = tasks.submit(rest);
        }
        "rm" => match parse_position(rest) {
            Some(index) => {
                let _removed = tasks.remove(index);
            }
            None => writeln!(out, "usage: rm <position>")?,
        },
        "up" | "down" => match (MoveDirection::try_from(verb), parse_position(rest)) {
            (Ok(direction), Some(index)) => {
                let _moved = tasks.move_task(index, direction);
            }
            _ => writeln!(out, "usage: {verb} <position>")?,
        },
        other => writeln!(out, "unknown command: {other}")?,
    }
    Ok(true)
}

/// Converts a 1-based display position into a list index.
fn parse_position(value: &str) -> Option<usize> {
    value.parse::<usize>().ok()?.checked_sub(1)
}

/// Prints the list followed by the pending error message, if any.
fn render<S: StateStore>(out: &mut impl Write, tasks: &TaskListStore<S>) -> io::Result<()> {
    writeln!(out, "My List")?;
    for (position, task) in tasks.tasks().iter().enumerate() {
        writeln!(out, "{:>3}. {}", position.saturating_add(1), task.label())?;
    }
    let message = tasks.error_message();
    if !message.is_empty() {
        writeln!(out, "{message}")?;
    }
    out.flush()
}
