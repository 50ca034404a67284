//! Live prompter reading answers from stdin.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::error::PortError;
use crate::ports::prompter::Prompter;

/// Asks questions on stdout and reads answers line by line from stdin.
pub struct LivePrompter;

fn ask(message: &str, hint: &str) -> Result<String, PortError> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{} {hint}", message.cyan())?;
    stdout.flush()?;
    drop(stdout);

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err("no input available (stdin closed)".into());
    }
    Ok(line.trim().to_string())
}

/// Interprets a yes/no answer; anything else is `None`.
pub(crate) fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "" | "n" | "no" => Some(false),
        _ => None,
    }
}

/// Interprets a 1-based menu choice.
pub(crate) fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    answer.parse::<usize>().ok().filter(|n| (1..=count).contains(n)).map(|n| n - 1)
}

impl Prompter for LivePrompter {
    fn confirm(&self, message: &str) -> Result<bool, PortError> {
        loop {
            if let Some(answer) = parse_confirmation(&ask(message, "[y/N] ")?) {
                return Ok(answer);
            }
        }
    }

    fn select(&self, message: &str, options: &[String]) -> Result<usize, PortError> {
        if options.is_empty() {
            return Err("nothing to choose from".into());
        }
        println!("{}", message.cyan());
        for (i, option) in options.iter().enumerate() {
            println!("  {}) {option}", i + 1);
        }
        loop {
            let answer = ask("Choice", &format!("[1-{}] ", options.len()))?;
            if let Some(index) = parse_choice(&answer, options.len()) {
                return Ok(index);
            }
        }
    }

    fn input(&self, message: &str) -> Result<String, PortError> {
        ask(message, "> ")
    }
}
