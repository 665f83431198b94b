//! Console configuration workflow
//!
//! Collects placeholder values interactively on the terminal: line editing
//! for text (seed pre-filled), a numbered list for select, and read-until-dot
//! for multiline. Ctrl-C or Ctrl-D anywhere cancels the whole round.

use std::collections::HashMap;

use async_trait::async_trait;
use colored::Colorize;
use eyre::{Result, eyre};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::catalog::{PlaceholderDescriptor, PlaceholderKind, Template};

use super::ConfigurationWorkflow;

/// Interactive terminal collector
#[derive(Debug, Default)]
pub struct ConsoleWorkflow;

impl ConsoleWorkflow {
    pub fn new() -> Self {
        Self
    }
}

/// One line of input; `None` means the user cancelled
fn read_line(editor: &mut DefaultEditor, prompt: &str, initial: &str) -> Result<Option<String>> {
    match editor.readline_with_initial(prompt, (initial, "")) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(eyre!("Failed to read input: {}", e)),
    }
}

fn collect_text(editor: &mut DefaultEditor, descriptor: &PlaceholderDescriptor, seed: &str) -> Result<Option<String>> {
    println!();
    println!("{} {}", descriptor.label.bold(), format!("({})", descriptor.description).dimmed());
    read_line(editor, "> ", seed)
}

fn collect_select(
    editor: &mut DefaultEditor,
    descriptor: &PlaceholderDescriptor,
    seed: &str,
) -> Result<Option<String>> {
    println!();
    println!("{} {}", descriptor.label.bold(), format!("({})", descriptor.description).dimmed());
    for (i, option) in descriptor.options.iter().enumerate() {
        let marker = if option == seed { "*" } else { " " };
        println!("  {} {}. {}", marker, i + 1, option);
    }

    loop {
        let Some(line) = read_line(editor, "choice> ", "")? else {
            return Ok(None);
        };
        let line = line.trim();

        // empty input keeps the seeded choice when it is a valid option
        if line.is_empty() && descriptor.options.iter().any(|o| o == seed) {
            return Ok(Some(seed.to_string()));
        }
        if let Ok(n) = line.parse::<usize>() {
            if n >= 1 && n <= descriptor.options.len() {
                return Ok(Some(descriptor.options[n - 1].clone()));
            }
        }
        println!("Enter a number between 1 and {}", descriptor.options.len());
    }
}

fn collect_multiline(
    editor: &mut DefaultEditor,
    descriptor: &PlaceholderDescriptor,
    seed: &str,
) -> Result<Option<String>> {
    println!();
    println!("{} {}", descriptor.label.bold(), format!("({})", descriptor.description).dimmed());
    if !seed.is_empty() {
        println!("{}", "current value:".dimmed());
        for line in seed.lines() {
            println!("  {}", line.dimmed());
        }
    }
    println!("{}", "enter lines, finish with '.' alone (no lines keeps the current value)".dimmed());

    let mut lines: Vec<String> = Vec::new();
    loop {
        let Some(line) = read_line(editor, "| ", "")? else {
            return Ok(None);
        };
        if line.trim() == "." {
            break;
        }
        lines.push(line);
    }

    if lines.is_empty() {
        Ok(Some(seed.to_string()))
    } else {
        Ok(Some(lines.join("\n")))
    }
}

#[async_trait]
impl ConfigurationWorkflow for ConsoleWorkflow {
    async fn collect(
        &self,
        template: &Template,
        seeds: &HashMap<String, String>,
    ) -> Result<Option<HashMap<String, String>>> {
        let mut editor = DefaultEditor::new().map_err(|e| eyre!("Failed to open terminal: {}", e))?;

        println!("{}", format!("Configuring: {}", template.name).bold());
        println!("{}", template.description.dimmed());

        let mut values = HashMap::new();
        for descriptor in &template.placeholders {
            let seed = seeds.get(&descriptor.key).map(String::as_str).unwrap_or_default();

            let collected = match descriptor.kind {
                PlaceholderKind::Text => collect_text(&mut editor, descriptor, seed)?,
                PlaceholderKind::Select => collect_select(&mut editor, descriptor, seed)?,
                PlaceholderKind::Multiline => collect_multiline(&mut editor, descriptor, seed)?,
            };

            match collected {
                Some(value) => {
                    values.insert(descriptor.key.clone(), value);
                }
                None => {
                    // cancellation discards everything collected so far
                    debug!(template = %template.id, key = %descriptor.key, "configuration cancelled");
                    return Ok(None);
                }
            }
        }

        Ok(Some(values))
    }
}
