//! Command-line interface for inspecting files with the widget core
//!
//! Supports:
//! - Brace match at a cursor position
//! - Console styling of a transcript
//! - Printing the effective configuration

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::brace::BraceMatch;
use crate::config::EditorConfig;
use crate::console::ConsoleView;
use crate::editable::TextBuffer;
use crate::widget::{Anchor, TextEdit};

/// Brace matching and console styling for code-editing widgets
#[derive(Parser, Debug)]
#[command(name = "codepane", version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report the brace match for a cursor placed after a delimiter
    Braces {
        /// File to inspect
        path: PathBuf,

        /// Cursor line (1-indexed)
        #[arg(long, value_name = "N")]
        line: usize,

        /// Cursor column (1-indexed; the delimiter is the character before it)
        #[arg(long, value_name = "N")]
        column: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append a file to a console view and print its styled runs
    Console {
        /// File whose content is appended
        path: PathBuf,

        /// Treat the content as error output (tracebacks)
        #[arg(long, conflicts_with = "prompt")]
        error: bool,

        /// Treat the content as a prompt
        #[arg(long)]
        prompt: bool,
    },

    /// Print the effective configuration as YAML
    Config,
}

/// A position in a report (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPosition {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ReportPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Result of `codepane braces`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BraceReport {
    pub cursor: ReportPosition,
    pub delimiter: Option<char>,
    pub at: Option<ReportPosition>,
    pub matched: bool,
    pub partner: Option<ReportPosition>,
}

impl fmt::Display for BraceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.delimiter, self.at, self.partner) {
            (Some(delimiter), Some(at), Some(partner)) => {
                write!(f, "`{}` at {} matches {}", delimiter, at, partner)
            }
            (Some(delimiter), Some(at), None) => {
                write!(f, "`{}` at {} has no match on its line", delimiter, at)
            }
            _ => write!(f, "no delimiter before {}", self.cursor),
        }
    }
}

/// Match the delimiter before a 1-indexed cursor position in `text`
pub fn brace_report(text: &str, line: usize, column: usize) -> Result<BraceReport> {
    if line == 0 || column == 0 {
        bail!("line and column are 1-indexed");
    }
    let mut edit = TextEdit::new();
    edit.set_text(text);

    let buffer = &edit.state().buffer;
    let (line_idx, col_idx) = (line - 1, column - 1);
    if line_idx >= buffer.line_count() {
        bail!("line {} is past the end of the file ({} lines)", line, buffer.line_count());
    }
    if col_idx > buffer.line_length(line_idx) {
        bail!("column {} is past the end of line {}", column, line);
    }
    let offset = buffer.position_to_offset(line_idx, col_idx);
    edit.set_cursor_position(Anchor::Offset(offset));

    let to_position = |offset: usize| {
        let (line, column) = edit.state().buffer.offset_to_position(offset);
        ReportPosition {
            line: line + 1,
            column: column + 1,
        }
    };
    let cursor = ReportPosition { line, column };
    let report = match edit.brace_match() {
        Some(BraceMatch::Matched { at, partner }) => BraceReport {
            cursor,
            delimiter: edit.get_character(Anchor::Offset(at)),
            at: Some(to_position(at)),
            matched: true,
            partner: Some(to_position(partner)),
        },
        Some(BraceMatch::Unmatched { at }) => BraceReport {
            cursor,
            delimiter: edit.get_character(Anchor::Offset(at)),
            at: Some(to_position(at)),
            matched: false,
            partner: None,
        },
        None => BraceReport {
            cursor,
            delimiter: None,
            at: None,
            matched: false,
            partner: None,
        },
    };
    Ok(report)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

impl CliArgs {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Braces {
                path,
                line,
                column,
                json,
            } => {
                let report = brace_report(&read_file(&path)?, line, column)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    println!("{}", report);
                }
            }
            Command::Console {
                path,
                error,
                prompt,
            } => {
                let content = read_file(&path)?;
                let mut console = ConsoleView::with_config(&EditorConfig::load());
                console.append_text(&content, error, prompt);
                let chars: Vec<char> = console.text().chars().collect();
                for run in console.styled_runs() {
                    let text: String = chars[run.range.clone()].iter().collect();
                    let style = format!("{:?}", run.style);
                    println!("{:>6}..{:<6} {:<14} {:?}", run.range.start, run.range.end, style, text);
                }
            }
            Command::Config => {
                print!("{}", EditorConfig::load().to_yaml()?);
            }
        }
        Ok(())
    }
}
