//! Interactive command prompt.
//!
//! Reads one command per line, runs it against the current graph and
//! writes the answer. Errors are reported and the prompt keeps going;
//! only `exit` or end of input stops it.

use crate::render;
use kith_graph::{load_file, KithGraph, QueryError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const USAGE: &str = "Legal commands: read [filename], dump, orphans, show [personname],
  friends [personname], bingo [from] [to], descendants [personname],
  cousins [personname] [nth] [k removed], help, exit";

/// A parsed prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Read(PathBuf),
    Show(String),
    Friends(String),
    Dump,
    Orphans,
    Bingo { from: String, to: String },
    Descendants(String),
    Cousins {
        name: String,
        degree: usize,
        removed: usize,
    },
    Help,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a whole number of generations")]
    InvalidNumber(String),
}

impl FromStr for ReplCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (command, args) = words.split_first().ok_or(CommandError::Empty)?;

        let command = command.to_lowercase();
        let parsed = match (command.as_str(), args) {
            ("exit" | "quit", _) => Self::Exit,
            ("help", _) => Self::Help,
            ("dump", _) => Self::Dump,
            ("orphans", _) => Self::Orphans,
            ("read", [file, ..]) => Self::Read(PathBuf::from(*file)),
            ("read", _) => return Err(CommandError::Usage("read [filename]")),
            ("show", [name, ..]) => Self::Show(name.to_string()),
            ("show", _) => return Err(CommandError::Usage("show [personname]")),
            ("friends", [name, ..]) => Self::Friends(name.to_string()),
            ("friends", _) => return Err(CommandError::Usage("friends [personname]")),
            ("bingo", [from, to, ..]) => Self::Bingo {
                from: from.to_string(),
                to: to.to_string(),
            },
            ("bingo", _) => return Err(CommandError::Usage("bingo [from] [to]")),
            ("descendants", [name, ..]) => Self::Descendants(name.to_string()),
            ("descendants", _) => return Err(CommandError::Usage("descendants [personname]")),
            ("cousins", [name, degree, removed, ..]) => Self::Cousins {
                name: name.to_string(),
                degree: parse_generations(degree)?,
                removed: parse_generations(removed)?,
            },
            ("cousins", _) => {
                return Err(CommandError::Usage("cousins [personname] [nth] [k removed]"))
            }
            (other, _) => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(parsed)
    }
}

fn parse_generations(word: &str) -> Result<usize, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))
}

/// Whether the prompt should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The graph the prompt is answering questions about.
#[derive(Debug, Default)]
pub struct Session {
    graph: KithGraph,
}

impl Session {
    pub fn new(graph: KithGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &KithGraph {
        &self.graph
    }

    /// Runs one command, writing its output to `out`.
    pub fn execute(&mut self, command: ReplCommand, out: &mut impl Write) -> io::Result<Flow> {
        debug!("Executing {:?}", command);

        match command {
            ReplCommand::Exit => return Ok(Flow::Exit),
            ReplCommand::Help => writeln!(out, "{}", USAGE)?,
            ReplCommand::Read(path) => {
                writeln!(out, "Reading file {}", path.display())?;
                match load_file(&path) {
                    Ok(result) => {
                        self.graph = result.graph;
                        writeln!(out, "{} people read", result.people_declared)?;
                        if !result.skipped.is_empty() {
                            writeln!(out, "{} statements skipped", result.skipped.len())?;
                        }
                    }
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            ReplCommand::Show(name) => match self.graph.get_node(&name) {
                Some(person) => write!(out, "{}", render::person(&person))?,
                None => writeln!(out, "{}", QueryError::PersonNotFound(name))?,
            },
            ReplCommand::Friends(name) => match self.graph.get_node(&name) {
                Some(person) => writeln!(out, "{}", render::friends(&person))?,
                None => writeln!(out, "{}", QueryError::PersonNotFound(name))?,
            },
            ReplCommand::Dump => write!(out, "{}", render::dump(&self.graph))?,
            ReplCommand::Orphans => write!(out, "{}", render::orphans(&self.graph.orphans()))?,
            ReplCommand::Bingo { from, to } => match self.graph.shortest_path(&from, &to) {
                Ok(path) => {
                    for line in render::path(&self.graph, &path) {
                        writeln!(out, "{}", line)?;
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            ReplCommand::Descendants(name) => match self.graph.descendants(&name) {
                Ok(result) => write!(out, "{}", render::descendants(&result))?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            ReplCommand::Cousins {
                name,
                degree,
                removed,
            } => match self.graph.cousins(&name, degree, removed) {
                Ok(found) => writeln!(out, "{}", render::cousins(&found))?,
                Err(QueryError::PersonNotFound(name)) => {
                    writeln!(out, "No such person: {}", name)?
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
        }

        Ok(Flow::Continue)
    }
}

/// Runs the prompt until `exit` or end of input.
pub fn run(
    session: &mut Session,
    input: impl BufRead,
    mut out: impl Write,
    prompt: &str,
) -> io::Result<()> {
    write!(out, "\n{}", prompt)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        if !line.trim().is_empty() {
            let flow = match line.parse::<ReplCommand>() {
                Ok(command) => session.execute(command, &mut out)?,
                Err(CommandError::Unknown(_) | CommandError::Usage(_)) => {
                    writeln!(out, "\n{}", USAGE)?;
                    Flow::Continue
                }
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }

        write!(out, "\n{}", prompt)?;
        out.flush()?;
    }

    Ok(())
}
