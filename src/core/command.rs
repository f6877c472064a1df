//! Shell commands: one line of input parsed into a semantic command.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Projects,
    Templates,
    Import(PathBuf),
    Template(String),
    Select { name: String, force: bool },
    Files,
    Open(String),
    Edit { path: String, content: String },
    Show,
    Save,
    Export(Option<PathBuf>),
    Ask(String),
    Status,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

pub const HELP: &[(&str, &str)] = &[
    ("help", "show this list"),
    ("projects", "list projects, current one marked with *"),
    ("templates", "list available templates"),
    ("import <zip>", "import an archive from disk"),
    ("template <id>", "create a project from a template"),
    ("select [-f] <name>", "switch project (-f drops unsaved edits)"),
    ("files", "show the working copy as a tree"),
    ("open <path>", "open a file of the current project"),
    ("edit <path> <text>", "replace the open file's content (\\n for newlines)"),
    ("show", "print the open file"),
    ("save", "commit the working copy"),
    ("export [dir]", "write the working copy as <project>.zip"),
    ("ask <prompt>", "send a prompt to the assistant"),
    ("status", "show project, phase and pending work"),
    ("quit", "exit"),
];

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head {
            "" => return Err(CommandError::Empty),
            "help" | "?" => Command::Help,
            "projects" => Command::Projects,
            "templates" => Command::Templates,
            "import" => Command::Import(PathBuf::from(required("import", "a zip path", rest)?)),
            "template" => Command::Template(required("template", "a template id", rest)?.to_string()),
            "select" => {
                let (force, name) = match rest.strip_prefix("-f") {
                    Some(name) if name.is_empty() || name.starts_with(char::is_whitespace) => {
                        (true, name.trim())
                    }
                    _ => (false, rest),
                };
                Command::Select {
                    name: required("select", "a project name", name)?.to_string(),
                    force,
                }
            }
            "files" | "ls" => Command::Files,
            "open" => Command::Open(required("open", "a file path", rest)?.to_string()),
            "edit" => {
                let rest = required("edit", "a file path", rest)?;
                let (path, text) = rest.split_once(' ').unwrap_or((rest, ""));
                Command::Edit {
                    path: path.to_string(),
                    content: unescape(text),
                }
            }
            "show" | "cat" => Command::Show,
            "save" | "commit" => Command::Save,
            "export" => Command::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "ask" => Command::Ask(required("ask", "a prompt", rest)?.to_string()),
            "status" => Command::Status,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Projects => "projects",
            Command::Templates => "templates",
            Command::Import(_) => "import",
            Command::Template(_) => "template",
            Command::Select { .. } => "select",
            Command::Files => "files",
            Command::Open(_) => "open",
            Command::Edit { .. } => "edit",
            Command::Show => "show",
            Command::Save => "save",
            Command::Export(_) => "export",
            Command::Ask(_) => "ask",
            Command::Status => "status",
            Command::Quit => "quit",
        }
    }
}

fn required<'a>(
    command: &'static str,
    argument: &'static str,
    value: &'a str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(value)
    }
}

/// Expands `\n`, `\t` and `\\`; other escapes are kept as written.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
