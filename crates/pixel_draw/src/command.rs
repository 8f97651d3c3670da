//! Editor commands, one per line.
//!
//! # Supported commands
//!
//! | Command                     | Action                                        |
//! |-----------------------------|-----------------------------------------------|
//! | `down <i>`                  | Pointer pressed over cell `i`                 |
//! | `move <i>`                  | Pointer moved over cell `i`                   |
//! | `up`                        | Pointer released                              |
//! | `leave`                     | Pointer left the drawing area                 |
//! | `paint <i> [color]`         | Draw cell `i` (active color if omitted)       |
//! | `erase <i>`                 | Erase cell `i`                                |
//! | `pick <i>`                  | Eyedropper on cell `i`                        |
//! | `color <token>`             | Set the active color                          |
//! | `mode <mode>`               | `draw`, `erase` or `eyedropper`               |
//! | `undo` / `redo`             | Walk the history                              |
//! | `show`                      | Print the grid text                           |
//! | `history`                   | Print the history position                    |
//! | `text <json>`               | Replace the grid from text                    |
//! | `replace <pat> <rep>`       | Literal find/replace on the grid text         |
//! | `load <file>` / `save <file>` | JSON text import/export                     |
//! | `export <file> [size]`      | PNG export, `size` pixels per cell            |
//! | `import <image>`            | Sample an image into the grid                 |
//! | `quit`                      | End the session                               |
//!
//! Arguments are separated by whitespace. Double quotes group an argument
//! (`replace "#000000" ""`) and `\"` / `\\` escape inside quotes. Blank lines
//! and lines starting with `//` are ignored.

use std::path::PathBuf;

use pixel_engine_edit::EditMode;

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PointerDown(usize),
    PointerMove(usize),
    PointerUp,
    PointerLeave,
    Paint { index: usize, color: Option<String> },
    Erase(usize),
    Pick(usize),
    SetColor(String),
    SetMode(EditMode),
    Undo,
    Redo,
    Show,
    History,
    Text(String),
    Replace { pattern: String, replacement: String },
    Load(PathBuf),
    Save(PathBuf),
    Export { path: PathBuf, pixel_size: Option<u32> },
    Import(PathBuf),
    Quit,
}

/// Parse one input line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with("//") {
        return Ok(None);
    }

    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (trimmed, ""),
    };

    // `text` takes the rest of the line verbatim, JSON has its own quoting.
    if name.eq_ignore_ascii_case("text") {
        if rest.is_empty() {
            return Err("text: missing grid text".to_string());
        }
        return Ok(Some(Command::Text(rest.to_string())));
    }

    let args = tokenize(rest)?;
    let cmd = match name.to_ascii_lowercase().as_str() {
        "down" => Command::PointerDown(index_arg(name, &args)?),
        "move" => Command::PointerMove(index_arg(name, &args)?),
        "up" => no_args(name, &args, Command::PointerUp)?,
        "leave" => no_args(name, &args, Command::PointerLeave)?,
        "paint" | "draw" => {
            let index = index_arg(name, &args)?;
            if args.len() > 2 {
                return Err(format!("{name}: too many arguments"));
            }
            Command::Paint {
                index,
                color: args.get(1).cloned(),
            }
        }
        "erase" => Command::Erase(index_arg(name, &args)?),
        "pick" => Command::Pick(index_arg(name, &args)?),
        "color" => Command::SetColor(single_arg(name, &args)?),
        "mode" => Command::SetMode(single_arg(name, &args)?.parse()?),
        "undo" | "u" => no_args(name, &args, Command::Undo)?,
        "redo" => no_args(name, &args, Command::Redo)?,
        "show" | "print" => no_args(name, &args, Command::Show)?,
        "history" => no_args(name, &args, Command::History)?,
        "replace" => match args.as_slice() {
            [pattern, replacement] => Command::Replace {
                pattern: pattern.clone(),
                replacement: replacement.clone(),
            },
            _ => return Err(format!("{name}: expected <pattern> <replacement>")),
        },
        "load" | "open" => Command::Load(single_arg(name, &args)?.into()),
        "save" => Command::Save(single_arg(name, &args)?.into()),
        "export" => match args.as_slice() {
            [path] => Command::Export {
                path: path.into(),
                pixel_size: None,
            },
            [path, size] => Command::Export {
                path: path.into(),
                pixel_size: Some(size.parse().map_err(|_| format!("{name}: invalid pixel size '{size}'"))?),
            },
            _ => return Err(format!("{name}: expected <file> [pixel_size]")),
        },
        "import" => Command::Import(single_arg(name, &args)?.into()),
        "quit" | "q" | "exit" => no_args(name, &args, Command::Quit)?,
        _ => return Err(format!("unknown command '{name}'")),
    };
    Ok(Some(cmd))
}

/// Split `input` into whitespace separated arguments, honoring double quotes.
fn tokenize(input: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let mut arg = String::new();
        if ch == '"' {
            chars.next();
            let mut closed = false;
            while let Some(ch) = chars.next() {
                match ch {
                    '"' => {
                        closed = true;
                        break;
                    }
                    '\\' => match chars.next() {
                        Some(esc @ ('"' | '\\')) => arg.push(esc),
                        Some('n') => arg.push('\n'),
                        Some(other) => {
                            arg.push('\\');
                            arg.push(other);
                        }
                        None => arg.push('\\'),
                    },
                    _ => arg.push(ch),
                }
            }
            if !closed {
                return Err("unterminated quote".to_string());
            }
        } else {
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() {
                    break;
                }
                arg.push(ch);
                chars.next();
            }
        }
        args.push(arg);
    }
    Ok(args)
}

fn index_arg(name: &str, args: &[String]) -> Result<usize, String> {
    let Some(first) = args.first() else {
        return Err(format!("{name}: missing cell index"));
    };
    first.parse().map_err(|_| format!("{name}: invalid cell index '{first}'"))
}

fn single_arg(name: &str, args: &[String]) -> Result<String, String> {
    match args {
        [arg] => Ok(arg.clone()),
        [] => Err(format!("{name}: missing argument")),
        _ => Err(format!("{name}: too many arguments")),
    }
}

fn no_args(name: &str, args: &[String], cmd: Command) -> Result<Command, String> {
    if args.is_empty() {
        Ok(cmd)
    } else {
        Err(format!("{name}: takes no arguments"))
    }
}
