//! Linedit - Interactive line editor.
//!
//! Usage: linedit
//!
//! Reads editing requests from stdin, one per line, and routes every
//! mutation through the engine's history stack so it can be undone and
//! redone. Type `help` at the prompt for the request list.

use linedit_core::{HistoryStack, OutOfRange};
use std::io::{self, BufRead, Write};

/// A parsed editing request.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    Insert { position: usize, text: String },
    Remove { position: usize },
    Undo,
    Redo,
    List,
    Status,
    Reset,
    Help,
    Quit,
}

/// Parses one input line into a request.
///
/// The insert text is everything after the position argument, taken
/// verbatim so lines may contain spaces.
fn parse_request(input: &str) -> Result<Request, String> {
    let trimmed = input.trim_start();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim_start();

    match word {
        "insert" | "i" => {
            let mut args = rest.splitn(2, char::is_whitespace);
            let position = parse_position(args.next().unwrap_or(""))?;
            let text = args.next().unwrap_or("").to_string();
            Ok(Request::Insert { position, text })
        }
        "remove" | "r" => {
            let position = parse_position(rest.trim_end())?;
            Ok(Request::Remove { position })
        }
        "undo" | "u" => Ok(Request::Undo),
        "redo" => Ok(Request::Redo),
        "list" | "l" => Ok(Request::List),
        "status" => Ok(Request::Status),
        "reset" => Ok(Request::Reset),
        "help" | "h" => Ok(Request::Help),
        "quit" | "q" => Ok(Request::Quit),
        "" => Err("empty request; type `help` for the request list".to_string()),
        other => Err(format!("unknown request `{}`; type `help`", other)),
    }
}

fn parse_position(arg: &str) -> Result<usize, String> {
    if arg.is_empty() {
        return Err("missing line position".to_string());
    }
    arg.parse::<usize>()
        .map_err(|_| format!("invalid line position `{}`", arg))
}

const HELP: &str = "\
requests:
  insert <pos> <text>   insert <text> as a new line at <pos> (i)
  remove <pos>          remove the line at <pos> (r)
  undo                  reverse the most recent edit (u)
  redo                  re-apply the most recently undone edit
  list                  print the document with line numbers (l)
  status                show the dirty flag and undo/redo availability
  reset                 acknowledge all changes
  help                  show this list (h)
  quit                  exit; asks again if there are unsaved changes (q)";

fn print_lines(history: &HistoryStack) {
    for (i, line) in history.lines().iter().enumerate() {
        println!("{:>4}  {}", i, line);
    }
    if history.is_empty() {
        println!("(empty document)");
    }
}

fn print_status(history: &HistoryStack) {
    println!(
        "{} lines, changed: {}, undo: {}, redo: {}",
        history.len(),
        history.changed(),
        history.can_undo(),
        history.can_redo()
    );
}

fn report_out_of_range(err: OutOfRange) {
    log::error!("{}", err);
    println!("error: {}", err);
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Linedit");

    let mut history = HistoryStack::new();
    let stdin = io::stdin();
    let mut quit_pending = false;

    println!("linedit - type `help` for the request list");
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        // Strip the line ending; insert text keeps any other trailing space.
        let input = input.trim_end_matches(['\r', '\n']);
        let request = match parse_request(input) {
            Ok(request) => request,
            Err(msg) => {
                println!("error: {}", msg);
                continue;
            }
        };

        // Any request other than a repeated quit cancels the pending exit.
        if !matches!(request, Request::Quit) {
            quit_pending = false;
        }

        match request {
            Request::Insert { position, text } => {
                if let Err(err) = history.insert_line(position, &text) {
                    report_out_of_range(err);
                }
            }
            Request::Remove { position } => {
                if let Err(err) = history.remove_line(position) {
                    report_out_of_range(err);
                }
            }
            Request::Undo => {
                if let Err(err) = history.undo() {
                    report_out_of_range(err);
                }
            }
            Request::Redo => {
                if let Err(err) = history.redo() {
                    report_out_of_range(err);
                }
            }
            Request::List => print_lines(&history),
            Request::Status => print_status(&history),
            Request::Reset => history.reset(),
            Request::Help => println!("{}", HELP),
            Request::Quit => {
                if history.changed() && !quit_pending {
                    println!("unsaved changes; `quit` again to exit anyway, or `reset` to acknowledge");
                    quit_pending = true;
                } else {
                    break;
                }
            }
        }
    }

    log::info!("Linedit exited");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insert_keeps_spaces() {
        assert_eq!(
            parse_request("insert 2 hello world  "),
            Ok(Request::Insert {
                position: 2,
                text: "hello world  ".to_string()
            })
        );
    }

    #[test]
    fn test_parse_insert_empty_text() {
        assert_eq!(
            parse_request("i 0"),
            Ok(Request::Insert {
                position: 0,
                text: String::new()
            })
        );
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(parse_request("remove 3"), Ok(Request::Remove { position: 3 }));
        assert_eq!(parse_request("r 0\n"), Ok(Request::Remove { position: 0 }));
    }

    #[test]
    fn test_parse_bare_requests() {
        assert_eq!(parse_request("undo"), Ok(Request::Undo));
        assert_eq!(parse_request("redo"), Ok(Request::Redo));
        assert_eq!(parse_request("list"), Ok(Request::List));
        assert_eq!(parse_request("quit"), Ok(Request::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_request("").is_err());
        assert!(parse_request("insert").is_err());
        assert!(parse_request("insert x text").is_err());
        assert!(parse_request("remove -1").is_err());
        assert!(parse_request("frobnicate 1").is_err());
    }
}
