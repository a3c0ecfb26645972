use super::utils::MAX_MESSAGE_LEN;
use fudgeroll_lib::dice::Critic;
use fudgeroll_lib::error::Error;
use fudgeroll_lib::roll;
use fudgeroll_lib::solver::Options;
use fudgeroll_lib::solver::Solver;
use itertools::Itertools;
use std::collections::HashSet;
use tracing::debug;

/// Everything found in one chat message
#[derive(Debug, Default)]
pub(crate) struct Scan {
    /// Rendered results and friendly errors, in token order
    pub(crate) lines: Vec<String>,
    pub(crate) critics: HashSet<Critic>,
    /// Dice rolled so far
    pub(crate) faces: u64,
    /// Failures the user can't fix, with the token that raised them
    pub(crate) unexpected: Vec<(String, Error)>,
}

impl Scan {
    pub(crate) fn reply(&self) -> Option<String> {
        if self.lines.is_empty() {
            None
        } else {
            Some(self.lines.iter().join("\n"))
        }
    }
}

pub(crate) fn format_error(error: &Error) -> String {
    format!("**error** *{}*", error)
}

/// Critics among the kept faces
fn search_critics(result: &roll::Result, critics: &mut HashSet<Critic>) {
    for outcome in result.outcomes() {
        for face in outcome.get_faces().iter().filter(|face| face.kept) {
            if face.critic != Critic::Not {
                critics.insert(face.critic);
            }
        }
    }
}

/// Dice rolled for a single message at most
pub(crate) const MAX_FACES_PER_MESSAGE: u64 = 20_000;

const BUDGET_ERROR: &str = "**error** *too many dice in one message*";

/// Solve every whitespace separated token of `content`
///
/// Stops at the first token that would exceed the dice budget, or once the
/// rendered reply no longer fits in one message.
pub(crate) fn scan(content: &str, options: &Options) -> Scan {
    let mut found = Scan::default();
    let mut rendered = 0usize;
    for token in content.split_whitespace() {
        if rendered > MAX_MESSAGE_LEN {
            debug!("Reply is full, skipping the rest of the message");
            break;
        }
        let solver = Solver::new(token).with_options(*options);
        let line = match solver.parse() {
            Ok(Some(expression)) => {
                let faces = found.faces.saturating_add(expression.faces());
                if faces > MAX_FACES_PER_MESSAGE {
                    debug!("`{}` exceeds the dice budget", token);
                    found.lines.push(BUDGET_ERROR.to_owned());
                    break;
                }
                found.faces = faces;
                let result = solver.eval(expression);
                debug!("Rolled `{}`", result.get_query());
                search_critics(&result, &mut found.critics);
                result.to_string()
            }
            Ok(None) => continue,
            Err(error) if error.is_user_error() => format_error(&error),
            Err(error) => {
                found.unexpected.push((token.to_owned(), error));
                continue;
            }
        };
        rendered += line.len() + 1;
        found.lines.push(line);
    }
    found
}
