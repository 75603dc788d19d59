use crate::err::*;
use stab_navigate::Action;
use std::str::FromStr;

/// One line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// blank line or comment
    Nothing,
    Add { id: Option<String>, a: f64, b: f64 },
    Random(Option<usize>),
    List,
    Build,
    Query(f64),
    Stab(f64),
    Act(Action),
    /// recurse when possible, otherwise finish the current subtree
    Step,
    Show,
    Tree,
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
drawing:
  add [ID] A B     add the interval [A, B], named ID or the next free letter
  random [N]       add N random intervals
  list             plot the intervals
  build            build the tree and start replaying its construction
navigating:
  recurse | r      descend into the next child
  undo | u         go back to where the descent came from
  finish | f       skip the rest of the current subtree
  step             recurse if possible, otherwise finish
  show             print the current checkpoint
  tree             print the tree, marking the current node
querying:
  query X          walk a stabbing query at X
  stab X           list the intervals containing X at once
session:
  reset            drop the tree and every interval
  help             print this message
  quit             leave
";

fn number(word: &str) -> Result<f64> {
    word.parse().map_err(|_| CommandError::NotANumber(word.to_owned()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.split('#').next().unwrap_or_default();
        let words = line.split_whitespace().collect::<Vec<_>>();
        let Some((head, args)) = words.split_first() else { return Ok(Command::Nothing) };
        let cmd = match (*head, args) {
            | ("add", [a, b]) => Command::Add { id: None, a: number(a)?, b: number(b)? },
            | ("add", [id, a, b]) => {
                Command::Add { id: Some((*id).to_owned()), a: number(a)?, b: number(b)? }
            }
            | ("add", _) => return Err(CommandError::Usage("add [ID] A B")),
            | ("random", []) => Command::Random(None),
            | ("random", [n]) => {
                Command::Random(Some(n.parse().map_err(|_| CommandError::NotANumber((*n).to_owned()))?))
            }
            | ("random", _) => return Err(CommandError::Usage("random [N]")),
            | ("query", [x]) => Command::Query(number(x)?),
            | ("query", _) => return Err(CommandError::Usage("query X")),
            | ("stab", [x]) => Command::Stab(number(x)?),
            | ("stab", _) => return Err(CommandError::Usage("stab X")),
            | ("list", []) => Command::List,
            | ("build", []) => Command::Build,
            | ("step", []) => Command::Step,
            | ("show", []) => Command::Show,
            | ("tree", []) => Command::Tree,
            | ("reset", []) => Command::Reset,
            | ("help", []) => Command::Help,
            | ("quit" | "exit" | "q", []) => Command::Quit,
            | (word, []) => Command::Act(
                word.parse::<Action>().map_err(|_| CommandError::Unknown(word.to_owned()))?,
            ),
            | (word, _) => return Err(CommandError::Unknown(word.to_owned())),
        };
        Ok(cmd)
    }
}
