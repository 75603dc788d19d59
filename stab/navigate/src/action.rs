use crate::err::NavError;
use std::{fmt, str::FromStr};

/// The three moves a user can make while walking a recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// descend into the next child that has not been visited yet
    Recurse,
    /// go back to the parent checkpoint the descent came from
    UndoRecurse,
    /// skip the rest of the current subtree
    FinishSubtree,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Recurse, Action::UndoRecurse, Action::FinishSubtree];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            | Action::Recurse => "recurse",
            | Action::UndoRecurse => "undoRecurse",
            | Action::FinishSubtree => "finishSubtree",
        };
        f.write_str(name)
    }
}

impl FromStr for Action {
    type Err = NavError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            | "recurse" | "r" => Ok(Action::Recurse),
            | "undoRecurse" | "undo" | "u" => Ok(Action::UndoRecurse),
            | "finishSubtree" | "finish" | "f" => Ok(Action::FinishSubtree),
            | _ => Err(NavError::UnknownAction(s.to_owned())),
        }
    }
}
