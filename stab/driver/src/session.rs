//! One run of the tool: intervals are drawn, a tree is built over them and its construction
//! replayed, then stabbing queries are walked. `reset` returns to drawing.

use crate::{conf::Conf, err::*, random};
use rand::{SeedableRng, rngs::StdRng};
use stab_navigate::{Action, BuildNavigator, Navigator, QueryNavigator, Record, Transition};
use stab_tree::{Interval, IntervalTree, TreeError};
use std::fmt;

/// Interval ids as shown to the user.
pub type Label = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Draw,
    Build,
    Query,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | Phase::Draw => write!(f, "draw"),
            | Phase::Build => write!(f, "build"),
            | Phase::Query => write!(f, "query"),
        }
    }
}

/// `A`, `B`, ..., `Z`, `AA`, `AB`, ...
pub fn label(mut n: usize) -> Label {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.into_iter().rev().collect()
}

pub struct Session {
    conf: Conf,
    rng: StdRng,
    /// intervals drawn so far; moved into the tree once it is built
    drawn: Vec<Interval<Label>>,
    tree: Option<IntervalTree<Label>>,
    navigator: Option<Navigator>,
    /// next candidate for an automatic label
    next_label: usize,
}

impl Session {
    pub fn new(conf: Conf) -> Self {
        let rng = match conf.random.seed {
            | Some(seed) => StdRng::seed_from_u64(seed),
            | None => StdRng::from_os_rng(),
        };
        Session { conf, rng, drawn: Vec::new(), tree: None, navigator: None, next_label: 0 }
    }

    pub fn conf(&self) -> &Conf {
        &self.conf
    }

    pub fn phase(&self) -> Phase {
        match (&self.tree, &self.navigator) {
            | (None, _) => Phase::Draw,
            | (Some(_), Some(Navigator::Query(_))) => Phase::Query,
            | (Some(_), _) => Phase::Build,
        }
    }

    /// The intervals of the session, in the order they were drawn.
    pub fn intervals(&self) -> Vec<&Interval<Label>> {
        match &self.tree {
            | Some(tree) => tree.segments().values().collect(),
            | None => self.drawn.iter().collect(),
        }
    }

    pub fn tree(&self) -> Option<&IntervalTree<Label>> {
        self.tree.as_ref()
    }

    pub fn navigator(&self) -> Option<&Navigator> {
        self.navigator.as_ref()
    }

    fn expect_drawing(&self, what: &str) -> Result<()> {
        if self.tree.is_some() {
            return Err(SessionError::PreconditionViolation(format!(
                "cannot {} once the tree is built; reset first",
                what
            )));
        }
        Ok(())
    }

    /// Adds an interval under the next free automatic label.
    pub fn add(&mut self, a: f64, b: f64) -> Result<&Interval<Label>> {
        self.expect_drawing("add intervals")?;
        let id = loop {
            let candidate = label(self.next_label);
            self.next_label += 1;
            if !self.drawn.iter().any(|seg| seg.id == candidate) {
                break candidate;
            }
        };
        self.add_named(id, a, b)
    }

    pub fn add_named(&mut self, id: impl Into<Label>, a: f64, b: f64) -> Result<&Interval<Label>> {
        self.expect_drawing("add intervals")?;
        let id = id.into();
        if !(a.is_finite() && b.is_finite()) {
            return Err(SessionError::InvalidInput(format!("endpoints of {} must be finite numbers", id)));
        }
        if self.drawn.iter().any(|seg| seg.id == id) {
            return Err(SessionError::InvalidInput(format!("an interval named {} already exists", id)));
        }
        let seg = Interval::new(a, b, id);
        log::debug!("drew {}", seg);
        self.drawn.push(seg);
        Ok(&self.drawn[self.drawn.len() - 1])
    }

    /// Adds `count` random intervals within the configured bounds.
    pub fn randomize(&mut self, count: usize) -> Result<usize> {
        self.expect_drawing("add intervals")?;
        let pairs = random::endpoints(&mut self.rng, &self.conf.random, count)?;
        for (a, b) in pairs {
            self.add(a, b)?;
        }
        Ok(count)
    }

    /// Builds the tree over the drawn intervals and starts replaying its construction.
    pub fn build(&mut self) -> Result<&IntervalTree<Label>> {
        if self.tree.is_some() {
            return Err(SessionError::PreconditionViolation("the tree is already built".to_owned()));
        }
        if self.drawn.is_empty() {
            return Err(TreeError::InvalidInput.into());
        }
        let tree = IntervalTree::build(std::mem::take(&mut self.drawn))?;
        self.navigator = Some(BuildNavigator::new(&tree).into());
        log::info!(
            "entering {} phase: {} intervals in {} nodes",
            Phase::Build,
            tree.segments().len(),
            tree.len()
        );
        Ok(self.tree.insert(tree))
    }

    /// Starts walking a stabbing query at `x`, replacing whatever was being navigated.
    pub fn query(&mut self, x: f64) -> Result<&Navigator> {
        let Some(tree) = &self.tree else {
            return Err(SessionError::PreconditionViolation("build the tree before querying".to_owned()));
        };
        if !x.is_finite() {
            return Err(SessionError::InvalidInput(format!("query point must be a finite number, got {}", x)));
        }
        let nav = QueryNavigator::new(tree, x)
            .map_err(|err| SessionError::InvalidInput(err.to_string()))?;
        if self.phase() != Phase::Query {
            log::info!("entering {} phase", Phase::Query);
        }
        Ok(self.navigator.insert(nav.into()))
    }

    pub fn can_perform(&self, action: Action) -> bool {
        self.navigator.as_ref().is_some_and(|nav| nav.can_perform(action))
    }

    pub fn available(&self) -> Vec<Action> {
        self.navigator.as_ref().map(Navigator::available).unwrap_or_default()
    }

    /// The record under the cursor of the active navigator.
    pub fn current(&self) -> Option<Record<'_>> {
        self.navigator.as_ref().map(Navigator::current)
    }

    /// Moves the active navigator; `None` when nothing is being navigated. An unavailable action
    /// leaves the cursor where it is.
    pub fn perform(&mut self, action: Action) -> Option<Transition> {
        let transition = self.navigator.as_mut()?.perform(action);
        Some(transition)
    }

    /// Moves the active navigator one checkpoint forward; `None` when nothing is being navigated.
    pub fn step(&mut self) -> Option<Transition> {
        Some(self.navigator.as_mut()?.step())
    }

    /// Drops the tree and every interval, back to an empty drawing.
    pub fn reset(&mut self) {
        self.drawn.clear();
        self.tree = None;
        self.navigator = None;
        self.next_label = 0;
        log::info!("entering {} phase", Phase::Draw);
    }
}
