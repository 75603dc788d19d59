//! Plain-text views of a session.

use colored::Colorize;
use stab_driver::{Label, Session};
use stab_navigate::{Action, Navigator, Transition};
use stab_tree::{Interval, IntervalTree, NodeId, SegId};
use std::{cmp::Ordering, collections::BTreeSet, fmt::Write};

pub fn names(tree: &IntervalTree<Label>, segs: &[SegId]) -> String {
    if segs.is_empty() {
        return "nothing".to_owned();
    }
    segs.iter().map(|s| tree[s].id.as_str()).collect::<Vec<_>>().join(", ")
}

pub fn node(tree: &IntervalTree<Label>, id: NodeId) -> String {
    format!("{} (median {})", id.concise(), tree[&id].median)
}

fn nodes(tree: &IntervalTree<Label>, ids: &BTreeSet<NodeId>) -> String {
    ids.iter().map(|id| node(tree, *id)).collect::<Vec<_>>().join(", ")
}

/// One bar per interval, scaled to `width` columns.
pub fn plot(intervals: &[&Interval<Label>], width: usize) -> String {
    if intervals.is_empty() {
        return "no intervals drawn\n".to_owned();
    }
    let lo = intervals.iter().map(|s| s.left).fold(f64::INFINITY, f64::min);
    let hi = intervals.iter().map(|s| s.right).fold(f64::NEG_INFINITY, f64::max);
    let width = width.max(2);
    let col = |v: f64| {
        if hi > lo { ((v - lo) / (hi - lo) * (width - 1) as f64).round() as usize } else { 0 }
    };
    let pad = intervals.iter().map(|s| s.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for seg in intervals {
        let (l, r) = (col(seg.left), col(seg.right));
        let bar = format!("{}{}{}", " ".repeat(l), "=".repeat(r - l + 1), " ".repeat(width - 1 - r));
        let _ = writeln!(out, "{:>pad$} |{}| [{}, {}]", seg.id, bar, seg.left, seg.right);
    }
    out
}

/// The tree in pre-order, one node per line, indented by depth.
pub fn tree(tree: &IntervalTree<Label>, highlight: Option<NodeId>) -> String {
    let mut out = String::new();
    for (id, n) in tree.nodes() {
        let branch = match n.parent {
            | None => "root",
            | Some(p) if tree[&p].left == Some(id) => "L",
            | Some(_) => "R",
        };
        let line = format!(
            "{}{} {}: {}",
            "  ".repeat(n.depth),
            branch,
            node(tree, id),
            names(tree, n.segments())
        );
        if highlight == Some(id) {
            let _ = writeln!(out, "{} {}", line.bold(), "<".yellow());
        } else {
            let _ = writeln!(out, "{}", line);
        }
    }
    out
}

pub fn checkpoint(tree: &IntervalTree<Label>, nav: &Navigator) -> String {
    match nav {
        | Navigator::Build(nav) => {
            let record = nav.current();
            let at = &tree[&record.node];
            let mut pending = Vec::new();
            if at.left.is_some() && !record.finished.left {
                pending.push("left");
            }
            if at.right.is_some() && !record.finished.right {
                pending.push("right");
            }
            let status = if at.is_leaf() {
                "leaf".to_owned()
            } else if pending.is_empty() {
                "children complete".to_owned()
            } else {
                format!("{} pending", pending.join(" and "))
            };
            format!(
                "build {}/{} at {}: stores {}; {}\n",
                nav.cursor() + 1,
                nav.len(),
                node(tree, record.node),
                names(tree, &record.involved),
                status
            )
        }
        | Navigator::Query(nav) => {
            let record = nav.current();
            let side = match record.side {
                | Ordering::Less => "left of",
                | Ordering::Greater => "right of",
                | Ordering::Equal => "on",
            };
            format!(
                "query x={} {}/{} at {}: x is {} the median; contains {}; found {}\n",
                nav.x(),
                nav.cursor() + 1,
                nav.len(),
                node(tree, record.node),
                side,
                names(tree, &record.involved),
                names(tree, &nav.found())
            )
        }
    }
}

pub fn transition(tree: &IntervalTree<Label>, nav: &Navigator, t: &Transition) -> String {
    if t.is_noop() {
        return format!("{}\n", "nothing to do here".dimmed());
    }
    let mut out = String::new();
    let entered = nav.entered_nodes(t);
    if !entered.is_empty() {
        let _ = writeln!(out, "{} {}", "entered".green(), nodes(tree, &entered));
    }
    let exited = nav.exited_nodes(t);
    if !exited.is_empty() {
        let _ = writeln!(out, "{} {}", "exited".red(), nodes(tree, &exited));
    }
    out
}

pub fn actions(session: &Session) -> String {
    let shown = Action::ALL
        .iter()
        .map(|a| {
            if session.can_perform(*a) { a.to_string().green().to_string() } else { a.to_string().dimmed().to_string() }
        })
        .collect::<Vec<_>>();
    format!("actions: {}\n", shown.join("  "))
}
