use pretty_assertions::assert_eq;
use stab_driver::{Phase, SessionError};
use stab_navigate::{Action, Navigator};
use stab_tests::utils::{load_fixture, session_of};
use std::path::PathBuf;

fn scenario() -> stab_driver::Session {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/scenario.toml");
    session_of(&load_fixture(path))
}

fn names(session: &stab_driver::Session) -> Vec<String> {
    let (Some(tree), Some(nav)) = (session.tree(), session.navigator()) else { return vec![] };
    nav.current_involved().iter().map(|s| tree[s].id.clone()).collect()
}

#[test]
fn build_walkthrough() {
    let mut session = scenario();
    assert_eq!(session.phase(), Phase::Build);
    let tree = session.tree().unwrap();
    let root = tree.root();
    assert_eq!(tree[&root].median, 1.0);
    assert_eq!(tree.height(), 2);
    assert_eq!(names(&session), ["A", "C"]);

    session.perform(Action::Recurse).unwrap();
    assert_eq!(names(&session), ["B"]);
    assert!(!session.can_perform(Action::Recurse));
    session.perform(Action::UndoRecurse).unwrap();
    assert_eq!(session.navigator().map(Navigator::cursor), Some(0));

    // finishing from the root completes the whole construction
    let t = session.perform(Action::FinishSubtree).unwrap();
    assert_eq!((t.from, t.to), (0, 4));
    assert!(session.available().is_empty());
}

#[test]
fn query_walkthrough() {
    let mut session = scenario();
    session.query(7.0).unwrap();
    assert_eq!(names(&session), ["A"]);
    assert_eq!(session.available(), vec![Action::Recurse]);
    let t = session.perform(Action::Recurse).unwrap();
    assert_eq!(names(&session), ["D"]);
    let right = session.tree().map(|tree| tree[&tree.root()].right.unwrap()).unwrap();
    let entered = session.navigator().unwrap().entered_nodes(&t);
    assert_eq!(entered.into_iter().collect::<Vec<_>>(), vec![right]);
    assert_eq!(session.available(), vec![Action::UndoRecurse]);
}

#[test]
fn query_before_build() {
    let mut session = stab_driver::Session::new(Default::default());
    session.add(0.0, 1.0).unwrap();
    let err = session.query(0.5).unwrap_err();
    assert!(matches!(err, SessionError::PreconditionViolation(_)));
    assert_eq!(session.phase(), Phase::Draw);
}
