pub mod utils {
    use serde::Deserialize;
    use stab_driver::{Conf, Session};
    use stab_navigate::{Action, Navigator};
    use std::{collections::BTreeSet, path::Path};

    /// A set of intervals together with the stabbing queries to run against them.
    #[derive(Deserialize, Debug)]
    pub struct Fixture {
        pub intervals: Vec<Drawn>,
        #[serde(default)]
        pub expect: Vec<Expect>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Drawn {
        pub id: String,
        pub left: f64,
        pub right: f64,
    }

    #[derive(Deserialize, Debug)]
    pub struct Expect {
        pub x: f64,
        pub hits: Vec<String>,
    }

    pub fn load_fixture(path: impl AsRef<Path>) -> Fixture {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("cannot read {}: {}", path.display(), err));
        toml::from_str(&text).unwrap_or_else(|err| panic!("malformed {}: {}", path.display(), err))
    }

    /// Draws the fixture into a fresh session and builds its tree.
    pub fn session_of(fixture: &Fixture) -> Session {
        let mut session = Session::new(Conf::default());
        for Drawn { id, left, right } in &fixture.intervals {
            session.add_named(id.clone(), *left, *right).unwrap();
        }
        session.build().unwrap();
        session
    }

    /// Replays the whole construction, then walks every expected query to its end.
    pub fn run_fixture(fixture: Fixture) {
        let mut session = session_of(&fixture);
        let Some(tree) = session.tree() else { panic!("tree was not built") };
        let nodes = tree.len();

        let mut entered = BTreeSet::new();
        let mut steps = 0;
        let next = |session: &Session| {
            [Action::Recurse, Action::FinishSubtree].into_iter().find(|action| session.can_perform(*action))
        };
        while let Some(action) = next(&session) {
            let t = session.perform(action).unwrap();
            assert_eq!(t.to, t.from + 1, "stepping skipped a checkpoint");
            if let Some(nav) = session.navigator() {
                entered.extend(nav.entered_nodes(&t));
            }
            steps += 1;
        }
        assert_eq!(steps, 2 * nodes - 2);
        // the root is entered again after each child
        assert_eq!(entered.len(), if nodes > 1 { nodes } else { 0 });

        for Expect { x, hits } in &fixture.expect {
            session.query(*x).unwrap();
            while session.can_perform(Action::Recurse) {
                session.perform(Action::Recurse).unwrap();
            }
            let (Some(tree), Some(Navigator::Query(nav))) = (session.tree(), session.navigator())
            else {
                panic!("not querying after query({})", x)
            };
            let mut found = nav.found().iter().map(|s| tree[s].id.clone()).collect::<Vec<_>>();
            found.sort();
            let mut hits = hits.clone();
            hits.sort();
            assert_eq!(found, hits, "stabbing at {}", x);
            let mut brute = fixture
                .intervals
                .iter()
                .filter(|d| d.left.min(d.right) <= *x && *x <= d.left.max(d.right))
                .map(|d| d.id.clone())
                .collect::<Vec<_>>();
            brute.sort();
            assert_eq!(found, brute, "stabbing at {}", x);
        }
    }
}

#[macro_export]
macro_rules! fixture {
    ($name:ident, $file:expr) => {
        #[test]
        fn $name() {
            let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("fixtures")
                .join(format!("{}.toml", $file));
            ::stab_tests::utils::run_fixture(::stab_tests::utils::load_fixture(path));
        }
    };
}
