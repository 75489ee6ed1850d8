//! Tests for Session: textual commands against either tree variant

use rstree::application::{AnyTree, ApplicationError, Command, Outcome, Session, TreeKind};
use rstree::cli::commands::run_script;
use rstree::config::Settings;
use rstree::domain::{Hierarchy, Traversal};
use rstree::util::testing::init_test_setup;

fn settings() -> Settings {
    Settings {
        seed: Some(1234),
        ..Settings::default()
    }
}

fn run(session: &mut Session, line: &str) -> Outcome {
    let command: Command = line.parse().expect("valid command");
    session.execute(command).expect("command succeeds")
}

// ============================================================
// Binary sessions
// ============================================================

#[test]
fn given_binary_session_when_inserting_one_to_seven_then_traversals_match() {
    init_test_setup();
    let mut session = Session::new(TreeKind::Binary, &settings());
    for v in 1..=7 {
        assert_eq!(run(&mut session, &format!("insert {v}")), Outcome::Inserted(v));
    }
    assert_eq!(run(&mut session, "level-order").to_string(), "Level order: 1 2 3 4 5 6 7");
    assert_eq!(run(&mut session, "preorder").to_string(), "Preorder: 1 2 4 5 3 6 7");
    assert_eq!(run(&mut session, "inorder").to_string(), "Inorder: 4 2 5 1 6 3 7");
    assert_eq!(run(&mut session, "postorder").to_string(), "Postorder: 4 5 2 6 7 3 1");
}

#[test]
fn given_binary_session_when_deleting_then_tree_keeps_its_nodes() {
    init_test_setup();
    let mut session = Session::new(TreeKind::Binary, &settings());
    session.insert_all(&[1, 2, 3]);
    assert_eq!(run(&mut session, "delete 2"), Outcome::Found(2));
    assert_eq!(run(&mut session, "delete 9"), Outcome::NotFound(9));
    assert_eq!(session.len(), 3);
}

// ============================================================
// N-ary sessions
// ============================================================

#[test]
fn given_nary_session_when_deleting_subtree_then_reports_removed_count() {
    init_test_setup();
    let mut session = Session::new(TreeKind::Nary, &settings());
    session.insert_all(&[50, 10, 20]);
    // root cap 6: both values are direct children of the root
    assert_eq!(
        run(&mut session, "delete 10"),
        Outcome::Deleted {
            value: 10,
            removed: 1
        }
    );
    assert_eq!(session.traverse(Traversal::LevelOrder), vec![50, 20]);
    assert_eq!(
        run(&mut session, "delete 10").to_string(),
        "Node 10 not found."
    );
}

#[test]
fn given_nary_session_when_loading_random_then_reports_values() {
    init_test_setup();
    let mut session = Session::new(TreeKind::Nary, &settings());
    let Outcome::Loaded(values) = run(&mut session, "random") else {
        panic!("expected loaded values");
    };
    assert_eq!(values.len(), 15);
    assert_eq!(session.len(), 15);
    let line = Outcome::Loaded(values.clone()).to_string();
    assert!(line.starts_with("15 random nodes inserted: "));

    let mut level_order = session.traverse(Traversal::LevelOrder);
    let mut expected = values;
    level_order.sort();
    expected.sort();
    assert_eq!(level_order, expected);
}

#[test]
fn given_session_when_exporting_then_json_matches_hierarchy() {
    init_test_setup();
    let mut session = Session::new(TreeKind::Binary, &settings());
    session.insert_all(&[1, 2, 3]);
    let Outcome::Exported(json) = run(&mut session, "export") else {
        panic!("expected export");
    };
    let parsed: Hierarchy = serde_json::from_str(&json).unwrap();
    assert_eq!(Some(parsed), session.hierarchy());
}

#[test]
fn given_session_kind_when_created_then_holds_matching_tree() {
    init_test_setup();
    let nary = Session::new(TreeKind::Nary, &settings());
    let binary = Session::new(TreeKind::Binary, &settings());
    assert!(matches!(nary.tree(), AnyTree::Nary(_)));
    assert!(matches!(binary.tree(), AnyTree::Binary(_)));
    assert_eq!(nary.kind(), TreeKind::Nary);
}

#[test]
fn given_impossible_sample_range_when_loading_random_then_errors_without_touching_tree() {
    init_test_setup();
    let settings = Settings {
        sample_count: 3,
        sample_min: 1,
        sample_max: 2,
        ..settings()
    };
    let mut session = Session::new(TreeKind::Nary, &settings);
    session.insert(9);
    let err = session.execute(Command::Random).unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
    assert_eq!(session.len(), 1);
}

// ============================================================
// Scripted sessions
// ============================================================

#[test]
fn given_script_when_running_then_mirrors_interactive_demo() {
    init_test_setup();
    let mut session = Session::new(TreeKind::Nary, &settings());
    let script = "\
insert 8
insert 3
insert 5
insert abc
search 5
reset
level-order
insert 4
preorder
";
    let mut out = Vec::new();
    let executed = run_script(&mut session, script.as_bytes(), &mut out, false).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(executed, 8);
    assert_eq!(lines[3], "Warning: invalid input 'abc': invalid digit found in string");
    assert_eq!(lines[4], "Node 5 found.");
    assert_eq!(lines[5], "The tree has been reset.");
    assert_eq!(lines[6], "Level order: ");
    assert_eq!(lines[8], "Preorder: 4");
}
