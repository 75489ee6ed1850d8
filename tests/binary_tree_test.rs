//! Integration tests for the binary tree

use rstest::rstest;

use rstree::domain::{BinaryTree, Branching, Hierarchy, Traversal, TreeNodeConvert};
use rstree::util::testing::{binary_of, init_test_setup};

#[test]
fn given_one_to_seven_when_reading_level_order_then_matches_insertion_order() {
    init_test_setup();
    let tree = binary_of(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.traverse(Traversal::LevelOrder), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn given_one_to_seven_when_reading_preorder_then_descends_left_first() {
    init_test_setup();
    let tree = binary_of(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.traverse(Traversal::Preorder), vec![1, 2, 4, 5, 3, 6, 7]);
}

//         1
//       /   \
//      2     3
//     / \   /
//    4   5 6
#[rstest]
#[case(Traversal::Inorder, vec![4, 2, 5, 1, 6, 3])]
#[case(Traversal::Preorder, vec![1, 2, 4, 5, 3, 6])]
#[case(Traversal::Postorder, vec![4, 5, 2, 6, 3, 1])]
#[case(Traversal::LevelOrder, vec![1, 2, 3, 4, 5, 6])]
fn given_incomplete_last_level_when_traversing_then_respects_left_right(
    #[case] kind: Traversal,
    #[case] expected: Vec<i64>,
) {
    init_test_setup();
    let tree = binary_of(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(tree.traverse(kind), expected);
}

#[test]
fn given_every_node_when_inspected_then_has_at_most_two_children_filled_left_first() {
    init_test_setup();
    let values: Vec<i64> = (1..=20).collect();
    let tree = binary_of(&values);
    for (idx, _) in tree.walk(Traversal::LevelOrder) {
        let node = tree.get(idx).unwrap();
        assert!(
            !(node.left.is_none() && node.right.is_some()),
            "right filled before left"
        );
        assert!(tree.children(idx).len() <= 2);
    }
    assert_eq!(tree.depth(), 5);
}

#[test]
fn given_absent_value_when_searching_then_tree_is_untouched() {
    init_test_setup();
    let tree = binary_of(&[8, 3, 10]);
    let before = Hierarchy::from_tree(&tree);
    assert!(tree.search(&99).is_none());
    assert!(!tree.contains(&99));
    assert_eq!(Hierarchy::from_tree(&tree), before);
}

#[test]
fn given_present_value_when_searching_then_returns_its_node() {
    init_test_setup();
    let tree = binary_of(&[8, 3, 10, 3]);
    let idx = tree.search(&3).expect("3 is present");
    // first in level order is the left child of the root
    let root = tree.get(tree.root().unwrap()).unwrap();
    assert_eq!(root.left, Some(idx));
}

#[test]
fn given_value_when_deleting_then_only_presence_is_reported() {
    init_test_setup();
    let mut tree = binary_of(&[1, 2, 3]);
    assert!(tree.delete(&3));
    assert!(!tree.delete(&4));
    assert_eq!(tree.traverse(Traversal::LevelOrder), vec![1, 2, 3]);
}

#[test]
fn given_tree_when_rendered_then_shows_root_first() {
    init_test_setup();
    let tree = binary_of(&[1, 2, 3]);
    let text = tree.to_tree_string().to_string();
    assert!(text.starts_with('1'));
    assert!(text.contains('2') && text.contains('3'));
}

#[test]
fn given_reset_when_inserting_then_value_becomes_root() {
    init_test_setup();
    let mut tree: BinaryTree<i64> = binary_of(&[1, 2, 3]);
    tree.reset();
    assert!(tree.traverse(Traversal::Inorder).is_empty());
    tree.insert(4);
    assert_eq!(tree.value(tree.root().unwrap()), Some(&4));
}
