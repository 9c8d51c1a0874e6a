//! Scenario tests for SortedVec.
//!
//! These tests walk through the public API the way application code uses
//! it: attaching to collections, inserting, replacing ranges, switching and
//! inverting relations.

use std::cmp::Ordering;
use std::collections::VecDeque;

use rstest::{fixture, rstest};
use sortvec::{AdaptationError, ElementSource, Relation, SortedVec, SortedVecError};

#[fixture]
fn one_two_four() -> SortedVec<i32> {
    SortedVec::attach(vec![1, 2, 4]).unwrap()
}

fn descending() -> Relation<i32> {
    Relation::by(|left: &i32, right: &i32| right.cmp(left))
}

fn even_odd(left: &i32, right: &i32) -> Ordering {
    (left % 2).cmp(&(right % 2)).then_with(|| left.cmp(right))
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_attach_without_elements_is_empty() {
    let sorted: SortedVec<i32> = SortedVec::attach(Vec::new()).unwrap();
    assert!(sorted.is_empty());
    assert_eq!(sorted, Vec::<i32>::new());
}

#[rstest]
fn test_attach_sorts_by_natural_order() {
    let sorted = SortedVec::attach(vec![5, 2, 1]).unwrap();
    assert_eq!(sorted, vec![1, 2, 5]);
}

#[rstest]
fn test_attach_with_composed_relations() {
    let first_letter = Relation::by_key(|word: &&str| word.chars().next());
    let longest_first =
        Relation::by(|left: &&str, right: &&str| right.len().cmp(&left.len()));

    let words = SortedVec::attach_with(
        vec!["bb", "a", "cc", "b", "aa", "c"],
        [first_letter, longest_first],
    )
    .unwrap();

    assert_eq!(words, vec!["aa", "a", "bb", "b", "cc", "c"]);
}

#[derive(Debug, PartialEq)]
struct Job {
    priority: u8,
    label: &'static str,
}

impl PartialOrd for Job {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.priority.cmp(&other.priority))
    }
}

#[rstest]
fn test_key_relation_over_newtype_forwarding_partial_ord() {
    let jobs = SortedVec::attach_with(
        vec![
            Job { priority: 3, label: "deploy" },
            Job { priority: 1, label: "lint" },
            Job { priority: 2, label: "test" },
        ],
        [Relation::by_key(|job: &Job| job.priority)],
    )
    .unwrap();

    let labels: Vec<&str> = jobs.iter().map(|job| job.label).collect();
    assert_eq!(labels, vec!["lint", "test", "deploy"]);
}

#[rstest]
fn test_attach_with_single_relation_installs_it_verbatim() {
    let relation = descending();
    let sorted = SortedVec::attach_with(vec![5, 4, 1, 2], [relation.clone()]).unwrap();

    assert_eq!(sorted, vec![5, 4, 2, 1]);
    assert!(sorted.relation().ptr_eq(&relation));
}

#[rstest]
fn test_from_sorted_does_not_reorder() {
    let sorted = SortedVec::from_sorted(vec![5, 4, 2, 1], descending());
    assert_eq!(sorted, vec![5, 4, 2, 1]);
}

#[rstest]
fn test_attach_twice_fails() {
    let sorted = SortedVec::attach(vec![1]).unwrap();
    let error = SortedVec::attach_with(sorted, [descending()]).unwrap_err();
    assert_eq!(error, SortedVecError::AlreadyAttached);
}

#[rstest]
fn test_attach_foreign_collections() {
    let deque: VecDeque<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(SortedVec::attach(deque).unwrap(), vec![1, 2, 3]);
    assert_eq!(SortedVec::attach([9, 8]).unwrap(), vec![8, 9]);
    assert_eq!(
        SortedVec::attach(vec![2, 1].into_boxed_slice()).unwrap(),
        vec![1, 2]
    );
}

struct Gradebook {
    scores: Option<Vec<u8>>,
}

impl ElementSource<u8> for Gradebook {
    fn into_elements(self) -> Result<Vec<u8>, AdaptationError> {
        self.scores
            .ok_or_else(|| AdaptationError::new::<Self>("no conventional element storage"))
    }
}

#[rstest]
fn test_attach_custom_source() {
    let sorted = SortedVec::attach(Gradebook {
        scores: Some(vec![70, 95, 82]),
    })
    .unwrap();
    assert_eq!(sorted, vec![70, 82, 95]);
}

#[rstest]
fn test_attach_unadaptable_source_fails_with_description() {
    let error = SortedVec::attach(Gradebook { scores: None }).unwrap_err();
    match error {
        SortedVecError::Adaptation(adaptation) => {
            assert!(adaptation.source_type.ends_with("Gradebook"));
            assert!(format!("{adaptation}").contains("no conventional element storage"));
        }
        other => panic!("expected an adaptation error, got {other:?}"),
    }
}

// =============================================================================
// Insertion
// =============================================================================

#[rstest]
fn test_push_inserts_respecting_order(mut one_two_four: SortedVec<i32>) {
    assert_eq!(one_two_four.push(3).unwrap(), 4);
    assert_eq!(one_two_four, vec![1, 2, 3, 4]);
}

#[rstest]
fn test_push_many_positions_each_element(mut one_two_four: SortedVec<i32>) {
    assert_eq!(one_two_four.push_many([3, 0, 5]).unwrap(), 6);
    assert_eq!(one_two_four, vec![0, 1, 2, 3, 4, 5]);
}

#[rstest]
fn test_unshift_behaves_like_push(mut one_two_four: SortedVec<i32>) {
    let mut pushed = one_two_four.clone();
    pushed.push_many([3, 0, 5]).unwrap();

    assert_eq!(one_two_four.unshift(3).unwrap(), 4);
    assert_eq!(one_two_four.unshift_many([0, 5]).unwrap(), 6);
    assert_eq!(one_two_four, pushed);
}

#[rstest]
fn test_push_duplicates_keeps_every_occurrence(mut one_two_four: SortedVec<i32>) {
    one_two_four.push_many([2, 2, 4]).unwrap();
    assert_eq!(one_two_four, vec![1, 2, 2, 2, 4, 4]);
}

#[rstest]
fn test_push_incomparable_reports_both_operands() {
    let mut sorted = SortedVec::attach(vec![1.5]).unwrap();
    let error = sorted.push(f64::NAN).unwrap_err();
    assert_eq!(
        format!("{error}"),
        "Unstable comparison: 1.5 compared to NaN"
    );
}

#[rstest]
fn test_push_many_keeps_elements_placed_before_failure() {
    let mut sorted = SortedVec::attach(vec![1.0, 2.0]).unwrap();
    let result = sorted.push_many([0.5, f64::NAN, 3.0]);
    assert!(matches!(result, Err(SortedVecError::UnstableComparison(_))));
    assert_eq!(sorted, vec![0.5, 1.0, 2.0]);
}

// =============================================================================
// Searching
// =============================================================================

#[rstest]
#[case(-1, 0)]
#[case(0, 0)]
#[case(1, 0)]
#[case(3, 2)]
#[case(4, 2)]
#[case(5, 3)]
#[case(6, 3)]
fn test_find_index_for(one_two_four: SortedVec<i32>, #[case] element: i32, #[case] expected: usize) {
    assert_eq!(one_two_four.find_index_for(&element).unwrap(), expected);
    assert_eq!(one_two_four, vec![1, 2, 4]);
}

#[rstest]
fn test_index_of_works_like_a_search(one_two_four: SortedVec<i32>) {
    assert_eq!(one_two_four.index_of(&2).unwrap(), Some(1));
    assert_eq!(one_two_four.index_of(&100).unwrap(), None);
    assert!(one_two_four.contains(&4).unwrap());
    assert!(!one_two_four.contains(&3).unwrap());
}

#[rstest]
fn test_index_of_uses_active_relation() {
    let sorted = SortedVec::attach_with(vec![1, 2, 4], [descending()]).unwrap();
    assert_eq!(sorted, vec![4, 2, 1]);
    assert_eq!(sorted.index_of(&1).unwrap(), Some(2));
}

// =============================================================================
// Ranged replace
// =============================================================================

#[rstest]
fn test_splice_returns_removed_in_original_order(mut one_two_four: SortedVec<i32>) {
    let removed = one_two_four.splice(1, 3, []).unwrap();
    assert_eq!(removed, vec![2, 4]);
    assert_eq!(one_two_four, vec![1]);
}

#[rstest]
fn test_splice_inserts_at_sorted_positions(mut one_two_four: SortedVec<i32>) {
    let removed = one_two_four.splice(0, 1, [10, -3]).unwrap();
    assert_eq!(removed, vec![1]);
    assert_eq!(one_two_four, vec![-3, 2, 4, 10]);
}

#[rstest]
fn test_splice_failure_keeps_removal_and_earlier_replacements() {
    let mut sorted = SortedVec::attach(vec![1.0, 2.0, 3.0]).unwrap();
    let result = sorted.splice(0, 1, [0.5, f64::NAN]);
    assert!(matches!(result, Err(SortedVecError::UnstableComparison(_))));
    assert_eq!(sorted, vec![0.5, 2.0, 3.0]);
}

// =============================================================================
// Re-sorting
// =============================================================================

#[rstest]
fn test_resort_with_relation(mut one_two_four: SortedVec<i32>) {
    one_two_four.resort_with([descending()]).unwrap();
    assert_eq!(one_two_four, vec![4, 2, 1]);
}

#[rstest]
fn test_resort_with_orders_later_insertions(mut one_two_four: SortedVec<i32>) {
    one_two_four.resort_with([descending()]).unwrap();
    one_two_four.push(3).unwrap();
    assert_eq!(one_two_four, vec![4, 3, 2, 1]);
}

#[rstest]
fn test_resort_reuses_previous_relation(mut one_two_four: SortedVec<i32>) {
    let relation = descending();
    one_two_four.resort_with([relation.clone()]).unwrap();

    one_two_four.resort().unwrap();
    assert!(one_two_four.relation().ptr_eq(&relation));

    one_two_four.push(5).unwrap();
    assert_eq!(one_two_four, vec![5, 4, 2, 1]);
}

#[rstest]
fn test_resort_without_relation_keeps_natural(mut one_two_four: SortedVec<i32>) {
    one_two_four.resort().unwrap();
    assert!(matches!(one_two_four.relation(), Relation::Natural));
    assert_eq!(one_two_four, vec![1, 2, 4]);
}

// =============================================================================
// Reversal
// =============================================================================

#[rstest]
fn test_reverse_works_like_a_buffer_reversal(mut one_two_four: SortedVec<i32>) {
    one_two_four.reverse();
    assert_eq!(one_two_four, vec![4, 2, 1]);
}

#[rstest]
fn test_reverse_inverts_relation_for_later_insertions(mut one_two_four: SortedVec<i32>) {
    one_two_four.reverse();
    one_two_four.push(3).unwrap();
    assert_eq!(one_two_four, vec![4, 3, 2, 1]);

    one_two_four.reverse();
    one_two_four.push(0).unwrap();
    assert_eq!(one_two_four, vec![0, 1, 2, 3, 4]);
}

#[rstest]
fn test_reverse_resets_when_new_relation_installed(mut one_two_four: SortedVec<i32>) {
    one_two_four.reverse();
    one_two_four.resort_with([Relation::by(even_odd)]).unwrap();
    assert!(!one_two_four.is_inverted());

    one_two_four.push_many([3, 5, 6, 7]).unwrap();
    assert_eq!(one_two_four, vec![2, 4, 6, 1, 3, 5, 7]);

    one_two_four.reverse();
    assert_eq!(one_two_four, vec![7, 5, 3, 1, 6, 4, 2]);

    one_two_four.push(0).unwrap();
    assert_eq!(one_two_four, vec![7, 5, 3, 1, 6, 4, 2, 0]);
}

#[rstest]
fn test_reverse_twice_restores_relation_object(mut one_two_four: SortedVec<i32>) {
    let before = one_two_four.relation().clone();
    one_two_four.reverse();
    one_two_four.reverse();
    assert!(one_two_four.relation().ptr_eq(&before));
    assert_eq!(one_two_four, vec![1, 2, 4]);
}
