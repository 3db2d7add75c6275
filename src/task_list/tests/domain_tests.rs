//! Domain-focused tests for task list collection behaviour.

use crate::task_list::domain::{
    DuplicateLabelError, EmptyLabelError, IdSequence, MoveDirection, SnapshotIntegrityError,
    Task, TaskId, TaskLabel, TaskList,
};
use rstest::{fixture, rstest};

#[fixture]
fn ids() -> IdSequence {
    IdSequence::starting_at(1)
}

fn label(text: &str) -> TaskLabel {
    TaskLabel::new(text).expect("valid label")
}

fn labels_of(list: &TaskList) -> Vec<&str> {
    list.tasks()
        .iter()
        .map(|task| task.label().as_str())
        .collect()
}

fn list_of(entries: &[&str], ids: &mut IdSequence) -> TaskList {
    let mut list = TaskList::new();
    for entry in entries {
        list.append(label(entry), ids).expect("append should succeed");
    }
    list
}

#[rstest]
#[case("Buy milk", "Buy milk")]
#[case("  Buy milk  ", "Buy milk")]
#[case("\ttrailing tab\t", "trailing tab")]
fn task_label_trims_surrounding_whitespace(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(label(raw).as_str(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn task_label_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(TaskLabel::new(raw), Err(EmptyLabelError));
}

#[rstest]
fn id_sequence_allocates_monotonically(mut ids: IdSequence) {
    assert_eq!(ids.next_id(), TaskId::new(1));
    assert_eq!(ids.next_id(), TaskId::new(2));
    assert_eq!(ids.next_id(), TaskId::new(3));
}

#[rstest]
fn id_sequence_resumes_past_highest_persisted_id() {
    let mut resumed = IdSequence::resume_after(Some(TaskId::new(41)));
    assert_eq!(resumed.next_id(), TaskId::new(42));

    let mut fresh = IdSequence::resume_after(None);
    assert_eq!(fresh.next_id(), TaskId::new(1));
}

#[rstest]
fn append_preserves_insertion_order(mut ids: IdSequence) {
    let list = list_of(&["first", "second", "third"], &mut ids);
    assert_eq!(labels_of(&list), ["first", "second", "third"]);
}

#[rstest]
fn append_rejects_exact_duplicate_label(mut ids: IdSequence) {
    let mut list = list_of(&["Buy milk"], &mut ids);

    let result = list.append(label("Buy milk"), &mut ids);

    assert_eq!(result, Err(DuplicateLabelError("Buy milk".to_owned())));
    assert_eq!(list.len(), 1);
}

#[rstest]
fn append_is_case_sensitive(mut ids: IdSequence) {
    let mut list = list_of(&["Buy milk"], &mut ids);

    list.append(label("buy milk"), &mut ids)
        .expect("a different case is a different label");

    assert_eq!(list.len(), 2);
}

#[rstest]
fn rejected_append_does_not_consume_an_identifier(mut ids: IdSequence) {
    let mut list = list_of(&["one"], &mut ids);

    let rejected = list.append(label("one"), &mut ids);
    assert!(rejected.is_err());

    let task = list.append(label("two"), &mut ids).expect("append should succeed");
    assert_eq!(task.id(), TaskId::new(2));
}

#[rstest]
fn remove_drops_exactly_the_indexed_task(mut ids: IdSequence) {
    let mut list = list_of(&["a", "b", "c"], &mut ids);

    let removed = list.remove(1).expect("index 1 should exist");

    assert_eq!(removed.label().as_str(), "b");
    assert_eq!(labels_of(&list), ["a", "c"]);
}

#[rstest]
fn remove_out_of_range_is_a_no_op(mut ids: IdSequence) {
    let mut list = list_of(&["a", "b"], &mut ids);

    assert_eq!(list.remove(2), None);
    assert_eq!(list.len(), 2);
}

#[rstest]
#[case(0, MoveDirection::Up)]
#[case(2, MoveDirection::Down)]
#[case(5, MoveDirection::Up)]
#[case(5, MoveDirection::Down)]
fn shift_boundary_and_out_of_range_are_no_ops(
    mut ids: IdSequence,
    #[case] index: usize,
    #[case] direction: MoveDirection,
) {
    let mut list = list_of(&["a", "b", "c"], &mut ids);

    assert!(!list.shift(index, direction));
    assert_eq!(labels_of(&list), ["a", "b", "c"]);
}

#[rstest]
fn shift_up_swaps_with_the_predecessor_only(mut ids: IdSequence) {
    let mut list = list_of(&["a", "b", "c"], &mut ids);

    assert!(list.shift(2, MoveDirection::Up));
    assert_eq!(labels_of(&list), ["a", "c", "b"]);
}

#[rstest]
fn shift_down_swaps_with_the_successor_only(mut ids: IdSequence) {
    let mut list = list_of(&["a", "b", "c"], &mut ids);

    assert!(list.shift(0, MoveDirection::Down));
    assert_eq!(labels_of(&list), ["b", "a", "c"]);
}

#[rstest]
fn snapshot_serialises_as_id_label_records(mut ids: IdSequence) {
    let list = list_of(&["Buy milk"], &mut ids);

    let snapshot = serde_json::to_string(&list).expect("serialisation should succeed");

    assert_eq!(snapshot, r#"[{"id":1,"label":"Buy milk"}]"#);
}

#[rstest]
fn snapshot_round_trip_preserves_order_and_identity(mut ids: IdSequence) {
    let list = list_of(&["Walk dog", "Buy milk", "Water plants"], &mut ids);

    let snapshot = serde_json::to_string(&list).expect("serialisation should succeed");
    let reloaded: TaskList =
        serde_json::from_str(&snapshot).expect("deserialisation should succeed");

    assert_eq!(reloaded, list);
}

#[rstest]
#[case::duplicate_labels(r#"[{"id":1,"label":"a"},{"id":2,"label":"a"}]"#)]
#[case::duplicate_ids(r#"[{"id":1,"label":"a"},{"id":1,"label":"b"}]"#)]
#[case::blank_label(r#"[{"id":1,"label":"   "}]"#)]
#[case::not_a_sequence(r#"{"id":1,"label":"a"}"#)]
fn invalid_snapshots_fail_to_parse(#[case] raw: &str) {
    assert!(serde_json::from_str::<TaskList>(raw).is_err());
}

#[rstest]
fn from_tasks_reports_duplicate_identifiers() {
    let tasks = vec![
        Task::new(TaskId::new(1), label("a")),
        Task::new(TaskId::new(1), label("b")),
    ];

    assert_eq!(
        TaskList::from_tasks(tasks),
        Err(SnapshotIntegrityError::DuplicateId(TaskId::new(1)))
    );
}

#[rstest]
#[case("up", MoveDirection::Up)]
#[case(" DOWN ", MoveDirection::Down)]
fn move_direction_parses_known_values(#[case] raw: &str, #[case] expected: MoveDirection) {
    assert_eq!(MoveDirection::try_from(raw), Ok(expected));
}

#[rstest]
fn move_direction_rejects_unknown_values() {
    assert!(MoveDirection::try_from("sideways").is_err());
}
