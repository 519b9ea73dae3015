//! Tests for picking the solution cell and checking it end to end
use nbcheck::exercise::ExerciseRegistry;
use nbcheck::{Cell, CheckResult, Document, LastCodeCell, check_notebook, extract_solution};

fn hello_world_registry() -> ExerciseRegistry {
    let mut registry = ExerciseRegistry::new();
    registry.add_embedded_hello_world().expect("built-in exercise");
    assert!(registry.set_active_exercise("hello_world"));
    registry
}

fn check(cells: Vec<Cell>) -> CheckResult {
    let registry = hello_world_registry();
    let exercise = registry.get_active_exercise().expect("active exercise");
    check_notebook(&Document::from_cells(cells), exercise, &LastCodeCell)
        .expect("check notebook")
        .result
}

#[test]
fn test_empty_document_is_not_found() {
    let doc = Document::from_cells(vec![]);
    assert_eq!(extract_solution(&doc, &LastCodeCell), None);
    assert_eq!(check(vec![]), CheckResult::NotFound);
}

#[test]
fn test_only_code_cell_before_markdown() {
    let doc = Document::from_cells(vec![
        Cell::code(["x = 1\n", "print(x)"]),
        Cell::markdown(["Notes"]),
        Cell::markdown(["More notes"]),
    ]);
    assert_eq!(
        extract_solution(&doc, &LastCodeCell).as_deref(),
        Some("x = 1\nprint(x)")
    );
}

#[test]
fn test_last_of_many_code_cells() {
    let doc = Document::from_cells(vec![
        Cell::code(["first = 1"]),
        Cell::code(["second = 2"]),
        Cell::markdown(["between"]),
        Cell::code(["third = 3"]),
    ]);
    assert_eq!(
        extract_solution(&doc, &LastCodeCell).as_deref(),
        Some("third = 3")
    );
}

#[test]
fn test_fragments_concatenate_exactly() {
    let doc = Document::from_cells(vec![Cell::code(["a", "b", "c"])]);
    assert_eq!(extract_solution(&doc, &LastCodeCell).as_deref(), Some("abc"));
}

#[test]
fn test_scenarios() {
    assert!(matches!(
        check(vec![Cell::code(["print(1+)"])]),
        CheckResult::ParseFailure { .. }
    ));
    assert_eq!(
        check(vec![Cell::code(["x = 1"])]).failed_rule(),
        Some("has-print")
    );
    assert_eq!(
        check(vec![Cell::code(["print('hi')"])]).failed_rule(),
        Some("has-hello-world-literal")
    );
    assert_eq!(
        check(vec![Cell::code(["print(\"Hello, world\")"])]),
        CheckResult::Success
    );
}

#[test]
fn test_earlier_correct_cell_is_ignored() {
    let result = check(vec![
        Cell::code(["print(\"Hello, world\")"]),
        Cell::code(["x = 1"]),
    ]);
    assert_eq!(result.failed_rule(), Some("has-print"));
}

#[test]
fn test_same_input_same_outcome() {
    let cells = vec![
        Cell::markdown(["# Hello"]),
        Cell::code(["print(\"Hello, world\")\n", "print('bye')"]),
    ];
    let outcomes: Vec<CheckResult> = (0..3).map(|_| check(cells.clone())).collect();
    assert!(outcomes.iter().all(|r| *r == CheckResult::Success));
}
