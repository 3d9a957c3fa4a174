//! End-to-end query scenarios over in-memory files
//!
//! Each test runs the full pipeline (parse, decode, filter, sort, project,
//! serialize) through `QueryEngine::query` and checks the exact JSON text.

use csvquery::executor::{ErrorKind, QueryEngine};
use csvquery::file_access::MemoryFileAccess;

fn run(content: &str, query: &str) -> String {
    let engine = QueryEngine::new(MemoryFileAccess::new().with_file("users.csv", content));
    engine.query(query).unwrap()
}

fn fail(content: &str, query: &str) -> ErrorKind {
    let engine = QueryEngine::new(MemoryFileAccess::new().with_file("users.csv", content));
    engine.query(query).unwrap_err().kind()
}

// =============================================================================
// PROJECTION
// =============================================================================

/// Test: Named columns come out in select-list order.
#[test]
fn test_select_named_columns() {
    let result = run("name,age\nJohn,20\nAlice,20", "SELECT name, age FROM users.csv");
    assert_eq!(
        result,
        r#"[{"name":"John","age":"20"},{"name":"Alice","age":"20"}]"#
    );
}

/// Test: Wildcard emits every header column in header order.
#[test]
fn test_select_wildcard() {
    let result = run("name,age\nJohn,20\nAlice,20", "SELECT * FROM users.csv");
    assert_eq!(
        result,
        r#"[{"name":"John","age":"20"},{"name":"Alice","age":"20"}]"#
    );
}

/// Test: A single column drops the others.
#[test]
fn test_select_single_column() {
    let result = run("name,age\nJohn,20\nAlice,20", "SELECT name FROM users.csv");
    assert_eq!(result, r#"[{"name":"John"},{"name":"Alice"}]"#);
}

/// Test: Column order in the select list wins over header order.
#[test]
fn test_select_reordered_columns() {
    let result = run("name,age\nJohn,20", "SELECT age, name FROM users.csv");
    assert_eq!(result, r#"[{"age":"20","name":"John"}]"#);
}

/// Test: AS renames the output key only.
#[test]
fn test_select_with_alias() {
    let result = run(
        "name,age\nJohn,25\nAlice,30",
        "SELECT name AS Name FROM users.csv WHERE age > 20",
    );
    assert_eq!(result, r#"[{"Name":"John"},{"Name":"Alice"}]"#);
}

/// Test: Numeric-looking values are still emitted as strings.
#[test]
fn test_values_are_strings() {
    let result = run("id,score\n007,-3", "SELECT * FROM users.csv");
    assert_eq!(result, r#"[{"id":"007","score":"-3"}]"#);
}

/// Test: No matching rows gives an empty array.
#[test]
fn test_empty_result() {
    let result = run("name,age\nJohn,20", "SELECT name FROM users.csv WHERE age > 99");
    assert_eq!(result, "[]");
}

/// Test: A header-only file gives an empty array.
#[test]
fn test_header_only_file() {
    assert_eq!(run("name,age\n", "SELECT * FROM users.csv"), "[]");
}

// =============================================================================
// COMPARISONS
// =============================================================================

/// Test: Less than.
#[test]
fn test_where_less_than() {
    let result = run(
        "name,age\nJohn,19\nAlice,30",
        "SELECT name, age FROM users.csv WHERE age < 20",
    );
    assert_eq!(result, r#"[{"name":"John","age":"19"}]"#);
}

/// Test: Less than or equal.
#[test]
fn test_where_less_or_equal() {
    let result = run(
        "name,age\nJohn,20\nAlice,19\nTom,30",
        "SELECT name, age FROM users.csv WHERE age <= 20",
    );
    assert_eq!(
        result,
        r#"[{"name":"John","age":"20"},{"name":"Alice","age":"19"}]"#
    );
}

/// Test: Greater than.
#[test]
fn test_where_greater_than() {
    let result = run(
        "name,age\nJohn,50\nAlice,20",
        "SELECT name, age FROM users.csv WHERE age > 20",
    );
    assert_eq!(result, r#"[{"name":"John","age":"50"}]"#);
}

/// Test: Greater than or equal.
#[test]
fn test_where_greater_or_equal() {
    let result = run(
        "name,age\nJohn,50\nAlice,20\nTom,19",
        "SELECT name, age FROM users.csv WHERE age >= 20",
    );
    assert_eq!(
        result,
        r#"[{"name":"John","age":"50"},{"name":"Alice","age":"20"}]"#
    );
}

/// Test: Equality.
#[test]
fn test_where_equal() {
    let result = run(
        "name,age\nJohn,20\nAlice,21\nTom,19",
        "SELECT name, age FROM users.csv WHERE age = 20",
    );
    assert_eq!(result, r#"[{"name":"John","age":"20"}]"#);
}

/// Test: Inequality.
#[test]
fn test_where_not_equal() {
    let result = run(
        "name,age\nJohn,21\nAlice,20",
        "SELECT name, age FROM users.csv WHERE age != 20",
    );
    assert_eq!(result, r#"[{"name":"John","age":"21"}]"#);
}

/// Test: Integers compare numerically, so 9 < 10.
#[test]
fn test_numeric_comparison() {
    let result = run("n\n9\n10\n100", "SELECT n FROM users.csv WHERE n > 9");
    assert_eq!(result, r#"[{"n":"10"},{"n":"100"}]"#);
}

/// Test: Non-integers compare as text, so "b" > "abc".
#[test]
fn test_text_comparison() {
    let result = run("w\nabc\nb\nB", "SELECT w FROM users.csv WHERE w > 'abc'");
    assert_eq!(result, r#"[{"w":"b"}]"#);
}

// =============================================================================
// LIKE
// =============================================================================

/// Test: LIKE without a wildcard is exact equality.
#[test]
fn test_like_exact() {
    let result = run(
        "name,age\nJohn,21\nAlice,20",
        "SELECT name FROM users.csv WHERE name LIKE 'John'",
    );
    assert_eq!(result, r#"[{"name":"John"}]"#);
}

/// Test: Leading wildcard is an ends-with match.
#[test]
fn test_like_leading_wildcard() {
    let result = run(
        "name,age\nJohn,21\nAlice,20",
        "SELECT name FROM users.csv WHERE name LIKE '%ohn'",
    );
    assert_eq!(result, r#"[{"name":"John"}]"#);
}

/// Test: Trailing wildcard is a starts-with match.
#[test]
fn test_like_trailing_wildcard() {
    let result = run(
        "name,age\nJohn,21\nAlice,20",
        "SELECT name FROM users.csv WHERE name LIKE 'Joh%'",
    );
    assert_eq!(result, r#"[{"name":"John"}]"#);
}

/// Test: Interior wildcard checks both ends.
#[test]
fn test_like_interior_wildcard() {
    let result = run(
        "name,age\nJohn,21\nAlice,20",
        "SELECT name FROM users.csv WHERE name LIKE 'J%n'",
    );
    assert_eq!(result, r#"[{"name":"John"}]"#);
}

/// Test: Wildcards on both sides is a contains match.
#[test]
fn test_like_contains() {
    let result = run(
        "name,age\nJohn,21\nAlice,20",
        "SELECT name FROM users.csv WHERE name LIKE '%lic%'",
    );
    assert_eq!(result, r#"[{"name":"Alice"}]"#);
}

// =============================================================================
// AND / OR CHAINS
// =============================================================================

/// Test: AND requires both conditions.
#[test]
fn test_where_and() {
    let result = run(
        "name,age\nJohn,21\nAlice,20",
        "SELECT name, age FROM users.csv WHERE name LIKE 'J%n' AND age > 20",
    );
    assert_eq!(result, r#"[{"name":"John","age":"21"}]"#);
}

/// Test: OR accepts either condition.
#[test]
fn test_where_or() {
    let result = run(
        "name,age\nJohn,21\nAlice,20\nTom,35",
        "SELECT name, age FROM users.csv WHERE name LIKE 'J%n' OR age < 21",
    );
    assert_eq!(
        result,
        r#"[{"name":"John","age":"21"},{"name":"Alice","age":"20"}]"#
    );
}

/// Test: Mixed chains fold left to right with no AND-over-OR precedence.
///
/// `name = 'Tom' OR age = 20 AND age > 50` is `(Tom OR age=20) AND age>50`.
/// Under SQL precedence Tom would match; here nobody does.
#[test]
fn test_where_chain_left_to_right() {
    let result = run(
        "name,age\nTom,35\nAlice,20",
        "SELECT name FROM users.csv WHERE name = 'Tom' OR age = 20 AND age > 50",
    );
    assert_eq!(result, "[]");
}

// =============================================================================
// ORDER BY
// =============================================================================

/// Test: Ascending order on an unselected column; cells are trimmed.
#[test]
fn test_order_by_asc() {
    let result = run(
        "name,age\nTom, 35\nJohn,25\nAlice,30",
        "SELECT name FROM users.csv ORDER BY age ASC",
    );
    assert_eq!(result, r#"[{"name":"John"},{"name":"Alice"},{"name":"Tom"}]"#);
}

/// Test: Descending order.
#[test]
fn test_order_by_desc() {
    let result = run(
        "name,age\nTom, 35\nJohn,25\nAlice,30",
        "SELECT name FROM users.csv ORDER BY age DESC",
    );
    assert_eq!(result, r#"[{"name":"Tom"},{"name":"Alice"},{"name":"John"}]"#);
}

/// Test: Equal keys keep file order in both directions.
#[test]
fn test_order_by_is_stable() {
    let content = "name,age\nA,2\nB,1\nC,2\nD,1";
    assert_eq!(
        run(content, "SELECT name FROM users.csv ORDER BY age"),
        r#"[{"name":"B"},{"name":"D"},{"name":"A"},{"name":"C"}]"#
    );
    assert_eq!(
        run(content, "SELECT name FROM users.csv ORDER BY age DESC"),
        r#"[{"name":"A"},{"name":"C"},{"name":"B"},{"name":"D"}]"#
    );
}

// =============================================================================
// DELIMITERS
// =============================================================================

/// Test: A `;` file decodes by its own header, not the commas in the query.
#[test]
fn test_semicolon_file() {
    let result = run(
        "name;age\nTom; 35\nJohn;25\nAlice;30",
        "SELECT name,age FROM users.csv",
    );
    assert_eq!(
        result,
        r#"[{"name":"Tom","age":"35"},{"name":"John","age":"25"},{"name":"Alice","age":"30"}]"#
    );
}

/// Test: Windows line endings decode like Unix ones.
#[test]
fn test_crlf_file() {
    let result = run("name,age\r\nJohn,20\r\n", "SELECT * FROM users.csv");
    assert_eq!(result, r#"[{"name":"John","age":"20"}]"#);
}

/// Test: Double quotes are plain cell text and never span lines.
#[test]
fn test_quotes_are_cell_text() {
    let result = run("name,note\n\"Tom,1\nJohn,2\nAnn,3", "SELECT name FROM users.csv");
    assert_eq!(result, r#"[{"name":"\"Tom"},{"name":"John"},{"name":"Ann"}]"#);

    let result = run("name,note\n\"Tom\",1", "SELECT name FROM users.csv");
    assert_eq!(result, r#"[{"name":"\"Tom\""}]"#);
}

// =============================================================================
// FAILURES
// =============================================================================

/// Test: Grammar violations are syntax errors.
#[test]
fn test_syntax_errors() {
    let content = "name,age\nJohn,20";
    assert_eq!(fail(content, "name FROM users.csv"), ErrorKind::QuerySyntax);
    assert_eq!(fail(content, "SELECT name users.csv"), ErrorKind::QuerySyntax);
    assert_eq!(
        fail(content, "SELECT name FROM users.csv WHERE age"),
        ErrorKind::QuerySyntax
    );
    assert_eq!(
        fail(content, "SELECT name FROM users.csv WHERE (age > 1)"),
        ErrorKind::QuerySyntax
    );
}

/// Test: Unknown columns fail in every clause.
#[test]
fn test_unknown_column() {
    let content = "name,age\nJohn,20";
    assert_eq!(fail(content, "SELECT salary FROM users.csv"), ErrorKind::UnknownColumn);
    assert_eq!(
        fail(content, "SELECT name FROM users.csv WHERE salary > 1"),
        ErrorKind::UnknownColumn
    );
    assert_eq!(
        fail(content, "SELECT name FROM users.csv ORDER BY salary"),
        ErrorKind::UnknownColumn
    );
}

/// Test: Column names are case-sensitive.
#[test]
fn test_column_names_case_sensitive() {
    assert_eq!(
        fail("name,age\nJohn,20", "SELECT Name FROM users.csv"),
        ErrorKind::UnknownColumn
    );
}

/// Test: Row width must match the header.
#[test]
fn test_malformed_table() {
    assert_eq!(
        fail("name,age\nJohn,20\nAlice", "SELECT * FROM users.csv"),
        ErrorKind::MalformedTable
    );
    assert_eq!(fail("", "SELECT * FROM users.csv"), ErrorKind::MalformedTable);
}

/// Test: A file the backend does not have is a file access error.
#[test]
fn test_missing_file() {
    assert_eq!(
        fail("name\nJohn", "SELECT * FROM other.csv"),
        ErrorKind::FileAccess
    );
}
