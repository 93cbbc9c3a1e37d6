use super::*;
use crate::columns::ColumnMap;

// ==================== SetClauseBuilder Tests ====================

const IDENTITY_MAP: ColumnMap = ColumnMap::new(&[("field1", "field1"), ("field2", "field2")]);
const PARTIAL_MAP: ColumnMap = ColumnMap::new(&[("field2", "field2")]);

#[test]
fn test_set_clause_one_field() {
    let mut sb = SetClauseBuilder::new(IDENTITY_MAP);
    sb.set("field1", "val1");
    let clause = sb.build().unwrap();
    assert_eq!(clause.set_cols(), "\"field1\"=$1");
    assert_eq!(clause.params().len(), 1);
}

#[test]
fn test_set_clause_two_fields() {
    let mut sb = SetClauseBuilder::new(PARTIAL_MAP);
    sb.set("field1", "val1").set("field2", "val2");
    let clause = sb.build().unwrap();
    assert_eq!(clause.set_cols(), "\"field1\"=$1, \"field2\"=$2");
    assert_eq!(clause.params().len(), 2);
}

#[test]
fn test_set_clause_empty_is_bad_request() {
    let sb = SetClauseBuilder::new(ColumnMap::EMPTY);
    let err = sb.build().unwrap_err();
    assert!(err.is_bad_request());
}

#[test]
fn test_set_clause_applies_column_override() {
    const MAP: ColumnMap = ColumnMap::new(&[("companyHandle", "company_handle")]);
    let mut sb = SetClauseBuilder::new(MAP);
    sb.set("title", "Engineer").set("companyHandle", "acme");
    let clause = sb.build().unwrap();
    assert_eq!(clause.set_cols(), "\"title\"=$1, \"company_handle\"=$2");
}

#[test]
fn test_set_clause_preserves_insertion_order() {
    let mut sb = SetClauseBuilder::new(ColumnMap::EMPTY);
    sb.set("c", 3).set("a", 1).set("b", 2);
    let clause = sb.build().unwrap();
    assert_eq!(clause.set_cols(), "\"c\"=$1, \"a\"=$2, \"b\"=$3");
    assert_eq!(clause.params().len(), 3);
}

#[test]
fn test_set_clause_mixed_scalar_types() {
    let mut sb = SetClauseBuilder::new(ColumnMap::EMPTY);
    sb.set("title", "x")
        .set("salary", 100_000)
        .set("remote", true)
        .set("equity", None::<i32>);
    let clause = sb.build().unwrap();
    assert_eq!(
        clause.set_cols(),
        "\"title\"=$1, \"salary\"=$2, \"remote\"=$3, \"equity\"=$4"
    );
    assert_eq!(clause.params().len(), 4);
}

#[test]
fn test_set_opt_none_skips() {
    let mut sb = SetClauseBuilder::new(ColumnMap::EMPTY);
    sb.set_opt("title", Some("x")).set_opt("salary", None::<i32>);
    assert_eq!(sb.len(), 1);
    let clause = sb.build().unwrap();
    assert_eq!(clause.set_cols(), "\"title\"=$1");
}

#[test]
fn test_set_clause_next_placeholder() {
    let mut sb = SetClauseBuilder::new(ColumnMap::EMPTY);
    sb.set("title", "x").set("salary", 1);
    let clause = sb.build().unwrap();
    assert_eq!(clause.next_placeholder(), 3);
}

#[test]
fn test_set_clause_quotes_embedded_quote() {
    let mut sb = SetClauseBuilder::new(ColumnMap::EMPTY);
    sb.set("odd\"name", 1);
    let clause = sb.build().unwrap();
    assert_eq!(clause.set_cols(), "\"odd\"\"name\"=$1");
}

// ==================== WhereBuilder Tests ====================

#[test]
fn test_where_eq() {
    let mut wb = WhereBuilder::new();
    wb.and_eq("status", "active");
    assert_eq!(wb.build_clause(), "\"status\" = $1");
    assert_eq!(wb.params_ref().len(), 1);
}

#[test]
fn test_where_joins_with_spaced_and() {
    let mut wb = WhereBuilder::new();
    wb.and_gte("salary", 50_000);
    wb.and_ilike("title", "%eng%");
    assert_eq!(
        wb.build_clause(),
        "\"salary\" >= $1 AND \"title\" ILIKE $2"
    );
}

#[test]
fn test_where_raw_consumes_no_placeholder() {
    let mut wb = WhereBuilder::new();
    wb.and_gte("salary", 50_000);
    wb.and_raw("\"equity\" > 0");
    wb.and_ilike("title", "%eng%");
    assert_eq!(
        wb.build_clause(),
        "\"salary\" >= $1 AND \"equity\" > 0 AND \"title\" ILIKE $2"
    );
    assert_eq!(wb.params_ref().len(), 2);
}

#[test]
fn test_where_empty() {
    let wb = WhereBuilder::new();
    assert!(wb.is_empty());
    assert_eq!(wb.build_clause(), "");
    assert_eq!(wb.params_ref().len(), 0);
}

#[test]
fn test_where_with_offset() {
    let mut wb = WhereBuilder::with_offset(2);
    wb.and_eq("id", 7);
    assert_eq!(wb.build_clause(), "\"id\" = $3");
    assert_eq!(wb.param_count(), 3);
}

#[test]
fn test_where_opt_none_adds_nothing() {
    let mut wb = WhereBuilder::new();
    wb.and_gte_opt("salary", None::<i32>);
    wb.and_ilike_opt("title", None::<String>);
    wb.and_eq_opt("status", None::<&str>);
    assert!(wb.is_empty());
    assert_eq!(wb.param_count(), 0);
}

#[test]
fn test_where_opt_some_binds() {
    let mut wb = WhereBuilder::new();
    wb.and_gte_opt("salary", Some(1));
    wb.and_ilike_opt("title", Some("%a%".to_string()));
    assert_eq!(wb.build_clause(), "\"salary\" >= $1 AND \"title\" ILIKE $2");
    assert_eq!(wb.params_ref().len(), 2);
}
