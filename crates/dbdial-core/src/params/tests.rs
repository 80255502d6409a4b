//! Tests for parameter values, query parameters and escaping

use super::*;
use pretty_assertions::assert_eq;

fn params(pairs: &[(&str, &str)]) -> QueryParams {
    let mut params = QueryParams::new();
    for (k, v) in pairs {
        params.add(*k, *v);
    }
    params
}

fn yaml(text: &str) -> serde_yaml::Value {
    serde_yaml::from_str(text).unwrap()
}

// =============================================================================
// QueryParams Tests
// =============================================================================

#[test]
fn test_params_keep_insertion_order() {
    let params = params(&[("b", "2"), ("a", "1"), ("b", "3")]);

    assert_eq!(params.encode(), "b=2&a=1&b=3");
    assert_eq!(params.get("b"), Some("2"));
    assert_eq!(params.len(), 3);
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b", "a", "b"]);
    assert!(params.contains_key("a"));
    assert!(!params.contains_key("c"));
}

#[test]
fn test_empty_params_encode_to_empty_string() {
    let params = QueryParams::new();
    assert!(params.is_empty());
    assert_eq!(params.encode(), "");
}

#[test]
fn test_values_are_written_verbatim() {
    let params = params(&[("database", "sales db$1")]);
    assert_eq!(params.encode(), "database=sales db$1");
}

// =============================================================================
// Escaping Tests
// =============================================================================

#[test]
fn test_query_escape_zone_identifier() {
    assert_eq!(query_escape("Asia/Tokyo"), "Asia%2FTokyo");
    assert_eq!(query_escape("'Asia/Tokyo'"), "%27Asia%2FTokyo%27");
}

#[test]
fn test_query_escape_space_and_unreserved() {
    assert_eq!(query_escape("a b"), "a+b");
    assert_eq!(query_escape("a-b_c.d~e"), "a-b_c.d~e");
    assert_eq!(query_escape("100%"), "100%25");
    assert_eq!(query_escape("%20"), "%2520");
}

// =============================================================================
// ParamValue Tests
// =============================================================================

#[test]
fn test_param_value_from_yaml_scalars() {
    assert_eq!(ParamValue::from_yaml(&yaml("10")), Some(ParamValue::Int(10)));
    assert_eq!(ParamValue::from_yaml(&yaml("-3")), Some(ParamValue::Int(-3)));
    assert_eq!(ParamValue::from_yaml(&yaml("true")), Some(ParamValue::Bool(true)));
    assert_eq!(
        ParamValue::from_yaml(&yaml("utf8mb4")),
        Some(ParamValue::Str("utf8mb4".into()))
    );
    assert_eq!(
        ParamValue::from_yaml(&yaml("'10'")),
        Some(ParamValue::Str("10".into()))
    );
}

#[test]
fn test_param_value_from_yaml_unsupported() {
    assert_eq!(ParamValue::from_yaml(&yaml("1.5")), None);
    assert_eq!(ParamValue::from_yaml(&yaml("~")), None);
    assert_eq!(ParamValue::from_yaml(&yaml("[1, 2]")), None);
    assert_eq!(ParamValue::from_yaml(&yaml("{a: 1}")), None);
    assert_eq!(ParamValue::from_yaml(&yaml("18446744073709551615")), None);
}

#[test]
fn test_param_value_display() {
    assert_eq!(ParamValue::Int(42).to_string(), "42");
    assert_eq!(ParamValue::Bool(false).to_string(), "false");
    assert_eq!(ParamValue::from("x").to_string(), "x");
}
