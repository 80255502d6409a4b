//! Unit tests for MySQL parameter encoding

use super::*;
use dbdial_core::ConnectionRecord;
use pretty_assertions::assert_eq;

fn record() -> ConnectionRecord {
    ConnectionRecord::new("my", "mysql").with_timezone("Asia/Tokyo")
}

#[test]
fn test_injected_keys_come_first() {
    let params = encode_params(&record().with_param("autocommit", true));
    let keys: Vec<_> = params.keys().collect();

    assert_eq!(keys, vec!["parseTime", "loc", "time_zone", "autocommit"]);
    assert_eq!(params.get("parseTime"), Some("true"));
    assert_eq!(params.get("loc"), Some("Asia%2FTokyo"));
    assert_eq!(params.get("time_zone"), Some("%27Asia%2FTokyo%27"));
}

#[test]
fn test_empty_timezone_still_injected() {
    let params = encode_params(&ConnectionRecord::new("my", "mysql"));
    assert_eq!(params.encode(), "parseTime=true&loc=&time_zone=%27%27");
}

#[test]
fn test_driver_options_are_verbatim() {
    let params = encode_params(
        &record()
            .with_param("charset", "utf8mb4,utf8")
            .with_param("timeout", 30)
            .with_param("tls", false)
            .with_param("multiStatements", true),
    );

    assert_eq!(params.get("charset"), Some("utf8mb4,utf8"));
    assert_eq!(params.get("timeout"), Some("30"));
    assert_eq!(params.get("tls"), Some("false"));
    assert_eq!(params.get("multiStatements"), Some("true"));
}

#[test]
fn test_session_variables_are_quoted() {
    let params = encode_params(
        &record()
            .with_param("sql_mode", "TRADITIONAL")
            .with_param("autocommit", true)
            .with_param("foreign_key_checks", false)
            .with_param("wait_timeout", 600)
            .with_param("lc_time_names", "ja JP"),
    );

    assert_eq!(params.get("sql_mode"), Some("%27TRADITIONAL%27"));
    assert_eq!(params.get("autocommit"), Some("1"));
    assert_eq!(params.get("foreign_key_checks"), Some("0"));
    assert_eq!(params.get("wait_timeout"), Some("600"));
    assert_eq!(params.get("lc_time_names"), Some("%27ja+JP%27"));
}

#[test]
fn test_option_names_are_case_sensitive() {
    let params = encode_params(&record().with_param("Charset", "utf8"));
    assert_eq!(params.get("Charset"), Some("%27utf8%27"));
    assert!(is_driver_option("charset"));
    assert!(!is_driver_option("Charset"));
}

#[test]
fn test_user_keys_sorted() {
    let params = encode_params(
        &record()
            .with_param("zeta", 1)
            .with_param("alpha", 2)
            .with_param("charset", "utf8")
            .with_param("Beta", 3),
    );
    let keys: Vec<_> = params.keys().skip(3).collect();
    assert_eq!(keys, vec!["Beta", "alpha", "charset", "zeta"]);
}

#[test]
fn test_user_cannot_override_injected_keys() {
    let params = encode_params(
        &record()
            .with_param("loc", "UTC")
            .with_param("parseTime", false)
            .with_param("time_zone", "'+00:00'"),
    );

    assert_eq!(params.len(), 3);
    assert_eq!(params.get("loc"), Some("Asia%2FTokyo"));
    assert_eq!(params.get("parseTime"), Some("true"));
}

#[test]
fn test_encoding_is_deterministic() {
    let record = record()
        .with_param("b", 1)
        .with_param("a", "x")
        .with_param("c", true);
    let first = encode_params(&record).encode();
    for _ in 0..10 {
        assert_eq!(encode_params(&record).encode(), first);
    }
}

#[test]
fn test_option_list() {
    assert_eq!(MYSQL_DRIVER_OPTIONS.len(), 17);
    assert!(MYSQL_DRIVER_OPTIONS.contains(&"maxAllowedPacket"));
}
