//! Parameter encoding for MySQL DSNs
//!
//! A free-form parameter is either a recognized client option, passed to
//! the driver as is, or anything else, which the driver forwards to the
//! server as a session variable (`SET name = value`). Session variable
//! strings therefore need SQL quoting.

use dbdial_core::{ConnectionRecord, ParamValue, QueryParams, query_escape};

/// Parameter names the MySQL client library handles itself
pub const MYSQL_DRIVER_OPTIONS: &[&str] = &[
    "charset",
    "allowAllFiles",
    "allowCleartextPasswords",
    "allowNativePasswords",
    "allowOldPasswords",
    "clientFoundRows",
    "collation",
    "columnsWithAlias",
    "interpolateParams",
    "multiStatements",
    "readTimeout",
    "rejectReadOnly",
    "serverPubKey",
    "timeout",
    "tls",
    "writeTimeout",
    "maxAllowedPacket",
];

/// Keys always written by [`encode_params`], in emission order
const INJECTED_KEYS: [&str; 3] = ["parseTime", "loc", "time_zone"];

/// Whether `name` is a recognized client option (case-sensitive)
pub fn is_driver_option(name: &str) -> bool {
    MYSQL_DRIVER_OPTIONS.contains(&name)
}

fn encode_driver_option(value: &ParamValue) -> String {
    match value {
        ParamValue::Int(v) => v.to_string(),
        ParamValue::Bool(v) => v.to_string(),
        ParamValue::Str(v) => v.clone(),
    }
}

fn encode_session_variable(value: &ParamValue) -> String {
    match value {
        ParamValue::Int(v) => v.to_string(),
        ParamValue::Bool(true) => "1".to_string(),
        ParamValue::Bool(false) => "0".to_string(),
        ParamValue::Str(v) => query_escape(&format!("'{}'", v)),
    }
}

/// Encode the query parameters of a MySQL DSN.
///
/// `parseTime`, `loc` and `time_zone` come first and are derived from the
/// record timezone. User parameters follow in ascending key order. A user
/// parameter that collides with one of the derived keys is dropped.
pub fn encode_params(record: &ConnectionRecord) -> QueryParams {
    let mut params = QueryParams::new();
    params.add("parseTime", "true");
    params.add("loc", query_escape(&record.timezone));
    params.add("time_zone", query_escape(&format!("'{}'", record.timezone)));

    let mut names: Vec<&String> = record.params.keys().collect();
    names.sort();

    for name in names {
        if INJECTED_KEYS.contains(&name.as_str()) {
            tracing::debug!(
                name = %record.name,
                param = %name,
                "ignoring parameter managed by the timezone setting"
            );
            continue;
        }

        let value = &record.params[name];
        let encoded = if is_driver_option(name) {
            encode_driver_option(value)
        } else {
            encode_session_variable(value)
        };
        params.add(name.as_str(), encoded);
    }

    params
}
