//! Positional placeholder rewriting
//!
//! Query templates are written once with `?` as the positional
//! placeholder and `??` as an escaped literal question mark. Each dialect
//! then rewrites the template into its native syntax:
//!
//! | Dialect    | Template        | Output            |
//! |------------|-----------------|-------------------|
//! | mysql      | `a = ? AND b ?? c` | unchanged      |
//! | oracle     | `a = ? AND b ?? c` | `a = :1 AND b ? c` |
//! | sqlserver  | `a = ? AND b ?? c` | `a = @p1 AND b ? c` |

use crate::Dialect;

/// Placeholder syntax understood by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderFormat {
    /// `?`, the template is passed through untouched
    Question,
    /// `:1`, `:2`, ...
    Colon,
    /// `@p1`, `@p2`, ...
    AtP,
}

impl PlaceholderFormat {
    /// Rewrite a `?` template into this format. Never fails.
    pub fn replace_placeholders(&self, sql: &str) -> String {
        match self {
            PlaceholderFormat::Question => sql.to_string(),
            PlaceholderFormat::Colon => rewrite_numbered(sql, ":"),
            PlaceholderFormat::AtP => rewrite_numbered(sql, "@p"),
        }
    }
}

fn rewrite_numbered(sql: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut rest = sql;
    let mut counter = 0usize;

    while let Some(pos) = rest.find('?') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        if let Some(tail) = after.strip_prefix('?') {
            out.push('?');
            rest = tail;
        } else {
            counter += 1;
            out.push_str(prefix);
            out.push_str(&counter.to_string());
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

/// Prepares query templates for one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementBuilder {
    dialect: Dialect,
    format: PlaceholderFormat,
}

impl StatementBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            format: dialect.placeholder_format(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn placeholder_format(&self) -> PlaceholderFormat {
        self.format
    }

    /// Rewrite a `?` template into the dialect-native query
    pub fn prepare(&self, template: &str) -> String {
        self.format.replace_placeholders(template)
    }
}
