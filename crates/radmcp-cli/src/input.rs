//! Parameter parsing for `radmcp call`.

use serde_json::{Map, Value};

/// Parses one `key=value` pair. The value may itself contain `=`.
///
/// # Errors
///
/// Returns a message for clap when there is no `=` or the key is empty.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        Some(_) => Err(format!("empty parameter name in '{raw}'")),
        None => Err(format!("expected key=value, got '{raw}'")),
    }
}

/// Collects parsed pairs into a parameter map. Later pairs win.
pub fn to_parameters(pairs: &[(String, String)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_equals() {
        assert_eq!(
            parse_param("file=app.bicep").expect("parse"),
            ("file".to_string(), "app.bicep".to_string())
        );
        assert_eq!(
            parse_param("name=a=b").expect("parse"),
            ("name".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn empty_value_is_kept() {
        assert_eq!(
            parse_param("group=").expect("parse"),
            ("group".to_string(), String::new())
        );
    }

    #[test]
    fn rejects_missing_equals_or_key() {
        assert!(parse_param("group").is_err());
        assert!(parse_param("=dev").is_err());
    }

    #[test]
    fn later_pairs_override() {
        let params = to_parameters(&[
            ("group".into(), "a".into()),
            ("group".into(), "b".into()),
        ]);
        assert_eq!(params["group"], "b");
    }
}
