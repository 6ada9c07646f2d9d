use serde_json::Value;

/// Render records as CSV.
///
/// The header is the keys of the first record in their original order. Each
/// cell is the JSON text of the value (strings keep their quotes), a key the
/// record lacks renders as an empty cell, and rows are joined with `\n`.
/// Records that are not JSON objects contribute empty rows.
pub fn records_to_csv(records: &[Value]) -> String {
    let Some(Value::Object(first)) = records.first() else {
        return String::new();
    };
    let headers: Vec<&String> = first.keys().collect();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| h.as_str())
            .collect::<Vec<_>>()
            .join(","),
    );
    for record in records {
        let row = headers
            .iter()
            .map(|key| {
                record
                    .get(key.as_str())
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_from_first_record_and_json_values() {
        let records = vec![json!({"a": 1, "b": "x"}), json!({"a": 2, "b": "y"})];
        assert_eq!(records_to_csv(&records), "a,b\n1,\"x\"\n2,\"y\"");
    }

    #[test]
    fn keeps_backend_key_order() {
        let records: Vec<Value> =
            serde_json::from_str(r#"[{"severity":"low","action":"LOGIN","_id":"1"}]"#).unwrap();
        assert!(records_to_csv(&records).starts_with("severity,action,_id\n"));
    }

    #[test]
    fn missing_keys_are_empty_and_nested_values_stringified() {
        let records = vec![
            json!({"id": "1", "user": {"name": "Ada"}}),
            json!({"id": "2"}),
        ];
        assert_eq!(
            records_to_csv(&records),
            "id,user\n\"1\",{\"name\":\"Ada\"}\n\"2\","
        );
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(records_to_csv(&[]), "");
    }
}
