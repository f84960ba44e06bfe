use serde::{Deserialize, Deserializer};

/// Deserializes a string with surrounding whitespace removed.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(trim_owned(value))
}

pub fn trimmed_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<String>::deserialize(deserializer)?;
    Ok(values.into_iter().map(trim_owned).collect())
}

fn trim_owned(value: String) -> String {
    let trimmed = value.trim();

    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Request {
        #[serde(deserialize_with = "super::trimmed")]
        id: String,
        #[serde(deserialize_with = "super::trimmed_vec")]
        ids: Vec<String>,
    }

    #[test]
    fn strips_surrounding_whitespace() {
        let request: Request =
            serde_json::from_str(r#"{"id": "  pr-1 ", "ids": [" u1", "u2 ", "u3"]}"#).unwrap();

        assert_eq!(request.id, "pr-1");
        assert_eq!(request.ids, ["u1", "u2", "u3"]);
    }

    #[test]
    fn blank_becomes_empty() {
        let request: Request = serde_json::from_str(r#"{"id": "   ", "ids": []}"#).unwrap();

        assert!(request.id.is_empty());
        assert!(request.ids.is_empty());
    }

    #[test]
    fn rejects_non_strings() {
        assert!(serde_json::from_str::<Request>(r#"{"id": 1, "ids": []}"#).is_err());
    }
}
