//! Cleanup and decoding of model output that is supposed to be JSON.
//!
//! Kept free of any network concerns so it can be tested directly.

use serde::de::DeserializeOwned;

/// Strips ```json ... ``` or ``` ... ``` code fences and surrounding whitespace from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(|s| s.trim())
                .unwrap_or(stripped)
        }
        None => text
            .strip_suffix("```")
            .map(|s| s.trim_end())
            .unwrap_or(text),
    }
}

/// Strips fences, then deserializes the remaining text.
pub fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(strip_json_fences(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_surrounding_whitespace() {
        let input = "\n\n   ```json\n{\"key\": 1}\n```  \n";
        assert_eq!(strip_json_fences(input), "{\"key\": 1}");
    }

    #[test]
    fn test_strip_json_fences_unterminated_opening_fence() {
        let input = "```json\n{\"key\": 1}";
        assert_eq!(strip_json_fences(input), "{\"key\": 1}");
    }

    #[test]
    fn test_strip_json_fences_trailing_fence_only() {
        let input = "{\"key\": 1}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": 1}");
    }

    #[test]
    fn test_strip_json_fences_leaves_inner_backticks() {
        let input = "```json\n{\"code\": \"use `cargo`\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"code\": \"use `cargo`\"}");
    }

    #[test]
    fn test_decode_json_fenced_object_matches_original() {
        let original = json!({
            "parsed_resume": {"skills": ["Rust"], "experience": [], "education": []},
            "match_score": 9,
            "justification": "Strong"
        });
        let fenced = format!("```json\n{}\n```", serde_json::to_string_pretty(&original).unwrap());
        let decoded: Value = decode_json(&fenced).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_json_rejects_prose() {
        let result: Result<Value, _> = decode_json("Sorry, I can't help with that.");
        assert!(result.is_err());
    }
}
