//! Generation result types.

use serde::{Deserialize, Serialize};

/// Metadata computed for a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMeta {
    /// Whitespace-delimited token count of the generated text.
    pub word_count: usize,
    /// Identifier of the model that produced the text.
    pub model: String,
    /// Unix timestamp in milliseconds at which generation completed.
    pub generated_at: i64,
}

/// A successful generation, owned by the request scope and discarded
/// once the HTTP response is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Generated blog post, markdown.
    pub blog: String,
    /// The sanitized prompt the blog was generated from.
    pub prompt: String,
    /// Generation metadata.
    pub meta: GenerationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_wire_names_are_camel_case() {
        let meta = GenerationMeta {
            word_count: 42,
            model: "test-model".to_string(),
            generated_at: 1_700_000_000_000,
        };

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["wordCount"], 42);
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["generatedAt"], 1_700_000_000_000_i64);
    }

    #[test]
    fn test_result_round_trip() {
        let result = GenerationResult {
            blog: "# Title\n\nBody.".to_string(),
            prompt: "a topic".to_string(),
            meta: GenerationMeta {
                word_count: 2,
                model: "m".to_string(),
                generated_at: 1,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let parsed: GenerationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
