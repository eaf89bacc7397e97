use thiserror::Error;

/// Failure converting between values and JSON text.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value has members JSON cannot represent (e.g. a map with non-string keys).
    #[error("value cannot be serialized to JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The text is not valid JSON.
    #[error("malformed JSON at line {line}, column {column}: {source}")]
    Parse {
        /// 1-based line of the offending character.
        line: usize,
        /// 1-based column of the offending character.
        column: usize,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The text is valid JSON but its record does not fit the requested type.
    #[error("JSON record does not fit `{target}`: {source}")]
    Shape {
        /// Name of the requested type.
        target: &'static str,
        /// Underlying deserializer error.
        #[source]
        source: serde_json::Error,
    },
}
