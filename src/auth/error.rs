#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct ErrorResponse<K> {
    #[serde(rename = "error")]
    pub kind: K,
    #[serde(rename = "error_description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "error_uri")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl<K> ErrorResponse<K> {
    pub fn new(kind: K, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: Some(description.into()),
            uri: None,
        }
    }
}

/// Wire name of an error kind, as it appears in the `error` field.
pub trait ErrorCode {
    fn code(&self) -> &'static str;
}

impl<K: ErrorCode> std::fmt::Display for ErrorResponse<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {}", self.kind.code(), description),
            None => f.write_str(self.kind.code()),
        }
    }
}
