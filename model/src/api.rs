use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The body returned by the API when a request fails
///
/// Plain failures carry a `message`; validation failures carry a `title` and a map of
/// field name to the messages reported for that field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorDto {
    /// Most specific human readable description available in the payload
    pub fn summary(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.title.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}
