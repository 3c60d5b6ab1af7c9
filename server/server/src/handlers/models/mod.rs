pub mod equipment;
pub mod production;
pub mod quality;

use serde::Deserialize;

/// Form body of the `/update/{id}` endpoints. A repeated `action` key
/// keeps its first value.
#[derive(Debug, Default, Deserialize)]
pub struct ActionRequest {
    #[serde(default)]
    action: Vec<String>,
}

impl ActionRequest {
    pub fn action(&self) -> Option<&str> {
        self.action.first().map(String::as_str)
    }
}

/// First value of a repeated form key, empty when absent.
pub(crate) fn first(values: Vec<String>) -> String {
    values.into_iter().next().unwrap_or_default()
}
