/// Loader for the JSON URL case table
///
/// The table is a list of either comment strings or case objects. A case
/// names the fields it cares about; omitted fields are not compared.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    UrlCase {
        input: String,
        #[serde(default)]
        protocol: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<u16>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        parameters: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("./url_cases.json");
    serde_json::from_str(data).expect("Failed to parse URL case table")
}
