//! Request payload shapes

use super::options::NetworkCreateOptions;
use serde::Serialize;
use serde_json::{Map, Value};

/// Body of a network create request
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkSpec {
    /// Pre-serialized JSON text, sent verbatim
    Raw(String),
    /// Structured configuration, serialized on send
    Structured(Map<String, Value>),
}

impl NetworkSpec {
    /// Serialize any value into a spec
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        Ok(Self::from(serde_json::to_value(value)?))
    }

    /// Request body text
    pub fn into_body(self) -> String {
        match self {
            NetworkSpec::Raw(text) => text,
            NetworkSpec::Structured(map) => Value::Object(map).to_string(),
        }
    }
}

impl From<&str> for NetworkSpec {
    fn from(text: &str) -> Self {
        NetworkSpec::Raw(text.to_string())
    }
}

impl From<String> for NetworkSpec {
    fn from(text: String) -> Self {
        NetworkSpec::Raw(text)
    }
}

impl From<Map<String, Value>> for NetworkSpec {
    fn from(map: Map<String, Value>) -> Self {
        NetworkSpec::Structured(map)
    }
}

impl From<Value> for NetworkSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => NetworkSpec::Structured(map),
            // A JSON string is still a structured value, not a raw payload
            other => NetworkSpec::Raw(other.to_string()),
        }
    }
}

impl TryFrom<&NetworkCreateOptions> for NetworkSpec {
    type Error = serde_json::Error;

    fn try_from(options: &NetworkCreateOptions) -> serde_json::Result<Self> {
        Self::from_serializable(options)
    }
}

/// Filters narrowing a network listing, passed to the service as JSON
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters(Map<String, Value>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON text sent as the `filter` query parameter
    pub fn to_query_value(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

impl From<Map<String, Value>> for Filters {
    fn from(map: Map<String, Value>) -> Self {
        Filters(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::options::NetworkDriver;
    use serde_json::json;

    #[test]
    fn test_raw_spec_is_verbatim() {
        let text = r#"{ "driver" :"bridge" ,"labels":{}}"#;
        assert_eq!(NetworkSpec::from(text).into_body(), text);
        assert_eq!(NetworkSpec::from("not even json".to_string()).into_body(), "not even json");
    }

    #[test]
    fn test_structured_spec_keeps_key_order() {
        let spec = NetworkSpec::from(json!({"name": "net1", "driver": "bridge", "internal": false}));
        assert!(matches!(spec, NetworkSpec::Structured(_)));
        assert_eq!(
            spec.into_body(),
            r#"{"name":"net1","driver":"bridge","internal":false}"#
        );
    }

    #[test]
    fn test_string_value_is_encoded() {
        let spec = NetworkSpec::from(json!("net1"));
        assert_eq!(spec.into_body(), r#""net1""#);
    }

    #[test]
    fn test_spec_from_options() {
        let options = NetworkCreateOptions::new().driver(NetworkDriver::Ipvlan).internal(true);
        let spec = NetworkSpec::try_from(&options).unwrap();

        let body: Value = serde_json::from_str(&spec.into_body()).unwrap();
        assert_eq!(body, json!({"driver": "ipvlan", "internal": true}));
    }

    #[test]
    fn test_filters() {
        assert!(Filters::new().is_empty());

        let filters = Filters::new()
            .with("driver", "bridge")
            .with("label", vec!["env=dev", "team=infra"]);
        assert!(!filters.is_empty());
        assert_eq!(
            filters.to_query_value(),
            r#"{"driver":"bridge","label":["env=dev","team=infra"]}"#
        );
    }
}
