//! Tool registry: static catalog of tools and their input contracts.
//!
//! Tools are advertised in registration order. Each schema is compiled once
//! at startup so per-request validation is a lookup plus a walk, and the
//! same (tool, arguments) pair always validates the same way.

use jsonschema::Validator;
use serde::Serialize;

use crate::tools::ScholarTool;

/// Descriptor advertised in `tools/list` responses.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// Unique tool name.
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// JSON Schema input contract.
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Errors resolved locally by the registry, before any upstream call.
#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    /// Requested tool is not in the catalog.
    #[error("unknown tool: {name}")]
    UnknownTool {
        /// Requested tool name.
        name: String,
    },

    /// Arguments violate the tool's declared schema.
    #[error("invalid arguments: {message}")]
    InvalidArguments {
        /// First schema violation, with its instance path.
        message: String,
    },
}

impl RegistryError {
    /// Stable error kind for protocol responses.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool { .. } => "unknown_tool",
            Self::InvalidArguments { .. } => "invalid_arguments",
        }
    }
}

struct RegisteredTool {
    tool: Box<dyn ScholarTool>,
    validator: Validator,
}

/// Static catalog of supported tools.
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    /// Build a registry, compiling each tool's input schema.
    ///
    /// # Errors
    ///
    /// Returns error if a declared schema does not compile; that is a
    /// programming error surfaced at startup, not per request.
    pub fn new(tools: Vec<Box<dyn ScholarTool>>) -> anyhow::Result<Self> {
        let tools = tools
            .into_iter()
            .map(|tool| {
                let schema = tool.input_schema();
                let validator = jsonschema::validator_for(&schema)
                    .map_err(|e| anyhow::anyhow!("schema for '{}': {e}", tool.name()))?;
                Ok(RegisteredTool { tool, validator })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { tools })
    }

    /// Descriptors for all tools, in stable registration order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|entry| ToolDescriptor {
                name: entry.tool.name().to_string(),
                description: entry.tool.description().to_string(),
                input_schema: entry.tool.input_schema(),
            })
            .collect()
    }

    /// Number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Resolve a tool by name.
    pub fn resolve(&self, name: &str) -> Result<&dyn ScholarTool, RegistryError> {
        self.entry(name).map(|entry| entry.tool.as_ref())
    }

    /// Validate arguments against the named tool's declared schema.
    ///
    /// Deterministic: reports the first violation in schema walk order.
    pub fn validate(&self, name: &str, arguments: &serde_json::Value) -> Result<(), RegistryError> {
        let entry = self.entry(name)?;
        entry.validator.validate(arguments).map_err(|err| RegistryError::InvalidArguments {
            message: format!("{err} (at '{}')", err.instance_path()),
        })
    }

    fn entry(&self, name: &str) -> Result<&RegisteredTool, RegistryError> {
        self.tools
            .iter()
            .find(|entry| entry.tool.name() == name)
            .ok_or_else(|| RegistryError::UnknownTool { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools;
    use serde_json::json;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(tools::register_all_tools()).unwrap()
    }

    #[test]
    fn test_every_listed_tool_resolves() {
        let registry = registry();
        for descriptor in registry.descriptors() {
            assert!(registry.resolve(&descriptor.name).is_ok(), "{} must resolve", descriptor.name);
        }
    }

    #[test]
    fn test_unknown_tool() {
        let registry = registry();
        let err = registry.resolve("no_such_tool").map(|_| ()).unwrap_err();
        assert_eq!(err.kind(), "unknown_tool");
        assert!(err.to_string().contains("no_such_tool"));
    }

    #[test]
    fn test_descriptor_order_is_stable() {
        let first = registry().descriptors();
        let second = registry().descriptors();
        let names: Vec<_> = first.iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, second.iter().map(|d| d.name.clone()).collect::<Vec<_>>());
        assert_eq!(names[0], "search_papers");
    }

    #[test]
    fn test_validate_accepts_valid_arguments() {
        let registry = registry();
        assert!(registry.validate("search_papers", &json!({"query": "attention"})).is_ok());
        assert!(
            registry
                .validate("search_papers", &json!({"query": "attention", "limit": 5}))
                .is_ok()
        );
    }

    #[test]
    fn test_validate_rejects_missing_required() {
        let registry = registry();
        let err = registry.validate("search_papers", &json!({})).unwrap_err();
        assert_eq!(err.kind(), "invalid_arguments");
    }

    #[test]
    fn test_validate_rejects_wrong_type_and_range() {
        let registry = registry();
        assert!(registry.validate("search_papers", &json!({"query": 42})).is_err());
        assert!(
            registry
                .validate("search_papers", &json!({"query": "x", "limit": -1}))
                .is_err()
        );
        assert!(
            registry
                .validate("search_papers", &json!({"query": "x", "limit": 1.5}))
                .is_err()
        );
        assert!(
            registry
                .validate("get_recommendations", &json!({"positive_paper_ids": []}))
                .is_err()
        );
    }

    #[test]
    fn test_validate_reports_offending_path() {
        let registry = registry();
        let err = registry
            .validate("search_papers", &json!({"query": "x", "limit": -1}))
            .unwrap_err();
        assert!(err.to_string().contains("/limit"), "message was: {err}");
    }

    #[test]
    fn test_validate_is_deterministic() {
        let registry = registry();
        let args = json!({"query": "x", "limit": 0});
        let first = registry.validate("search_papers", &args).unwrap_err().to_string();
        let second = registry.validate("search_papers", &args).unwrap_err().to_string();
        assert_eq!(first, second);
    }
}
