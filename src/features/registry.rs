//! Named values and functions for option strings
//!
//! Column options such as a formatter or a footer are often given by name.
//! The registry resolves those names the way a page-global lookup would:
//! registered objects come back as they are, registered functions are called
//! with the arguments, and anything else is treated as a `%s` template.

use std::fmt;
use std::sync::Arc;

use fxhash::FxHashMap;
use serde_json::Value;
use tracing::debug;

use super::template::sprintf;

/// A callable registered under a name
pub type RegisteredFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

#[derive(Clone)]
enum Entry {
    Value(Value),
    Function(RegisteredFn),
}

/// Name lookup table for option values
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    entries: FxHashMap<String, Entry>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under `name`, replacing any previous entry
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Entry::Function(Arc::new(f)));
        self
    }

    /// Register a plain value under `name`, replacing any previous entry
    pub fn register_value(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.entries.insert(name.into(), Entry::Value(value));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `name` against the registry
    ///
    /// Lookup order: a registered value, then a registered function called
    /// with `args`, then `name` rendered as a template with `args`. When the
    /// template cannot be completed `default` is returned.
    pub fn calculate_object_value(&self, name: &str, args: &[Value], default: Value) -> Value {
        match self.entries.get(name) {
            Some(Entry::Value(value)) => value.clone(),
            Some(Entry::Function(f)) => f(args),
            None => {
                let rendered = sprintf(name, args);
                if rendered.is_empty() {
                    debug!(name, "no registry entry and template incomplete, using default");
                    default
                } else {
                    Value::String(rendered)
                }
            }
        }
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("FunctionRegistry").field("names", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> FunctionRegistry {
        let mut registry = FunctionRegistry::new();
        registry
            .register_value("icons", json!({ "refresh": "glyphicon-refresh" }))
            .register_fn("sum", |args| {
                json!(args.iter().filter_map(Value::as_f64).sum::<f64>())
            });
        registry
    }

    #[test]
    fn test_registered_value() {
        assert_eq!(
            registry().calculate_object_value("icons", &[], Value::Null),
            json!({ "refresh": "glyphicon-refresh" })
        );
    }

    #[test]
    fn test_registered_function() {
        assert_eq!(
            registry().calculate_object_value("sum", &[json!(1), json!(2.5)], Value::Null),
            json!(3.5)
        );
    }

    #[test]
    fn test_template_fallback() {
        let registry = registry();
        assert_eq!(
            registry.calculate_object_value("%s rows", &[json!(10)], Value::Null),
            json!("10 rows")
        );
        assert_eq!(
            registry.calculate_object_value("%s of %s", &[json!(1)], json!("fallback")),
            json!("fallback")
        );
    }

    #[test]
    fn test_replace_entry() {
        let mut registry = registry();
        registry.register_value("sum", json!(0));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("sum"));
        assert_eq!(registry.calculate_object_value("sum", &[json!(5)], Value::Null), json!(0));
    }
}
