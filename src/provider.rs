//! Content providers: named functions that produce a segment's text.
//!
//! Providers are looked up by name in an explicit [`ProviderRegistry`].
//! An unknown name is an ordinary lookup result, not an error.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::context_var::ContextVar;
use crate::error::ProviderError;
use crate::format::escape_text;

/// Keyword arguments for one provider, as written in the config.
pub type ProviderArgs = serde_json::Map<String, Value>;

/// One piece of provider output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Plain text, escaped on output.
    Text(String),
    /// A tmux variable, expanded by tmux.
    Var(ContextVar),
    /// Raw tmux format syntax.
    Format(String),
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Text(text) => f.write_str(&escape_text(text)),
            Fragment::Var(var) => write!(f, "{var}"),
            Fragment::Format(raw) => f.write_str(raw),
        }
    }
}

/// What a provider returns: a string, a variable, or a list mixing both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderOutput(pub Vec<Fragment>);

impl ProviderOutput {
    /// Concatenate the fragments into format syntax.
    pub fn to_format_string(&self) -> String {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl From<String> for ProviderOutput {
    fn from(text: String) -> Self {
        ProviderOutput(vec![Fragment::Text(text)])
    }
}

impl From<&str> for ProviderOutput {
    fn from(text: &str) -> Self {
        ProviderOutput(vec![Fragment::Text(text.to_string())])
    }
}

impl From<ContextVar> for ProviderOutput {
    fn from(var: ContextVar) -> Self {
        ProviderOutput(vec![Fragment::Var(var)])
    }
}

impl From<Vec<Fragment>> for ProviderOutput {
    fn from(fragments: Vec<Fragment>) -> Self {
        ProviderOutput(fragments)
    }
}

impl From<ContextVar> for Fragment {
    fn from(var: ContextVar) -> Self {
        Fragment::Var(var)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

pub trait ContentProvider {
    fn provide(&self, args: &ProviderArgs) -> Result<ProviderOutput, ProviderError>;
}

impl<F> ContentProvider for F
where
    F: Fn(&ProviderArgs) -> Result<ProviderOutput, ProviderError>,
{
    fn provide(&self, args: &ProviderArgs) -> Result<ProviderOutput, ProviderError> {
        self(args)
    }
}

pub enum Lookup<'a> {
    Found(&'a dyn ContentProvider),
    NotFound,
}

#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Box<dyn ContentProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in providers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::providers::register_builtins(&mut registry);
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, provider: impl ContentProvider + 'static) {
        self.providers.insert(name.into(), Box::new(provider));
    }

    /// Register a plain function or closure.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, provider: F)
    where
        F: Fn(&ProviderArgs) -> Result<ProviderOutput, ProviderError> + 'static,
    {
        self.register(name, provider);
    }

    pub fn lookup(&self, name: &str) -> Lookup<'_> {
        match self.providers.get(name) {
            Some(provider) => Lookup::Found(provider.as_ref()),
            None => Lookup::NotFound,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Decode a provider's keyword arguments into its argument struct.
pub fn decode_args<T: DeserializeOwned>(
    name: &str,
    args: &ProviderArgs,
) -> Result<T, ProviderError> {
    serde_json::from_value(Value::Object(args.clone()))
        .map_err(|e| ProviderError::Arguments { name: name.to_string(), reason: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_concatenates_fragments() {
        let out = ProviderOutput(vec![
            Fragment::Var(ContextVar::WindowIndex),
            Fragment::Text(" #1 ".into()),
            Fragment::Format("#{=5:window_name}".into()),
        ]);
        assert_eq!(out.to_format_string(), "#{window_index} ##1 #{=5:window_name}");
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = ProviderRegistry::new();
        registry.register_fn("hello", |_| Ok(ProviderOutput::from("hi")));
        assert!(matches!(registry.lookup("hello"), Lookup::Found(_)));
        assert!(matches!(registry.lookup("bye"), Lookup::NotFound));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["hello"]);
        assert_eq!(format!("{registry:?}"), r#"["hello"]"#);
    }

    #[test]
    fn test_decode_args_reports_provider_name() {
        #[derive(serde::Deserialize, Debug)]
        #[serde(deny_unknown_fields)]
        struct Args {
            #[allow(dead_code)]
            width: u32,
        }
        let mut args = ProviderArgs::new();
        args.insert("width".into(), Value::from("wide"));
        let err = decode_args::<Args>("meter", &args).unwrap_err();
        assert!(matches!(err, ProviderError::Arguments { ref name, .. } if name == "meter"));
    }
}
