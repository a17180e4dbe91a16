use std::collections::BTreeMap;
use std::sync::Arc;

use super::{FunctionDeclaration, ToolHandler};

/// A container that maps declared function names to their handlers and
/// provides a unified interface for tool discovery.
///
/// Registration is keyed by each handler's declared name; registering a
/// second handler under the same name replaces the first.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    handlers: BTreeMap<String, Arc<dyn ToolHandler>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("handler_count", &self.handlers.len())
            .field("tools", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ToolRegistry {
    /// Creates a new empty ToolRegistry.
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Registers a handler under its declared name.
    ///
    /// The provided handler will be wrapped in an `Arc` internally, so the
    /// caller does not need to manage the `Arc` themselves. If you need to
    /// share a handler instance across multiple registries, wrap it in an
    /// `Arc` before registering it.
    pub fn register(&mut self, handler: impl ToolHandler + 'static) {
        let name = handler.declaration().name;
        self.handlers.insert(name, Arc::new(handler));
    }

    /// Registers a handler using a builder pattern.
    #[must_use]
    pub fn with_handler(mut self, handler: impl ToolHandler + 'static) -> Self {
        self.register(handler);
        self
    }

    /// Looks up the handler registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.handlers.get(name)
    }

    /// Checks if this registry has a tool with the given name.
    pub fn has_tool(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns the declarations of all registered tools, ordered by name.
    pub fn declarations(&self) -> Vec<FunctionDeclaration> {
        self.handlers
            .values()
            .map(|handler| handler.declaration())
            .collect()
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
