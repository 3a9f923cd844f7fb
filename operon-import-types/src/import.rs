//! Builder for the synthesized types import.

/// Builder for the namespace import of the base types module.
///
/// Renders the single statement planned outputs open with:
///
/// ```ts
/// import * as Types from './types';
/// ```
#[derive(Debug, Clone)]
pub struct TypesImport {
    namespace: String,
    from: String,
    type_only: bool,
}

impl TypesImport {
    /// Import everything from `from` under `namespace`.
    pub fn new(namespace: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            from: from.into(),
            type_only: false,
        }
    }

    /// Make this a type-only import (`import type * as ...`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Render the import statement, newline terminated.
    pub fn render(&self) -> String {
        let keyword = if self.type_only {
            "import type"
        } else {
            "import"
        };
        format!("{} * as {} from '{}';\n", keyword, self.namespace, self.from)
    }
}
