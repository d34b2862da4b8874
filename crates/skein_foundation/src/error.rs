//! Error types for the Skein system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Binding and attachment errors are configuration defects: they are
//! reported at startup and never retried.

use std::fmt;

use thiserror::Error;

use crate::kind::NodeKind;

/// The main error type for Skein operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing definition error.
    #[must_use]
    pub fn missing_definition(declaration: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingDefinition {
            declaration: declaration.into(),
            name: name.into(),
        })
    }

    /// Creates a wrong node kind error.
    #[must_use]
    pub fn wrong_node_kind(name: impl Into<String>, expected: NodeKind, found: NodeKind) -> Self {
        Self::new(ErrorKind::WrongNodeKind {
            name: name.into(),
            expected,
            found,
        })
    }

    /// Creates a missing requirement error.
    #[must_use]
    pub fn missing_requirement(declaration: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRequirement {
            declaration: declaration.into(),
            name: name.into(),
        })
    }

    /// Creates a wrong requirement kind error.
    #[must_use]
    pub fn wrong_requirement_kind(
        declaration: impl Into<String>,
        name: impl Into<String>,
        expected: NodeKind,
        found: NodeKind,
    ) -> Self {
        Self::new(ErrorKind::WrongRequirementKind {
            declaration: declaration.into(),
            name: name.into(),
            expected,
            found,
        })
    }

    /// Creates an undeclared dependency error.
    #[must_use]
    pub fn undeclared_dependency(
        declaration: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::UndeclaredDependency {
            declaration: declaration.into(),
            name: name.into(),
        })
    }

    /// Creates an already bound error.
    #[must_use]
    pub fn already_bound(declaration: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyBound {
            declaration: declaration.into(),
        })
    }

    /// Creates an invalid declaration error.
    #[must_use]
    pub fn invalid_declaration(declaration: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDeclaration {
            declaration: declaration.into(),
            message: message.into(),
        })
    }

    /// Creates an unknown schema type error.
    #[must_use]
    pub fn unknown_schema_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownSchemaType(name.into()))
    }

    /// Creates an unknown type error.
    #[must_use]
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownType(name.into()))
    }

    /// Creates an execution error.
    #[must_use]
    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Execution(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns the type name this error is about, when it names one.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::MissingDefinition { name, .. }
            | ErrorKind::WrongNodeKind { name, .. }
            | ErrorKind::MissingRequirement { name, .. }
            | ErrorKind::WrongRequirementKind { name, .. }
            | ErrorKind::UndeclaredDependency { name, .. }
            | ErrorKind::UnknownSchemaType(name)
            | ErrorKind::DuplicateType(name)
            | ErrorKind::UnknownType(name) => Some(name.as_str()),
            ErrorKind::AlreadyBound { declaration }
            | ErrorKind::InvalidDeclaration { declaration, .. } => Some(declaration.as_str()),
            ErrorKind::DuplicateField { type_name, .. }
            | ErrorKind::UnknownField { type_name, .. }
            | ErrorKind::UnknownEnumValue { type_name, .. }
            | ErrorKind::MissingResolver { type_name, .. } => Some(type_name.as_str()),
            ErrorKind::ParseError { .. } | ErrorKind::Execution(_) | ErrorKind::Internal(_) => {
                None
            }
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The declared name was found neither in the inline fragment nor in the document.
    #[error("{declaration} declares '{name}' but no schema definition for it was found")]
    MissingDefinition {
        /// The declaration being bound.
        declaration: String,
        /// The name that was looked up.
        name: String,
    },

    /// A name resolved to a node of an unexpected kind.
    #[error("'{name}' is defined as '{found}' (expected '{expected}')")]
    WrongNodeKind {
        /// The type name.
        name: String,
        /// The kind that was expected.
        expected: NodeKind,
        /// The kind that was found.
        found: NodeKind,
    },

    /// An extension's base type is absent from the requirement ledger.
    #[error("{declaration} extends '{name}' but does not list it in its requirements")]
    MissingRequirement {
        /// The declaration being bound.
        declaration: String,
        /// The missing requirement name.
        name: String,
    },

    /// A requirement ledger entry maps to the wrong node kind.
    #[error("{declaration} requires '{name}' to be '{expected}' but its requirements say '{found}'")]
    WrongRequirementKind {
        /// The declaration being bound.
        declaration: String,
        /// The requirement name.
        name: String,
        /// The kind the requirement must have.
        expected: NodeKind,
        /// The kind recorded in the ledger.
        found: NodeKind,
    },

    /// A structurally referenced type is not declared anywhere in the document.
    #[error("{declaration} references undeclared type '{name}'")]
    UndeclaredDependency {
        /// The declaration being bound.
        declaration: String,
        /// The undeclared type name.
        name: String,
    },

    /// A declaration was bound a second time.
    #[error("{declaration} is already bound to a schema definition")]
    AlreadyBound {
        /// The declaration that was already bound.
        declaration: String,
    },

    /// A declaration was built with behavior its category cannot carry.
    #[error("{declaration} is not a valid declaration: {message}")]
    InvalidDeclaration {
        /// The declaration being built.
        declaration: String,
        /// What is wrong with it.
        message: String,
    },

    /// The live schema has no registry entry for a declaration.
    #[error("schema has no type named '{0}'")]
    UnknownSchemaType(String),

    /// Two definitions share one type name.
    #[error("type '{0}' is defined more than once")]
    DuplicateType(String),

    /// A type reference or extension names a type that does not exist.
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// A field, member, or enum value is declared twice on one type.
    #[error("'{type_name}.{field}' is defined more than once")]
    DuplicateField {
        /// The owning type.
        type_name: String,
        /// The duplicated field, member, or value name.
        field: String,
    },

    /// A resolver targets a field the type does not have.
    #[error("type '{type_name}' has no field '{field}'")]
    UnknownField {
        /// The owning type.
        type_name: String,
        /// The missing field name.
        field: String,
    },

    /// An enum mapping targets a value the enum does not have.
    #[error("enum '{type_name}' has no value '{value}'")]
    UnknownEnumValue {
        /// The enum type.
        type_name: String,
        /// The missing value name.
        value: String,
    },

    /// A field was resolved before any resolver was set on it.
    #[error("field '{type_name}.{field}' has no resolver")]
    MissingResolver {
        /// The owning type.
        type_name: String,
        /// The field name.
        field: String,
    },

    /// Parse error in schema text.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// A resolver or discriminator failed while being invoked.
    #[error("execution error: {0}")]
    Execution(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source name (document or declaration).
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Stack of enclosing operations.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
