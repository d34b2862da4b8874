//! Configuration for binding and schema assembly.

/// Configuration for binding and schema assembly.
///
/// The defaults follow the plain binding rules: the requirement ledger is a
/// hard gate only for an extension's own base type, and unlisted
/// dependencies are logged rather than rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindConfig {
    /// Extensions must list every dependency in their ledger, with the kind
    /// of its original definition.
    pub strict_requirements: bool,

    /// Union members must be object types and implemented interfaces must
    /// be interface types.
    pub strict_member_kinds: bool,

    /// Populate default resolvers after attaching declarations.
    pub default_resolvers: bool,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            strict_requirements: false,
            strict_member_kinds: false,
            default_resolvers: true,
        }
    }
}

impl BindConfig {
    /// Creates a configuration with every optional check enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_requirements: true,
            strict_member_kinds: true,
            default_resolvers: true,
        }
    }

    /// Builder method to enable/disable strict requirement checks.
    #[must_use]
    pub fn with_strict_requirements(mut self, strict: bool) -> Self {
        self.strict_requirements = strict;
        self
    }

    /// Builder method to enable/disable member kind checks.
    #[must_use]
    pub fn with_strict_member_kinds(mut self, strict: bool) -> Self {
        self.strict_member_kinds = strict;
        self
    }

    /// Builder method to enable/disable default resolver population.
    #[must_use]
    pub fn with_default_resolvers(mut self, enabled: bool) -> Self {
        self.default_resolvers = enabled;
        self
    }
}
