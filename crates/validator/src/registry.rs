//! Validator registry keyed by declared field type.
//!
//! Resolution is a plain map lookup on [`TypeTag`]: a tag either has a
//! [`Registration`] or it does not. The registry is immutable once handed to a
//! [`RecordValidator`](crate::dispatch::RecordValidator), so it can be shared
//! across threads.
//!
//! # Examples
//!
//! ```rust
//! use tagval_validator::foundation::TypeTag;
//! use tagval_validator::registry::ValidatorRegistry;
//!
//! let registry = ValidatorRegistry::builtin();
//! assert!(registry.resolve(TypeTag::String).is_some());
//! assert!(registry.resolve(TypeTag::Int).is_none());
//! assert!(registry.resolve_name("string").is_some());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::RuleMode;
use crate::foundation::{FieldValidator, TypeTag};
use crate::rule::{Rule, RuleError, RuleSet};
use crate::validators::StringValidator;

/// Builds a validator from a field's parsed rule.
pub type RuleBuilder = fn(&RuleSet) -> Result<Arc<dyn FieldValidator>, RuleError>;

// ============================================================================
// REGISTRATION
// ============================================================================

/// How a type tag gets its validator.
#[derive(Clone)]
pub enum Registration {
    /// One instance serves every field of the type; rule text is not read.
    Shared(Arc<dyn FieldValidator>),
    /// A new validator is built per field from its parsed rule.
    PerRule(RuleBuilder),
}

impl Registration {
    /// Shares `validator` across all fields of the type.
    pub fn shared(validator: impl FieldValidator + 'static) -> Self {
        Registration::Shared(Arc::new(validator))
    }

    /// Produces the validator for a field carrying `rule`.
    pub fn instantiate(&self, rule: &Rule) -> Result<Arc<dyn FieldValidator>, RuleError> {
        match self {
            Registration::Shared(validator) => Ok(Arc::clone(validator)),
            Registration::PerRule(build) => build(&rule.parse()?),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Registration::Shared(validator) => f.debug_tuple("Shared").field(validator).finish(),
            Registration::PerRule(_) => f.debug_tuple("PerRule").field(&"<function>").finish(),
        }
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Map from declared type to validator.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    entries: HashMap<TypeTag, Registration>,
}

impl ValidatorRegistry {
    /// Creates an empty registry. Nothing resolves.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only `string` resolves, to [`StringValidator::BUILTIN`] (5..=12 chars,
    /// required), shared by every string field whatever its rule says.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new().with(
            TypeTag::String,
            Registration::shared(StringValidator::BUILTIN),
        )
    }

    /// Only `string` resolves, to a validator built from each field's rule.
    #[must_use]
    pub fn rule_driven() -> Self {
        Self::new().with(TypeTag::String, Registration::PerRule(StringValidator::build))
    }

    /// The registry matching a [`RuleMode`].
    #[must_use]
    pub fn for_mode(mode: RuleMode) -> Self {
        match mode {
            RuleMode::Fixed => Self::builtin(),
            RuleMode::Parsed => Self::rule_driven(),
        }
    }

    /// Registers `registration` for `tag`, returning the entry it replaced.
    pub fn register(&mut self, tag: TypeTag, registration: Registration) -> Option<Registration> {
        debug!(type_tag = %tag, "registering validator");
        self.entries.insert(tag, registration)
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, tag: TypeTag, registration: Registration) -> Self {
        self.register(tag, registration);
        self
    }

    /// Looks up the registration for a declared type.
    #[must_use]
    pub fn resolve(&self, tag: TypeTag) -> Option<&Registration> {
        let found = self.entries.get(&tag);
        trace!(type_tag = %tag, found = found.is_some(), "resolving validator");
        found
    }

    /// Looks up the registration by type name, e.g. `"string"`.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<&Registration> {
        self.entries
            .iter()
            .find_map(|(tag, registration)| (tag.name() == name).then_some(registration))
    }

    /// True if `tag` resolves.
    #[must_use]
    pub fn contains(&self, tag: TypeTag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered type tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.entries.keys().copied()
    }
}

// ============================================================================
// TESTS
// ============================================================================
