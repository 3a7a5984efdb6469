//! Container type definitions
//!
//! A [`Schema`] is the definitional half of a constrained container: the
//! underlying type, a null [`Policy`], a [`Config`], and an ordered
//! [`RulePack`]. Instances ([`Constrained`]) are produced through a schema
//! and re-consult it on every assignment.
//!
//! Schemas are cheap to clone (rule storage is shared) and, like rule
//! packs, are persistent: the derivation operations return new schemas and
//! never mutate the original.

use std::fmt;
use std::marker::PhantomData;

use crate::combinator::Predicate;
use crate::constrained::config::Config;
use crate::constrained::policy::{NoNull, Nullable, Policy};
use crate::constrained::Constrained;
use crate::error::ConstraintViolation;
use crate::pack::RulePack;

/// The definition of a constrained container type.
///
/// Supplying only the underlying type uses the defaults: non-nullable
/// policy, every configuration flag on, no rules.
///
/// # Example
///
/// ```rust
/// use palisade::Schema;
/// use palisade::combinator::len_lt;
///
/// let name = Schema::<String>::new().add_rule(len_lt(10));
///
/// assert!(name.try_of("Joshua".to_string()).is_ok());
/// assert!(name.try_of("0123456789".to_string()).is_err());
/// ```
///
/// # Derivation
///
/// New definitions are derived from existing ones without restating the
/// underlying type, policy, or configuration:
///
/// ```rust
/// use palisade::Schema;
/// use palisade::combinator::{len_ge, len_lt};
///
/// let name = Schema::<String>::new().add_rule(len_lt(10));
/// let nonempty_name = name.add_rule(len_ge(1));
/// let anything = name.clear_rules();
///
/// assert!(name.try_of(String::new()).is_ok());
/// assert!(nonempty_name.try_of(String::new()).is_err());
/// assert!(anything.try_of("no rules at all, any length".to_string()).is_ok());
/// ```
pub struct Schema<T, N = NoNull> {
    rules: RulePack<T>,
    config: Config,
    policy: PhantomData<N>,
}

impl<T, N: Policy<T>> Schema<T, N> {
    /// Create a definition with no rules and the default configuration.
    pub fn new() -> Self {
        Self::with(RulePack::new())
    }

    /// Create a definition from an existing rule pack.
    pub fn with(rules: RulePack<T>) -> Self {
        Self {
            rules,
            config: Config::default(),
            policy: PhantomData,
        }
    }

    /// Replace the configuration, consuming the definition.
    pub fn configured(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The definition's rule pack.
    pub fn rules(&self) -> &RulePack<T> {
        &self.rules
    }

    /// The definition's configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Derive a definition with the rule list replaced.
    pub fn set_rules(&self, rules: RulePack<T>) -> Self {
        Self {
            rules,
            config: self.config,
            policy: PhantomData,
        }
    }

    /// Derive a definition with one rule appended.
    pub fn add_rule(&self, rule: impl Predicate<T> + 'static) -> Self {
        self.set_rules(self.rules.add(rule))
    }

    /// Derive a definition with another pack's rules appended.
    pub fn add_rules(&self, rules: &RulePack<T>) -> Self {
        self.set_rules(self.rules.add_pack(rules))
    }

    /// Derive a definition with all rules removed.
    pub fn clear_rules(&self) -> Self {
        self.set_rules(RulePack::new())
    }

    /// Forwarding construction: admit `value` into a container.
    ///
    /// Rules run in pack order. On violation, a nullable policy substitutes
    /// its sentinel and the construction still succeeds; the non-nullable
    /// policy fails with [`ConstraintViolation`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::Schema;
    /// use palisade::combinator::gt;
    ///
    /// let positive = Schema::<i32>::new().add_rule(gt(0));
    /// assert_eq!(*positive.try_of(3).unwrap().get(), 3);
    /// assert!(positive.try_of(-3).is_err());
    /// ```
    pub fn try_of(&self, value: T) -> Result<Constrained<T, N>, ConstraintViolation> {
        Ok(Constrained::admitted(self.resolve(value)?, self.clone()))
    }

    /// Default construction: admit `T::default()`.
    pub fn try_default(&self) -> Result<Constrained<T, N>, ConstraintViolation>
    where
        T: Default,
    {
        self.try_of(T::default())
    }

    /// Run the rules; `Err` carries the first violated rule's index.
    pub(crate) fn screen(&self, value: T) -> Result<T, usize> {
        match self.rules.first_violation(&value) {
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(rules = self.rules.len(), "value admitted");
                Ok(value)
            }
            Some(index) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, "constraint violated");
                Err(index)
            }
        }
    }

    /// Screen `value` and apply the failure policy.
    pub(crate) fn resolve(&self, value: T) -> Result<T, ConstraintViolation> {
        match self.screen(value) {
            Ok(value) => Ok(value),
            Err(index) => match N::null() {
                Some(null) => Ok(null),
                None => Err(ConstraintViolation::at(index)),
            },
        }
    }
}

impl<T, N: Nullable<T>> Schema<T, N> {
    /// Forwarding construction under a nullable policy.
    ///
    /// Always succeeds structurally: a violating value is replaced by the
    /// policy's sentinel. Use
    /// [`is_present`](crate::Constrained::is_present) to distinguish the
    /// two outcomes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use palisade::{OptionNull, Schema};
    /// use palisade::combinator::eq;
    ///
    /// let exactly_42 = Schema::<Option<i32>, OptionNull>::new().add_rule(eq(Some(42)));
    /// assert!(exactly_42.of(Some(42)).is_present());
    /// assert!(!exactly_42.of(Some(43)).is_present());
    /// ```
    pub fn of(&self, value: T) -> Constrained<T, N> {
        let value = match self.screen(value) {
            Ok(value) => value,
            Err(_) => N::sentinel(),
        };
        Constrained::admitted(value, self.clone())
    }

    /// Default construction under a nullable policy.
    pub fn of_default(&self) -> Constrained<T, N>
    where
        T: Default,
    {
        self.of(T::default())
    }
}

impl<T, N: Policy<T>> Default for Schema<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, N> Clone for Schema<T, N> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            config: self.config,
            policy: PhantomData,
        }
    }
}

impl<T, N> fmt::Debug for Schema<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("rules", &self.rules.len())
            .field("config", &self.config)
            .finish()
    }
}
