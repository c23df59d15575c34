//! # Field Validation
//!
//! Constraints are declared as data: every create payload publishes a static table of
//! [`FieldRule`]s and exposes its field values through [`Validate::field`]. A single
//! routine, [`validate`], walks the table and collects *every* violation, so callers can
//! report all bad fields at once.
//!
//! ```rust
//! use relation_framework::validation::{validate, FieldRule, FieldValue, Validate};
//!
//! struct Tag { label: String }
//!
//! impl Validate for Tag {
//!     fn rules() -> &'static [FieldRule] {
//!         const RULES: &[FieldRule] = &[
//!             FieldRule::not_blank("label"),
//!             FieldRule::max_length("label", 8),
//!         ];
//!         RULES
//!     }
//!
//!     fn field(&self, name: &str) -> Option<FieldValue<'_>> {
//!         match name {
//!             "label" => Some(FieldValue::Text(&self.label)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let errors = validate(&Tag { label: " ".repeat(9) }).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

use std::fmt::{self, Display};

/// The kind of check a [`FieldRule`] performs against its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Integer value must be `>= bound`.
    MinValue,
    /// Integer value must be `<= bound`.
    MaxValue,
    /// Text must hold at most `bound` characters.
    MaxLength,
    /// Text must hold exactly `bound` characters.
    ExactLength,
    /// Text must contain something other than whitespace. The bound is ignored.
    NotBlank,
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MinValue => "min value",
            Self::MaxValue => "max value",
            Self::MaxLength => "max length",
            Self::ExactLength => "exact length",
            Self::NotBlank => "not blank",
        };
        f.write_str(name)
    }
}

/// A borrowed view of one field value, as seen by the rule evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Integer(i64),
    Text(&'a str),
}

/// One `(field, kind, bound)` constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: RuleKind,
    pub bound: i64,
}

impl FieldRule {
    pub const fn new(field: &'static str, kind: RuleKind, bound: i64) -> Self {
        Self { field, kind, bound }
    }

    pub const fn min_value(field: &'static str, bound: i64) -> Self {
        Self::new(field, RuleKind::MinValue, bound)
    }

    pub const fn max_value(field: &'static str, bound: i64) -> Self {
        Self::new(field, RuleKind::MaxValue, bound)
    }

    pub const fn max_length(field: &'static str, bound: i64) -> Self {
        Self::new(field, RuleKind::MaxLength, bound)
    }

    pub const fn exact_length(field: &'static str, bound: i64) -> Self {
        Self::new(field, RuleKind::ExactLength, bound)
    }

    pub const fn not_blank(field: &'static str) -> Self {
        Self::new(field, RuleKind::NotBlank, 0)
    }

    /// Returns `true` when `value` satisfies this rule.
    ///
    /// A missing value, or a value of the wrong type for the rule kind, never satisfies it.
    pub fn accepts(&self, value: Option<FieldValue<'_>>) -> bool {
        match (self.kind, value) {
            (RuleKind::MinValue, Some(FieldValue::Integer(v))) => v >= self.bound,
            (RuleKind::MaxValue, Some(FieldValue::Integer(v))) => v <= self.bound,
            (RuleKind::MaxLength, Some(FieldValue::Text(s))) => char_len(s) <= self.bound,
            (RuleKind::ExactLength, Some(FieldValue::Text(s))) => char_len(s) == self.bound,
            (RuleKind::NotBlank, Some(FieldValue::Text(s))) => !s.trim().is_empty(),
            _ => false,
        }
    }
}

fn char_len(s: &str) -> i64 {
    i64::try_from(s.chars().count()).unwrap_or(i64::MAX)
}

/// Implemented by create payloads that carry a rule table.
pub trait Validate {
    /// The complete rule table for this payload type.
    fn rules() -> &'static [FieldRule];

    /// Looks up a field value by name.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {kind} {bound}")]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: RuleKind,
    pub bound: i64,
}

impl From<&FieldRule> for FieldViolation {
    fn from(rule: &FieldRule) -> Self {
        Self {
            field: rule.field,
            kind: rule.kind,
            bound: rule.bound,
        }
    }
}

/// Every rule a payload failed, in rule-table order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Names of the violated fields, deduplicated, in rule-table order.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::with_capacity(self.violations.len());
        for violation in &self.violations {
            if !fields.contains(&violation.field) {
                fields.push(violation.field);
            }
        }
        fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid fields: {}", self.fields().join(", "))
    }
}

/// Evaluates every rule of `T` against `record`.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing all failed rules when at least one fails.
pub fn validate<T: Validate>(record: &T) -> Result<(), ValidationErrors> {
    let violations: Vec<FieldViolation> = T::rules()
        .iter()
        .filter(|rule| !rule.accepts(record.field(rule.field)))
        .map(FieldViolation::from)
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { violations })
    }
}
