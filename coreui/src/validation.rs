//! Validation rules for text inputs.

use std::fmt;
use std::sync::Arc;

type Rule = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Ordered list of rules. The first failing rule's message is reported.
///
/// # Example
///
/// ```ignore
/// let validator = Validator::new()
///     .required("Email is required")
///     .email("Enter a valid email");
///
/// Input::new().state(&email).validator(validator).build(&registry, &handlers);
/// ```
#[derive(Clone, Default)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom rule: `f` returns true when the value is valid.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Arc::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Require the value to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require a minimum length in characters.
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require a maximum length in characters.
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex. An invalid pattern is logged and
    /// the rule is skipped.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        match regex::Regex::new(pattern) {
            Ok(re) => self.rule(move |v| re.is_match(v), msg),
            Err(err) => {
                log::warn!("Validator::pattern: invalid regex {:?}: {}", pattern, err);
                self
            }
        }
    }

    /// Require a valid email address. Empty is valid; combine with
    /// `required` for a mandatory field.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            msg,
        )
    }

    pub fn validate(&self, value: &str) -> Result<(), String> {
        self.rules.iter().try_for_each(|rule| rule(value))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.len())
            .finish()
    }
}
