use thiserror::Error;

/// Strict parsing of an enumerated prop failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// One row of a widget's configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropDoc {
    pub name: &'static str,
    pub accepted: &'static str,
    pub default: &'static str,
    pub effect: &'static str,
}

impl PropDoc {
    pub const fn new(
        name: &'static str,
        accepted: &'static str,
        default: &'static str,
        effect: &'static str,
    ) -> Self {
        Self {
            name,
            accepted,
            default,
            effect,
        }
    }
}
