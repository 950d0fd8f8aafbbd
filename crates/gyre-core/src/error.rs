use thiserror::Error;

/// Failure to build a property value from user input.
///
/// Resolution itself never fails — malformed descriptors degrade to the
/// supplied default at the resolver boundary. These errors only surface
/// from the explicit parsing constructors (`FromStr` and friends).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("`{0}` is not a numeric literal")]
    Number(String),

    #[error("invalid color `{input}`: {reason}")]
    Color { input: String, reason: String },
}
