/// Represents a runtime value produced by evaluation.
///
/// This enum models the two types a syntax-tree node can evaluate to. There
/// is no implicit promotion between them: every binary arithmetic operator
/// requires both operands to be `Number`, and a third type can never appear
/// silently.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeValue {
    /// A numeric value (double precision floating-point). Integer and float
    /// literals both land here; the language has one numeric domain.
    Number(f64),
    /// A text value, stored without its delimiting quotes.
    Text(String),
}

impl RuntimeValue {
    /// Builds a text value from a raw quoted literal.
    ///
    /// Only the delimiting quotes are stripped; the content is kept
    /// verbatim, so an escaped `\"` inside survives untouched.
    ///
    /// # Parameters
    /// - `raw`: The literal as lexed, quotes included.
    ///
    /// # Returns
    /// The `Text` value with its boundaries removed.
    #[must_use]
    pub fn from_text_literal(raw: &str) -> Self {
        let inner = raw.strip_prefix('"')
                       .and_then(|rest| rest.strip_suffix('"'))
                       .unwrap_or(raw);
        Self::Text(inner.to_string())
    }

    /// Returns the numeric content, or `None` for text.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<f64> for RuntimeValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for RuntimeValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl std::fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
