use crate::types::Component;

/// Reasons a URL is rejected
///
/// Every variant means the same thing to [`crate::ParsedUrl::is_valid`]: the
/// URL is invalid. The variant only tells which stage gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input is empty or contains only whitespace
    EmptyInput,
    /// No `:` terminates a scheme, or the scheme is empty
    MissingScheme,
    /// Scheme contains a non-alphabetic character
    InvalidScheme,
    /// The scheme's `:` is not followed by `//`
    MissingAuthority,
    /// A component is longer than its configured limit
    CapacityExceeded(Component),
    /// Userinfo section is not terminated by `@`, or has an empty username without `:`
    InvalidCredentials,
    /// Host is empty
    EmptyHost,
    /// Port text is not a decimal number in `0..=65535`
    InvalidPort,
    /// Something other than `/`, `?` or `#` follows the authority
    InvalidPathStart,
}

impl ParseError {
    /// Get the component that caused the failure, when there is one
    pub fn component(self) -> Option<Component> {
        match self {
            Self::MissingScheme | Self::InvalidScheme | Self::MissingAuthority => {
                Some(Component::Protocol)
            }
            Self::CapacityExceeded(component) => Some(component),
            Self::InvalidCredentials => Some(Component::Username),
            Self::EmptyHost => Some(Component::Host),
            Self::InvalidPathStart => Some(Component::Path),
            Self::EmptyInput | Self::InvalidPort => None,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("Empty input"),
            Self::MissingScheme => f.write_str("Missing scheme"),
            Self::InvalidScheme => f.write_str("Invalid scheme"),
            Self::MissingAuthority => f.write_str("Missing \"//\" after scheme"),
            Self::CapacityExceeded(component) => write!(f, "{component} is too long"),
            Self::InvalidCredentials => f.write_str("Invalid credentials"),
            Self::EmptyHost => f.write_str("Empty host"),
            Self::InvalidPort => f.write_str("Invalid port"),
            Self::InvalidPathStart => f.write_str("Invalid path start"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
