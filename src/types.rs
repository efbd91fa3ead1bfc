/// Textual URL components that carry a length limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Protocol,
    Username,
    Password,
    Host,
    Path,
    Parameters,
    Fragment,
}

impl Component {
    /// All bounded components, in the order they appear in a URL
    pub const ALL: [Self; 7] = [
        Self::Protocol,
        Self::Username,
        Self::Password,
        Self::Host,
        Self::Path,
        Self::Parameters,
        Self::Fragment,
    ];

    /// Get the lowercase name of this component
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Username => "username",
            Self::Password => "password",
            Self::Host => "host",
            Self::Path => "path",
            Self::Parameters => "parameters",
            Self::Fragment => "fragment",
        }
    }
}

impl core::fmt::Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
