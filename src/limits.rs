use crate::types::Component;

pub const DEFAULT_PROTOCOL_CAPACITY: usize = 8;
pub const DEFAULT_HOST_CAPACITY: usize = 80;
pub const DEFAULT_PATH_CAPACITY: usize = 80;
pub const DEFAULT_PARAMETERS_CAPACITY: usize = 80;
pub const DEFAULT_FRAGMENT_CAPACITY: usize = 26;
pub const DEFAULT_USERNAME_CAPACITY: usize = 26;
pub const DEFAULT_PASSWORD_CAPACITY: usize = 26;

/// Maximum byte length accepted for each textual component
///
/// A component exactly as long as its limit is accepted; one byte more
/// rejects the whole URL. Nothing is ever truncated.
///
/// # Examples
///
/// ```
/// use urlcursor::{Limits, ParsedUrl};
///
/// let limits = Limits::DEFAULT.with_host(4);
/// assert!(ParsedUrl::parse_with_limits("http://abcd", &limits).is_valid());
/// assert!(!ParsedUrl::parse_with_limits("http://abcde", &limits).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub protocol: usize,
    pub host: usize,
    pub path: usize,
    pub parameters: usize,
    pub fragment: usize,
    pub username: usize,
    pub password: usize,
}

impl Limits {
    /// Limits sized for embedded and constrained use
    pub const DEFAULT: Self = Self {
        protocol: DEFAULT_PROTOCOL_CAPACITY,
        host: DEFAULT_HOST_CAPACITY,
        path: DEFAULT_PATH_CAPACITY,
        parameters: DEFAULT_PARAMETERS_CAPACITY,
        fragment: DEFAULT_FRAGMENT_CAPACITY,
        username: DEFAULT_USERNAME_CAPACITY,
        password: DEFAULT_PASSWORD_CAPACITY,
    };

    /// No length limit on any component
    pub const UNBOUNDED: Self = Self {
        protocol: usize::MAX,
        host: usize::MAX,
        path: usize::MAX,
        parameters: usize::MAX,
        fragment: usize::MAX,
        username: usize::MAX,
        password: usize::MAX,
    };

    /// Get the limit for a component
    pub const fn get(&self, component: Component) -> usize {
        match component {
            Component::Protocol => self.protocol,
            Component::Username => self.username,
            Component::Password => self.password,
            Component::Host => self.host,
            Component::Path => self.path,
            Component::Parameters => self.parameters,
            Component::Fragment => self.fragment,
        }
    }

    #[must_use]
    pub const fn with_protocol(mut self, limit: usize) -> Self {
        self.protocol = limit;
        self
    }

    #[must_use]
    pub const fn with_host(mut self, limit: usize) -> Self {
        self.host = limit;
        self
    }

    #[must_use]
    pub const fn with_path(mut self, limit: usize) -> Self {
        self.path = limit;
        self
    }

    #[must_use]
    pub const fn with_parameters(mut self, limit: usize) -> Self {
        self.parameters = limit;
        self
    }

    #[must_use]
    pub const fn with_fragment(mut self, limit: usize) -> Self {
        self.fragment = limit;
        self
    }

    #[must_use]
    pub const fn with_username(mut self, limit: usize) -> Self {
        self.username = limit;
        self
    }

    #[must_use]
    pub const fn with_password(mut self, limit: usize) -> Self {
        self.password = limit;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
