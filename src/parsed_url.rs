use crate::compat::String;
use crate::error::{ParseError, Result};
use crate::limits::Limits;
use crate::parser::parse_components;
use crate::url_components::UrlComponents;

/// A URL split into its components
///
/// Every textual field is owned. An invalid parse leaves every field empty
/// and `port` at 0, so nothing from an earlier parse can leak through.
///
/// # Examples
///
/// ```
/// use urlcursor::ParsedUrl;
///
/// let url = ParsedUrl::parse("http://example.com:8080/port/and/path");
/// assert!(url.is_valid());
/// assert_eq!(url.host(), "example.com");
/// assert_eq!(url.port(), 8080);
/// assert_eq!(url.path(), "port/and/path");
///
/// assert!(!ParsedUrl::parse("rtsp://:8910/path").is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedUrl {
    protocol: String,
    host: String,
    port: u16,
    path: String,
    parameters: String,
    fragment: String,
    username: String,
    password: String,
    has_credentials: bool,
    has_password: bool,
    is_valid: bool,
}

impl ParsedUrl {
    /// Parse a URL with the default [`Limits`]
    ///
    /// Never fails: an unparseable input yields a record whose
    /// [`is_valid`](Self::is_valid) is `false`.
    pub fn parse(input: &str) -> Self {
        Self::parse_with_limits(input, &Limits::DEFAULT)
    }

    /// Parse a URL with custom component limits
    pub fn parse_with_limits(input: &str, limits: &Limits) -> Self {
        let mut url = Self::default();
        url.parse_into_with_limits(input, limits);
        url
    }

    /// Parse a URL, reporting why it was rejected
    ///
    /// # Errors
    ///
    /// Returns the reason the first failing stage rejected the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlcursor::{Component, ParseError, ParsedUrl};
    ///
    /// assert_eq!(ParsedUrl::try_parse(""), Err(ParseError::EmptyInput));
    /// assert_eq!(
    ///     ParsedUrl::try_parse("http://example.com#this-fragment-is-way-too-long"),
    ///     Err(ParseError::CapacityExceeded(Component::Fragment))
    /// );
    /// ```
    pub fn try_parse(input: &str) -> Result<Self> {
        Self::try_parse_with_limits(input, &Limits::DEFAULT)
    }

    /// Parse a URL with custom component limits, reporting why it was rejected
    ///
    /// # Errors
    ///
    /// Returns the reason the first failing stage rejected the input.
    pub fn try_parse_with_limits(input: &str, limits: &Limits) -> Result<Self> {
        let components = parse_components(input, limits)?;
        let mut url = Self::default();
        url.fill(&components);
        Ok(url)
    }

    /// Check if a URL string parses under the default [`Limits`]
    ///
    /// Nothing is allocated.
    ///
    /// ```
    /// use urlcursor::ParsedUrl;
    ///
    /// assert!(ParsedUrl::can_parse("http://example.com"));
    /// assert!(!ParsedUrl::can_parse("hostname"));
    /// ```
    pub fn can_parse(input: &str) -> bool {
        parse_components(input, &Limits::DEFAULT).is_ok()
    }

    /// Parse into this record with the default [`Limits`], reusing its buffers
    ///
    /// Returns the new value of [`is_valid`](Self::is_valid).
    pub fn parse_into(&mut self, input: &str) -> bool {
        self.parse_into_with_limits(input, &Limits::DEFAULT)
    }

    /// Parse into this record with custom limits, reusing its buffers
    pub fn parse_into_with_limits(&mut self, input: &str, limits: &Limits) -> bool {
        self.reset();
        if let Ok(components) = parse_components(input, limits) {
            self.fill(&components);
        }
        self.is_valid
    }

    /// Clear every field and mark the record invalid
    pub fn reset(&mut self) {
        self.protocol.clear();
        self.host.clear();
        self.port = 0;
        self.path.clear();
        self.parameters.clear();
        self.fragment.clear();
        self.username.clear();
        self.password.clear();
        self.has_credentials = false;
        self.has_password = false;
        self.is_valid = false;
    }

    fn fill(&mut self, components: &UrlComponents<'_>) {
        self.protocol.push_str(components.protocol);
        self.protocol.make_ascii_lowercase();
        self.host.push_str(components.host);
        self.port = components.port;
        self.path.push_str(components.path);
        self.parameters.push_str(components.parameters);
        self.fragment.push_str(components.fragment);
        self.has_credentials = components.has_credentials();
        if let Some(username) = components.username {
            self.username.push_str(username);
        }
        if let Some(password) = components.password {
            self.has_password = true;
            self.password.push_str(password);
        }
        self.is_valid = true;
    }

    /// Whether the last parse succeeded
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Get the scheme, lowercased, without `:`
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Get the hostname or bracketed IPv6 literal, as written
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port, or 0 when none was given
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the path without its leading `/`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the raw query string without `?`
    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    /// Get the raw fragment without `#`
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Check if the URL had a `...@` userinfo section, even an empty one
    pub fn has_credentials(&self) -> bool {
        self.has_credentials
    }

    /// Check if the userinfo section had a `:` separator
    pub fn has_password(&self) -> bool {
        self.has_password
    }

    /// Check if a non-zero port was given
    pub fn has_port(&self) -> bool {
        self.port != 0
    }
}

impl core::str::FromStr for ParsedUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

impl TryFrom<&str> for ParsedUrl {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self> {
        Self::try_parse(value)
    }
}
