/// URL parser state machine states
///
/// States run strictly in declaration order; any stage may skip ahead to
/// `Done` or abort the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// `scheme://`
    Protocol,
    /// Optional `username[:password]@`
    Credentials,
    /// Hostname or bracketed IPv6 literal
    Host,
    /// Optional `:port`
    Port,
    /// Optional `/path`
    Path,
    /// Optional `?query`
    Parameters,
    /// Optional `#fragment`
    Fragment,
    Done,
}
