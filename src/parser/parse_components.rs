use super::State;
use crate::character_sets::{is_host_end, is_scheme_byte};
use crate::checkers::{check_length, is_blank, parse_port};
use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use crate::limits::Limits;
#[allow(unused_imports)]
use crate::log::{debug, trace};
use crate::types::Component;
use crate::url_components::UrlComponents;

/// Split a URL into borrowed components in a single left-to-right pass
///
/// Stages run in a fixed order and the first failing stage aborts the parse.
/// When the input is exhausted right after the port, the path, query and
/// fragment stages are never entered.
///
/// # Errors
///
/// Returns the reason the first failing stage rejected the input.
pub fn parse_components<'a>(input: &'a str, limits: &Limits) -> Result<UrlComponents<'a>> {
    let result = run_stages(input, limits);
    #[cfg(feature = "log")]
    if let Err(err) = &result {
        debug!("rejected URL of {} bytes: {}", input.len(), err);
    }
    result
}

fn run_stages<'a>(input: &'a str, limits: &Limits) -> Result<UrlComponents<'a>> {
    if is_blank(input) {
        return Err(ParseError::EmptyInput);
    }

    let mut cursor = Cursor::new(input);
    let mut components = UrlComponents::new();
    let mut state = State::Protocol;

    loop {
        trace!("{:?} at byte {}", state, cursor.position());

        state = match state {
            State::Protocol => {
                components.protocol = parse_protocol(&mut cursor, limits)?;
                State::Credentials
            }
            State::Credentials => {
                if let Some((username, password)) = parse_credentials(&mut cursor, limits)? {
                    components.username = Some(username);
                    components.password = password;
                }
                State::Host
            }
            State::Host => {
                components.host = parse_host(&mut cursor, limits)?;
                State::Port
            }
            State::Port => {
                components.port = parse_port_number(&mut cursor)?;
                if cursor.is_at_end() {
                    State::Done
                } else {
                    State::Path
                }
            }
            State::Path => {
                components.path = parse_path(&mut cursor, limits)?;
                State::Parameters
            }
            State::Parameters => {
                if cursor.eat(b'?') {
                    let text = cursor.take_until(memchr::memchr(b'#', cursor.remaining().as_bytes()));
                    components.parameters = check_length(Component::Parameters, text, limits)?;
                }
                State::Fragment
            }
            State::Fragment => {
                if cursor.eat(b'#') {
                    let text = cursor.take_until(None);
                    components.fragment = check_length(Component::Fragment, text, limits)?;
                }
                State::Done
            }
            State::Done => return Ok(components),
        };
    }
}

/// `scheme://`: letters only, lowercased later by the owner of the result
fn parse_protocol<'a>(cursor: &mut Cursor<'a>, limits: &Limits) -> Result<&'a str> {
    let Some(colon) = memchr::memchr(b':', cursor.remaining().as_bytes()) else {
        return Err(ParseError::MissingScheme);
    };
    if colon == 0 {
        return Err(ParseError::MissingScheme);
    }

    let scheme = cursor.take(colon);
    if !scheme.bytes().all(is_scheme_byte) {
        return Err(ParseError::InvalidScheme);
    }
    let scheme = check_length(Component::Protocol, scheme, limits)?;

    cursor.eat(b':');
    if !cursor.eat_str("//") {
        return Err(ParseError::MissingAuthority);
    }
    Ok(scheme)
}

/// Optional `username[:password]@`
///
/// The section exists only when an `@` shows up before the first `/` (or end
/// of input). Returns `None` without moving the cursor otherwise.
fn parse_credentials<'a>(
    cursor: &mut Cursor<'a>,
    limits: &Limits,
) -> Result<Option<(&'a str, Option<&'a str>)>> {
    let rest = cursor.remaining().as_bytes();
    let has_userinfo = memchr::memchr2(b'@', b'/', rest).is_some_and(|i| rest[i] == b'@');
    if !has_userinfo {
        return Ok(None);
    }

    let Some(end) = memchr::memchr2(b':', b'@', rest) else {
        return Err(ParseError::InvalidCredentials);
    };
    let username = cursor.take(end);

    let password = if cursor.eat(b':') {
        let Some(end) = memchr::memchr(b'@', cursor.remaining().as_bytes()) else {
            return Err(ParseError::InvalidCredentials);
        };
        Some(cursor.take(end))
    } else {
        // a bare "@" has nothing to name
        if username.is_empty() {
            return Err(ParseError::InvalidCredentials);
        }
        None
    };

    let username = check_length(Component::Username, username, limits)?;
    let password = password
        .map(|password| check_length(Component::Password, password, limits))
        .transpose()?;

    if !cursor.eat(b'@') {
        return Err(ParseError::InvalidCredentials);
    }
    Ok(Some((username, password)))
}

/// Hostname or `[...]` literal, stored verbatim
fn parse_host<'a>(cursor: &mut Cursor<'a>, limits: &Limits) -> Result<&'a str> {
    let rest = cursor.remaining().as_bytes();

    let host = if cursor.peek() == Some(b'[') {
        match memchr::memchr3(b']', b'?', b'#', rest) {
            // keep the closing bracket
            Some(i) if rest[i] == b']' => cursor.take(i + 1),
            end => cursor.take_until(end),
        }
    } else {
        cursor.take_until(rest.iter().position(|&b| is_host_end(b)))
    };

    if host.is_empty() {
        return Err(ParseError::EmptyHost);
    }
    check_length(Component::Host, host, limits)
}

/// Optional `:port`; an empty port is the same as no port
fn parse_port_number(cursor: &mut Cursor<'_>) -> Result<u16> {
    if !cursor.eat(b':') {
        return Ok(0);
    }
    let text = cursor.take_until(memchr::memchr3(b'/', b'?', b'#', cursor.remaining().as_bytes()));
    if text.is_empty() {
        return Ok(0);
    }
    parse_port(text).ok_or(ParseError::InvalidPort)
}

/// Optional `/path`, returned without its leading slash
fn parse_path<'a>(cursor: &mut Cursor<'a>, limits: &Limits) -> Result<&'a str> {
    match cursor.peek() {
        None | Some(b'?' | b'#') => return Ok(""),
        Some(b'/') => {
            cursor.eat(b'/');
        }
        Some(_) => return Err(ParseError::InvalidPathStart),
    }
    let text = cursor.take_until(memchr::memchr2(b'?', b'#', cursor.remaining().as_bytes()));
    check_length(Component::Path, text, limits)
}
