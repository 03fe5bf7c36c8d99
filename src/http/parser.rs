use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid request line")]
    InvalidRequest,
    #[error("unsupported method")]
    InvalidMethod,
    #[error("invalid header line")]
    InvalidHeader,
    #[error("invalid Content-Length")]
    InvalidContentLength,
    #[error("incomplete request")]
    Incomplete,
}

/// Parses one HTTP/1.x request from the front of `buf`.
///
/// Returns the request and the number of bytes it occupied, or
/// [`ParseError::Incomplete`] if more data is needed. Repeated header lines
/// are joined into one comma-separated value under the first spelling of
/// the name.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str = std::str::from_utf8(header_bytes)
        .map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest);
    let mut parts = request_line?.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers: HashMap<String, String> = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or(ParseError::InvalidHeader)?;
        let (key, value) = (key.trim(), value.trim());

        let existing = headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v);

        if let Some(existing) = existing {
            existing.push_str(", ");
            existing.push_str(value);
        } else {
            headers.insert(key.to_string(), value.to_string());
        }
    }

    // Body
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("Content-Length"))
        .map(|(_, v)| v)
        .map(|v| v.parse::<usize>().map_err(|_| ParseError::InvalidContentLength))
        .transpose()?
        .unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_joins_repeated_headers() {
        let req = b"GET /health HTTP/1.1\r\nIf-None-Match: \"A\"\r\nif-none-match: \"B\"\r\n\r\n";

        let (parsed, _) = parse_http_request(req).unwrap();

        assert_eq!(parsed.headers.len(), 1);
        assert_eq!(parsed.header("If-None-Match"), Some("\"A\", \"B\""));
    }

    #[test]
    fn find_headers_end_needs_blank_line() {
        assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n\r\n"), Some(14));
        assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n"), None);
    }
}
