//! The one response this server knows how to send

use bytes::Bytes;
use http_body_util::Full;

/// Body bytes of every response
pub const HELLO_BODY: &[u8] = b"Hello World\n";

/// Build the constant `200 OK` plaintext response.
///
/// Sent for every request regardless of method, path, or body content.
pub fn hello() -> hyper::Response<Full<Bytes>> {
    hyper::Response::builder()
        .status(200)
        .header(http::header::CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from_static(HELLO_BODY)))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_response() {
        let res = hello();

        assert_eq!(res.status(), 200);
        assert_eq!(
            res.headers().get(http::header::CONTENT_TYPE).unwrap(),
            "text/plain"
        );
    }

    #[test]
    fn test_hello_body_bytes() {
        assert_eq!(HELLO_BODY, b"Hello World\n");
    }
}
