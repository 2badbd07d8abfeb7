//! Per-request session state

/// State for a single request/response exchange.
///
/// Created when a request arrives, fed body chunks in arrival order, and
/// asked for its console log line once the body stream ends. Nothing
/// outlives the exchange.
#[derive(Debug, Clone)]
pub struct RequestSession {
    path: String,
    body: String,
}

impl RequestSession {
    /// Create a session for the given request path (query string excluded)
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: String::new(),
        }
    }

    /// Append a body chunk. Chunks are decoded as UTF-8 text (lossily, the
    /// way the original coerced buffers to strings) and concatenated in
    /// arrival order.
    pub fn push_chunk(&mut self, chunk: &[u8]) {
        self.body.push_str(&String::from_utf8_lossy(chunk));
    }

    /// Request path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Accumulated body text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The console line emitted at end-of-body.
    ///
    /// The label says "POST data" for every method, GET included. That is a
    /// quirk of the original server, reproduced here rather than fixed.
    pub fn log_line(&self) -> String {
        format!("POST data to {}: {}", self.path, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_body_log_line() {
        let mut session = RequestSession::new("/somepath");
        session.push_chunk(b"data=ASDFASF&data2=34534534");

        assert_eq!(
            session.log_line(),
            "POST data to /somepath: data=ASDFASF&data2=34534534"
        );
    }

    #[test]
    fn test_empty_body_log_line() {
        let session = RequestSession::new("/");
        assert_eq!(session.log_line(), "POST data to /: ");
    }

    #[test]
    fn test_chunks_concatenate_in_order() {
        let mut session = RequestSession::new("/upload");
        session.push_chunk(b"data=AS");
        session.push_chunk(b"DFASF");
        session.push_chunk(b"&data2=34534534");

        assert_eq!(session.body(), "data=ASDFASF&data2=34534534");
    }

    #[test]
    fn test_non_utf8_chunk_is_lossy() {
        let mut session = RequestSession::new("/");
        session.push_chunk(&[0x66, 0x6f, 0x6f, 0xff]);

        assert_eq!(session.body(), "foo\u{fffd}");
    }
}
