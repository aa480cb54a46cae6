//! Tests for the transport-level types.

use super::{Response, TransportError};

mod response {
    use super::*;

    #[test]
    fn is_success_for_2xx_only() {
        let ok = Response::new(http::StatusCode::OK, http::HeaderMap::new(), vec![]);
        let created = Response::new(http::StatusCode::CREATED, http::HeaderMap::new(), vec![]);
        let not_found = Response::new(http::StatusCode::NOT_FOUND, http::HeaderMap::new(), vec![]);

        assert!(ok.is_success());
        assert!(created.is_success());
        assert!(!not_found.is_success());
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let response = Response::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"hello".to_vec(),
        );

        assert_eq!(response.body_text(), Some("hello"));
    }

    #[test]
    fn body_text_rejects_invalid_utf8() {
        let response = Response::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xFF, 0xFE],
        );

        assert_eq!(response.body_text(), None);
    }
}

mod errors {
    use super::*;
    use std::error::Error;

    #[test]
    fn timeout_display_mentions_timing_out() {
        assert!(TransportError::Timeout.to_string().contains("timed out"));
    }

    #[test]
    fn connect_error_preserves_the_source() {
        let error = TransportError::Connect(Box::new(std::io::Error::other("refused")));

        assert!(error.source().is_some());
        assert!(error.to_string().contains("Connection error"));
    }

    #[test]
    fn other_carries_the_message() {
        let error = TransportError::Other("bad request line".to_string());
        assert!(error.to_string().contains("bad request line"));
    }
}
