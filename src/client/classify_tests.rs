//! Tests for failure classification.

use super::{AttemptFailure, IsRetryable, TransportError};

fn status_failure(status: u16) -> AttemptFailure {
    AttemptFailure::Status {
        status: http::StatusCode::from_u16(status).unwrap(),
        body: Vec::new(),
    }
}

mod transport_errors {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        assert!(TransportError::Timeout.is_retryable());
    }

    #[test]
    fn connect_failure_is_retryable() {
        let error = TransportError::Connect(Box::new(std::io::Error::other("refused")));
        assert!(error.is_retryable());
    }

    #[test]
    fn other_is_not_retryable() {
        let error = TransportError::Other("malformed request".to_string());
        assert!(!error.is_retryable());
    }

    #[test]
    fn kind_labels_are_stable() {
        assert_eq!(TransportError::Timeout.kind(), "timeout");
        assert_eq!(
            TransportError::Connect(Box::new(std::io::Error::other("x"))).kind(),
            "connect"
        );
        assert_eq!(TransportError::Other(String::new()).kind(), "other");
    }
}

mod status_codes {
    use super::*;

    #[test]
    fn status_500_is_retryable() {
        assert!(status_failure(500).is_retryable());
    }

    #[test]
    fn status_502_is_retryable() {
        assert!(status_failure(502).is_retryable());
    }

    #[test]
    fn status_503_is_retryable() {
        assert!(status_failure(503).is_retryable());
    }

    #[test]
    fn status_599_is_retryable() {
        assert!(status_failure(599).is_retryable());
    }

    #[test]
    fn status_400_is_not_retryable() {
        assert!(!status_failure(400).is_retryable());
    }

    #[test]
    fn status_404_is_not_retryable() {
        assert!(!status_failure(404).is_retryable());
    }

    #[test]
    fn status_408_is_not_retryable_under_baseline_policy() {
        assert!(!status_failure(408).is_retryable());
    }

    #[test]
    fn status_429_is_not_retryable_under_baseline_policy() {
        assert!(!status_failure(429).is_retryable());
    }

    #[test]
    fn status_499_is_not_retryable() {
        assert!(!status_failure(499).is_retryable());
    }
}

mod delegation {
    use super::*;

    #[test]
    fn transport_failure_delegates_to_the_error() {
        assert!(AttemptFailure::Transport(TransportError::Timeout).is_retryable());
        assert!(
            !AttemptFailure::Transport(TransportError::Other("x".to_string())).is_retryable()
        );
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..3 {
            assert!(status_failure(500).is_retryable());
            assert!(!status_failure(404).is_retryable());
        }
    }
}

mod summaries {
    use super::*;

    #[test]
    fn transport_summary_is_the_kind_label() {
        let failure = AttemptFailure::Transport(TransportError::Timeout);
        assert_eq!(failure.summary(), "timeout");
    }

    #[test]
    fn status_summary_contains_the_code() {
        assert!(status_failure(503).summary().contains("503"));
    }
}
