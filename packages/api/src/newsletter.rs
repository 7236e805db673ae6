//! # Newsletter flows
//!
//! Subscribing has a fallback: an address that unsubscribed earlier is
//! rejected by the subscribe endpoint with an "Email already subscribed"
//! detail, and the client then reactivates it through the resubscribe
//! endpoint instead of surfacing an error. Unsubscribing treats a 404 as the
//! informational "was not subscribed" outcome, not a failure.

use std::future::Future;

use crate::error::ApiError;
use crate::models::Subscriber;

/// Subscriber endpoints as the flows need them.
pub trait NewsletterGateway {
    fn subscribe(&self, email: &str) -> impl Future<Output = Result<Subscriber, ApiError>>;
    fn resubscribe(&self, email: &str) -> impl Future<Output = Result<Subscriber, ApiError>>;
    fn unsubscribe(&self, email: &str) -> impl Future<Output = Result<(), ApiError>>;
}

/// How a subscribe attempt landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// A fresh subscription was created.
    Subscribed,
    /// The address had unsubscribed before and was reactivated.
    Reactivated,
}

/// How an unsubscribe attempt landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsubscribeOutcome {
    Unsubscribed,
    /// The address was not subscribed in the first place; a soft success.
    NotSubscribed,
}

/// Subscribe, falling back to the resubscribe endpoint when the address is
/// already known. The fallback is the one built-in retry in the client.
pub async fn subscribe_with_fallback<G: NewsletterGateway>(
    gateway: &G,
    email: &str,
) -> Result<SubscribeOutcome, ApiError> {
    match gateway.subscribe(email).await {
        Ok(_) => Ok(SubscribeOutcome::Subscribed),
        Err(ApiError::AlreadySubscribed) => {
            gateway.resubscribe(email).await?;
            Ok(SubscribeOutcome::Reactivated)
        }
        Err(err) => Err(err),
    }
}

/// Unsubscribe by address, mapping the backend's 404 to the informational
/// outcome.
pub async fn unsubscribe<G: NewsletterGateway>(
    gateway: &G,
    email: &str,
) -> Result<UnsubscribeOutcome, ApiError> {
    match gateway.unsubscribe(email).await {
        Ok(()) => Ok(UnsubscribeOutcome::Unsubscribed),
        Err(ApiError::NotSubscribed) => Ok(UnsubscribeOutcome::NotSubscribed),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct StubNewsletter {
        subscribe: Result<(), ApiError>,
        unsubscribe: Result<(), ApiError>,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Default for StubNewsletter {
        fn default() -> Self {
            Self {
                subscribe: Ok(()),
                unsubscribe: Ok(()),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl StubNewsletter {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn subscriber(email: &str) -> Subscriber {
        Subscriber {
            id: 1,
            email: email.to_string(),
            subscribed_at: "2024-05-01T09:00:00Z".to_string(),
            is_active: true,
        }
    }

    impl NewsletterGateway for StubNewsletter {
        async fn subscribe(&self, email: &str) -> Result<Subscriber, ApiError> {
            self.calls.lock().unwrap().push("subscribe");
            self.subscribe.clone().map(|_| subscriber(email))
        }

        async fn resubscribe(&self, email: &str) -> Result<Subscriber, ApiError> {
            self.calls.lock().unwrap().push("resubscribe");
            Ok(subscriber(email))
        }

        async fn unsubscribe(&self, _email: &str) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push("unsubscribe");
            self.unsubscribe.clone()
        }
    }

    #[tokio::test]
    async fn test_fresh_subscription() {
        let stub = StubNewsletter::default();

        let outcome = subscribe_with_fallback(&stub, "a@b.com").await.unwrap();
        assert_eq!(outcome, SubscribeOutcome::Subscribed);
        assert_eq!(stub.calls(), vec!["subscribe"]);
    }

    #[tokio::test]
    async fn test_already_subscribed_falls_back_to_resubscribe() {
        let stub = StubNewsletter {
            subscribe: Err(ApiError::AlreadySubscribed),
            ..StubNewsletter::default()
        };

        let outcome = subscribe_with_fallback(&stub, "a@b.com").await.unwrap();
        assert_eq!(outcome, SubscribeOutcome::Reactivated);
        // One subscribe attempt, then straight to resubscribe.
        assert_eq!(stub.calls(), vec!["subscribe", "resubscribe"]);
    }

    #[tokio::test]
    async fn test_other_subscribe_errors_propagate() {
        let stub = StubNewsletter {
            subscribe: Err(ApiError::Network("connection refused".to_string())),
            ..StubNewsletter::default()
        };

        let err = subscribe_with_fallback(&stub, "a@b.com").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(stub.calls(), vec!["subscribe"]);
    }

    #[tokio::test]
    async fn test_unsubscribe_success() {
        let stub = StubNewsletter::default();

        let outcome = unsubscribe(&stub, "a@b.com").await.unwrap();
        assert_eq!(outcome, UnsubscribeOutcome::Unsubscribed);
    }

    #[tokio::test]
    async fn test_unsubscribe_of_unknown_address_is_informational() {
        let stub = StubNewsletter {
            unsubscribe: Err(ApiError::NotSubscribed),
            ..StubNewsletter::default()
        };

        let outcome = unsubscribe(&stub, "never@b.com").await.unwrap();
        assert_eq!(outcome, UnsubscribeOutcome::NotSubscribed);
    }

    #[tokio::test]
    async fn test_unsubscribe_hard_failures_propagate() {
        let stub = StubNewsletter {
            unsubscribe: Err(ApiError::Status {
                status: 500,
                detail: None,
            }),
            ..StubNewsletter::default()
        };

        let err = unsubscribe(&stub, "a@b.com").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }
}
