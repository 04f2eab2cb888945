use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use tokio::time::Instant;
use uuid::Uuid;

/// Constant-time PIN comparison.
pub fn pin_matches(expected: &str, provided: &str) -> bool {
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

/// Opaque bearer tokens issued after a successful PIN login.
///
/// Each token is valid for `ttl` from issue. Expired tokens are rejected
/// immediately and removed by [`TokenStore::sweep`].
#[derive(Clone)]
pub struct TokenStore {
    ttl: Duration,
    tokens: Arc<Mutex<HashMap<Uuid, Instant>>>,
}

impl TokenStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            tokens: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn issue(&self) -> Uuid {
        let token = Uuid::new_v4();
        self.tokens.lock().await.insert(token, Instant::now() + self.ttl);
        token
    }

    pub async fn is_valid(&self, token: &str) -> bool {
        let Ok(token) = token.parse::<Uuid>() else {
            return false;
        };
        self.tokens
            .lock()
            .await
            .get(&token)
            .is_some_and(|expires| Instant::now() < *expires)
    }

    /// Drop expired tokens. Returns how many were removed.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut tokens = self.tokens.lock().await;
        let before = tokens.len();
        tokens.retain(|_, expires| now < *expires);
        before - tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_comparison() {
        assert!(pin_matches("4821", "4821"));
        assert!(!pin_matches("4821", "4820"));
        assert!(!pin_matches("4821", "48210"));
        assert!(!pin_matches("4821", ""));
    }

    #[tokio::test]
    async fn issued_tokens_validate() {
        let store = TokenStore::new(Duration::from_secs(60));
        let token = store.issue().await;
        assert!(store.is_valid(&token.to_string()).await);
        assert!(!store.is_valid(&Uuid::new_v4().to_string()).await);
        assert!(!store.is_valid("not-a-token").await);
    }

    #[tokio::test(start_paused = true)]
    async fn tokens_expire_and_are_swept() {
        let store = TokenStore::new(Duration::from_secs(60));
        let old = store.issue().await;
        tokio::time::advance(Duration::from_secs(45)).await;
        let fresh = store.issue().await;
        tokio::time::advance(Duration::from_secs(30)).await;

        assert!(!store.is_valid(&old.to_string()).await);
        assert!(store.is_valid(&fresh.to_string()).await);
        assert_eq!(store.sweep().await, 1);
        assert_eq!(store.sweep().await, 0);
    }
}
