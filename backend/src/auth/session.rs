//! Operator session lifecycle.
//!
//! A `Session` is an explicit state machine with three states: it starts
//! anonymous, moves to authenticating while credentials are being checked,
//! and becomes authenticated only when a user record is attached. The
//! `SessionManager` keeps the authenticated sessions keyed by token and
//! re-admits holders of valid tokens after a process restart without
//! re-validating credentials.

use crate::auth::models::UserInfo;
use crate::utils::jwt::Claims;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Per-operator session. The user record is present iff the state is
/// `Authenticated`; every transition maintains that invariant.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    user: Option<UserInfo>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: SessionState::Anonymous,
            user: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// Credentials were submitted; the outcome is not known yet.
    pub fn begin_authentication(&mut self) {
        self.state = SessionState::Authenticating;
        self.user = None;
    }

    /// Credentials checked out; attach the user and mark authenticated.
    pub fn complete_authentication(&mut self, user: UserInfo) {
        self.state = SessionState::Authenticated;
        self.user = Some(user);
    }

    /// Credentials were rejected; fall back to anonymous.
    pub fn fail_authentication(&mut self) {
        self.state = SessionState::Anonymous;
        self.user = None;
    }

    /// Logout. Idempotent: clearing an anonymous session is a no-op.
    pub fn clear(&mut self) {
        self.state = SessionState::Anonymous;
        self.user = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

/// Token-keyed registry of authenticated sessions.
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionManager {
    pub fn new() -> Self {
        SessionManager {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a session that already completed authentication.
    pub async fn insert(&self, token: String, session: Session) {
        debug_assert!(session.is_authenticated());
        self.sessions.write().await.insert(token, session);
    }

    /// Drops the session for a token. Always succeeds; calling it for an
    /// unknown or already-removed token is a no-op.
    pub async fn logout(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    pub async fn is_authenticated(&self, token: &str) -> bool {
        self.sessions
            .read()
            .await
            .get(token)
            .map(Session::is_authenticated)
            .unwrap_or(false)
    }

    pub async fn user_for(&self, token: &str) -> Option<UserInfo> {
        self.sessions
            .read()
            .await
            .get(token)
            .and_then(|s| s.user().cloned())
    }

    /// Re-admits the holder of a valid token whose in-memory session is
    /// gone, e.g. after a restart. The token itself is trusted; credentials
    /// are not re-validated.
    pub async fn resume(&self, token: &str, claims: &Claims) -> UserInfo {
        let mut sessions = self.sessions.write().await;
        if let Some(user) = sessions.get(token).and_then(|s| s.user().cloned()) {
            return user;
        }

        let user = UserInfo {
            id: claims.sub.clone(),
            name: claims.name.clone(),
            email: claims.email.clone(),
        };
        let mut session = Session::new();
        session.complete_authentication(user.clone());
        sessions.insert(token.to_string(), session);
        user
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        SessionManager::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::utils::jwt::JwtUtils;

    fn maria() -> UserInfo {
        UserInfo {
            id: "2".into(),
            name: "Maria Santos".into(),
            email: "maria.santos@email.com".into(),
        }
    }

    #[test]
    fn user_is_present_iff_authenticated() {
        let mut session = Session::new();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(session.user().is_none());

        session.begin_authentication();
        assert_eq!(session.state(), SessionState::Authenticating);
        assert!(session.user().is_none());

        session.complete_authentication(maria());
        assert!(session.is_authenticated());
        assert!(session.user().is_some());

        session.clear();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(session.user().is_none());
    }

    #[test]
    fn failed_authentication_returns_to_anonymous() {
        let mut session = Session::new();
        session.begin_authentication();
        session.fail_authentication();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let manager = SessionManager::new();
        let mut session = Session::new();
        session.begin_authentication();
        session.complete_authentication(maria());
        manager.insert("tok".into(), session).await;
        assert!(manager.is_authenticated("tok").await);

        manager.logout("tok").await;
        assert!(!manager.is_authenticated("tok").await);

        // Second logout for the same token must not error or change state.
        manager.logout("tok").await;
        assert!(!manager.is_authenticated("tok").await);
    }

    #[tokio::test]
    async fn resume_trusts_a_valid_token_after_restart() {
        let jwt = JwtUtils::new(&Config::for_tests());
        let token = jwt
            .generate_token("2".into(), "Maria Santos".into(), "maria.santos@email.com".into())
            .unwrap();
        let claims = jwt.validate_token(&token).unwrap();

        // Fresh manager simulates a restarted process with no sessions.
        let manager = SessionManager::new();
        let user = manager.resume(&token, &claims).await;
        assert_eq!(user, maria());
        assert!(manager.is_authenticated(&token).await);
    }
}
