//! Auth Client
//!
//! Register and log in through the API, saving the returned token.

use std::sync::Arc;

use crate::api::ForumApi;
use crate::error::ClientResult;
use crate::model::Credentials;
use crate::session::Session;

pub struct AuthClient<A: ForumApi> {
    api: Arc<A>,
    session: Arc<Session>,
}

impl<A: ForumApi> AuthClient<A> {
    pub fn new(api: Arc<A>, session: Arc<Session>) -> Self {
        Self { api, session }
    }

    pub async fn register(&self, credentials: &Credentials) -> ClientResult<()> {
        let token = self.api.register(credentials).await?;
        self.session.save_token(token);
        tracing::debug!(username = %credentials.username, "Registered");
        Ok(())
    }

    pub async fn log_in(&self, credentials: &Credentials) -> ClientResult<()> {
        let token = self.api.login(credentials).await?;
        self.session.save_token(token);
        tracing::debug!(username = %credentials.username, "Logged in");
        Ok(())
    }

    pub fn log_out(&self) {
        self.session.log_out();
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn current_user(&self) -> Option<String> {
        self.session.current_user()
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }
}
