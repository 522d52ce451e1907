use std::sync::Arc;

use derive_new::new;

use crate::{
    clock::DynClock,
    config::{SessionConfiguration, UnorderedMap},
    data::users::{DynUserRepository, User, UserId},
    security::{SessionService, SessionServiceError},
};

#[derive(new)]
pub struct InMemorySessionService {
    sessions: Arc<UnorderedMap<String, SessionConfiguration>>,
    user_repository: DynUserRepository,
    clock: DynClock,
}

#[async_trait::async_trait]
impl SessionService for InMemorySessionService {
    async fn authenticate(
        &self,
        token: &str,
    ) -> Result<Option<User>, SessionServiceError> {
        let Some(session) = self.sessions.get(token) else {
            return Ok(None);
        };

        if !session.enabled {
            tracing::debug!(user_id = %session.user_id, "session is disabled");
            return Ok(None);
        }

        if let Some(expires_at) = session.expires_at
            && expires_at <= self.clock.now()
        {
            tracing::debug!(user_id = %session.user_id, "session has expired");
            return Ok(None);
        }

        Ok(self
            .user_repository
            .get(&UserId::new(session.user_id.clone()))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use time::{Duration, macros::datetime};

    use super::*;
    use crate::{
        clock::ManualClock,
        data_impl::in_memory::{
            InMemoryDatabase, InMemoryUserRepository, Tables,
        },
    };

    fn service(clock: Arc<ManualClock>) -> InMemorySessionService {
        let db = Arc::new(InMemoryDatabase::new(Tables {
            users: vec![User::new("u1".into(), "Ada", "ada@example.com")],
            ..Default::default()
        }));

        let mut sessions = UnorderedMap::default();
        sessions.insert("active".to_string(), SessionConfiguration::new("u1"));
        sessions.insert(
            "disabled".to_string(),
            SessionConfiguration {
                enabled: false,
                ..SessionConfiguration::new("u1")
            },
        );
        sessions.insert(
            "expiring".to_string(),
            SessionConfiguration {
                expires_at: Some(datetime!(2024-03-16 00:00 UTC)),
                ..SessionConfiguration::new("u1")
            },
        );

        InMemorySessionService::new(
            Arc::new(sessions),
            Box::new(InMemoryUserRepository::new(db)),
            clock,
        )
    }

    #[tokio::test]
    async fn test_active_session_resolves_user() {
        let clock = Arc::new(ManualClock::new(datetime!(2024-03-15 00:00 UTC)));
        let service = service(clock);

        let user = service
            .authenticate("active")
            .await
            .expect("should authenticate")
            .expect("should resolve user");

        assert_eq!(user.name, "Ada");
    }

    #[tokio::test]
    async fn test_unknown_and_disabled_sessions_are_rejected() {
        let clock = Arc::new(ManualClock::new(datetime!(2024-03-15 00:00 UTC)));
        let service = service(clock);

        for token in ["missing", "disabled", ""] {
            assert!(
                service
                    .authenticate(token)
                    .await
                    .expect("should not fail")
                    .is_none(),
                "'{token}' should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_session_expires() {
        let clock = Arc::new(ManualClock::new(datetime!(2024-03-15 00:00 UTC)));
        let service = service(clock.clone());

        assert!(
            service
                .authenticate("expiring")
                .await
                .expect("should not fail")
                .is_some()
        );

        clock.advance(Duration::days(1));

        assert!(
            service
                .authenticate("expiring")
                .await
                .expect("should not fail")
                .is_none()
        );
    }
}
