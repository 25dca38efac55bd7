//! Common Test Utilities
//!
//! In-memory repositories, fixtures and the test application.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use fake::faker::name::en::Name;
use fake::Fake;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::postgres::PgPoolOptions;

use chat_sidebar::config::{
    CorsSettings, DatabaseSettings, JwtSettings, NavigationSettings, ServerSettings, Settings,
    TelemetrySettings,
};
use chat_sidebar::domain::{
    Channel, ChannelType, Member, MemberRole, MemberWithProfile, Profile, ProfileRepository,
    Server, ServerAggregate, ServerRepository,
};
use chat_sidebar::presentation::middleware::Claims;
use chat_sidebar::shared::error::AppError;
use chat_sidebar::startup::{build_router, AppState};

pub const JWT_SECRET: &str = "integration-test-secret-at-least-32-chars";
pub const SIGN_IN_PATH: &str = "/sign-in";
pub const HOME_PATH: &str = "/";

/// Profiles keyed by identity provider subject.
#[derive(Default)]
pub struct InMemoryProfiles {
    by_user_id: HashMap<String, Profile>,
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        Ok(self.by_user_id.get(user_id).cloned())
    }
}

/// Server aggregates keyed by server id, ordered like the database would.
#[derive(Default)]
pub struct InMemoryServers {
    by_id: HashMap<String, ServerAggregate>,
}

#[async_trait]
impl ServerRepository for InMemoryServers {
    async fn find_with_channels_and_members(
        &self,
        id: &str,
    ) -> Result<Option<ServerAggregate>, AppError> {
        Ok(self.by_id.get(id).cloned().map(|mut aggregate| {
            aggregate.channels.sort_by_key(|c| c.created_at);
            aggregate.members.sort_by_key(|m| m.member.role);
            aggregate
        }))
    }
}

/// Builder for the data a test runs against.
#[derive(Default)]
pub struct Fixture {
    profiles: InMemoryProfiles,
    servers: InMemoryServers,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile for the subject `user_<id>`.
    pub fn profile(mut self, id: &str) -> Self {
        let profile = make_profile(id);
        self.profiles
            .by_user_id
            .insert(profile.user_id.clone(), profile);
        self
    }

    pub fn server(mut self, aggregate: ServerAggregate) -> Self {
        self.servers
            .by_id
            .insert(aggregate.server.id.clone(), aggregate);
        self
    }

    pub fn into_app(self) -> TestServer {
        let db = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/chat_sidebar_test")
            .expect("lazy pool");

        let state = AppState {
            db,
            profiles: Arc::new(self.profiles),
            servers: Arc::new(self.servers),
            settings: Arc::new(test_settings()),
        };

        TestServer::new(build_router(state)).expect("test server")
    }
}

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://postgres@localhost/chat_sidebar_test".into(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 1,
            run_migrations: false,
        },
        jwt: JwtSettings {
            secret: JWT_SECRET.into(),
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        navigation: NavigationSettings {
            sign_in_path: SIGN_IN_PATH.into(),
            home_path: HOME_PATH.into(),
        },
        telemetry: TelemetrySettings { json_logs: false },
        environment: "test".into(),
    }
}

/// Bearer token for the subject `user_<profile_id>`.
pub fn token_for(profile_id: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: format!("user_{profile_id}"),
        exp: (now + Duration::minutes(15)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("token")
}

pub fn make_profile(id: &str) -> Profile {
    let now = Utc::now();
    Profile {
        id: id.to_string(),
        user_id: format!("user_{id}"),
        name: Name().fake(),
        image_url: format!("https://img.example.com/{id}.png"),
        email: format!("{id}@example.com"),
        created_at: now,
        updated_at: now,
    }
}

pub fn make_channel(server_id: &str, id: &str, name: &str, channel_type: ChannelType, minute: i64) -> Channel {
    let at = Utc::now() - Duration::hours(1) + Duration::minutes(minute);
    Channel {
        id: id.to_string(),
        name: name.to_string(),
        channel_type,
        profile_id: "owner".to_string(),
        server_id: server_id.to_string(),
        created_at: at,
        updated_at: at,
    }
}

pub fn make_member(server_id: &str, id: &str, profile_id: &str, role: MemberRole) -> MemberWithProfile {
    let now = Utc::now();
    MemberWithProfile {
        member: Member {
            id: id.to_string(),
            role,
            profile_id: profile_id.to_string(),
            server_id: server_id.to_string(),
            created_at: now,
            updated_at: now,
        },
        profile: make_profile(profile_id),
    }
}

pub fn make_server(
    id: &str,
    channels: Vec<Channel>,
    members: Vec<MemberWithProfile>,
) -> ServerAggregate {
    let now = Utc::now();
    ServerAggregate {
        server: Server {
            id: id.to_string(),
            name: format!("Server {id}"),
            image_url: format!("https://img.example.com/{id}.png"),
            invite_code: uuid::Uuid::new_v4().to_string(),
            profile_id: "A".to_string(),
            created_at: now,
            updated_at: now,
        },
        channels,
        members,
    }
}
