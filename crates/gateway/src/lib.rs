#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod http;
pub mod memory;
pub mod session;

pub use api::{
    AttemptReceipt, AuthGateway, CourseGateway, Gateway, GatewayError, LessonGateway,
    NewAccount, ProgressGateway, QuizGateway,
};
pub use config::{ConfigError, GatewayConfig};
pub use http::HttpGateway;
pub use memory::{InMemoryGateway, RecordedAttempt, SeedError};
pub use session::AuthSession;
