pub mod auth;
pub mod chat;
pub mod errors;
pub mod profile;
pub mod review;
pub mod timestamp;

pub use auth::{LoginRequest, SignupRequest, SignupResponse, TokenClaims, TokenResponse};
pub use chat::{ChatCreated, ChatSummary, MessageSender, SendMessageRequest, StoredMessage};
pub use errors::ErrorResponse;
pub use profile::{BankProfileData, InstitutionProfileResponse};
pub use review::{Review, Sentiment, StarEntry, VoteEntry};
pub use timestamp::Timestamp;
