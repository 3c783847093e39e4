//! Reusable UI components

pub mod auth_modal;
pub mod chat_modal;
pub mod header;
pub mod loading;
pub mod provider_card;
pub mod rating_modal;
pub mod toast;

pub use auth_modal::SignInRequiredModal;
pub use chat_modal::ChatModal;
pub use header::Header;
pub use loading::{LoadingSpinner, Skeleton};
pub use provider_card::ProviderCard;
pub use rating_modal::RatingModal;
pub use toast::ToastHost;
