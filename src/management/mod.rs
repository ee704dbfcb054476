mod auth;
mod tracks;

pub use auth::TokenManager;
pub use tracks::TrackCacheManager;
