pub mod error;
pub mod traits;
pub mod types;
pub mod zillow;

pub use error::ProviderError;
pub use traits::ListingProvider;
pub use zillow::ZillowClient;
