pub mod auth_service;
pub mod authenticated_user;
pub mod error;
pub mod mock_token_issuer;
pub mod token_issuer;

pub use auth_service::AuthService;
pub use authenticated_user::AuthenticatedUser;
pub use error::{AuthError, Result};
pub use mock_token_issuer::MockTokenIssuer;
pub use token_issuer::TokenIssuer;
