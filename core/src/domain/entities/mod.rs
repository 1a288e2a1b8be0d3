//! Domain entities representing core business objects.

pub mod token;
pub mod user;

pub use token::{
    Claims, RefreshToken, TokenPair, VerificationClaims, ACCESS_TOKEN_EXPIRY_DAYS, JWT_ISSUER,
    REFRESH_TOKEN_EXPIRY_DAYS, VERIFICATION_TOKEN_EXPIRY_MINUTES,
};
pub use user::User;
