// Bearer-token authentication: Argon2 password hashes, JWT session tokens,
// and the `AuthUser` extractor that guards every protected route.

pub mod handlers;
pub mod password;
pub mod token;
