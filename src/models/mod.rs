pub mod auth;
pub mod product;

pub use auth::{CheckSessionResponse, Credentials, SessionToken, SignInGrant, SignInResponse};
pub use product::{Product, ProductId, ProductsResponse};
