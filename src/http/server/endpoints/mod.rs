pub mod consent;
pub mod health;
pub mod oauth;
