pub mod consent_page;
pub mod encoding;
pub mod response;
pub mod server;
