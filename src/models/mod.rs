pub mod auth_token;
pub mod machine;
pub mod nfc_tag;
pub mod role;
pub mod session;
pub mod studio;
pub mod training;
pub mod unit;
pub mod user;
