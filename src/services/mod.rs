pub mod auth_service;
pub mod machine_service;
pub mod mail_service;
pub mod nfc_tag_service;
pub mod session_service;
pub mod studio_service;
pub mod training_service;
pub mod unit_service;
pub mod user_service;
