pub mod auth_dto;
pub mod machine_dto;
pub mod response;
pub mod studio_dto;
pub mod training_dto;
pub mod user_dto;
