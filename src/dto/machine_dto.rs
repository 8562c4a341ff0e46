use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMachinePayload {
    #[validate(length(min = 1))]
    pub name: String,
    pub machine_category_id: i64,
    pub nfc_tag_id: i64,
    pub studio_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateMachinePayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub machine_category_id: Option<i64>,
    pub nfc_tag_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MachineCategoryPayload {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NfcTagPayload {
    #[validate(length(min = 1))]
    pub nfc_id: String,
}
