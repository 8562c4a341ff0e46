pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    auth_service::AuthService, machine_service::MachineService, mail_service::MailService,
    nfc_tag_service::NfcTagService, session_service::SessionService,
    studio_service::StudioService, training_service::TrainingService, unit_service::UnitService,
    user_service::UserService,
};
use crate::utils::token::TokenSigner;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: TokenSigner,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub studio_service: StudioService,
    pub machine_service: MachineService,
    pub nfc_tag_service: NfcTagService,
    pub unit_service: UnitService,
    pub session_service: SessionService,
    pub training_service: TrainingService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();

        let tokens = TokenSigner::from_config(config);
        let mail = MailService::from_config(config);

        let auth_service = AuthService::new(pool.clone(), tokens.clone(), mail);
        let user_service = UserService::new(pool.clone());
        let studio_service = StudioService::new(pool.clone());
        let machine_service = MachineService::new(pool.clone());
        let nfc_tag_service = NfcTagService::new(pool.clone());
        let unit_service = UnitService::new(pool.clone());
        let session_service = SessionService::new(pool.clone());
        let training_service = TrainingService::new(pool.clone());

        Self {
            pool,
            tokens,
            auth_service,
            user_service,
            studio_service,
            machine_service,
            nfc_tag_service,
            unit_service,
            session_service,
            training_service,
        }
    }
}
