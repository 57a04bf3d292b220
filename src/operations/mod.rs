// Operations module - multi-step workflows built on the API client
pub mod account_info;
pub mod registration;

pub use account_info::{AccountInfoReport, ReportStage, build_account_info};
pub use registration::{RegistrationReport, register_account};
