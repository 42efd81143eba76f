pub mod use_finance;
pub mod use_modal;
pub mod use_notifications;
pub mod use_session;
