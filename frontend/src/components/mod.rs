pub mod balance;
pub mod currency_tab;
pub mod forms;
pub mod header;
pub mod home_tab;
pub mod loader;
pub mod modals;
pub mod navigation;
pub mod notice_toast;
pub mod statistics;
pub mod transactions;

pub use balance::Balance;
pub use currency_tab::CurrencyTab;
pub use header::Header;
pub use home_tab::HomeTab;
pub use loader::Loader;
pub use navigation::{Navigation, Tab};
pub use notice_toast::NoticeToast;
pub use statistics::StatisticsTab;
