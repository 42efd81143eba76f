pub mod add_transaction;
pub mod edit_transaction;
pub mod logout;

pub use add_transaction::AddTransactionModal;
pub use edit_transaction::EditTransactionModal;
pub use logout::LogoutModal;
