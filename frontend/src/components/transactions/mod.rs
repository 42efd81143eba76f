pub mod add_button;
pub mod pagination;
pub mod table;

pub use add_button::AddTransactionButton;
pub use pagination::Pagination;
pub use table::TransactionTable;
