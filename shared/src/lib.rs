use serde::{Deserialize, Serialize};
use std::fmt;

/// A single income or expense record as issued by the backend.
///
/// `date` is the transaction's effective calendar date in `dd.mm.yyyy`
/// layout (day and month zero-padded), not the creation timestamp.
/// `amount` is always non-negative; the sign shown to the user is implied
/// by `transaction_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque identifier assigned by the backend.
    #[serde(rename = "_id")]
    pub id: String,
    /// Effective date, `dd.mm.yyyy`.
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// One of the ten fixed expense categories; income records may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-form note, optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Non-negative amount, two-decimal display precision.
    pub amount: f64,
}

/// Direction of a transaction for totals and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Sign prefix shown next to the amount.
    pub fn sign(&self) -> &'static str {
        match self {
            TransactionType::Income => "+",
            TransactionType::Expense => "-",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

/// Body for `POST /transaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransactionRequest {
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub amount: f64,
}

/// Body for `PATCH /transaction/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub amount: f64,
}

/// Body for `POST /user/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /user/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `data` payload returned by register/login/refresh.
///
/// The backend is inconsistent about the id field name: register and
/// refresh answer `_id`, login answers `ID`. The alias absorbs both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(rename = "_id", alias = "ID")]
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub balance: f64,
}

/// Envelope for the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub data: UserPayload,
}

/// Envelope for `GET /user/{id}/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub data: Vec<Transaction>,
}

/// Envelope for the mutating transaction endpoints. `userBalance` is the
/// authoritative post-mutation balance; the client never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub data: Transaction,
    #[serde(rename = "userBalance")]
    pub user_balance: f64,
}

/// Error body the backend attaches to validation failures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// One entry of the NBP exchange-rate response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NbpRate {
    pub ask: f64,
    pub bid: f64,
}

/// `GET https://api.nbp.pl/api/exchangerates/rates/c/{code}/last/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NbpResponse {
    pub rates: Vec<NbpRate>,
}

/// Buy/sale pair shown in the currency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub buy: f64,
    pub sale: f64,
}

impl From<NbpRate> for CurrencyRate {
    fn from(rate: NbpRate) -> Self {
        CurrencyRate {
            buy: rate.ask,
            sale: rate.bid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_wire_format() {
        let json = r#"{
            "_id": "65a1b2c3d4",
            "date": "15.01.2024",
            "type": "expense",
            "category": "Products",
            "comment": "groceries",
            "amount": 50.0
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, "65a1b2c3d4");
        assert_eq!(tx.transaction_type, TransactionType::Expense);
        assert_eq!(tx.category.as_deref(), Some("Products"));
        assert_eq!(tx.amount, 50.0);

        // Category and comment are optional on income records.
        let income: Transaction = serde_json::from_str(
            r#"{"_id": "x", "date": "20.02.2024", "type": "income", "amount": 200.0}"#,
        )
        .unwrap();
        assert_eq!(income.category, None);
        assert_eq!(income.comment, None);
    }

    #[test]
    fn test_transaction_serializes_with_wire_names() {
        let tx = Transaction {
            id: "abc".to_string(),
            date: "01.03.2024".to_string(),
            transaction_type: TransactionType::Income,
            category: None,
            comment: None,
            amount: 12.5,
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["_id"], "abc");
        assert_eq!(value["type"], "income");
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_user_payload_id_alias() {
        // Register and refresh answer `_id`.
        let refresh: AuthResponse = serde_json::from_str(
            r#"{"data": {"_id": "u1", "email": "a@b.c", "token": "t", "balance": 10.0}}"#,
        )
        .unwrap();
        assert_eq!(refresh.data.id, "u1");

        // Login answers `ID` for the same field.
        let login: AuthResponse = serde_json::from_str(
            r#"{"data": {"ID": "u1", "email": "a@b.c", "token": "t", "balance": 10.0}}"#,
        )
        .unwrap();
        assert_eq!(login.data.id, "u1");
        assert_eq!(login.data.token.as_deref(), Some("t"));
    }

    #[test]
    fn test_transaction_response_balance() {
        let response: TransactionResponse = serde_json::from_str(
            r#"{
                "data": {"_id": "t1", "date": "02.02.2024", "type": "expense",
                         "category": "Car", "amount": 30.0},
                "userBalance": 170.0
            }"#,
        )
        .unwrap();
        assert_eq!(response.user_balance, 170.0);
        assert_eq!(response.data.id, "t1");
    }

    #[test]
    fn test_nbp_rate_maps_to_buy_sale() {
        let body: NbpResponse = serde_json::from_str(
            r#"{"rates": [{"ask": 4.12, "bid": 4.02}, {"ask": 4.15, "bid": 4.05}]}"#,
        )
        .unwrap();
        let rates: Vec<CurrencyRate> = body.rates.into_iter().map(CurrencyRate::from).collect();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].buy, 4.12);
        assert_eq!(rates[0].sale, 4.02);
    }

    #[test]
    fn test_transaction_type_display_and_sign() {
        assert_eq!(TransactionType::Income.to_string(), "income");
        assert_eq!(TransactionType::Expense.to_string(), "expense");
        assert_eq!(TransactionType::Income.sign(), "+");
        assert_eq!(TransactionType::Expense.sign(), "-");
    }
}
