//! Ledger transactions and the payload used to create them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Calendar date format accepted for `date` (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub date: String,
    pub amount: f64,
    pub description: String,
}

/// Body of `POST /transactions`. Every field is optional at the wire level so
/// missing fields surface as validation errors instead of parse failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A validated transaction that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: String,
    pub amount: f64,
    pub description: String,
}

impl NewTransaction {
    pub fn into_transaction(self, id: u64) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            description: self.description,
        }
    }
}

impl TryFrom<CreateTransactionRequest> for NewTransaction {
    type Error = AppError;

    fn try_from(req: CreateTransactionRequest) -> AppResult<Self> {
        let date = parse_date(&required_text(req.date, "date")?)?;

        let amount = req
            .amount
            .ok_or_else(|| AppError::Validation("amount is required".to_string()))?;
        if !amount.is_finite() || amount == 0.0 {
            return Err(AppError::Validation(
                "amount must be a non-zero number".to_string(),
            ));
        }

        let description = required_text(req.description, "description")?;

        Ok(Self {
            date,
            amount,
            description,
        })
    }
}

/// Zero-padded `YYYY-MM-DD` naming a real calendar day. chrono's parser
/// also takes `2025-1-1` and short years, hence the shape check.
fn parse_date(raw: &str) -> AppResult<String> {
    let invalid = || AppError::Validation("date must be a valid YYYY-MM-DD date".to_string());
    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }
    let parsed = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())?;
    Ok(parsed.format(DATE_FORMAT).to_string())
}

fn required_text(value: Option<String>, field: &str) -> AppResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(date: Option<&str>, amount: Option<f64>, description: Option<&str>) -> CreateTransactionRequest {
        CreateTransactionRequest {
            date: date.map(str::to_string),
            amount,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn valid_request_converts() {
        let tx = NewTransaction::try_from(request(Some("2025-01-01"), Some(50.0), Some(" Groceries ")))
            .unwrap();
        assert_eq!(tx.date, "2025-01-01");
        assert_eq!(tx.amount, 50.0);
        assert_eq!(tx.description, "Groceries");
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        let cases = [
            request(None, Some(1.0), Some("x")),
            request(Some(""), Some(1.0), Some("x")),
            request(Some("2025-01-01"), None, Some("x")),
            request(Some("2025-01-01"), Some(1.0), None),
            request(Some("2025-01-01"), Some(1.0), Some("   ")),
        ];
        for case in cases {
            let err = NewTransaction::try_from(case).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
        }
    }

    #[test]
    fn zero_and_non_finite_amounts_are_rejected() {
        for amount in [0.0, f64::NAN, f64::INFINITY] {
            let err = NewTransaction::try_from(request(Some("2025-01-01"), Some(amount), Some("x")))
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn negative_amounts_are_allowed() {
        let tx = NewTransaction::try_from(request(Some("2025-03-10"), Some(-12.5), Some("Refund")))
            .unwrap();
        assert_eq!(tx.amount, -12.5);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for date in [
            "2025-13-01",
            "2025-02-30",
            "01/01/2025",
            "yesterday",
            "2025-1-1",
            "25-01-01",
            "2025-01-1",
            "+2025-01-01",
            "2025-01-01T00:00",
        ] {
            let err = NewTransaction::try_from(request(Some(date), Some(5.0), Some("x"))).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{} accepted", date);
        }
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let req: CreateTransactionRequest = serde_json::from_str(r#"{"amount": 3}"#).unwrap();
        assert!(req.date.is_none());
        assert_eq!(req.amount, Some(3.0));
        assert!(req.description.is_none());
    }
}
