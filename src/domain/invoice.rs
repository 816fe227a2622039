//! Invoice identity and its view over an income record.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::record::IncomeRecord;

pub const INVOICE_ID_PREFIX: &str = "INV-";
const INVOICE_ID_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// A document-level view manufactured at generation time. It is never stored
/// on its own; only the underlying income record is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: String,
    pub date: NaiveDate,
    pub client_name: String,
    pub service: String,
    pub amount: f64,
    #[serde(default)]
    pub notes: String,
}

impl Invoice {
    /// Derives the invoice identity from the generation timestamp. Second
    /// resolution: two invoices generated within the same second share an id.
    pub fn id_for(now: NaiveDateTime) -> String {
        format!(
            "{}{}",
            INVOICE_ID_PREFIX,
            now.format(INVOICE_ID_TIMESTAMP_FORMAT)
        )
    }

    /// The income record this invoice persists as.
    pub fn income_record(&self) -> IncomeRecord {
        IncomeRecord::new(
            self.date,
            self.client_name.clone(),
            self.service.clone(),
            self.amount,
        )
        .with_notes(self.notes.clone())
    }

    /// Notes for document display; empty notes render as "N/A".
    pub fn display_notes(&self) -> &str {
        if self.notes.trim().is_empty() {
            "N/A"
        } else {
            &self.notes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn id_has_second_resolution() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 9)
            .unwrap();
        assert_eq!(Invoice::id_for(now), "INV-20240305143009");
    }

    #[test]
    fn empty_notes_display_as_na() {
        let invoice = Invoice {
            invoice_id: "INV-20240305143009".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            client_name: "Riya".into(),
            service: "Manicure".into(),
            amount: 450.0,
            notes: "  ".into(),
        };
        assert_eq!(invoice.display_notes(), "N/A");
    }
}
