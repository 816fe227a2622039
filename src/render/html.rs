//! Standalone HTML invoice documents via an embedded template.

use once_cell::sync::Lazy;
use tera::{Context, Tera};

use crate::currency::format_currency_value;
use crate::domain::record::STORE_DATE_FORMAT;
use crate::domain::Invoice;

use super::{DocumentRenderer, Result};

const INVOICE_TEMPLATE: &str = include_str!("../../templates/invoice.html.tera");
const TEMPLATE_NAME: &str = "invoice.html";

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, INVOICE_TEMPLATE)
        .expect("embedded invoice template parses");
    tera
});

/// Default renderer producing a self-contained HTML invoice.
pub struct HtmlRenderer {
    business_name: String,
    currency: String,
}

impl HtmlRenderer {
    pub fn new(business_name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            currency: currency.into(),
        }
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn render_to_bytes(&self, invoice: &Invoice) -> Result<Vec<u8>> {
        let mut context = Context::new();
        context.insert("business_name", &self.business_name);
        context.insert("invoice_id", &invoice.invoice_id);
        context.insert("date", &invoice.date.format(STORE_DATE_FORMAT).to_string());
        context.insert("client_name", &invoice.client_name);
        context.insert("service", &invoice.service);
        context.insert(
            "amount",
            &format_currency_value(invoice.amount, &self.currency),
        );
        context.insert("notes", invoice.display_notes());
        let html = TEMPLATES.render(TEMPLATE_NAME, &context)?;
        Ok(html.into_bytes())
    }
}
