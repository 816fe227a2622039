//! Handlers for the four operator views.

use std::fs;

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::config::Config;
use crate::core::errors::CliError;
use crate::core::services::{DocumentOutcome, InvoiceParams};
use crate::core::BooksManager;
use crate::currency::{export_amount, format_currency_value};
use crate::domain::{ExpenseRecord, IncomeRecord};
use crate::render::DocumentRenderer;

use super::{forms, output};

pub fn dashboard(manager: &BooksManager, config: &Config) {
    let totals = manager.totals();
    output::section("Finance Summary");
    output::info(format!(
        "Total Income:   {}",
        format_currency_value(totals.total_income, &config.currency)
    ));
    output::info(format!(
        "Total Expenses: {}",
        format_currency_value(totals.total_expense, &config.currency)
    ));
    output::info(format!(
        "Net Profit:     {}",
        format_currency_value(totals.net_profit, &config.currency)
    ));
}

pub fn add_entry(manager: &mut BooksManager, theme: &ColorfulTheme) -> Result<(), CliError> {
    let kind = Select::with_theme(theme)
        .with_prompt("Entry type")
        .items(&["Income", "Expense"])
        .default(0)
        .interact()?;
    let date = forms::prompt_date(theme, "Date")?;
    if kind == 0 {
        let client = forms::prompt_text(theme, "Client name")?;
        let service = forms::prompt_text(theme, "Service")?;
        let amount = forms::prompt_amount(theme, "Amount")?;
        let notes = forms::prompt_optional(theme, "Notes (optional)")?;
        manager.add_income(IncomeRecord::new(date, client, service, amount).with_notes(notes))?;
        output::success("Income added.");
    } else {
        let category = forms::prompt_text(theme, "Expense category")?;
        let amount = forms::prompt_amount(theme, "Amount")?;
        let notes = forms::prompt_optional(theme, "Notes (optional)")?;
        manager.add_expense(ExpenseRecord::new(date, category, amount).with_notes(notes))?;
        output::success("Expense added.");
    }
    Ok(())
}

pub fn view_report(manager: &BooksManager, theme: &ColorfulTheme) -> Result<(), CliError> {
    print_report(manager);
    let export = Confirm::with_theme(theme)
        .with_prompt("Export CSV files to the current directory?")
        .default(false)
        .interact()?;
    if export {
        fs::write("income.csv", manager.income_report_csv()?)?;
        fs::write("expenses.csv", manager.expense_report_csv()?)?;
        output::success("Wrote income.csv and expenses.csv.");
    }
    Ok(())
}

pub fn print_report(manager: &BooksManager) {
    output::section("Income Entries");
    if manager.ledger().income().is_empty() {
        output::plain("(none)");
    }
    for record in manager.ledger().income() {
        output::plain(format!(
            "{}  {:<24} {:<20} {:>12}  {}",
            record.date,
            record.client_name,
            record.service,
            export_amount(record.amount),
            record.notes
        ));
    }

    output::section("Expense Entries");
    if manager.ledger().expenses().is_empty() {
        output::plain("(none)");
    }
    for record in manager.ledger().expenses() {
        output::plain(format!(
            "{}  {:<24} {:>12}  {}",
            record.date,
            record.category,
            export_amount(record.amount),
            record.notes
        ));
    }
}

pub fn generate_invoice(
    manager: &mut BooksManager,
    renderer: &dyn DocumentRenderer,
    theme: &ColorfulTheme,
) -> Result<(), CliError> {
    let date = forms::prompt_date(theme, "Invoice date")?;
    let client = forms::prompt_text(theme, "Client name")?;
    if manager.directory().find_exact(&client).is_none() {
        let matches = manager.suggestions(&client);
        if !matches.is_empty() {
            output::info("Known clients with a similar name:");
            for customer in matches.iter().take(5) {
                output::plain(format!("  {customer}"));
            }
        }
    }
    let service = forms::prompt_text(theme, "Service")?;
    let amount = forms::prompt_amount(theme, "Amount")?;
    let notes = forms::prompt_optional(theme, "Notes (optional)")?;

    let params = InvoiceParams {
        date,
        client_name: client,
        service,
        amount,
        notes,
    };
    let generated = manager.generate_invoice(renderer, params, Local::now().naive_local())?;
    match generated.document {
        DocumentOutcome::Rendered(bytes) => {
            let file_name = format!("invoice_{}.html", generated.invoice.invoice_id);
            fs::write(&file_name, bytes)?;
            output::success(format!(
                "Invoice {} for {} saved; document written to {}",
                generated.invoice.invoice_id, generated.customer, file_name
            ));
        }
        DocumentOutcome::Failed(message) => {
            output::warning(format!(
                "Invoice {} is saved in the books, but its document failed to render: {}. \
                 Regenerate the document from the saved record.",
                generated.invoice.invoice_id, message
            ));
        }
    }
    Ok(())
}
