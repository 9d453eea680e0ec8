//! Service list display formatting
//!
//! Formats the tracked service list for plain terminal output (the `list`
//! subcommand). The TUI has its own table rendering.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::AiService;

/// One row of the `list` output
#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Next Billing")]
    next_billing: String,
}

/// Format a single service's amount with its billing suffix
pub fn format_amount(service: &AiService, currency_symbol: &str) -> String {
    let amount = service.amount.format_with_symbol(currency_symbol);
    match service.billing_cycle {
        crate::models::BillingCycle::OneTime => {
            format!("{} {}", amount, service.billing_cycle.amount_suffix())
        }
        _ => format!("{}{}", amount, service.billing_cycle.amount_suffix()),
    }
}

/// Format the service list as a table
pub fn format_service_table(services: &[AiService], settings: &Settings) -> String {
    if services.is_empty() {
        return "No services tracked.\n".to_string();
    }

    let rows: Vec<ServiceRow> = services
        .iter()
        .map(|service| ServiceRow {
            name: service.name.clone(),
            provider: service.provider.clone(),
            category: service.category.to_string(),
            amount: format_amount(service, &settings.currency_symbol),
            next_billing: service
                .next_billing
                .map(|date| date.format(&settings.date_format).to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingCycle, Money, ServiceCategory, ServiceDraft, ServiceId};

    fn service(name: &str, cycle: BillingCycle) -> AiService {
        AiService::from_draft(
            ServiceId::new(),
            ServiceDraft::new(
                name,
                "OpenAI",
                Money::from_dollars(20),
                cycle,
                ServiceCategory::Subscription,
            ),
        )
    }

    #[test]
    fn test_format_amount_suffixes() {
        assert_eq!(
            format_amount(&service("a", BillingCycle::Monthly), "$"),
            "$20.00/month"
        );
        assert_eq!(
            format_amount(&service("b", BillingCycle::Yearly), "$"),
            "$20.00/year"
        );
        assert_eq!(
            format_amount(&service("c", BillingCycle::OneTime), "$"),
            "$20.00 One-time"
        );
    }

    #[test]
    fn test_table_contains_rows() {
        let settings = Settings::default();
        let services = vec![service("ChatGPT Plus", BillingCycle::Monthly)];
        let table = format_service_table(&services, &settings);

        assert!(table.contains("ChatGPT Plus"));
        assert!(table.contains("OpenAI"));
        assert!(table.contains("$20.00/month"));
    }

    #[test]
    fn test_empty_table() {
        let settings = Settings::default();
        assert_eq!(format_service_table(&[], &settings), "No services tracked.\n");
    }
}
