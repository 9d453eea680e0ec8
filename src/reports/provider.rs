//! Per-provider spending breakdown
//!
//! Groups services by provider name and normalizes every record to a
//! monthly-equivalent cost so that different billing cycles are comparable:
//! monthly amounts count as-is, yearly and one-time amounts are amortized
//! over twelve months.

use crate::models::{AiService, BillingCycle};

/// One provider's share of monthly-equivalent spending
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderShare {
    /// Provider name, exactly as stored on the records
    pub provider: String,
    /// Normalized monthly cost in fractional dollars
    pub monthly_equivalent: f64,
    /// Percentage of the visualized total (0.0 when the total is zero)
    pub percentage: f64,
}

/// Provider breakdown for the share chart and the `stats` command
#[derive(Debug, Clone, Default)]
pub struct ProviderBreakdown {
    /// One entry per distinct provider, in first-seen order
    pub entries: Vec<ProviderShare>,
    /// Sum of all monthly equivalents
    pub total: f64,
}

impl ProviderBreakdown {
    /// Compute the breakdown from a service list snapshot
    pub fn compute(services: &[AiService]) -> Self {
        let mut entries: Vec<ProviderShare> = Vec::new();

        for service in services {
            let monthly = match service.billing_cycle {
                BillingCycle::Monthly => service.amount.to_dollars_f64(),
                // Amortize over a year for comparability
                BillingCycle::Yearly | BillingCycle::OneTime => {
                    service.amount.to_dollars_f64() / 12.0
                }
            };

            if let Some(entry) = entries.iter_mut().find(|e| e.provider == service.provider) {
                entry.monthly_equivalent += monthly;
            } else {
                entries.push(ProviderShare {
                    provider: service.provider.clone(),
                    monthly_equivalent: monthly,
                    percentage: 0.0,
                });
            }
        }

        let total: f64 = entries.iter().map(|e| e.monthly_equivalent).sum();

        for entry in &mut entries {
            entry.percentage = if total == 0.0 {
                0.0
            } else {
                entry.monthly_equivalent / total * 100.0
            };
        }

        Self { entries, total }
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.entries.is_empty() {
            return "No services tracked.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Monthly-Equivalent Spending by Provider\n");
        output.push_str(&"-".repeat(48));
        output.push('\n');

        for entry in &self.entries {
            output.push_str(&format!(
                "{:<20} {}{:>10.2} {:>7.1}%\n",
                entry.provider, currency_symbol, entry.monthly_equivalent, entry.percentage
            ));
        }

        output
    }
}
