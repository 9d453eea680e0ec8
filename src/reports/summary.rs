//! Spending summary
//!
//! Totals by billing cycle plus the annualized projection, computed from a
//! snapshot of the service list.

use crate::models::{AiService, BillingCycle, Money};

/// Aggregate spending figures for the stat tiles and the `stats` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingSummary {
    /// Sum of monthly-cycle amounts
    pub monthly_total: Money,
    /// Sum of yearly-cycle amounts
    pub yearly_total: Money,
    /// Sum of one-time amounts
    pub one_time_total: Money,
    /// monthly x 12 + yearly + one-time; yearly and one-time are not scaled
    pub annualized_total: Money,
    /// Number of tracked services
    pub active_count: usize,
}

impl SpendingSummary {
    /// Compute the summary from a service list snapshot
    pub fn compute(services: &[AiService]) -> Self {
        let total_by = |cycle: BillingCycle| -> Money {
            services
                .iter()
                .filter(|s| s.billing_cycle == cycle)
                .map(|s| s.amount)
                .sum()
        };

        let monthly_total = total_by(BillingCycle::Monthly);
        let yearly_total = total_by(BillingCycle::Yearly);
        let one_time_total = total_by(BillingCycle::OneTime);

        Self {
            monthly_total,
            yearly_total,
            one_time_total,
            annualized_total: monthly_total * 12 + yearly_total + one_time_total,
            active_count: services.len(),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Monthly Spending",
            self.monthly_total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Yearly Plans",
            self.yearly_total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "One-time Charges",
            self.one_time_total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Annual Cost",
            self.annualized_total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Active Services", self.active_count
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ServiceCategory, ServiceDraft, ServiceId};

    fn service(dollars: i64, cycle: BillingCycle) -> AiService {
        AiService::from_draft(
            ServiceId::new(),
            ServiceDraft::new(
                "Test",
                "OpenAI",
                Money::from_dollars(dollars),
                cycle,
                ServiceCategory::Subscription,
            ),
        )
    }

    #[test]
    fn test_empty_list_yields_zeros() {
        let summary = SpendingSummary::compute(&[]);
        assert!(summary.monthly_total.is_zero());
        assert!(summary.yearly_total.is_zero());
        assert!(summary.one_time_total.is_zero());
        assert!(summary.annualized_total.is_zero());
        assert_eq!(summary.active_count, 0);
    }

    #[test]
    fn test_totals_by_cycle() {
        let services = vec![
            service(20, BillingCycle::Monthly),
            service(10, BillingCycle::Monthly),
            service(120, BillingCycle::Yearly),
            service(50, BillingCycle::OneTime),
        ];

        let summary = SpendingSummary::compute(&services);
        assert_eq!(summary.monthly_total, Money::from_dollars(30));
        assert_eq!(summary.yearly_total, Money::from_dollars(120));
        assert_eq!(summary.one_time_total, Money::from_dollars(50));
        assert_eq!(summary.active_count, 4);
    }

    #[test]
    fn test_annualized_identity() {
        // annualized = 12 x monthly + yearly + one-time, no further scaling
        let services = vec![
            service(20, BillingCycle::Monthly),
            service(120, BillingCycle::Yearly),
            service(50, BillingCycle::OneTime),
        ];

        let summary = SpendingSummary::compute(&services);
        let expected = summary.monthly_total * 12 + summary.yearly_total + summary.one_time_total;
        assert_eq!(summary.annualized_total, expected);
        assert_eq!(summary.annualized_total, Money::from_dollars(20 * 12 + 120 + 50));
    }

    #[test]
    fn test_format_terminal() {
        let summary = SpendingSummary::compute(&[service(20, BillingCycle::Monthly)]);
        let text = summary.format_terminal("$");
        assert!(text.contains("Monthly Spending"));
        assert!(text.contains("$20.00"));
        assert!(text.contains("$240.00"));
    }
}
