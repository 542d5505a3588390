use crate::types::{Amount, Period};
use serde::{Deserialize, Serialize};

/// Prepaid top-up package covering several subscription periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleOption {
    pub label: String,
    pub description: String,
    pub amount: Amount,
    pub coverage_periods: u32,
}

struct Rung {
    label: &'static str,
    span: &'static str,
    periods: u32,
}

const DAILY_LADDER: &[Rung] = &[
    Rung {
        label: "1 Week",
        span: "daily for 1 week",
        periods: 7,
    },
    Rung {
        label: "1 Month",
        span: "daily for 1 month",
        periods: 30,
    },
    Rung {
        label: "3 Months",
        span: "daily for 3 months",
        periods: 90,
    },
];

const MONTHLY_LADDER: &[Rung] = &[
    Rung {
        label: "1 Month",
        span: "for 1 monthly draw",
        periods: 1,
    },
    Rung {
        label: "3 Months",
        span: "for 3 monthly draws",
        periods: 3,
    },
    Rung {
        label: "6 Months",
        span: "for 6 monthly draws",
        periods: 6,
    },
];

const YEARLY_LADDER: &[Rung] = &[Rung {
    label: "1 Year",
    span: "for 1 yearly draw",
    periods: 1,
}];

fn ladder(period: Period) -> &'static [Rung] {
    match period {
        Period::Daily => DAILY_LADDER,
        Period::Monthly => MONTHLY_LADDER,
        Period::Yearly => YEARLY_LADDER,
    }
}

/// Ladder for one period's cost. `None` on overflow.
pub(crate) fn build_ladder(
    period: Period,
    tickets: u32,
    period_cost: Amount,
) -> Option<Vec<BundleOption>> {
    ladder(period)
        .iter()
        .map(|rung| {
            let amount = period_cost.checked_mul(u64::from(rung.periods))?;
            Some(BundleOption {
                label: rung.label.to_string(),
                description: format!("{} ticket(s) {}", tickets, rung.span),
                amount,
                coverage_periods: rung.periods,
            })
        })
        .collect()
}
