//! Insight Engine - turns aggregation views into spending statements

use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::InsightConfig;
use crate::models::{CategoryTotal, MonthlyTotal};

use super::format::{one_decimal, whole_with_commas};

/// Message returned when there is nothing to analyze
pub const NOT_ENOUGH_DATA: &str = "Not enough data to generate insights.";

/// Direction of spending between the first and last analyzed month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Increased,
    Decreased,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increased => "increased",
            Self::Decreased => "decreased",
        }
    }
}

/// A single derived statement about spending
///
/// `Display` renders the user-facing sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insight {
    NotEnoughData,
    PeakMonth { year: i32, month: u32, total: Decimal },
    TroughMonth { year: i32, month: u32, total: Decimal },
    DominantCategory { category: String, total: Decimal },
    RentWeight { category: String, percent: Decimal },
    Trend { direction: TrendDirection, percent: Decimal },
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughData => f.write_str(NOT_ENOUGH_DATA),
            Self::PeakMonth { year, month, total } => write!(
                f,
                "📈 The month with the highest expenses was {}/{} with a total of ${}.",
                month,
                year,
                whole_with_commas(*total)
            ),
            Self::TroughMonth { year, month, total } => write!(
                f,
                "📉 The month with the lowest expenses was {}/{} with a total of ${}.",
                month,
                year,
                whole_with_commas(*total)
            ),
            Self::DominantCategory { category, total } => write!(
                f,
                "🔥 The category you spend the most on is '{}', accounting for ${} of your total expenses.",
                category,
                whole_with_commas(*total)
            ),
            Self::RentWeight { percent, .. } => write!(
                f,
                "🏠 Rent represents {}% of all your expenses.",
                one_decimal(*percent)
            ),
            Self::Trend { direction, percent } => write!(
                f,
                "📊 Your expenses have {} by {}% over the analyzed period.",
                direction.as_str(),
                one_decimal(percent.abs())
            ),
        }
    }
}

/// Pure insight generator
///
/// Holds only configuration, so one engine can be shared across threads
/// and requests.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    config: InsightConfig,
}

impl InsightEngine {
    pub fn new(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Derive insights from the two aggregation views
    ///
    /// `monthly` must be in chronological order and `categories` sorted by
    /// total, largest first. The category order is trusted, not checked.
    ///
    /// Output order is fixed: peak month, trough month, dominant category,
    /// one rent-weight per rent-like category, then the trend.
    pub fn generate(&self, monthly: &[MonthlyTotal], categories: &[CategoryTotal]) -> Vec<Insight> {
        let (Some(peak), Some(trough), Some(dominant)) =
            (peak_month(monthly), trough_month(monthly), categories.first())
        else {
            return vec![Insight::NotEnoughData];
        };

        let mut insights = vec![
            Insight::PeakMonth {
                year: peak.year,
                month: peak.month,
                total: peak.total,
            },
            Insight::TroughMonth {
                year: trough.year,
                month: trough.month,
                total: trough.total,
            },
            Insight::DominantCategory {
                category: dominant.category.clone(),
                total: dominant.total,
            },
        ];

        let total_spent: Decimal = monthly.iter().map(|m| m.total).sum();
        for category in categories.iter().filter(|c| self.config.is_rent(&c.category)) {
            match percent_of(category.total, total_spent) {
                Some(percent) => insights.push(Insight::RentWeight {
                    category: category.category.clone(),
                    percent,
                }),
                None => debug!(
                    category = %category.category,
                    "Skipping rent weight: total spend is zero"
                ),
            }
        }

        if let Some(trend) = trend(monthly) {
            insights.push(trend);
        }

        insights
    }

    /// Derive insights and render them as sentences
    pub fn messages(&self, monthly: &[MonthlyTotal], categories: &[CategoryTotal]) -> Vec<String> {
        self.generate(monthly, categories)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

/// Month with the highest total; the earliest one wins a tie
fn peak_month(monthly: &[MonthlyTotal]) -> Option<&MonthlyTotal> {
    monthly.iter().fold(None, |best, m| match best {
        Some(b) if m.total <= b.total => Some(b),
        _ => Some(m),
    })
}

/// Month with the lowest total; the earliest one wins a tie
fn trough_month(monthly: &[MonthlyTotal]) -> Option<&MonthlyTotal> {
    monthly.iter().fold(None, |best, m| match best {
        Some(b) if m.total >= b.total => Some(b),
        _ => Some(m),
    })
}

/// `100 * part / whole`, or `None` when `whole` is zero
fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    part.checked_mul(Decimal::ONE_HUNDRED)?.checked_div(whole)
}

/// Percent change from the first to the last month
///
/// Needs at least two months and a non-zero first month. Only a strictly
/// positive change counts as an increase.
fn trend(monthly: &[MonthlyTotal]) -> Option<Insight> {
    let [first, .., last] = monthly else {
        return None;
    };

    let Some(change) = percent_of(last.total - first.total, first.total) else {
        debug!(
            year = first.year,
            month = first.month,
            "Skipping trend: first month total is zero"
        );
        return None;
    };

    let direction = if change > Decimal::ZERO {
        TrendDirection::Increased
    } else {
        TrendDirection::Decreased
    };

    Some(Insight::Trend {
        direction,
        percent: change.abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn month(year: i32, month: u32, total: Decimal) -> MonthlyTotal {
        MonthlyTotal::new(year, month, total)
    }

    fn cat(name: &str, total: Decimal) -> CategoryTotal {
        CategoryTotal::new(name, total)
    }

    fn engine() -> InsightEngine {
        InsightEngine::default()
    }

    #[test]
    fn test_empty_inputs() {
        let expected = vec![NOT_ENOUGH_DATA.to_string()];
        let categories = vec![cat("Food", dec!(10))];
        let monthly = vec![month(2025, 1, dec!(10))];

        assert_eq!(engine().messages(&[], &categories), expected);
        assert_eq!(engine().messages(&monthly, &[]), expected);
        assert_eq!(engine().messages(&[], &[]), expected);
    }

    #[test]
    fn test_peak_and_trough_ties_keep_first() {
        let monthly = vec![
            month(2025, 1, dec!(100)),
            month(2025, 2, dec!(50)),
            month(2025, 3, dec!(100)),
            month(2025, 4, dec!(50)),
        ];
        let insights = engine().generate(&monthly, &[cat("Food", dec!(300))]);

        assert_eq!(
            insights[0],
            Insight::PeakMonth {
                year: 2025,
                month: 1,
                total: dec!(100)
            }
        );
        assert_eq!(
            insights[1],
            Insight::TroughMonth {
                year: 2025,
                month: 2,
                total: dec!(50)
            }
        );
        assert_eq!(
            insights[0].to_string(),
            "📈 The month with the highest expenses was 1/2025 with a total of $100."
        );
        assert_eq!(
            insights[1].to_string(),
            "📉 The month with the lowest expenses was 2/2025 with a total of $50."
        );
    }

    #[test]
    fn test_totals_rounded_with_separators() {
        let monthly = vec![month(2024, 12, dec!(1234567.50))];
        let messages = engine().messages(&monthly, &[cat("Rent", dec!(1234567.50))]);

        assert!(messages[0].ends_with("12/2024 with a total of $1,234,568."));
        assert_eq!(
            messages[2],
            "🔥 The category you spend the most on is 'Rent', accounting for $1,234,568 of your total expenses."
        );
    }

    #[test]
    fn test_dominant_category_trusts_input_order() {
        let monthly = vec![month(2025, 1, dec!(800))];
        let categories = vec![cat("Food", dec!(500)), cat("Travel", dec!(900))];

        let insights = engine().generate(&monthly, &categories);
        assert_eq!(
            insights[2],
            Insight::DominantCategory {
                category: "Food".to_string(),
                total: dec!(500)
            }
        );
    }

    #[test]
    fn test_rent_weight_aliases() {
        let monthly = vec![month(2025, 1, dec!(600)), month(2025, 2, dec!(400))];

        let messages = engine().messages(&monthly, &[cat("Food", dec!(700)), cat("Rent", dec!(300))]);
        assert!(messages.contains(&"🏠 Rent represents 30.0% of all your expenses.".to_string()));

        let messages = engine().messages(&monthly, &[cat("arriendo", dec!(250))]);
        assert!(messages.contains(&"🏠 Rent represents 25.0% of all your expenses.".to_string()));

        let messages = engine().messages(&monthly, &[cat("Housing", dec!(300))]);
        assert!(!messages.iter().any(|m| m.contains("Rent represents")));
    }

    #[test]
    fn test_rent_weight_one_per_matching_category() {
        let monthly = vec![month(2025, 1, dec!(1000))];
        let categories = vec![
            cat("RENT", dec!(400)),
            cat("Food", dec!(300)),
            cat("Arriendo", dec!(300)),
        ];

        let insights = engine().generate(&monthly, &categories);
        let weights: Vec<&Insight> = insights
            .iter()
            .filter(|i| matches!(i, Insight::RentWeight { .. }))
            .collect();
        assert_eq!(weights.len(), 2);
        assert_eq!(weights[0].to_string(), "🏠 Rent represents 40.0% of all your expenses.");
        assert_eq!(weights[1].to_string(), "🏠 Rent represents 30.0% of all your expenses.");
    }

    #[test]
    fn test_rent_weight_uses_configured_aliases() {
        let engine = InsightEngine::new(InsightConfig::with_rent_aliases(["Loyer"]));
        let monthly = vec![month(2025, 1, dec!(200))];

        let messages = engine.messages(&monthly, &[cat("loyer", dec!(50)), cat("Rent", dec!(50))]);
        let rent: Vec<&String> = messages.iter().filter(|m| m.contains("Rent represents")).collect();
        assert_eq!(rent, vec!["🏠 Rent represents 25.0% of all your expenses."]);
    }

    #[test]
    fn test_rent_weight_skipped_when_total_is_zero() {
        let monthly = vec![month(2025, 1, dec!(0))];
        let insights = engine().generate(&monthly, &[cat("Rent", dec!(0))]);

        assert_eq!(insights.len(), 3);
        assert!(!insights.iter().any(|i| matches!(i, Insight::RentWeight { .. })));
    }

    #[test]
    fn test_trend_increase() {
        let monthly = vec![month(2025, 1, dec!(100)), month(2025, 2, dec!(150))];
        let messages = engine().messages(&monthly, &[cat("Food", dec!(250))]);

        assert_eq!(
            messages.last().unwrap(),
            "📊 Your expenses have increased by 50.0% over the analyzed period."
        );
    }

    #[test]
    fn test_trend_no_change_reports_decrease() {
        let monthly = vec![month(2025, 1, dec!(100)), month(2025, 2, dec!(100))];
        let messages = engine().messages(&monthly, &[cat("Food", dec!(200))]);

        assert_eq!(
            messages.last().unwrap(),
            "📊 Your expenses have decreased by 0.0% over the analyzed period."
        );
    }

    #[test]
    fn test_trend_uses_first_and_last_only() {
        let monthly = vec![
            month(2025, 1, dec!(300)),
            month(2025, 2, dec!(900)),
            month(2025, 3, dec!(200)),
        ];
        let insights = engine().generate(&monthly, &[cat("Food", dec!(1400))]);

        let trend = insights.last().unwrap();
        assert!(matches!(
            trend,
            Insight::Trend {
                direction: TrendDirection::Decreased,
                ..
            }
        ));
        assert_eq!(
            trend.to_string(),
            "📊 Your expenses have decreased by 33.3% over the analyzed period."
        );
    }

    #[test]
    fn test_trend_requires_two_months() {
        let monthly = vec![month(2025, 1, dec!(100))];
        let insights = engine().generate(&monthly, &[cat("Food", dec!(100))]);

        assert_eq!(insights.len(), 3);
        assert!(!insights.iter().any(|i| matches!(i, Insight::Trend { .. })));
    }

    #[test]
    fn test_trend_skipped_when_first_month_is_zero() {
        let monthly = vec![month(2025, 1, dec!(0)), month(2025, 2, dec!(100))];
        let insights = engine().generate(&monthly, &[cat("Food", dec!(100))]);

        assert!(!insights.iter().any(|i| matches!(i, Insight::Trend { .. })));
    }

    #[test]
    fn test_output_order() {
        let monthly = vec![month(2025, 1, dec!(500)), month(2025, 2, dec!(700))];
        let categories = vec![cat("Rent", dec!(900)), cat("Food", dec!(300))];

        let kinds: Vec<&'static str> = engine()
            .generate(&monthly, &categories)
            .iter()
            .map(|i| match i {
                Insight::NotEnoughData => "empty",
                Insight::PeakMonth { .. } => "peak",
                Insight::TroughMonth { .. } => "trough",
                Insight::DominantCategory { .. } => "dominant",
                Insight::RentWeight { .. } => "rent",
                Insight::Trend { .. } => "trend",
            })
            .collect();
        assert_eq!(kinds, vec!["peak", "trough", "dominant", "rent", "trend"]);
    }
}
