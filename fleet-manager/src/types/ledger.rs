use std::fmt;

use super::fleet_error::FleetError;
use super::MONTHS;

/// Revenues and expenses of the airline for each month of a year.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyLedger {
    revenues: [f64; MONTHS],
    expenses: [f64; MONTHS],
}

impl Default for MonthlyLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MonthlyLedger {
    pub fn new() -> Self {
        MonthlyLedger {
            revenues: [0.0; MONTHS],
            expenses: [0.0; MONTHS],
        }
    }

    /// Stores the revenue and expense of `month`, counted from 1.
    pub fn record_month(&mut self, month: usize, revenue: f64, expense: f64) -> Result<(), FleetError> {
        if month == 0 || month > MONTHS {
            return Err(FleetError::InvalidMonth(month));
        }
        if !revenue.is_finite() || !expense.is_finite() {
            return Err(FleetError::InvalidInput(
                "revenues and expenses must be numbers".to_string(),
            ));
        }
        self.revenues[month - 1] = revenue;
        self.expenses[month - 1] = expense;
        Ok(())
    }

    /// Profit of every month, January first.
    pub fn profits(&self) -> Vec<f64> {
        self.revenues
            .iter()
            .zip(self.expenses.iter())
            .map(|(revenue, expense)| revenue - expense)
            .collect()
    }

    pub fn total_profit(&self) -> f64 {
        self.profits().iter().sum()
    }
}

impl fmt::Display for MonthlyLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nTotal Monthly Profits:")?;
        for (index, profit) in self.profits().iter().enumerate() {
            writeln!(f, "Month {}: Profit = {:.2}", index + 1, profit)?;
        }
        write!(f, "Year: Profit = {:.2}", self.total_profit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profits_default_to_zero() {
        let ledger = MonthlyLedger::new();
        assert_eq!(ledger.profits(), vec![0.0; MONTHS]);
        assert_eq!(ledger.total_profit(), 0.0);
    }

    #[test]
    fn test_record_month() {
        let mut ledger = MonthlyLedger::new();
        ledger.record_month(1, 1500.0, 1000.0).unwrap();
        ledger.record_month(12, 200.0, 450.0).unwrap();

        let profits = ledger.profits();
        assert_eq!(profits[0], 500.0);
        assert_eq!(profits[11], -250.0);
        assert_eq!(ledger.total_profit(), 250.0);

        let text = ledger.to_string();
        assert!(text.contains("Month 1: Profit = 500.00"));
        assert!(text.contains("Month 12: Profit = -250.00"));
    }

    #[test]
    fn test_invalid_month() {
        let mut ledger = MonthlyLedger::new();
        assert!(matches!(
            ledger.record_month(0, 1.0, 1.0),
            Err(FleetError::InvalidMonth(0))
        ));
        assert!(matches!(
            ledger.record_month(13, 1.0, 1.0),
            Err(FleetError::InvalidMonth(13))
        ));
        assert!(ledger.record_month(3, f64::INFINITY, 1.0).is_err());
        assert_eq!(ledger, MonthlyLedger::new());
    }
}
