use crate::domain::money::{Money, Rate};
use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};

/// One outstanding debt in the portfolio: a minimum due, a full balance, and
/// the rate that decides its priority during allocation.
///
/// Records are supplied fresh on every allocation; the engine never mutates
/// or caches them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Obligation {
    /// Stable identifier, echoed back on the matching allocation line.
    pub id: u32,
    /// Required minimum payment.
    pub min_due: Money,
    /// Full outstanding balance. Expected to be at least `min_due`.
    pub total_due: Money,
    /// Cost-of-carry rate used strictly as an ordering key.
    pub rate: Rate,
}

impl Obligation {
    pub fn new(id: u32, min_due: Money, total_due: Money, rate: Rate) -> Self {
        Self {
            id,
            min_due,
            total_due,
            rate,
        }
    }

    /// Structural checks for the strict allocation path.
    ///
    /// The default path allocates as-is; upstream data quality issues only
    /// surface through this entry point.
    pub fn validate(&self) -> Result<()> {
        if self.min_due < Money::ZERO {
            return Err(PaymentError::InvalidObligation(format!(
                "obligation {}: negative minimum due {}",
                self.id,
                self.min_due.value()
            )));
        }
        if self.total_due < Money::ZERO {
            return Err(PaymentError::InvalidObligation(format!(
                "obligation {}: negative total due {}",
                self.id,
                self.total_due.value()
            )));
        }
        if self.total_due < self.min_due {
            return Err(PaymentError::InvalidObligation(format!(
                "obligation {}: total due {} is below minimum due {}",
                self.id,
                self.total_due.value(),
                self.min_due.value()
            )));
        }
        if self.rate.value() < rust_decimal::Decimal::ZERO {
            return Err(PaymentError::InvalidObligation(format!(
                "obligation {}: negative rate {}",
                self.id,
                self.rate.value()
            )));
        }
        Ok(())
    }
}

/// Aggregate dues across a portfolio.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct PortfolioSummary {
    pub total_due: Money,
    pub min_due: Money,
}

impl PortfolioSummary {
    pub fn of(obligations: &[Obligation]) -> Self {
        let mut total_due = Money::ZERO;
        let mut min_due = Money::ZERO;
        for obligation in obligations {
            total_due += obligation.total_due;
            min_due += obligation.min_due;
        }
        Self { total_due, min_due }
    }
}
