use crate::domain::allocation::{allocate_strict, AllocationPlan};
use crate::domain::money::Money;
use crate::domain::obligation::{Obligation, PortfolioSummary};
use crate::domain::ports::ObligationStoreBox;
use crate::error::Result;
use rust_decimal::Decimal;

/// The main entry point for producing allocation plans.
///
/// `PaymentPlanner` holds the obligation supply behind a port and runs the
/// pure allocation over whatever that supply currently contains. It ensures
/// sequential consistency by awaiting storage operations.
pub struct PaymentPlanner {
    obligation_store: ObligationStoreBox,
}

impl PaymentPlanner {
    pub fn new(obligation_store: ObligationStoreBox) -> Self {
        Self { obligation_store }
    }

    /// Appends an obligation to the portfolio.
    pub async fn load(&self, obligation: Obligation) -> Result<()> {
        self.obligation_store.store(obligation).await
    }

    /// Splits `amount` across the current portfolio.
    ///
    /// Malformed obligations are allocated as-is; use [`plan_strict`] to
    /// reject them instead.
    ///
    /// [`plan_strict`]: PaymentPlanner::plan_strict
    pub async fn plan(&self, amount: Decimal) -> Result<AllocationPlan> {
        let obligations = self.obligation_store.get_all().await?;
        Ok(AllocationPlan::new(amount, &obligations))
    }

    /// Validating variant of [`plan`](PaymentPlanner::plan).
    pub async fn plan_strict(&self, amount: Decimal) -> Result<AllocationPlan> {
        let obligations = self.obligation_store.get_all().await?;
        let lines = allocate_strict(amount, &obligations)?;
        let total = Money::normalized(amount);
        let allocated = lines.iter().fold(Money::ZERO, |sum, line| sum + line.amount);
        Ok(AllocationPlan {
            total_amount: total,
            lines,
            unallocated: total - allocated,
        })
    }

    /// Totals across the current portfolio.
    pub async fn summary(&self) -> Result<PortfolioSummary> {
        let obligations = self.obligation_store.get_all().await?;
        Ok(PortfolioSummary::of(&obligations))
    }
}
