use crate::domain::money::Money;
use crate::domain::obligation::Obligation;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;

/// One obligation's share of a payment.
///
/// Lines come back in the same order as the input obligations, one per record.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AllocationLine {
    #[serde(rename = "id")]
    pub obligation_id: u32,
    pub amount: Money,
    /// Integer share of the payment, 0-100.
    pub percentage: u8,
}

/// A payment split across a portfolio, with any remainder the portfolio could
/// not absorb reported explicitly.
#[derive(Debug, PartialEq, Clone)]
pub struct AllocationPlan {
    pub total_amount: Money,
    pub lines: Vec<AllocationLine>,
    /// Amount beyond the portfolio's total outstanding balance. The engine
    /// leaves it unspent; callers decide whether to flag it as an overpayment.
    pub unallocated: Money,
}

impl AllocationPlan {
    pub fn new(total_amount: Decimal, obligations: &[Obligation]) -> Self {
        let total = Money::normalized(total_amount);
        let lines = allocate(total_amount, obligations);
        let allocated = lines.iter().fold(Money::ZERO, |sum, line| sum + line.amount);
        Self {
            total_amount: total,
            lines,
            unallocated: total - allocated,
        }
    }

    /// Sum of every line's amount.
    pub fn allocated(&self) -> Money {
        self.total_amount - self.unallocated
    }
}

/// Splits `total_amount` across `obligations`.
///
/// The split runs in two phases, both walking the portfolio in descending
/// rate order (ties keep input order):
///
/// 1. Minimum coverage: each obligation receives up to its minimum due, so
///    the costliest debts have their minimums satisfied first when funds run
///    short.
/// 2. Residual paydown: whatever remains retires the costliest balance
///    outright before moving to the next.
///
/// Amounts at or below zero allocate nothing. Funds beyond the portfolio's
/// total outstanding balance are left unspent. Never fails; see
/// [`allocate_strict`] for the validating variant.
pub fn allocate(total_amount: Decimal, obligations: &[Obligation]) -> Vec<AllocationLine> {
    let total = Money::normalized(total_amount);
    let mut paid = vec![Money::ZERO; obligations.len()];
    let mut remaining = total;

    let order = by_rate_descending(obligations);

    // Phase 1: minimum coverage.
    for &i in &order {
        if !remaining.is_positive() {
            break;
        }
        let obligation = &obligations[i];
        if obligation.min_due.is_positive() {
            let payment = obligation.min_due.min(remaining);
            paid[i] += payment;
            remaining -= payment;
        }
    }

    // Phase 2: residual paydown.
    for &i in &order {
        if !remaining.is_positive() {
            break;
        }
        let headroom = obligations[i].total_due - paid[i];
        if headroom.is_positive() {
            let payment = headroom.min(remaining);
            paid[i] += payment;
            remaining -= payment;
        }
    }

    obligations
        .iter()
        .zip(paid)
        .map(|(obligation, amount)| AllocationLine {
            obligation_id: obligation.id,
            amount,
            percentage: amount.percentage_of(total),
        })
        .collect()
}

/// Validating variant of [`allocate`]: rejects structurally invalid
/// obligations up front instead of allocating as-is.
pub fn allocate_strict(
    total_amount: Decimal,
    obligations: &[Obligation],
) -> Result<Vec<AllocationLine>> {
    for obligation in obligations {
        obligation.validate()?;
    }
    Ok(allocate(total_amount, obligations))
}

/// Index order for both allocation phases: rate descending, ties broken by
/// input position (`sort_by` is stable).
fn by_rate_descending(obligations: &[Obligation]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..obligations.len()).collect();
    order.sort_by(|&a, &b| obligations[b].rate.cmp(&obligations[a].rate));
    order
}
