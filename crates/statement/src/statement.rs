use serde::{Deserialize, Serialize};

use playbill_core::{DomainError, DomainResult, Money, PlayId};
use playbill_plays::{Genre, PlayLookup};
use playbill_pricing::PricingRules;

use crate::invoice::{Invoice, Performance};

/// One performance's contribution to a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub play_id: PlayId,
    pub play_name: String,
    pub genre: Genre,
    pub audience: u32,
    /// Charge in minor units.
    pub amount: Money,
    pub volume_credits: u64,
}

/// Computed statement for one invoice.
///
/// Invariant: `total_amount` is the sum of line amounts and
/// `total_volume_credits` the sum of line credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementResult {
    pub customer: String,
    pub lines: Vec<LineItem>,
    pub total_amount: Money,
    pub total_volume_credits: u64,
}

/// Compute the statement for `invoice`.
///
/// Lines follow invoice order. The first unknown play, unknown genre or
/// overflow aborts the whole computation; no partial statement is returned.
pub fn compute_statement<L>(
    invoice: &Invoice,
    plays: &L,
    rules: &PricingRules,
) -> DomainResult<StatementResult>
where
    L: PlayLookup + ?Sized,
{
    let mut lines = Vec::with_capacity(invoice.performances.len());
    let mut total_amount = Money::ZERO;
    let mut total_volume_credits: u64 = 0;

    for performance in &invoice.performances {
        let line = line_item(performance, plays, rules).inspect_err(|err| {
            tracing::warn!(
                customer = %invoice.customer,
                play_id = %performance.play_id,
                error = %err,
                "statement aborted"
            );
        })?;

        total_amount = total_amount
            .checked_add(line.amount)
            .ok_or_else(|| DomainError::overflow("statement total"))?;
        total_volume_credits = total_volume_credits
            .checked_add(line.volume_credits)
            .ok_or_else(|| DomainError::overflow("volume credit total"))?;

        lines.push(line);
    }

    tracing::debug!(
        customer = %invoice.customer,
        lines = lines.len(),
        total_amount = total_amount.cents(),
        total_volume_credits,
        "statement computed"
    );

    Ok(StatementResult {
        customer: invoice.customer.clone(),
        lines,
        total_amount,
        total_volume_credits,
    })
}

fn line_item<L>(
    performance: &Performance,
    plays: &L,
    rules: &PricingRules,
) -> DomainResult<LineItem>
where
    L: PlayLookup + ?Sized,
{
    let play = plays.resolve(&performance.play_id)?;
    // Genre is validated once here; the engine below only sees the closed enum.
    let genre = play.genre()?;

    let amount = rules.amount_for(genre, performance.audience)?;
    let volume_credits = rules.volume_credits_for(genre, performance.audience);

    tracing::debug!(
        play_id = %performance.play_id,
        %genre,
        audience = performance.audience,
        amount = amount.cents(),
        volume_credits,
        "line priced"
    );

    Ok(LineItem {
        play_id: performance.play_id.clone(),
        play_name: play.name.clone(),
        genre,
        audience: performance.audience,
        amount,
        volume_credits,
    })
}
