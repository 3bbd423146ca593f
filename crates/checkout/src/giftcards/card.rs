//! Gift card model and validity rules.

use cartwright_core::{GiftCardId, StoreId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A gift card, as seen by checkout.
///
/// Like the cart line items, this is a read model: the caller loads the
/// card (with its usage history) and checkout only answers questions
/// about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftCard {
    /// Gift card ID.
    pub id: GiftCardId,
    /// The code the customer redeems, e.g. `"1fa0e4a5-72b9"`.
    pub coupon_code: String,
    /// Initial value of the card.
    pub amount: Decimal,
    /// Whether the card has been activated for use.
    pub is_activated: bool,
    /// Store the card is restricted to. `None` means any store.
    pub store_id: Option<StoreId>,
    /// Amounts already spent from the card, one entry per use.
    pub used_amounts: Vec<Decimal>,
    /// When the card was created.
    pub created_on: DateTime<Utc>,
}

impl GiftCard {
    /// Value left on the card. Never negative.
    #[must_use]
    pub fn remaining_amount(&self) -> Decimal {
        let used: Decimal = self.used_amounts.iter().sum();
        (self.amount - used).max(Decimal::ZERO)
    }

    /// Whether the card can be applied to an order in `store_id`.
    ///
    /// A card is usable when it is activated, has value left, and either
    /// carries no store restriction or is restricted to this store.
    #[must_use]
    pub fn is_valid(&self, store_id: StoreId) -> bool {
        if !self.is_activated {
            return false;
        }

        if self.remaining_amount() <= Decimal::ZERO {
            return false;
        }

        self.store_id.is_none_or(|restricted| restricted == store_id)
    }
}

/// Filter the gift cards a customer applied down to the ones that are
/// actually usable for an order in `store_id`.
///
/// `coupon_codes` are the codes the customer entered at checkout; cards
/// whose code is not among them are skipped without being validated.
#[must_use]
pub fn active_gift_cards<'a>(
    cards: &'a [GiftCard],
    store_id: StoreId,
    coupon_codes: &[String],
) -> Vec<&'a GiftCard> {
    cards
        .iter()
        .filter(|card| coupon_codes.contains(&card.coupon_code))
        .filter(|card| card.is_valid(store_id))
        .collect()
}
