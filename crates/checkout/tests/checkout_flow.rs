//! Scenario tests exercising the checkout crate end to end.
//!
//! These walk the same path a checkout flow would: aggregate the cart,
//! reconcile recurring schedules, then validate applied gift cards.

use cartwright_checkout::cart::{self, CartItem, Customer, Product};
use cartwright_checkout::giftcards::{self, GiftCard};
use cartwright_checkout::localization::StaticResources;
use cartwright_core::{
    CartItemId, CustomerId, GiftCardId, ProductId, RecurringCyclePeriod, StoreId,
};
use chrono::Utc;
use rust_decimal::Decimal;

fn customer() -> Customer {
    Customer {
        id: CustomerId::new(1),
        email: Some("ada@example.com".to_owned()),
    }
}

fn subscription_cart() -> Vec<CartItem> {
    let tea = Product::recurring(
        ProductId::new(1),
        "Tea Subscription",
        30,
        RecurringCyclePeriod::Days,
        12,
    );
    let refill = Product::recurring(
        ProductId::new(2),
        "Filter Refill",
        30,
        RecurringCyclePeriod::Days,
        12,
    );
    let mug = Product::one_off(ProductId::new(3), "Mug");

    vec![
        CartItem::new(CartItemId::new(1), 1, tea, customer()).with_shipping(),
        CartItem::new(CartItemId::new(2), 2, refill, customer()).with_shipping(),
        CartItem::new(CartItemId::new(3), 1, mug, customer()),
    ]
}

#[test]
fn subscription_cart_reconciles_to_a_single_schedule() {
    let items = subscription_cart();

    assert!(cart::is_shipping_required(&items));
    assert!(cart::is_recurring(&items));
    assert_eq!(cart::total_quantity(&items), 4);
    assert_eq!(
        cart::customer(&items).map(|c| c.id),
        Some(CustomerId::new(1))
    );

    let info = cart::recurring_cycle_info(&items, &StaticResources::english())
        .expect("all products are resolved");
    assert!(info.has_values());
    assert!(!info.has_conflict());
    assert_eq!(info.cycle_length, Some(30));
    assert_eq!(info.cycle_period, Some(RecurringCyclePeriod::Days));
    assert_eq!(info.total_cycles, Some(12));
}

#[test]
fn conflicting_schedules_block_with_a_localized_message() {
    let mut items = subscription_cart();
    let yearly = Product::recurring(
        ProductId::new(4),
        "Annual Almanac",
        1,
        RecurringCyclePeriod::Years,
        0,
    );
    items.push(CartItem::new(CartItemId::new(4), 1, yearly, customer()));

    let resources = StaticResources::english().with(
        "ShoppingCart.ConflictingShipmentSchedules",
        "Les abonnements du panier ont des calendriers incompatibles.",
    );
    let info = cart::recurring_cycle_info(&items, &resources).expect("all products are resolved");

    assert!(info.has_conflict());
    assert_eq!(
        info.error_message.as_deref(),
        Some("Les abonnements du panier ont des calendriers incompatibles.")
    );
    // The first schedule is still reported alongside the conflict.
    assert_eq!(info.cycle_length, Some(30));
}

#[test]
fn generated_codes_fit_the_gift_card_model() {
    let code = giftcards::generate_gift_card_code();
    let card = GiftCard {
        id: GiftCardId::new(1),
        coupon_code: code.clone(),
        amount: Decimal::new(75_00, 2),
        is_activated: true,
        store_id: Some(StoreId::new(1)),
        used_amounts: vec![Decimal::new(20_00, 2)],
        created_on: Utc::now(),
    };

    assert_eq!(card.coupon_code.len(), 13);
    assert_eq!(card.remaining_amount(), Decimal::new(55_00, 2));

    let applied = vec![code];
    let active = giftcards::active_gift_cards(std::slice::from_ref(&card), StoreId::new(1), &applied);
    assert_eq!(active.len(), 1);

    // Restricted to store 1, so store 2 cannot redeem it.
    let other_store =
        giftcards::active_gift_cards(std::slice::from_ref(&card), StoreId::new(2), &applied);
    assert!(other_store.is_empty());
}

#[test]
fn cycle_info_serializes_for_the_checkout_api() {
    let items = subscription_cart();
    let info = cart::recurring_cycle_info(&items, &StaticResources::english())
        .expect("all products are resolved");

    let json = serde_json::to_value(&info).expect("cycle info serializes");
    assert_eq!(json["cycle_length"], 30);
    assert_eq!(json["cycle_period"], "DAYS");
    assert_eq!(json["error_message"], serde_json::Value::Null);
}
