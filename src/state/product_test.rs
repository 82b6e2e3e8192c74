use super::*;

fn quantities(state: &ProductState) -> Vec<i32> {
    state.product.variants.iter().map(|v| v.quantity).collect()
}

// =============================================================
// stock_status / shipping
// =============================================================

#[test]
fn stock_status_above_ten_is_in_stock() {
    assert_eq!(stock_status(11), "In stock");
    assert_eq!(stock_status(250), "In stock");
}

#[test]
fn stock_status_ten_is_almost_sold_out() {
    assert_eq!(stock_status(10), "Almost sold out, only 10 items are available!");
}

#[test]
fn stock_status_two_is_almost_sold_out() {
    assert_eq!(stock_status(2), "Almost sold out, only 2 items are available!");
}

#[test]
fn stock_status_one_is_hurry() {
    assert_eq!(stock_status(1), "Hurry! Just 1 item is available!");
}

#[test]
fn stock_status_zero_and_negative_are_out_of_stock() {
    assert_eq!(stock_status(0), "Out of stock");
    assert_eq!(stock_status(-3), "Out of stock");
}

#[test]
fn in_stock_requires_positive_quantity() {
    assert!(in_stock(1));
    assert!(!in_stock(0));
    assert!(!in_stock(-1));
}

#[test]
fn shipping_is_free_for_premium() {
    assert_eq!(shipping(true), "Free");
    assert_eq!(shipping(false), "$0.99");
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn converse_catalog_has_five_variants() {
    let product = Product::converse();
    assert_eq!(product.name, "Converse shoes");
    assert_eq!(product.details.len(), 3);
    let ids: Vec<VariantId> = product.variants.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![2234, 2235, 2236, 2237, 2238]);
}

#[test]
fn default_state_selects_first_variant() {
    let state = ProductState::default();
    assert_eq!(state.selected, 0);
    assert_eq!(state.selected_variant().color, "green");
    assert!(state.reviews.is_empty());
}

#[test]
fn new_keeps_a_single_variant_product() {
    let mut product = Product::converse();
    product.variants.truncate(1);
    let state = ProductState::new(product);
    assert_eq!(state.selected_variant().id, 2234);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "at least one variant")]
fn new_rejects_product_without_variants_in_debug_builds() {
    let mut product = Product::converse();
    product.variants.clear();
    let _ = ProductState::new(product);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selecting_each_variant_exposes_its_image_and_price() {
    let mut state = ProductState::default();
    let variants = state.product.variants.clone();
    for (i, variant) in variants.iter().enumerate() {
        state.select_variant(i);
        assert_eq!(state.image(), variant.image);
        assert_eq!(state.price(), variant.price);
        assert_eq!(state.quantity(), variant.quantity);
    }
}

#[test]
fn status_follows_selected_variant() {
    let mut state = ProductState::default();
    assert_eq!(state.status(), "Almost sold out, only 3 items are available!");
    state.select_variant(1);
    assert_eq!(state.status(), "In stock");
    state.select_variant(2);
    assert_eq!(state.status(), "Hurry! Just 1 item is available!");
}

// =============================================================
// add_to_cart
// =============================================================

#[test]
fn add_to_cart_snapshots_selected_variant() {
    let mut state = ProductState::default();
    state.select_variant(3);
    let item = state.add_to_cart();
    assert_eq!(
        item,
        CartItem { product: "Converse shoes".to_owned(), variant: 2237, color: "brown".to_owned(), price: 95.99 }
    );
}

#[test]
fn add_to_cart_decrements_only_selected_variant() {
    let mut state = ProductState::default();
    state.select_variant(1);
    state.add_to_cart();
    assert_eq!(quantities(&state), vec![3, 11, 1, 8, 11]);
}

#[test]
fn add_to_cart_can_drive_stock_negative() {
    let mut state = ProductState::default();
    state.select_variant(2);
    state.add_to_cart();
    assert_eq!(state.quantity(), 0);
    assert!(!state.in_stock());
    state.add_to_cart();
    assert_eq!(state.quantity(), -1);
    assert_eq!(state.status(), "Out of stock");
}

#[test]
fn cart_item_is_not_linked_to_variant() {
    let mut state = ProductState::default();
    let item = state.add_to_cart();
    state.product.variants[0].price = 1.0;
    state.product.variants[0].color = "teal".to_owned();
    assert_eq!(item.price, 29.99);
    assert_eq!(item.color, "green");
}

// =============================================================
// restock / apply
// =============================================================

#[test]
fn restock_increments_matching_variant_only() {
    let mut state = ProductState::default();
    assert!(state.restock(2236));
    assert_eq!(quantities(&state), vec![3, 12, 2, 8, 11]);
}

#[test]
fn restock_unknown_id_changes_nothing() {
    let mut state = ProductState::default();
    let before = state.clone();
    assert!(!state.restock(9999));
    assert_eq!(state, before);
}

#[test]
fn apply_cart_item_deleted_restocks() {
    let mut state = ProductState::default();
    state.apply(&Notification::CartItemDeleted(2234));
    assert_eq!(state.product.variants[0].quantity, 4);
}

#[test]
fn apply_review_submitted_appends_in_order() {
    let mut state = ProductState::default();
    let first = Review { name: "Ana".to_owned(), review: None, rating: 5 };
    let second = Review { name: "Ben".to_owned(), review: Some("Comfy".to_owned()), rating: 3 };
    state.apply(&Notification::ReviewSubmitted(first.clone()));
    state.apply(&Notification::ReviewSubmitted(second.clone()));
    assert_eq!(state.reviews, vec![first, second]);
}
