//! Store, page and navigator driven together, the way a front end uses them.

use std::cell::RefCell;
use std::rc::Rc;

use cart_checkout_core::{
    CartCommand, CartState, LineItemId, PageIntent, ShippingOption, ShoppingPage,
};
use cart_checkout_integration_tests::{CountingNavigator, line_item, store_with};

#[test]
fn page_recomputes_after_every_store_change() {
    let mut store = store_with([
        line_item("sku-1", 1999, 2).unwrap(),
        line_item("sku-2", 500, 1).unwrap(),
    ]);
    let mut nav = CountingNavigator::default();
    let mut page = ShoppingPage::default();
    let sku1 = LineItemId::from("sku-1");
    let sku2 = LineItemId::from("sku-2");

    let summary = page.view(store.state()).summary.unwrap();
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.subtotal, "$44.98");
    assert_eq!(summary.total, "$49.98");

    page.handle(PageIntent::Increment(sku2.clone()), &mut store, &mut nav);
    let summary = page.view(store.state()).summary.unwrap();
    assert_eq!(summary.item_count, 4);
    assert_eq!(summary.total, "$54.98");

    page.handle(PageIntent::Decrement(sku1.clone()), &mut store, &mut nav);
    page.handle(PageIntent::Remove(sku2), &mut store, &mut nav);
    let view = page.view(store.state());
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].line_total, "$19.99");
    assert_eq!(view.summary.unwrap().total, "$24.99");

    page.handle(PageIntent::Remove(sku1), &mut store, &mut nav);
    let view = page.view(store.state());
    assert!(view.summary.is_none());
    assert_eq!(view.empty_message, Some("Your cart is empty."));
}

#[test]
fn local_state_survives_store_changes_but_not_remount() {
    let mut store = store_with([line_item("sku-1", 1999, 2).unwrap()]);
    let mut nav = CountingNavigator::default();
    let mut page = ShoppingPage::default();

    page.handle(
        PageIntent::SelectShipping(ShippingOption::ExpressDelivery),
        &mut store,
        &mut nav,
    );
    page.handle(
        PageIntent::EnterDiscountCode("DISCOUNT10".to_string()),
        &mut store,
        &mut nav,
    );
    page.handle(PageIntent::Increment(LineItemId::from("sku-1")), &mut store, &mut nav);
    assert_eq!(page.shipping_option(), ShippingOption::ExpressDelivery);
    assert_eq!(page.discount_code(), "DISCOUNT10");

    let remounted = ShoppingPage::default();
    assert_eq!(remounted.shipping_option(), ShippingOption::StandardDelivery);
    assert_eq!(remounted.discount_code(), "");
}

#[test]
fn back_to_shop_and_checkout_leave_cart_untouched() {
    let mut store = store_with([line_item("sku-1", 1999, 2).unwrap()]);
    let mut nav = CountingNavigator::default();
    let mut page = ShoppingPage::default();
    let before = store.state().clone();

    page.handle(PageIntent::Checkout, &mut store, &mut nav);
    page.handle(PageIntent::BackToShop, &mut store, &mut nav);

    assert_eq!(store.state(), &before);
    assert_eq!(nav.home_visits, 1);
}

#[test]
fn subscribers_see_every_dispatched_intent() {
    let mut store = store_with([line_item("sku-1", 1999, 1).unwrap()]);
    let quantities = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&quantities);
    let subscription = store.subscribe(move |state: &CartState| {
        sink.borrow_mut().push(state.total_quantity());
    });

    let mut nav = CountingNavigator::default();
    let mut page = ShoppingPage::default();
    let sku1 = LineItemId::from("sku-1");

    page.handle(PageIntent::Increment(sku1.clone()), &mut store, &mut nav);
    page.handle(
        PageIntent::SelectShipping(ShippingOption::ExpressDelivery),
        &mut store,
        &mut nav,
    );
    store.dispatch(CartCommand::Add(line_item("sku-2", 100, 5).unwrap()));
    page.handle(PageIntent::Remove(LineItemId::from("missing")), &mut store, &mut nav);
    assert!(store.unsubscribe(subscription));
    page.handle(PageIntent::Remove(sku1), &mut store, &mut nav);

    // Shipping changes are page-local and never reach the store.
    assert_eq!(*quantities.borrow(), vec![2, 7, 7]);
    assert_eq!(store.state().total_quantity(), 5);
}

#[test]
fn scripted_session_from_yaml() {
    let cart: CartState = serde_json::from_str(
        r#"[
            {"id": "sku-1", "name": "Pineapple", "image": "/img/p.png", "price": "19.99", "quantity": 2},
            {"id": "sku-2", "name": "Mango", "price": "3.50", "quantity": 1}
        ]"#,
    )
    .unwrap();
    let script: Vec<PageIntent> = serde_yaml::from_str(
        "
- intent: remove
  value: sku-2
- intent: select_shipping
  value: express
- intent: enter_discount_code
  value: DISCOUNT10
",
    )
    .unwrap();

    let mut store = cart_checkout_core::CartStore::new(cart);
    let mut nav = CountingNavigator::default();
    let mut page = ShoppingPage::default();
    for intent in script {
        page.handle(intent, &mut store, &mut nav);
    }

    let summary = page.view(store.state()).summary.unwrap();
    assert_eq!(summary.item_count, 2);
    assert_eq!(summary.subtotal, "$39.98");
    assert_eq!(summary.selected_shipping().unwrap().option, ShippingOption::ExpressDelivery);
    assert_eq!(summary.total, "$39.98");
}
