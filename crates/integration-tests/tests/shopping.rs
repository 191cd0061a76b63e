//! End-to-end shopping flow: browse, fill the cart, check out, review orders.

#![allow(clippy::unwrap_used)]

use demo_smoke_core::{OrderStatus, OrderType, ProductCategory, ProductId};
use demo_smoke_integration_tests::TestContext;
use demo_smoke_storefront::AppError;
use demo_smoke_storefront::checkout::{CheckoutError, DetailsForm};
use demo_smoke_storefront::models::CustomerInfo;
use demo_smoke_storefront::storage::KeyValueStore;

fn contact() -> CustomerInfo {
    CustomerInfo {
        first_name: "Demo".to_string(),
        last_name: "User".to_string(),
        email: "demo@example.com".to_string(),
        phone: "(555) 123-4567".to_string(),
    }
}

fn pickup_at(time: &str) -> DetailsForm {
    DetailsForm {
        order_type: OrderType::Pickup,
        pickup_time: Some(time.to_string()),
    }
}

#[test]
fn test_catalog_browsing() {
    let ctx = TestContext::new().unwrap();
    let catalog = ctx.shop.catalog();

    assert_eq!(catalog.products().len(), 13);
    let featured: Vec<_> = catalog.featured().map(|p| p.id.as_str()).collect();
    assert_eq!(
        featured,
        ["vape-001", "vape-002", "glass-001", "acc-001", "cbd-001"]
    );

    let papers = ctx.shop.category("papers").unwrap();
    assert_eq!(papers, ProductCategory::Papers);
    assert_eq!(catalog.by_category(papers).count(), 2);

    assert!(catalog.search("   ").is_empty());
    assert!(!catalog.search("GRINDER").is_empty());
}

#[test]
fn test_cart_scenario() {
    let ctx = TestContext::new().unwrap();
    let id = ProductId::new("acc-002");

    let cart = ctx.shop.add_to_cart(&id, 2).unwrap();
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total().to_string(), "$39.98");

    let cart = ctx.shop.add_to_cart(&id, 1).unwrap();
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total().to_string(), "$59.97");

    let cart = ctx.shop.cart().set_quantity(&id, 0).unwrap();
    assert!(cart.is_empty());
    assert!(cart.total().is_zero());
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn test_checkout_places_order_and_clears_cart() {
    let ctx = TestContext::new().unwrap();
    let user = ctx.sign_in_demo().unwrap();

    ctx.shop.add_to_cart(&ProductId::new("vape-001"), 2).unwrap();
    ctx.shop.add_to_cart(&ProductId::new("paper-001"), 1).unwrap();

    let summary = ctx.shop.checkout().summary().unwrap();
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.subtotal.to_string(), "$53.97");
    assert_eq!(summary.tax.to_string(), "$4.32");
    assert_eq!(summary.total.to_string(), "$58.29");

    let order = ctx
        .shop
        .checkout()
        .submit(contact(), &pickup_at("14:00"))
        .unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.user_id, user.id);
    assert_eq!(order.total.to_string(), "$53.97");
    assert_eq!(order.item_count(), 3);
    assert_eq!(order.pickup_time.as_deref(), Some("2:00 PM"));
    assert_eq!(order.short_id().len(), 8);

    assert!(ctx.shop.cart().load().unwrap().is_empty());

    let history = ctx.shop.orders().user_orders(&user.id).unwrap();
    assert_eq!(history, vec![order]);
}

#[test]
fn test_order_snapshot_survives_cart_changes() {
    let ctx = TestContext::new().unwrap();
    ctx.sign_in_demo().unwrap();
    ctx.shop.add_to_cart(&ProductId::new("cbd-002"), 1).unwrap();

    let order = ctx
        .shop
        .checkout()
        .submit(
            contact(),
            &DetailsForm {
                order_type: OrderType::Delivery,
                pickup_time: Some("14:00".to_string()),
            },
        )
        .unwrap();
    assert_eq!(order.order_type, OrderType::Delivery);
    assert_eq!(order.pickup_time, None);

    ctx.shop.add_to_cart(&ProductId::new("cbd-002"), 4).unwrap();
    let stored = ctx.shop.orders().user_orders(&order.user_id).unwrap();
    assert_eq!(stored.first().map(|o| o.item_count()), Some(1));
}

#[test]
fn test_checkout_refusals() {
    let ctx = TestContext::new().unwrap();
    ctx.shop.age_gate().confirm().unwrap();
    ctx.shop.add_to_cart(&ProductId::new("lighter-001"), 1).unwrap();

    let err = ctx
        .shop
        .checkout()
        .submit(contact(), &pickup_at("14:00"))
        .unwrap_err();
    assert!(matches!(err, CheckoutError::NotSignedIn));
    assert_eq!(
        AppError::from(err).user_message(),
        "Must be signed in to place order"
    );

    ctx.sign_in_demo().unwrap();
    let err = ctx
        .shop
        .checkout()
        .submit(contact(), &pickup_at("3:00 AM"))
        .unwrap_err();
    assert!(matches!(err, CheckoutError::Invalid(_)));

    ctx.shop.cart().clear().unwrap();
    let err = ctx
        .shop
        .checkout()
        .submit(contact(), &pickup_at("14:00"))
        .unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCart));

    assert_eq!(ctx.shop.local().get("demo_smoke_orders").unwrap(), None);
}
