//! Shopping cart.
//!
//! [`Cart`] is a plain value: every operation borrows the current cart and
//! returns the next one, leaving the original untouched. `total` and
//! `item_count` are recomputed from the lines after every change and are
//! never edited directly, so they cannot drift from the lines they summarize.
//!
//! Persistence is layered on separately by [`CartService`].

mod service;

pub use service::CartService;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use demo_smoke_core::{Price, ProductId};

use crate::catalog::Product;

/// One product in the cart and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The shopper's cart.
///
/// Stored as `{ "items": [...], "total": "..", "itemCount": n }`. When read
/// back, lines with a zero quantity are dropped and the totals are derived
/// again from the remaining lines. A stored cart whose totals overflow fails
/// to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredCart")]
pub struct Cart {
    items: Vec<CartLine>,
    total: Price,
    item_count: u32,
}

/// Cart as found in storage, before the totals are trusted.
#[derive(Deserialize)]
struct StoredCart {
    #[serde(default)]
    items: Vec<CartLine>,
}

/// The lines' total price or unit count does not fit.
#[derive(Debug, Error)]
#[error("cart totals overflow")]
pub struct CartOverflow;

impl TryFrom<StoredCart> for Cart {
    type Error = CartOverflow;

    fn try_from(stored: StoredCart) -> Result<Self, Self::Error> {
        Self::from_lines(
            stored
                .items
                .into_iter()
                .filter(|line| line.quantity > 0)
                .collect(),
        )
        .ok_or(CartOverflow)
    }
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarize `items`, or `None` if the totals overflow.
    fn from_lines(items: Vec<CartLine>) -> Option<Self> {
        let mut total = Price::ZERO;
        let mut item_count = 0_u32;
        for line in &items {
            total = total.checked_add(line.product.price.checked_times(line.quantity)?)?;
            item_count = item_count.checked_add(line.quantity)?;
        }
        Some(Self {
            items,
            total,
            item_count,
        })
    }

    /// A cart of `items` if their totals fit, else this cart unchanged.
    fn or_unchanged(&self, items: Vec<CartLine>) -> Self {
        Self::from_lines(items).unwrap_or_else(|| {
            tracing::warn!("Cart change would overflow totals; ignored");
            self.clone()
        })
    }

    /// Lines in the order products were first added.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Sum of every line's price times quantity.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }

    /// Sum of every line's quantity.
    #[must_use]
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.items.iter().find(|line| &line.product.id == product_id)
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line for the same product is topped up; otherwise a new
    /// line is appended. Adding zero units changes nothing, as does a change
    /// whose totals would overflow.
    #[must_use]
    pub fn add_line(&self, product: &Product, quantity: u32) -> Self {
        if quantity == 0 {
            return self.clone();
        }

        let mut items = self.items.clone();
        match items.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => match line.quantity.checked_add(quantity) {
                Some(q) => line.quantity = q,
                None => return self.clone(),
            },
            None => items.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
        self.or_unchanged(items)
    }

    /// Drop the line for `product_id`. Absent products are ignored.
    #[must_use]
    pub fn remove_line(&self, product_id: &ProductId) -> Self {
        self.or_unchanged(
            self.items
                .iter()
                .filter(|line| &line.product.id != product_id)
                .cloned()
                .collect(),
        )
    }

    /// Replace the quantity for `product_id`.
    ///
    /// A quantity of zero removes the line. Products not in the cart are
    /// ignored.
    #[must_use]
    pub fn set_quantity(&self, product_id: &ProductId, quantity: u32) -> Self {
        if quantity == 0 {
            return self.remove_line(product_id);
        }

        let mut items = self.items.clone();
        if let Some(line) = items.iter_mut().find(|line| &line.product.id == product_id) {
            line.quantity = quantity;
        }
        self.or_unchanged(items)
    }

    /// An empty cart.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use demo_smoke_core::ProductCategory;
    use proptest::prelude::*;

    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, id.to_uppercase(), Price::from_cents(cents), ProductCategory::Accessories)
    }

    fn assert_consistent(cart: &Cart) {
        let total: Price = cart
            .items()
            .iter()
            .map(|l| l.product.price.times(l.quantity))
            .sum();
        let count: u32 = cart.items().iter().map(|l| l.quantity).sum();
        assert_eq!(cart.total(), total);
        assert_eq!(cart.item_count(), count);
        assert!(cart.items().iter().all(|l| l.quantity > 0));
    }

    #[test]
    fn test_add_update_remove_scenario() {
        let x = product("x", 1000);
        let cart = Cart::new();

        let cart = cart.add_line(&x, 2);
        assert_eq!(cart.total(), Price::from_cents(2000));
        assert_eq!(cart.item_count(), 2);

        let cart = cart.add_line(&x, 1);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total(), Price::from_cents(3000));
        assert_eq!(cart.item_count(), 3);

        let cart = cart.set_quantity(&x.id, 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_accumulates() {
        let p = product("p", 250);
        let twice = Cart::new().add_line(&p, 2).add_line(&p, 3);
        let once = Cart::new().add_line(&p, 5);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let p = product("p", 250);
        let cart = Cart::new().add_line(&p, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let a = product("a", 100);
        let b = product("b", 200);
        let cart = Cart::new().add_line(&a, 1).add_line(&b, 1).add_line(&a, 1);
        let ids: Vec<_> = cart.items().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let a = product("a", 100);
        let cart = Cart::new().add_line(&a, 1);
        let after = cart.remove_line(&ProductId::new("missing"));
        assert_eq!(after, cart);
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let a = product("a", 100);
        let cart = Cart::new().add_line(&a, 1);
        assert_eq!(cart.set_quantity(&ProductId::new("b"), 4), cart);
    }

    #[test]
    fn test_operations_do_not_mutate_input() {
        let a = product("a", 100);
        let cart = Cart::new().add_line(&a, 1);
        let _ = cart.add_line(&a, 5);
        let _ = cart.set_quantity(&a.id, 9);
        let _ = cart.remove_line(&a.id);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_invariant_holds_over_mixed_sequence() {
        let a = product("a", 199);
        let b = product("b", 2499);
        let c = product("c", 5);

        let mut cart = Cart::new();
        let steps: Vec<Box<dyn Fn(&Cart) -> Cart>> = vec![
            Box::new(|c0: &Cart| c0.add_line(&a, 3)),
            Box::new(|c0: &Cart| c0.add_line(&b, 1)),
            Box::new(|c0: &Cart| c0.set_quantity(&a.id, 7)),
            Box::new(|c0: &Cart| c0.add_line(&c, 12)),
            Box::new(|c0: &Cart| c0.remove_line(&b.id)),
            Box::new(|c0: &Cart| c0.set_quantity(&c.id, 0)),
            Box::new(|c0: &Cart| c0.add_line(&b, 2)),
        ];
        for step in &steps {
            cart = step(&cart);
            assert_consistent(&cart);
        }
        assert_eq!(cart.total(), Price::from_cents(199 * 7 + 2499 * 2));
    }

    #[test]
    fn test_cleared() {
        let a = product("a", 100);
        let cart = Cart::new().add_line(&a, 4).cleared();
        assert_eq!(cart, Cart::new());
    }

    #[test]
    fn test_serde_roundtrip() {
        let cart = Cart::new()
            .add_line(&product("a", 1999), 2)
            .add_line(&product("b", 350), 1);
        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_stored_totals_are_rederived() {
        let cart = Cart::new().add_line(&product("a", 1000), 2);
        let mut json = serde_json::to_value(&cart).unwrap();
        json["total"] = serde_json::json!("999.00");
        json["itemCount"] = serde_json::json!(42);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back.total(), Price::from_cents(2000));
        assert_eq!(back.item_count(), 2);
    }

    #[test]
    fn test_stored_zero_lines_are_dropped() {
        let cart = Cart::new()
            .add_line(&product("a", 1000), 2)
            .add_line(&product("b", 500), 1);
        let mut json = serde_json::to_value(&cart).unwrap();
        json["items"][1]["quantity"] = serde_json::json!(0);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back.items().len(), 1);
        assert_consistent(&back);
    }

    #[test]
    fn test_overflowing_add_is_ignored() {
        let huge = Product::new(
            "huge",
            "Huge",
            Price::new(rust_decimal::Decimal::MAX),
            ProductCategory::Glass,
        );
        let cart = Cart::new().add_line(&huge, 1);
        assert_eq!(cart.item_count(), 1);

        assert_eq!(cart.add_line(&huge, 1), cart);
        assert_eq!(cart.set_quantity(&huge.id, 3), cart);
        assert!(cart.remove_line(&huge.id).is_empty());
    }

    #[test]
    fn test_overflowing_stored_cart_fails_to_decode() {
        let cart = Cart::new().add_line(&product("a", 100), 2);
        let mut json = serde_json::to_value(&cart).unwrap();
        json["items"][0]["product"]["price"] =
            serde_json::json!("79228162514264337593543950335");

        assert!(serde_json::from_value::<Cart>(json).is_err());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, u32),
        Remove(usize),
        Set(usize, u32),
    }

    fn pool() -> Vec<Product> {
        vec![
            product("a", 199),
            product("b", 2499),
            product("c", 5),
            product("d", 12_999),
        ]
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..4usize, 0..20u32).prop_map(|(i, n)| Op::Add(i, n)),
            (0..5usize).prop_map(Op::Remove),
            (0..4usize, 0..20u32).prop_map(|(i, n)| Op::Set(i, n)),
        ]
    }

    fn apply(cart: &Cart, op: &Op, products: &[Product]) -> Cart {
        let missing = ProductId::new("missing");
        let id = |i: usize| products.get(i).map_or(&missing, |p| &p.id);
        match *op {
            Op::Add(i, n) => cart.add_line(&products[i], n),
            Op::Remove(i) => cart.remove_line(id(i)),
            Op::Set(i, n) => cart.set_quantity(id(i), n),
        }
    }

    proptest! {
        /// Totals match the lines after every step of any operation sequence.
        #[test]
        fn prop_invariant_holds_after_every_step(ops in prop::collection::vec(arb_op(), 0..40)) {
            let products = pool();
            let mut cart = Cart::new();
            for op in &ops {
                cart = apply(&cart, op, &products);

                let total: Price = cart.items().iter().map(CartLine::line_total).sum();
                let count: u32 = cart.items().iter().map(|l| l.quantity).sum();
                prop_assert_eq!(cart.total(), total);
                prop_assert_eq!(cart.item_count(), count);
                prop_assert!(cart.items().iter().all(|l| l.quantity > 0));
            }
        }

        /// Two adds of the same product equal one add of the combined quantity.
        #[test]
        fn prop_adds_accumulate(
            ops in prop::collection::vec(arb_op(), 0..20),
            i in 0..4usize,
            n1 in 0..50u32,
            n2 in 0..50u32,
        ) {
            let products = pool();
            let start = ops.iter().fold(Cart::new(), |c, op| apply(&c, op, &products));
            let p = &products[i];

            let twice = start.add_line(p, n1).add_line(p, n2);
            let once = start.add_line(p, n1 + n2);
            prop_assert_eq!(twice, once);
        }

        /// A stored cart reads back equal.
        #[test]
        fn prop_json_roundtrip(ops in prop::collection::vec(arb_op(), 0..30)) {
            let products = pool();
            let cart = ops.iter().fold(Cart::new(), |c, op| apply(&c, op, &products));

            let json = serde_json::to_string(&cart).unwrap();
            let back: Cart = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, cart);
        }
    }
}
