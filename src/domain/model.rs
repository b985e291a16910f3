use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// A catalog product. Display fields are carried through untouched; `extra`
/// keeps whatever else the upstream record contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    pub fn new(id: ProductId, title: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

/// One cart entry, persisted as the product record plus its `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartItem {
    /// The cart owns `amount`; an upstream field of the same name is dropped
    /// so the record never serializes the key twice.
    pub fn new(mut product: Product, amount: u32) -> Self {
        product.extra.remove("amount");
        Self { product, amount }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }
}

/// Ordered cart entries, unique by product id. Every mutation returns a new
/// cart so the caller decides when (and whether) to commit it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart keeping the first entry for each id. Entries with a zero
    /// amount are dropped.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut unique: Vec<CartItem> = Vec::with_capacity(items.len());
        for item in items {
            if item.amount == 0 {
                tracing::warn!("Dropping cart entry for product {} with amount 0", item.id());
            } else if unique.iter().any(|existing| existing.id() == item.id()) {
                tracing::warn!("Dropping duplicate cart entry for product {}", item.id());
            } else {
                unique.push(CartItem::new(item.product, item.amount));
            }
        }
        Self { items: unique }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    pub fn amount_of(&self, product_id: ProductId) -> Option<u32> {
        self.get(product_id).map(|item| item.amount)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Appends `product` with amount 1. An id already present is left as is.
    pub fn with_added(&self, product: Product) -> Self {
        let mut items = self.items.clone();
        if !self.contains(product.id) {
            items.push(CartItem::new(product, 1));
        }
        Self { items }
    }

    /// Sets the amount of the matching entry; unknown ids leave the cart unchanged.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id() == product_id {
                    CartItem {
                        product: item.product.clone(),
                        amount,
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self { items }
    }

    pub fn without(&self, product_id: ProductId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id() != product_id)
            .cloned()
            .collect();
        Self { items }
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

/// Request to set an absolute quantity. Zero or negative amounts are ignored
/// by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sneaker(id: ProductId, price: f64) -> Product {
        Product::new(id, format!("Tênis {}", id), price, format!("https://img/{}.jpg", id))
    }

    #[test]
    fn test_with_added_appends_in_order() {
        let cart = Cart::new().with_added(sneaker(3, 10.0)).with_added(sneaker(1, 5.0));

        let ids: Vec<_> = cart.iter().map(CartItem::id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(cart.amount_of(3), Some(1));
        assert_eq!(cart.amount_of(1), Some(1));
    }

    #[test]
    fn test_with_added_ignores_existing_id() {
        let cart = Cart::new().with_added(sneaker(1, 5.0)).with_amount(1, 4);
        let again = cart.with_added(sneaker(1, 5.0));
        assert_eq!(again, cart);
    }

    #[test]
    fn test_with_amount_on_unknown_id_is_noop() {
        let cart = Cart::new().with_added(sneaker(1, 5.0));
        assert_eq!(cart.with_amount(42, 3), cart);
    }

    #[test]
    fn test_without_preserves_order_of_others() {
        let cart = Cart::new()
            .with_added(sneaker(1, 5.0))
            .with_added(sneaker(2, 5.0))
            .with_added(sneaker(3, 5.0));

        let ids: Vec<_> = cart.without(2).iter().map(CartItem::id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_totals() {
        let cart = Cart::new()
            .with_added(sneaker(1, 139.9))
            .with_added(sneaker(2, 100.0))
            .with_amount(2, 3);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 4);
        assert!((cart.total() - 439.9).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_as_flat_records() {
        let cart = Cart::new().with_added(sneaker(7, 179.9)).with_amount(7, 2);
        let json = serde_json::to_value(&cart).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "id": 7,
                "title": "Tênis 7",
                "price": 179.9,
                "image": "https://img/7.jpg",
                "amount": 2
            }])
        );
    }

    #[test]
    fn test_unknown_product_fields_round_trip() {
        let raw = r#"[{"id":1,"title":"Tênis","price":10.0,"image":"x","brand":"Rocket","amount":2}]"#;
        let cart: Cart = serde_json::from_str(raw).unwrap();

        assert_eq!(cart.amount_of(1), Some(2));
        assert_eq!(
            cart.get(1).unwrap().product.extra.get("brand"),
            Some(&serde_json::json!("Rocket"))
        );
        let back = serde_json::to_value(&cart).unwrap();
        assert_eq!(back[0]["brand"], "Rocket");
    }

    #[test]
    fn test_upstream_amount_field_is_replaced_by_cart_amount() {
        let upstream: Product = serde_json::from_str(
            r#"{"id":1,"title":"Tênis","price":10.0,"image":"x","amount":10}"#,
        )
        .unwrap();
        assert!(upstream.extra.contains_key("amount"));

        let cart = Cart::new().with_added(upstream);
        let payload = serde_json::to_string(&cart).unwrap();
        assert_eq!(payload.matches("\"amount\"").count(), 1);

        let reloaded: Cart = serde_json::from_str(&payload).unwrap();
        assert_eq!(reloaded, cart);
        assert_eq!(reloaded.amount_of(1), Some(1));
    }

    #[test]
    fn test_deserialize_enforces_unique_ids_and_positive_amounts() {
        let raw = r#"[
            {"id":1,"title":"a","price":1.0,"image":"","amount":2},
            {"id":2,"title":"b","price":1.0,"image":"","amount":0},
            {"id":1,"title":"a","price":1.0,"image":"","amount":9}
        ]"#;
        let cart: Cart = serde_json::from_str(raw).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.amount_of(1), Some(2));
        assert!(!cart.contains(2));
    }

    #[test]
    fn test_from_items_keeps_first_duplicate() {
        let items = vec![
            CartItem { product: sneaker(1, 1.0), amount: 2 },
            CartItem { product: sneaker(2, 1.0), amount: 1 },
            CartItem { product: sneaker(1, 1.0), amount: 9 },
        ];
        let cart = Cart::from_items(items);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.amount_of(1), Some(2));
    }
}
