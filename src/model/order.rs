use super::{Customer, CustomerId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Order identifier, always generated by the order actor (`order_1`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(format!("order_{}", id))
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One requested `(product, quantity)` pair, as a caller submits it.
///
/// On the wire the product id is named `id`:
///
/// ```json
/// { "id": "P1", "quantity": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLineRequest {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// The full input of `create_order`, for callers that parse requests from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: CustomerId,
    pub products: Vec<OrderLineRequest>,
}

/// A priced line of a placed order. `price` is the catalog price when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Decimal,
}

/// A placed order.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](resource_actor::ResourceActor); see
/// [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum()
    }
}

/// Payload for persisting an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_sums_line_prices() {
        let order = Order {
            id: OrderId::from(1),
            customer_id: CustomerId::from("C1"),
            lines: vec![
                OrderLine {
                    product_id: ProductId::from("P1"),
                    quantity: 3,
                    price: dec!(10.00),
                },
                OrderLine {
                    product_id: ProductId::from("P2"),
                    quantity: 2,
                    price: dec!(0.25),
                },
            ],
        };
        assert_eq!(order.id.as_str(), "order_1");
        assert_eq!(order.total(), dec!(30.50));
    }
}
