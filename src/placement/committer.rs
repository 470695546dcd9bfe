//! The only writing stage: persist the order, then apply the guarded stock decrement.

use super::error::PlacementError;
use crate::model::{Customer, Order, OrderCreate, OrderLine, Product, ProductId, StockUpdate};
use crate::order_actor::OrderError;
use crate::ports::{OrderStore, ProductCatalog};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Persists the order and writes the decremented stock for every product it contains.
///
/// If the stock write fails for any reason the order is discarded again, so a failed
/// commit leaves neither an order nor a stock change behind. If the discard fails as well
/// the order stays stored and [`PlacementError::CommitIncomplete`] is returned instead of
/// the stock error, so a stock conflict in that state is never retried.
pub async fn commit<P, O>(
    catalog: &P,
    orders: &O,
    customer: Customer,
    lines: Vec<OrderLine>,
    observed: &HashMap<ProductId, Product>,
) -> Result<Order, PlacementError>
where
    P: ProductCatalog + ?Sized,
    O: OrderStore + ?Sized,
{
    let order = orders.create(OrderCreate { customer, lines }).await?;
    debug!(order_id = %order.id, "Order persisted");

    let written = match decrements(&order, observed) {
        Ok(updates) => catalog.update_quantity(updates).await.map_err(PlacementError::from),
        Err(e) => Err(PlacementError::from(e)),
    };

    if let Err(e) = written {
        if let Err(discard_error) = orders.discard(&order.id).await {
            warn!(order_id = %order.id, error = %discard_error, "Failed to discard order");
            return Err(PlacementError::CommitIncomplete {
                order_id: order.id,
                write_error: Box::new(e),
                discard_error,
            });
        }
        return Err(e);
    }
    Ok(order)
}

/// One stock write per distinct product in the persisted order:
/// `quantity = observed - ordered`, guarded by `expected = observed`.
pub fn decrements(
    order: &Order,
    observed: &HashMap<ProductId, Product>,
) -> Result<Vec<StockUpdate>, OrderError> {
    let mut updates: Vec<StockUpdate> = Vec::with_capacity(order.lines.len());
    for line in &order.lines {
        let slot = match updates.iter().position(|u| u.product_id == line.product_id) {
            Some(slot) => slot,
            None => {
                let product = observed.get(&line.product_id).ok_or_else(|| {
                    OrderError::InconsistentLines(format!(
                        "{} was not validated",
                        line.product_id
                    ))
                })?;
                updates.push(StockUpdate {
                    product_id: line.product_id.clone(),
                    expected: product.quantity,
                    quantity: product.quantity,
                });
                updates.len() - 1
            }
        };
        let update = &mut updates[slot];
        update.quantity = update.quantity.checked_sub(line.quantity).ok_or_else(|| {
            OrderError::InconsistentLines(format!("{} exceeds stock", line.product_id))
        })?;
    }
    Ok(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, OrderId};
    use rust_decimal_macros::dec;

    fn observed() -> HashMap<ProductId, Product> {
        [
            Product::new("P1".into(), "Widget", dec!(10.00), 5),
            Product::new("P2".into(), "Gadget", dec!(1.00), 3),
        ]
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect()
    }

    fn order(lines: &[(&str, u32)]) -> Order {
        Order {
            id: OrderId::from(1),
            customer_id: CustomerId::from("C1"),
            lines: lines
                .iter()
                .map(|(product, quantity)| OrderLine {
                    product_id: ProductId::from(*product),
                    quantity: *quantity,
                    price: dec!(1),
                })
                .collect(),
        }
    }

    #[test]
    fn test_one_update_per_product() {
        let order = order(&[("P1", 3), ("P2", 1), ("P1", 1)]);
        let updates = decrements(&order, &observed()).unwrap();
        assert_eq!(
            updates,
            vec![
                StockUpdate {
                    product_id: "P1".into(),
                    expected: 5,
                    quantity: 1,
                },
                StockUpdate {
                    product_id: "P2".into(),
                    expected: 3,
                    quantity: 2,
                },
            ]
        );
    }

    #[test]
    fn test_lines_outside_validation_are_rejected() {
        let unknown = decrements(&order(&[("P9", 1)]), &observed());
        assert!(matches!(unknown, Err(OrderError::InconsistentLines(_))));

        let too_many = decrements(&order(&[("P2", 4)]), &observed());
        assert!(matches!(too_many, Err(OrderError::InconsistentLines(_))));
    }
}
