//! Request checks and the read-only validation stage.

use super::error::{PlacementError, Shortfall};
use crate::model::{Customer, CustomerId, OrderLineRequest, Product, ProductId};
use crate::ports::{CustomerReader, ProductCatalog};
use std::collections::HashMap;
use tracing::debug;

/// What validation observed: the customer, and each request line next to the catalog
/// entry it was checked against, in request order.
#[derive(Debug)]
pub struct Validated {
    pub customer: Customer,
    pub lines: Vec<(OrderLineRequest, Product)>,
}

impl Validated {
    /// The observed catalog entries keyed by id.
    pub fn observed(&self) -> HashMap<ProductId, Product> {
        self.lines
            .iter()
            .map(|(_, product)| (product.id.clone(), product.clone()))
            .collect()
    }
}

/// Rejects malformed requests and merges duplicate product ids.
///
/// Quantities of repeated ids are summed into the first occurrence, so every later stage
/// sees exactly one line per distinct product, in request order.
pub fn normalize(
    customer_id: &CustomerId,
    products: Vec<OrderLineRequest>,
) -> Result<Vec<OrderLineRequest>, PlacementError> {
    if customer_id.is_empty() {
        return Err(PlacementError::InvalidRequest("customer id is empty".into()));
    }
    if products.is_empty() {
        return Err(PlacementError::InvalidRequest("no products requested".into()));
    }

    let mut merged: Vec<OrderLineRequest> = Vec::with_capacity(products.len());
    for line in products {
        if line.quantity == 0 {
            return Err(PlacementError::InvalidRequest(format!(
                "quantity for {} must be positive",
                line.product_id
            )));
        }
        match merged.iter_mut().find(|m| m.product_id == line.product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.checked_add(line.quantity).ok_or_else(|| {
                    PlacementError::InvalidRequest(format!(
                        "quantity for {} is too large",
                        line.product_id
                    ))
                })?;
            }
            None => merged.push(line),
        }
    }
    Ok(merged)
}

/// Confirms the customer exists, every product exists, and each product's stock is
/// strictly greater than the requested quantity. Performs no writes.
///
/// `lines` must already be [`normalize`]d.
pub async fn validate<C, P>(
    customers: &C,
    catalog: &P,
    customer_id: &CustomerId,
    lines: &[OrderLineRequest],
) -> Result<Validated, PlacementError>
where
    C: CustomerReader + ?Sized,
    P: ProductCatalog + ?Sized,
{
    let customer = customers
        .find_by_id(customer_id)
        .await?
        .ok_or_else(|| PlacementError::CustomerNotFound(customer_id.clone()))?;

    let ids: Vec<ProductId> = lines.iter().map(|line| line.product_id.clone()).collect();
    let found: HashMap<ProductId, Product> = catalog
        .find_all_by_id(&ids)
        .await?
        .into_iter()
        .map(|product| (product.id.clone(), product))
        .collect();

    let mut matched = Vec::with_capacity(lines.len());
    let mut missing = Vec::new();
    for line in lines {
        match found.get(&line.product_id) {
            Some(product) => matched.push((line.clone(), product.clone())),
            None => missing.push(line.product_id.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(PlacementError::ProductNotFound(missing));
    }

    // Ordering the exact remaining stock is rejected too.
    let shortfalls: Vec<Shortfall> = matched
        .iter()
        .filter(|(line, product)| product.quantity <= line.quantity)
        .map(|(line, product)| Shortfall {
            product_id: line.product_id.clone(),
            requested: line.quantity,
            available: product.quantity,
        })
        .collect();
    if !shortfalls.is_empty() {
        return Err(PlacementError::InsufficientStock(shortfalls));
    }

    debug!(products = matched.len(), "Validated");
    Ok(Validated {
        customer,
        lines: matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer_actor::CustomerError;
    use crate::model::StockUpdate;
    use crate::product_actor::ProductError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct Catalog(Vec<Product>);

    #[async_trait]
    impl CustomerReader for Catalog {
        async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
            Ok(Some(Customer::new(id.clone(), "Alice", "alice@example.com")))
        }
    }

    #[async_trait]
    impl ProductCatalog for Catalog {
        async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
            Ok(self
                .0
                .iter()
                .filter(|product| ids.contains(&product.id))
                .cloned()
                .collect())
        }

        async fn update_quantity(&self, _updates: Vec<StockUpdate>) -> Result<(), ProductError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_validated_lines_follow_request_order() {
        let catalog = Catalog(vec![
            Product::new("P1".into(), "Widget", dec!(10.00), 5),
            Product::new("P2".into(), "Gadget", dec!(2.50), 9),
        ]);
        let lines = vec![OrderLineRequest::new("P2", 4), OrderLineRequest::new("P1", 3)];

        let validated = validate(&catalog, &catalog, &"C1".into(), &lines)
            .await
            .unwrap();

        let paired: Vec<(&str, &str)> = validated
            .lines
            .iter()
            .map(|(line, product)| (line.product_id.as_str(), product.id.as_str()))
            .collect();
        assert_eq!(paired, vec![("P2", "P2"), ("P1", "P1")]);
        assert_eq!(validated.observed().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_products_keep_request_order() {
        let catalog = Catalog(vec![Product::new("P1".into(), "Widget", dec!(10.00), 5)]);
        let lines = vec![
            OrderLineRequest::new("P3", 1),
            OrderLineRequest::new("P1", 1),
            OrderLineRequest::new("P2", 1),
        ];

        let err = validate(&catalog, &catalog, &"C1".into(), &lines)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            PlacementError::ProductNotFound(vec!["P3".into(), "P2".into()])
        );
    }

    #[test]
    fn test_normalize_merges_duplicates_in_order() {
        let lines = normalize(
            &CustomerId::from("C1"),
            vec![
                OrderLineRequest::new("P2", 1),
                OrderLineRequest::new("P1", 2),
                OrderLineRequest::new("P2", 3),
            ],
        )
        .unwrap();
        assert_eq!(
            lines,
            vec![OrderLineRequest::new("P2", 4), OrderLineRequest::new("P1", 2)]
        );
    }

    #[test]
    fn test_normalize_rejects_malformed_requests() {
        let empty_customer =
            normalize(&CustomerId::from(""), vec![OrderLineRequest::new("P1", 1)]);
        assert!(matches!(
            empty_customer,
            Err(PlacementError::InvalidRequest(_))
        ));

        let no_lines = normalize(&CustomerId::from("C1"), vec![]);
        assert!(matches!(no_lines, Err(PlacementError::InvalidRequest(_))));

        let zero = normalize(
            &CustomerId::from("C1"),
            vec![OrderLineRequest::new("P1", 1), OrderLineRequest::new("P2", 0)],
        );
        assert!(matches!(zero, Err(PlacementError::InvalidRequest(_))));

        let overflow = normalize(
            &CustomerId::from("C1"),
            vec![
                OrderLineRequest::new("P1", u32::MAX),
                OrderLineRequest::new("P1", 1),
            ],
        );
        assert!(matches!(overflow, Err(PlacementError::InvalidRequest(_))));
    }
}
