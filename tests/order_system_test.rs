//! End-to-end placements against running actors.

use order_placement::lifecycle::{OrderSystem, OrderSystemConfig};
use order_placement::model::{
    CreateOrderRequest, CustomerCreate, OrderLine, OrderLineRequest, ProductCreate,
    ProductUpdate,
};
use order_placement::placement::{PlacementError, Shortfall};
use resource_actor::ActorClient;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

async fn seeded(stock: &[(&str, Decimal, u32)]) -> OrderSystem {
    let system = OrderSystem::new();
    system
        .customer_client
        .register_with_id(
            "C1".into(),
            CustomerCreate {
                name: "Alice".into(),
                email: "alice@example.com".into(),
            },
        )
        .await
        .unwrap();
    for (id, price, quantity) in stock {
        system
            .product_client
            .create_product_with_id(
                (*id).into(),
                ProductCreate {
                    name: format!("Product {}", id),
                    price: *price,
                    quantity: *quantity,
                },
            )
            .await
            .unwrap();
    }
    system
}

#[tokio::test]
async fn test_order_within_stock() {
    let system = seeded(&[("P1", dec!(10.00), 5)]).await;

    let order = system
        .create_order("C1".into(), vec![OrderLineRequest::new("P1", 3)])
        .await
        .unwrap();

    assert_eq!(order.customer_id.as_str(), "C1");
    assert_eq!(
        order.lines,
        vec![OrderLine {
            product_id: "P1".into(),
            quantity: 3,
            price: dec!(10.00),
        }]
    );
    assert_eq!(order.total(), dec!(30.00));
    assert_eq!(system.product_client.check_stock("P1".into()).await, Ok(2));

    let stored = system.order_client.get(order.id.clone()).await.unwrap();
    assert_eq!(stored, Some(order));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_of_exact_stock_is_refused() {
    let system = seeded(&[("P1", dec!(10.00), 5)]).await;

    let result = system
        .create_order("C1".into(), vec![OrderLineRequest::new("P1", 5)])
        .await;

    let err = result.unwrap_err();
    assert_eq!(
        err,
        PlacementError::InsufficientStock(vec![Shortfall {
            product_id: "P1".into(),
            requested: 5,
            available: 5,
        }])
    );
    assert!(err.is_user_facing());
    assert_eq!(system.product_client.check_stock("P1".into()).await, Ok(5));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_price_change_does_not_touch_placed_order() {
    let system = seeded(&[("P1", dec!(10.00), 5)]).await;

    let order = system
        .create_order("C1".into(), vec![OrderLineRequest::new("P1", 1)])
        .await
        .unwrap();
    system
        .product_client
        .update_product(
            "P1".into(),
            ProductUpdate {
                price: Some(dec!(12.50)),
                quantity: None,
            },
        )
        .await
        .unwrap();

    let stored = system.order_client.get(order.id).await.unwrap().unwrap();
    assert_eq!(stored.lines[0].price, dec!(10.00));

    let next = system
        .create_order("C1".into(), vec![OrderLineRequest::new("P1", 1)])
        .await
        .unwrap();
    assert_eq!(next.lines[0].price, dec!(12.50));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_decrement_once_per_product() {
    let system = seeded(&[("P1", dec!(10.00), 10), ("P2", dec!(0.99), 4)]).await;

    let order = system
        .create_order(
            "C1".into(),
            vec![
                OrderLineRequest::new("P1", 2),
                OrderLineRequest::new("P2", 3),
                OrderLineRequest::new("P1", 5),
            ],
        )
        .await
        .unwrap();

    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines[0].quantity, 7);
    assert_eq!(order.total(), dec!(72.97));
    assert_eq!(system.product_client.check_stock("P1".into()).await, Ok(3));
    assert_eq!(system.product_client.check_stock("P2".into()).await, Ok(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejections_leave_stock_and_orders_untouched() {
    let system = seeded(&[("P1", dec!(10.00), 5)]).await;

    let unknown_customer = system
        .create_order("C9".into(), vec![OrderLineRequest::new("P1", 1)])
        .await;
    assert_eq!(
        unknown_customer,
        Err(PlacementError::CustomerNotFound("C9".into()))
    );

    let unknown_product = system
        .create_order(
            "C1".into(),
            vec![OrderLineRequest::new("P1", 1), OrderLineRequest::new("P404", 1)],
        )
        .await;
    assert_eq!(
        unknown_product,
        Err(PlacementError::ProductNotFound(vec!["P404".into()]))
    );

    assert_eq!(system.product_client.check_stock("P1".into()).await, Ok(5));
    // The first order id was never handed out.
    assert_eq!(system.order_client.get("order_1".into()).await, Ok(None));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_never_oversell() {
    let system = seeded(&[("P1", dec!(10.00), 10)]).await;

    let tasks: Vec<_> = (0..2)
        .map(|_| {
            let placement = system.placement().clone();
            tokio::spawn(async move {
                placement
                    .create_order("C1".into(), vec![OrderLineRequest::new("P1", 6)])
                    .await
            })
        })
        .collect();

    let mut placed = Vec::new();
    let mut refused = Vec::new();
    for task in tasks {
        match task.await.unwrap() {
            Ok(order) => placed.push(order),
            Err(e) => refused.push(e),
        }
    }

    assert_eq!(placed.len(), 1);
    assert_eq!(
        refused,
        vec![PlacementError::InsufficientStock(vec![Shortfall {
            product_id: "P1".into(),
            requested: 6,
            available: 4,
        }])]
    );
    assert_eq!(system.product_client.check_stock("P1".into()).await, Ok(4));

    // Only the winner's order is stored; a discarded loser leaves no trace.
    let winner = &placed[0];
    for n in 1..=3u32 {
        let stored = system.order_client.get(n.into()).await.unwrap();
        match stored {
            Some(order) => assert_eq!(&order, winner),
            None => continue,
        }
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_of_exact_stock_are_both_refused() {
    let system = seeded(&[("P1", dec!(10.00), 5)]).await;

    let tasks: Vec<_> = (0..2)
        .map(|_| {
            let placement = system.placement().clone();
            tokio::spawn(async move {
                placement
                    .create_order("C1".into(), vec![OrderLineRequest::new("P1", 5)])
                    .await
            })
        })
        .collect();

    let exact = Err(PlacementError::InsufficientStock(vec![Shortfall {
        product_id: "P1".into(),
        requested: 5,
        available: 5,
    }]));
    for task in tasks {
        assert_eq!(task.await.unwrap(), exact);
    }

    assert_eq!(system.product_client.check_stock("P1".into()).await, Ok(5));
    assert_eq!(system.order_client.get("order_1".into()).await, Ok(None));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_many_concurrent_orders_respect_stock() {
    let config = OrderSystemConfig {
        channel_capacity: 4,
        max_commit_attempts: 10,
    };
    let system = OrderSystem::with_config(config);
    system
        .customer_client
        .register_with_id(
            "C1".into(),
            CustomerCreate {
                name: "Alice".into(),
                email: "alice@example.com".into(),
            },
        )
        .await
        .unwrap();
    system
        .product_client
        .create_product_with_id(
            "P1".into(),
            ProductCreate {
                name: "Widget".into(),
                price: dec!(1.00),
                quantity: 21,
            },
        )
        .await
        .unwrap();

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let placement = system.placement().clone();
            tokio::spawn(async move {
                placement
                    .create_order("C1".into(), vec![OrderLineRequest::new("P1", 5)])
                    .await
            })
        })
        .collect();

    let mut placed = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => placed += 1,
            Err(e) => assert!(
                matches!(
                    e,
                    PlacementError::InsufficientStock(_) | PlacementError::CommitConflict { .. }
                ),
                "unexpected error: {}",
                e
            ),
        }
    }

    let stock = system.product_client.check_stock("P1".into()).await.unwrap();
    assert_eq!(stock, 21 - 5 * placed);
    // 21 -> 16 -> 11 -> 6 -> 1; the fifth order of 5 would need more than 5 in stock.
    assert!(placed <= 4);
    assert!(stock >= 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_parsed_request() {
    let system = seeded(&[("P1", dec!(10.00), 5)]).await;

    let request: CreateOrderRequest = serde_json::from_str(
        r#"{ "customer_id": "C1", "products": [ { "id": "P1", "quantity": 3 } ] }"#,
    )
    .unwrap();
    assert_eq!(request.products, vec![OrderLineRequest::new("P1", 3)]);

    let order = system.placement().place(request).await.unwrap();
    assert_eq!(order.lines[0].quantity, 3);

    system.shutdown().await.unwrap();
}
