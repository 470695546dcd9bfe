//! Demo: seeds customer `C1` and product `P1` (10.00, 5 in stock), orders 3 units, then
//! tries to order the remaining stock in full.

use order_placement::lifecycle::{setup_tracing, OrderSystem, OrderSystemConfig};
use order_placement::model::{CustomerCreate, OrderLineRequest, ProductCreate};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = OrderSystemConfig::load().map_err(|e| e.to_string())?;
    let system = OrderSystem::with_config(config);

    let span = tracing::info_span!("seeding");
    async {
        let customer = CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        system
            .customer_client
            .register_with_id("C1".into(), customer)
            .await
            .map_err(|e| e.to_string())?;

        let product = ProductCreate {
            name: "Widget".to_string(),
            price: Decimal::new(1000, 2),
            quantity: 5,
        };
        system
            .product_client
            .create_product_with_id("P1".into(), product)
            .await
            .map_err(|e| e.to_string())?;
        info!("Seeded customer C1 and product P1");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    for quantity in [3, 5] {
        match system
            .create_order("C1".into(), vec![OrderLineRequest::new("P1", quantity)])
            .await
        {
            Ok(order) => {
                info!(order_id = %order.id, total = %order.total(), "Order processed successfully")
            }
            Err(e) if e.is_user_facing() => info!(error = %e, quantity, "Order refused"),
            Err(e) => error!(error = %e, "Order processing failed"),
        }
    }

    let stock = system
        .product_client
        .check_stock("P1".into())
        .await
        .map_err(|e| e.to_string())?;
    info!(stock, "Remaining stock for P1");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
