//! Turns validated request lines into priced order lines.

use crate::model::{OrderLine, OrderLineRequest, Product};

/// One [`OrderLine`] per validated line, priced at the catalog price read during validation.
pub fn build_lines(lines: &[(OrderLineRequest, Product)]) -> Vec<OrderLine> {
    lines
        .iter()
        .map(|(line, product)| OrderLine {
            product_id: line.product_id.clone(),
            quantity: line.quantity,
            price: product.price,
        })
        .collect()
}
