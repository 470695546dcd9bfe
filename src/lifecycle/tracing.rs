//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` fmt layer filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); actors tag their lines
//! with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown with the final store size
//! - **Entity Operations**: Create, Get, GetMany, Update, Delete, Action, BatchAction
//! - **Placements**: the `create_order` span with `customer_id` and the current `stage`
//! - **Errors**: rejected orders, stock conflicts and failed discards as `WARN`
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run          # full payloads
//! RUST_LOG=order_placement=debug,resource_actor=info cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**, the first demo order:
//!
//! ```text
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Batch ok entity_type="Product" size=1
//! INFO create_order{customer_id=C1 stage="done"}: Order placed order_id=order_1 total=30.00 attempt=1
//! ```
//!
//! Actor lines carry no span: each actor runs in its own task. The second order is
//! rejected at the stock boundary:
//!
//! ```text
//! WARN create_order{customer_id=C1 stage="validating"}: Order rejected attempt=1 error=Insufficient stock: P1 (requested 5, available 2)
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
