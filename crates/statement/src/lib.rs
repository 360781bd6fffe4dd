//! Invoice aggregation and statement rendering.
//!
//! Turns an invoice plus a play lookup into a [`StatementResult`] using the
//! pricing engine, and renders that result as the plain-text statement.

pub mod invoice;
pub mod render;
pub mod statement;

pub use invoice::{Invoice, Performance};
pub use render::render_plain_text;
pub use statement::{LineItem, StatementResult, compute_statement};
