//! Cart items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::content::Book;

/// A book in the cart with a quantity counter.
///
/// The store keeps at most one cart item per book id; adding an
/// already-present book increments the quantity instead of duplicating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub book: Book,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(book: Book) -> Self {
        CartItem { book, quantity: 1 }
    }

    /// Price × quantity for this line.
    pub fn line_total(&self) -> Decimal {
        self.book.price * Decimal::from(self.quantity)
    }
}
