//! In-memory cart: the mutable set of line items for one bill in progress.

use crate::models::{CartLine, MenuItem};

/// Owned by one application context; there is a single cart per session.
/// Every operation is total: invalid input degrades to a no-op or a
/// removal, never an error.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of `item`. A line with the same id is merged by
    /// incrementing its quantity; otherwise a fresh line starts at 1.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
            });
        }
    }

    /// Deletes the line with `id`; no-op if absent.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    /// Sets a line's quantity. A quantity <= 0 removes the line, keeping
    /// the quantity >= 1 invariant inside the engine instead of at every
    /// call site.
    pub fn set_quantity(&mut self, id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove(id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.price * l.quantity as f64)
            .sum()
    }
}
