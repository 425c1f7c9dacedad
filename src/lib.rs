//! Restaurant billing and management core: persistent store, cart engine,
//! bill calculator, registries, and session gate. UI layers call into this
//! crate and display the results.

pub mod billing;
pub mod cart;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod session;
pub mod store;


use crate::billing::compute_bill;
use crate::cart::Cart;
use crate::error::{Error, Result};
use crate::models::{Bill, PaymentMethod};
use crate::store::Store;

/// One application context: the store plus the two explicitly-owned value
/// slots (current cart, pending bill). Construct one per session; nothing
/// in the crate is a process-wide singleton.
pub struct App {
    pub store: Store,
    pub cart: Cart,
    bill: Option<Bill>,
}

impl App {
    /// Wraps an initialized store. First-run seeding happens here.
    pub fn new(store: Store) -> Result<Self> {
        store.initialize()?;
        Ok(App {
            store,
            cart: Cart::new(),
            bill: None,
        })
    }

    /// Derives a bill from the current cart and stashes it as the pending
    /// bill. The cart is left untouched until payment completes.
    pub fn generate_bill(
        &mut self,
        discount_percent: f64,
        payment_method: PaymentMethod,
        customer_name: &str,
        table_number: &str,
    ) -> Result<&Bill> {
        let bill = compute_bill(
            self.cart.lines(),
            discount_percent,
            payment_method,
            customer_name,
            table_number,
        )?;
        Ok(&*self.bill.insert(bill))
    }

    pub fn pending_bill(&self) -> Option<&Bill> {
        self.bill.as_ref()
    }

    /// Settles the pending bill: returns it and clears both the bill slot
    /// and the cart.
    pub fn process_payment(&mut self) -> Result<Bill> {
        let bill = self
            .bill
            .take()
            .ok_or_else(|| Error::validation("no bill has been generated"))?;
        self.cart.clear();
        Ok(bill)
    }

    /// Drops the pending bill without settling it (navigation away from the
    /// bill view). The cart keeps its lines.
    pub fn discard_bill(&mut self) {
        self.bill = None;
    }
}
