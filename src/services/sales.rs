use chrono::{Datelike, Local};
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{DailySale, NewDailySale};
use crate::services::employees;
use crate::store::{keys, Store};

pub fn list(store: &Store) -> Result<Vec<DailySale>> {
    store.collection(keys::SALES)
}

/// Records a day's sales. Amount and headcount must be non-negative.
pub fn add(store: &Store, new: NewDailySale) -> Result<DailySale> {
    if new.amount < 0.0 {
        return Err(Error::invalid_amount("please enter a valid sale amount"));
    }
    if new.employees_present < 0 {
        return Err(Error::invalid_amount(
            "please enter a valid number of employees present",
        ));
    }

    let sale = DailySale {
        id: store.next_id()?,
        date: new.date,
        amount: new.amount,
        employees_present: new.employees_present,
        notes: new.notes,
    };

    let mut sales: Vec<DailySale> = store.collection(keys::SALES)?;
    sales.push(sale.clone());
    store.put_collection(keys::SALES, &sales)?;

    info!(id = %sale.id, date = %sale.date, amount = sale.amount, "sales record added");
    Ok(sale)
}

/// Removes the record with `id`; no-op if absent.
pub fn remove(store: &Store, id: &str) -> Result<()> {
    let mut sales: Vec<DailySale> = store.collection(keys::SALES)?;
    sales.retain(|s| s.id != id);
    store.put_collection(keys::SALES, &sales)?;
    Ok(())
}

/// Sum over every recorded sale.
pub fn all_time_total(store: &Store) -> Result<f64> {
    let sales: Vec<DailySale> = store.collection(keys::SALES)?;
    Ok(sales.iter().map(|s| s.amount).sum())
}

/// Sum of sales whose date falls in the given calendar month.
pub fn monthly_total_for(store: &Store, year: i32, month: u32) -> Result<f64> {
    let sales: Vec<DailySale> = store.collection(keys::SALES)?;
    Ok(sales
        .iter()
        .filter(|s| s.date.year() == year && s.date.month() == month)
        .map(|s| s.amount)
        .sum())
}

/// Current-calendar-month sales total.
pub fn monthly_total(store: &Store) -> Result<f64> {
    let today = Local::now().date_naive();
    monthly_total_for(store, today.year(), today.month())
}

/// Monthly sales minus the total salary expense for the given month.
pub fn monthly_profit_for(store: &Store, year: i32, month: u32) -> Result<f64> {
    Ok(monthly_total_for(store, year, month)? - employees::total_salary_expense(store)?)
}

/// Current-month profit.
pub fn monthly_profit(store: &Store) -> Result<f64> {
    let today = Local::now().date_naive();
    monthly_profit_for(store, today.year(), today.month())
}
