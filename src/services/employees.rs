use chrono::Local;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Employee, NewEmployee};
use crate::store::{keys, Store};

pub fn list(store: &Store) -> Result<Vec<Employee>> {
    store.collection(keys::EMPLOYEES)
}

/// Adds an employee with a store-assigned id and today's date as the join
/// date. Salary must be strictly positive.
pub fn add(store: &Store, new: NewEmployee) -> Result<Employee> {
    if new.name.trim().is_empty() || new.position.trim().is_empty() {
        return Err(Error::validation("please fill in all fields"));
    }
    if new.salary <= 0.0 {
        return Err(Error::invalid_amount("please enter a valid salary amount"));
    }

    let employee = Employee {
        id: store.next_id()?,
        name: new.name,
        position: new.position,
        salary: new.salary,
        join_date: Local::now().date_naive(),
    };

    let mut employees: Vec<Employee> = store.collection(keys::EMPLOYEES)?;
    employees.push(employee.clone());
    store.put_collection(keys::EMPLOYEES, &employees)?;

    info!(id = %employee.id, name = %employee.name, "employee added");
    Ok(employee)
}

/// Removes the employee with `id`; no-op if absent.
pub fn remove(store: &Store, id: &str) -> Result<()> {
    let mut employees: Vec<Employee> = store.collection(keys::EMPLOYEES)?;
    employees.retain(|e| e.id != id);
    store.put_collection(keys::EMPLOYEES, &employees)?;
    Ok(())
}

/// Sum of all monthly salaries. Computed on read, never stored.
pub fn total_salary_expense(store: &Store) -> Result<f64> {
    let employees: Vec<Employee> = store.collection(keys::EMPLOYEES)?;
    Ok(employees.iter().map(|e| e.salary).sum())
}

/// Mean salary, 0 when there are no employees.
pub fn average_salary(store: &Store) -> Result<f64> {
    let employees: Vec<Employee> = store.collection(keys::EMPLOYEES)?;
    if employees.is_empty() {
        return Ok(0.0);
    }
    let total: f64 = employees.iter().map(|e| e.salary).sum();
    Ok(total / employees.len() as f64)
}
