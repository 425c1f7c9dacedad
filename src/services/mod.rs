pub mod employees;
pub mod menu;
pub mod sales;
pub mod users;
