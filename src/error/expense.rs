use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("Expense {0} not found")]
    NotFound(i32),
}
