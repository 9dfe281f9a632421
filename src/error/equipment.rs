use thiserror::Error;

#[derive(Error, Debug)]
pub enum EquipmentError {
    #[error("Equipment {0} not found")]
    NotFound(i32),
}
