use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    /// A reservation asked for more units than the equipment has available.
    ///
    /// Carries the requested and available quantities so the caller can tell
    /// the customer exactly how short the request fell.
    #[error(
        "Insufficient stock for equipment {equipment_id} ({equipment_name}): \
         requested {requested}, available {available}"
    )]
    InsufficientStock {
        equipment_id: i32,
        equipment_name: String,
        requested: i32,
        available: i32,
    },
    /// The stock counters changed under us between read and write.
    ///
    /// The guarded counter update matched zero rows, meaning another
    /// transaction won the race on this equipment row. The unit of work was
    /// rolled back; retrying the whole operation is safe.
    #[error("Concurrent stock update detected for equipment {0}, retry the operation")]
    ConcurrentUpdate(i32),
}
