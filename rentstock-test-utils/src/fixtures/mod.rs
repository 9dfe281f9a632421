pub mod equipment;
pub mod invoice;
