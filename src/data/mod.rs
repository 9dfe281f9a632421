//! Repository layer.
//!
//! One repository per aggregate. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so the same methods run against the pooled
//! connection or inside a caller's open transaction; they never begin or
//! commit transactions themselves.

pub mod equipment;
pub mod expense;
pub mod invoice;
pub mod quotation;
pub mod rental;
