//! Input and result types exchanged with callers.
//!
//! The HTTP layer that embeds this crate deserializes request bodies into the
//! `New*` / `*Patch` structs here and hands them to the service layer; the
//! `*WithItems` structs are the fully loaded entity graphs the services
//! return. Patch structs use `None` to mean "leave unchanged".

pub mod equipment;
pub mod expense;
pub mod invoice;
pub mod quotation;
