//! Sales module: cart, checkout validation and orders.
//!
//! This crate contains business rules for taking an order, implemented purely
//! as deterministic domain logic (no IO, no storage).

pub mod cart;
pub mod checkout;
pub mod order;

pub use cart::{Cart, CartLine, DEFAULT_MAX_LINE_QUANTITY};
pub use checkout::{
    Customer, PHONE_DIGITS, PhoneNumber, ValidationError, is_valid_phone, validate_customer,
};
pub use order::{Order, OrderItem};
