//! Checkout validation: customer name and phone number rules.

use thiserror::Error;

use lemonpos_core::ValueObject;

/// Required length of a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Why a checkout was refused.
///
/// Messages are shown to the cashier verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter the customer name to place the order")]
    EmptyName,
    #[error("please enter a valid 10-digit mobile number")]
    InvalidPhone,
    #[error("the cart is empty; add some items before placing an order")]
    EmptyCart,
}

/// Exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl ValueObject for PhoneNumber {}

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if is_valid_phone(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPhone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    phone: PhoneNumber,
}

impl ValueObject for Customer {}

impl Customer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }
}

/// No whitespace, signs or separators are tolerated.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Validate the checkout form.
///
/// The name is checked first (after trimming), then the phone number.
pub fn validate_customer(name: &str, phone: &str) -> Result<Customer, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let phone = PhoneNumber::parse(phone)?;

    Ok(Customer {
        name: name.to_string(),
        phone,
    })
}
