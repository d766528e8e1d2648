//! Typed message model and response-code catalog for the Skebby SMS gateway.
//!
//! A [`Message`] checks the gateway's submission constraints when values are assigned, so
//! an invalid delivery start or validity period never reaches the HTTP layer. After a
//! request completes, [`lookup`] translates the gateway's numeric error code into a
//! [`ResponseCode`].
//!
//! ```rust
//! use skebby::{CodeLookup, Message, Recipient, ResponseCode, lookup};
//!
//! # fn main() -> Result<(), skebby::ValidationError> {
//! let mut message = Message::new();
//! message
//!     .set_sender("ACME")
//!     .add_recipient(Recipient::new("+391111111111")?)
//!     .set_text("Hello {name}")
//!     .add_recipient_variable(Recipient::new("+391111111111")?, "name", "Bob")?;
//!
//! assert_eq!(lookup(30), CodeLookup::Known(ResponseCode::InsufficientCredit));
//! assert!(lookup(9999).is_unknown());
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod domain;

pub use domain::{
    Clock, CodeLookup, FixedClock, GatewayCode, GatewayError, Message, Recipient,
    RecipientVariables, ResponseCode, SystemClock, ValidationError, ValidityPeriod, lookup,
};
