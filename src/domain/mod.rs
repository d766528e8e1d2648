//! Domain layer: strong types with validation and invariants (no I/O).

mod clock;
mod message;
mod response;
mod validation;
mod value;

pub use clock::{Clock, FixedClock, SystemClock};
pub use message::{Message, RecipientVariables};
pub use response::{CodeLookup, GatewayCode, GatewayError, ResponseCode, lookup};
pub use validation::ValidationError;
pub use value::{Recipient, ValidityPeriod};

#[cfg(test)]
mod tests {
    use time::Duration;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn recipient_rejects_empty() {
        assert!(matches!(
            Recipient::new("   "),
            Err(ValidationError::Empty {
                field: Recipient::FIELD
            })
        ));
    }

    #[test]
    fn fully_built_message_reports_assigned_values() {
        let first = Recipient::new("+391111111111").unwrap();
        let second = Recipient::new("+392222222222").unwrap();

        let mut message = Message::new();
        message
            .set_sender("ACME")
            .set_recipients([first.clone(), second.clone()])
            .set_text("Hello {name}")
            .set_user_reference("order-42")
            .add_recipient_variable(second.clone(), "name", "Bob")
            .unwrap()
            .set_validity_period(Some(Duration::minutes(60)))
            .unwrap();

        assert_eq!(message.sender(), Some("ACME"));
        assert_eq!(message.recipients(), &[first, second]);
        assert_eq!(
            message
                .recipient_variables_for("+392222222222")
                .and_then(|vars| vars.get("name"))
                .map(String::as_str),
            Some("Bob")
        );
        assert_eq!(message.text(), Some("Hello {name}"));
        assert_eq!(message.user_reference(), Some("order-42"));
        assert_eq!(message.delivery_start(), None);
        assert_eq!(message.validity_period().map(ValidityPeriod::minutes), Some(60));
        assert!(message.has_recipients());
        assert!(message.has_recipient_variables());
    }

    #[test]
    fn too_short_validity_period_leaves_message_untouched() {
        let mut message = Message::new();
        let err = message
            .set_validity_period(Some(Duration::minutes(4)))
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValidityPeriod { .. }));
        assert_eq!(message.validity_period(), None);
    }

    #[test]
    fn message_serializes_as_a_snapshot() {
        let clock = FixedClock::new(datetime!(2030-01-01 0:00 UTC));
        let mut message = Message::new();
        message
            .set_sender("ACME")
            .add_recipient(Recipient::new("+391111111111").unwrap())
            .set_text("hi")
            .set_delivery_start_with(&clock, Some(datetime!(2030-01-02 8:30 UTC)))
            .unwrap()
            .set_validity_period(Some(Duration::minutes(90)))
            .unwrap();

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sender": "ACME",
                "recipients": ["+391111111111"],
                "recipient_variables": {},
                "text": "hi",
                "user_reference": null,
                "delivery_start": "2030-01-02T08:30:00Z",
                "validity_period": 90
            })
        );
    }

    #[test]
    fn rejected_codes_map_through_the_catalog() {
        assert_eq!(
            lookup(30).known(),
            Some(ResponseCode::InsufficientCredit)
        );
        assert_eq!(lookup(9999), CodeLookup::Unknown(9999));
        assert_eq!(GatewayCode::new(25).known(), Some(ResponseCode::InvalidRecipient));
    }
}
