use std::collections::BTreeMap;

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::validation::ValidationError;
use crate::domain::value::{Recipient, ValidityPeriod};

/// Template variables for a single recipient, keyed by variable name.
pub type RecipientVariables = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// One outbound SMS, built up through fluent `&mut self` mutators.
///
/// Temporal fields are validated when they are set: a rejected value leaves the
/// previously stored one in place. Everything else is accepted as-is and checked by the
/// gateway on submission.
///
/// ```rust
/// use skebby::{Message, Recipient};
///
/// # fn main() -> Result<(), skebby::ValidationError> {
/// let mut message = Message::new();
/// message
///     .set_sender("ACME")
///     .add_recipient(Recipient::new("+391111111111")?)
///     .set_text("Hello {name}")
///     .set_validity_period(Some(time::Duration::minutes(60)))?;
///
/// assert!(message.has_recipients());
/// # Ok(())
/// # }
/// ```
pub struct Message {
    sender: Option<String>,
    recipients: Vec<Recipient>,
    recipient_variables: BTreeMap<Recipient, RecipientVariables>,
    text: Option<String>,
    user_reference: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    delivery_start: Option<OffsetDateTime>,
    validity_period: Option<ValidityPeriod>,
}

impl Message {
    /// Field label reported when a template variable name is empty.
    pub const VARIABLE_NAME_FIELD: &'static str = "variable name";

    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sender alias or number, if one was set.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Set the sender. The gateway checks its syntax and length.
    pub fn set_sender(&mut self, sender: impl Into<String>) -> &mut Self {
        self.sender = Some(sender.into());
        self
    }

    /// Recipients in insertion order, duplicates included.
    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    /// Replace the whole recipient list. Template variables are left untouched.
    pub fn set_recipients(&mut self, recipients: impl IntoIterator<Item = Recipient>) -> &mut Self {
        self.recipients = recipients.into_iter().collect();
        self
    }

    /// Append a recipient; duplicates are kept.
    pub fn add_recipient(&mut self, recipient: Recipient) -> &mut Self {
        self.recipients.push(recipient);
        self
    }

    /// Remove the first occurrence of `recipient` together with its template variables.
    ///
    /// Removing a recipient that is not present is a no-op.
    pub fn remove_recipient(&mut self, recipient: impl AsRef<str>) -> &mut Self {
        let recipient = recipient.as_ref().trim();
        match self.recipients.iter().position(|it| it == recipient) {
            Some(idx) => {
                self.recipients.remove(idx);
            }
            None => tracing::debug!(recipient, "recipient not present; nothing to remove"),
        }
        self.recipient_variables.remove(recipient);
        self
    }

    /// Whether at least one recipient is set.
    pub fn has_recipients(&self) -> bool {
        !self.recipients.is_empty()
    }

    /// All template variables, keyed by recipient.
    ///
    /// Entries for recipients that are not in [`Message::recipients`] are kept but have no
    /// effect on delivery.
    pub fn recipient_variables(&self) -> &BTreeMap<Recipient, RecipientVariables> {
        &self.recipient_variables
    }

    /// Template variables of a single recipient.
    pub fn recipient_variables_for(&self, recipient: impl AsRef<str>) -> Option<&RecipientVariables> {
        self.recipient_variables.get(recipient.as_ref().trim())
    }

    /// Replace every template variable of `recipient`.
    pub fn set_recipient_variables(
        &mut self,
        recipient: Recipient,
        variables: RecipientVariables,
    ) -> Result<&mut Self, ValidationError> {
        if variables.keys().any(|name| name.trim().is_empty()) {
            return Err(ValidationError::Empty {
                field: Self::VARIABLE_NAME_FIELD,
            });
        }
        self.recipient_variables.insert(recipient, variables);
        Ok(self)
    }

    /// Insert or overwrite a single template variable of `recipient`.
    pub fn add_recipient_variable(
        &mut self,
        recipient: Recipient,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::VARIABLE_NAME_FIELD,
            });
        }
        self.recipient_variables
            .entry(recipient)
            .or_default()
            .insert(name, value.into());
        Ok(self)
    }

    /// Remove one template variable; missing recipients or names are ignored.
    ///
    /// The recipient keeps its (possibly empty) variable map.
    pub fn remove_recipient_variable(
        &mut self,
        recipient: impl AsRef<str>,
        name: impl AsRef<str>,
    ) -> &mut Self {
        if let Some(variables) = self.recipient_variables.get_mut(recipient.as_ref().trim()) {
            variables.remove(name.as_ref());
        }
        self
    }

    /// Whether any recipient has a variable map, empty ones included.
    pub fn has_recipient_variables(&self) -> bool {
        !self.recipient_variables.is_empty()
    }

    /// Drop every template variable, leaving the recipients as they are.
    pub fn clear_recipient_variables(&mut self) -> &mut Self {
        self.recipient_variables.clear();
        self
    }

    /// Message body, if one was set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the message body.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Caller correlation token, if one was set.
    pub fn user_reference(&self) -> Option<&str> {
        self.user_reference.as_deref()
    }

    /// Set the opaque token correlating this submission with the caller's records.
    pub fn set_user_reference(&mut self, user_reference: impl Into<String>) -> &mut Self {
        self.user_reference = Some(user_reference.into());
        self
    }

    /// Earliest instant the gateway may attempt delivery.
    pub fn delivery_start(&self) -> Option<OffsetDateTime> {
        self.delivery_start
    }

    /// Set the earliest delivery instant, checked against the system clock.
    ///
    /// See [`Message::set_delivery_start_with`].
    pub fn set_delivery_start(
        &mut self,
        delivery_start: Option<OffsetDateTime>,
    ) -> Result<&mut Self, ValidationError> {
        self.set_delivery_start_with(&SystemClock, delivery_start)
    }

    /// Set the earliest delivery instant, checked against `clock`.
    ///
    /// Fails with [`ValidationError::InvalidDeliveryStart`] when the instant is strictly
    /// earlier than `clock.now()`, sampled on every call. `None` clears the field.
    pub fn set_delivery_start_with(
        &mut self,
        clock: &impl Clock,
        delivery_start: Option<OffsetDateTime>,
    ) -> Result<&mut Self, ValidationError> {
        if let Some(requested) = delivery_start {
            let now = clock.now();
            if requested < now {
                tracing::debug!(%requested, %now, "rejected delivery start in the past");
                return Err(ValidationError::InvalidDeliveryStart { requested, now });
            }
        }
        self.delivery_start = delivery_start;
        Ok(self)
    }

    /// How long the gateway keeps attempting delivery.
    pub fn validity_period(&self) -> Option<ValidityPeriod> {
        self.validity_period
    }

    /// Set how long the gateway keeps retrying delivery.
    ///
    /// Only whole minutes count. Fails with [`ValidationError::InvalidValidityPeriod`] when
    /// they fall outside [`ValidityPeriod::MIN`]`..=`[`ValidityPeriod::MAX`]. `None` clears
    /// the field.
    pub fn set_validity_period(
        &mut self,
        validity_period: Option<time::Duration>,
    ) -> Result<&mut Self, ValidationError> {
        self.validity_period = match validity_period {
            Some(duration) => Some(ValidityPeriod::from_duration(duration).inspect_err(|err| {
                tracing::debug!(error = %err, "rejected validity period");
            })?),
            None => None,
        };
        Ok(self)
    }
}
