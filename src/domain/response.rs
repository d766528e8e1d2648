use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Raw error code returned by the gateway.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct GatewayCode(i32);

impl GatewayCode {
    /// Construct a code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by the gateway.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known response code, if one exists.
    pub fn known(self) -> Option<ResponseCode> {
        ResponseCode::from_code(self.0)
    }

    /// Map this code through the catalog, keeping unknown codes explicit.
    pub fn lookup(self) -> CodeLookup {
        lookup(self.0)
    }
}

impl From<i32> for GatewayCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Rejection reasons the gateway reports through its numeric error codes.
///
/// The set is closed; codes outside it surface as [`CodeLookup::Unknown`].
pub enum ResponseCode {
    GenericError,
    InvalidCharset,
    MissingMandatoryParam,
    InvalidParameters,
    InvalidUsernameOrPassword,
    InvalidSender,
    SenderLengthTooLong,
    TextTooLong,
    InvalidRecipient,
    MissingSender,
    TooManyRecipients,
    AccountUnableToUseSmsGateway,
    InsufficientCredit,
    InvalidRequestMethod,
    InvalidDeliveryStartParam,
    InvalidEncodingScheme,
    InvalidValidityPeriod,
    InvalidUserReference,
    MissingUserReference,
    CharactersNotInCurrentCharset,
    TooManyAliasWithSameVat,
    InvalidVat,
    AlphaNumericSenderAllowedOnlyForBusinessPlans,
    AlphaNumericSenderAlreadyRegistered,
}

impl ResponseCode {
    /// Every known code, in ascending numeric order.
    pub const ALL: [Self; 24] = [
        Self::GenericError,
        Self::InvalidCharset,
        Self::MissingMandatoryParam,
        Self::InvalidParameters,
        Self::InvalidUsernameOrPassword,
        Self::InvalidSender,
        Self::SenderLengthTooLong,
        Self::TextTooLong,
        Self::InvalidRecipient,
        Self::MissingSender,
        Self::TooManyRecipients,
        Self::AccountUnableToUseSmsGateway,
        Self::InsufficientCredit,
        Self::InvalidRequestMethod,
        Self::InvalidDeliveryStartParam,
        Self::InvalidEncodingScheme,
        Self::InvalidValidityPeriod,
        Self::InvalidUserReference,
        Self::MissingUserReference,
        Self::CharactersNotInCurrentCharset,
        Self::TooManyAliasWithSameVat,
        Self::InvalidVat,
        Self::AlphaNumericSenderAllowedOnlyForBusinessPlans,
        Self::AlphaNumericSenderAlreadyRegistered,
    ];

    /// Convert a raw gateway integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            10 => Self::GenericError,
            11 => Self::InvalidCharset,
            12 => Self::MissingMandatoryParam,
            20 => Self::InvalidParameters,
            21 => Self::InvalidUsernameOrPassword,
            22 => Self::InvalidSender,
            23 => Self::SenderLengthTooLong,
            24 => Self::TextTooLong,
            25 => Self::InvalidRecipient,
            26 => Self::MissingSender,
            27 => Self::TooManyRecipients,
            29 => Self::AccountUnableToUseSmsGateway,
            30 => Self::InsufficientCredit,
            31 => Self::InvalidRequestMethod,
            32 => Self::InvalidDeliveryStartParam,
            33 => Self::InvalidEncodingScheme,
            34 => Self::InvalidValidityPeriod,
            35 => Self::InvalidUserReference,
            36 => Self::MissingUserReference,
            37 => Self::CharactersNotInCurrentCharset,
            38 => Self::TooManyAliasWithSameVat,
            39 => Self::InvalidVat,
            40 => Self::AlphaNumericSenderAllowedOnlyForBusinessPlans,
            41 => Self::AlphaNumericSenderAlreadyRegistered,
            _ => return None,
        })
    }

    /// The integer code the gateway uses for this variant.
    pub fn code(self) -> i32 {
        match self {
            Self::GenericError => 10,
            Self::InvalidCharset => 11,
            Self::MissingMandatoryParam => 12,
            Self::InvalidParameters => 20,
            Self::InvalidUsernameOrPassword => 21,
            Self::InvalidSender => 22,
            Self::SenderLengthTooLong => 23,
            Self::TextTooLong => 24,
            Self::InvalidRecipient => 25,
            Self::MissingSender => 26,
            Self::TooManyRecipients => 27,
            Self::AccountUnableToUseSmsGateway => 29,
            Self::InsufficientCredit => 30,
            Self::InvalidRequestMethod => 31,
            Self::InvalidDeliveryStartParam => 32,
            Self::InvalidEncodingScheme => 33,
            Self::InvalidValidityPeriod => 34,
            Self::InvalidUserReference => 35,
            Self::MissingUserReference => 36,
            Self::CharactersNotInCurrentCharset => 37,
            Self::TooManyAliasWithSameVat => 38,
            Self::InvalidVat => 39,
            Self::AlphaNumericSenderAllowedOnlyForBusinessPlans => 40,
            Self::AlphaNumericSenderAlreadyRegistered => 41,
        }
    }

    /// Short human-readable meaning.
    pub fn description(self) -> &'static str {
        match self {
            Self::GenericError => "generic error",
            Self::InvalidCharset => "invalid charset",
            Self::MissingMandatoryParam => "missing mandatory parameter",
            Self::InvalidParameters => "invalid parameters",
            Self::InvalidUsernameOrPassword => "invalid username or password",
            Self::InvalidSender => "invalid sender",
            Self::SenderLengthTooLong => "sender length too long",
            Self::TextTooLong => "text too long",
            Self::InvalidRecipient => "invalid recipient",
            Self::MissingSender => "missing sender",
            Self::TooManyRecipients => "too many recipients",
            Self::AccountUnableToUseSmsGateway => "account not enabled for the SMS gateway",
            Self::InsufficientCredit => "insufficient credit",
            Self::InvalidRequestMethod => "invalid request method",
            Self::InvalidDeliveryStartParam => "invalid delivery_start parameter",
            Self::InvalidEncodingScheme => "invalid encoding scheme",
            Self::InvalidValidityPeriod => "invalid validity_period",
            Self::InvalidUserReference => "invalid user_reference",
            Self::MissingUserReference => "missing user_reference",
            Self::CharactersNotInCurrentCharset => "characters not in current charset",
            Self::TooManyAliasWithSameVat => "too many aliases with the same VAT number",
            Self::InvalidVat => "invalid VAT number",
            Self::AlphaNumericSenderAllowedOnlyForBusinessPlans => {
                "alphanumeric sender allowed only for business plans"
            }
            Self::AlphaNumericSenderAlreadyRegistered => "alphanumeric sender already registered",
        }
    }

    /// Whether this code indicates invalid credentials or an account not enabled for sending.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidUsernameOrPassword | Self::AccountUnableToUseSmsGateway
        )
    }

    /// Whether this code points at the message sender.
    pub fn is_sender_error(self) -> bool {
        matches!(
            self,
            Self::InvalidSender
                | Self::SenderLengthTooLong
                | Self::MissingSender
                | Self::AlphaNumericSenderAllowedOnlyForBusinessPlans
                | Self::AlphaNumericSenderAlreadyRegistered
        )
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Outcome of looking a raw code up in the catalog.
pub enum CodeLookup {
    Known(ResponseCode),
    Unknown(i32),
}

impl CodeLookup {
    /// The known response code, if the lookup found one.
    pub fn known(self) -> Option<ResponseCode> {
        match self {
            Self::Known(code) => Some(code),
            Self::Unknown(_) => None,
        }
    }

    /// Whether the code is missing from the catalog.
    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for CodeLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(code) => write!(f, "{code}"),
            Self::Unknown(code) => write!(f, "unknown code {code}"),
        }
    }
}

/// Translate a gateway code into its meaning. Total: unassigned codes map to
/// [`CodeLookup::Unknown`].
pub fn lookup(code: i32) -> CodeLookup {
    match ResponseCode::from_code(code) {
        Some(known) => CodeLookup::Known(known),
        None => {
            tracing::trace!(code, "gateway code not in catalog");
            CodeLookup::Unknown(code)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Failure a gateway client raises after the gateway rejected a request.
#[error("gateway rejected request: {lookup}")]
pub struct GatewayError {
    pub code: GatewayCode,
    pub lookup: CodeLookup,
    /// Error text the gateway sent alongside the code, if any.
    pub message: Option<String>,
}

impl GatewayError {
    /// Build the failure for a raw code and optional server text.
    pub fn from_code(code: impl Into<GatewayCode>, message: Option<String>) -> Self {
        let code = code.into();
        Self {
            code,
            lookup: code.lookup(),
            message,
        }
    }

    /// The known response code, if the gateway used one from the catalog.
    pub fn known(&self) -> Option<ResponseCode> {
        self.lookup.known()
    }
}
