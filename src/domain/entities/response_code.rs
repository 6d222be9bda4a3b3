use std::fmt;

/// Symbolic names for the store's billing response codes, used for log and
/// diagnostic output. The listener surface keeps the raw `i32` so that
/// platforms with differing code sets stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    ServiceTimeout,
    FeatureNotSupported,
    ServiceDisconnected,
    Ok,
    UserCanceled,
    ServiceUnavailable,
    BillingUnavailable,
    ItemUnavailable,
    DeveloperError,
    Error,
    ItemAlreadyOwned,
    ItemNotOwned,
    Unknown(i32),
}

impl From<i32> for ResponseCode {
    fn from(code: i32) -> Self {
        match code {
            -3 => ResponseCode::ServiceTimeout,
            -2 => ResponseCode::FeatureNotSupported,
            -1 => ResponseCode::ServiceDisconnected,
            0 => ResponseCode::Ok,
            1 => ResponseCode::UserCanceled,
            2 => ResponseCode::ServiceUnavailable,
            3 => ResponseCode::BillingUnavailable,
            4 => ResponseCode::ItemUnavailable,
            5 => ResponseCode::DeveloperError,
            6 => ResponseCode::Error,
            7 => ResponseCode::ItemAlreadyOwned,
            8 => ResponseCode::ItemNotOwned,
            other => ResponseCode::Unknown(other),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseCode::ServiceTimeout => "SERVICE_TIMEOUT",
            ResponseCode::FeatureNotSupported => "FEATURE_NOT_SUPPORTED",
            ResponseCode::ServiceDisconnected => "SERVICE_DISCONNECTED",
            ResponseCode::Ok => "OK",
            ResponseCode::UserCanceled => "USER_CANCELED",
            ResponseCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ResponseCode::BillingUnavailable => "BILLING_UNAVAILABLE",
            ResponseCode::ItemUnavailable => "ITEM_UNAVAILABLE",
            ResponseCode::DeveloperError => "DEVELOPER_ERROR",
            ResponseCode::Error => "ERROR",
            ResponseCode::ItemAlreadyOwned => "ITEM_ALREADY_OWNED",
            ResponseCode::ItemNotOwned => "ITEM_NOT_OWNED",
            ResponseCode::Unknown(_) => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip_to_names() {
        assert_eq!(ResponseCode::from(0).to_string(), "OK");
        assert_eq!(ResponseCode::from(1).to_string(), "USER_CANCELED");
        assert_eq!(ResponseCode::from(3).to_string(), "BILLING_UNAVAILABLE");
    }

    #[test]
    fn unrecognized_code_is_unknown() {
        assert_eq!(ResponseCode::from(42), ResponseCode::Unknown(42));
        assert_eq!(ResponseCode::from(42).to_string(), "UNKNOWN");
    }
}
