//! Response decoder: raw status + body → typed model or structured error.

use crate::error::SdkError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// The v20 error envelope returned on non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
    #[serde(rename = "errorMessage")]
    error_message: String,
}

/// Decode a wire response into the declared response model.
///
/// A success status parses the body as the typed model; scalar fields
/// convert through their wrappers' `from_wire` inside deserialization, and a
/// malformed document surfaces as [`SdkError::Decode`] — never a silently
/// defaulted value. A non-success status is interpreted as the API error
/// envelope and surfaced as [`SdkError::Api`] with the remote's code and
/// message verbatim, never coerced into a partial success model.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, SdkError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| SdkError::Decode(e.to_string()));
    }

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => Err(SdkError::Api {
            code: envelope
                .error_code
                .unwrap_or_else(|| format!("HTTP_{status}")),
            message: envelope.error_message,
        }),
        // Not a well-formed envelope: still a remote rejection, so pass the
        // raw body through as the message rather than inventing a generic
        // failure.
        Err(_) => Err(SdkError::Api {
            code: format!("HTTP_{status}"),
            message: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{AccountUnits, PriceValue};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct PriceFixture {
        price: PriceValue,
        #[serde(rename = "unrealizedPL")]
        unrealized_pl: Option<AccountUnits>,
    }

    #[test]
    fn test_success_decodes_wrappers() {
        let fixture: PriceFixture =
            decode_response(200, r#"{"price":"1.21450","unrealizedPL":"-3.50"}"#).unwrap();
        assert_eq!(fixture.price.as_str(), "1.21450");
        assert_eq!(fixture.unrealized_pl.unwrap().as_str(), "-3.50");
    }

    #[test]
    fn test_absent_field_decodes_to_none() {
        let fixture: PriceFixture = decode_response(200, r#"{"price":"1.21450"}"#).unwrap();
        assert!(fixture.unrealized_pl.is_none());
    }

    #[test]
    fn test_error_envelope_surfaces_as_api_error() {
        let result: Result<PriceFixture, _> = decode_response(
            400,
            r#"{"errorCode":"INSUFFICIENT_MARGIN","errorMessage":"the Account has insufficient margin"}"#,
        );
        match result.unwrap_err() {
            SdkError::Api { code, message } => {
                assert_eq!(code, "INSUFFICIENT_MARGIN");
                assert_eq!(message, "the Account has insufficient margin");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_without_code_falls_back_to_status() {
        let result: Result<PriceFixture, _> =
            decode_response(401, r#"{"errorMessage":"Insufficient authorization"}"#);
        match result.unwrap_err() {
            SdkError::Api { code, message } => {
                assert_eq!(code, "HTTP_401");
                assert_eq!(message, "Insufficient authorization");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_error_body_passes_through_verbatim() {
        let result: Result<PriceFixture, _> = decode_response(502, "Bad Gateway");
        match result.unwrap_err() {
            SdkError::Api { code, message } => {
                assert_eq!(code, "HTTP_502");
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_success_body_is_decode_failure() {
        let result: Result<PriceFixture, _> = decode_response(200, r#"{"price":"not-a-price"}"#);
        assert!(matches!(result.unwrap_err(), SdkError::Decode(_)));
    }
}
