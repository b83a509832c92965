//! Request builder: model instance + field declarations → wire request.

use crate::endpoint::param::{FieldValue, Placement};
use crate::endpoint::{Endpoint, Method};
use crate::error::RequestError;

/// A fully resolved outgoing request, ready for the transport layer.
///
/// Immutable once built. The `url` is the route path with segments
/// substituted; query values are carried raw and percent-encoded by
/// [`WireRequest::query_string`].
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl WireRequest {
    /// The percent-encoded query string, or `None` when no query parameters
    /// were emitted.
    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        Some(
            self.query
                .iter()
                .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&"),
        )
    }

    /// Path plus query string, relative to the API host.
    pub fn relative_url(&self) -> String {
        match self.query_string() {
            Some(qs) => format!("{}?{}", self.url, qs),
            None => self.url.clone(),
        }
    }
}

/// Assemble a [`WireRequest`] from a populated request model.
///
/// Fails before any placement work if a required field is unset — a failed
/// build never yields a partial request. All failures are synchronous,
/// non-retryable caller (or catalogue) bugs.
pub fn build<E: Endpoint>(model: &E) -> Result<WireRequest, RequestError> {
    for spec in E::FIELDS {
        if spec.required && (spec.read)(model)?.is_none() {
            return Err(RequestError::MissingRequiredField {
                field: spec.wire_name,
            });
        }
    }

    let mut url = E::PATH.to_string();
    let mut query = Vec::new();
    let mut headers = Vec::new();
    let mut body = serde_json::Map::new();

    for spec in E::FIELDS {
        let Some(value) = (spec.read)(model)? else {
            // Absent optional fields are simply omitted.
            continue;
        };
        let value = match spec.transform {
            Some(transform) => transform.apply(value),
            None => value,
        };

        match spec.placement {
            Placement::UrlSegment => {
                let encoded = encode_scalar(&value).ok_or(RequestError::InvalidPlacement {
                    field: spec.wire_name,
                })?;
                // Raw substring replacement; percent-encoding is the
                // transport's concern.
                url = url.replace(&format!("{{{}}}", spec.wire_name), &encoded);
            }
            Placement::Query => {
                let encoded = encode_scalar(&value).ok_or(RequestError::InvalidPlacement {
                    field: spec.wire_name,
                })?;
                query.push((spec.wire_name.to_string(), encoded));
            }
            Placement::Header => {
                let encoded = encode_scalar(&value).ok_or(RequestError::InvalidPlacement {
                    field: spec.wire_name,
                })?;
                headers.push((spec.wire_name.to_string(), encoded));
            }
            Placement::Body => {
                body.insert(spec.wire_name.to_string(), into_body_member(value));
            }
        }
    }

    // Every template placeholder must have been matched by a declared field.
    if let Some(placeholder) = unresolved_placeholder(&url) {
        return Err(RequestError::UnresolvedPlaceholder {
            path: E::PATH,
            placeholder,
        });
    }

    Ok(WireRequest {
        method: E::METHOD,
        url,
        query,
        headers,
        body: if body.is_empty() {
            None
        } else {
            Some(serde_json::Value::Object(body))
        },
    })
}

fn encode_scalar(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(s) => Some(s.clone()),
        FieldValue::Count(n) => Some(n.to_string()),
        FieldValue::List(items) => Some(items.join(",")),
        FieldValue::Json(_) => None,
    }
}

fn into_body_member(value: FieldValue) -> serde_json::Value {
    match value {
        FieldValue::Json(json) => json,
        FieldValue::Text(s) => serde_json::Value::String(s),
        FieldValue::Count(n) => serde_json::Value::from(n),
        FieldValue::List(items) => {
            serde_json::Value::Array(items.into_iter().map(serde_json::Value::String).collect())
        }
    }
}

fn unresolved_placeholder(url: &str) -> Option<String> {
    let start = url.find('{')?;
    let rest = &url[start + 1..];
    let end = rest.find('}').unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::param::{field, FieldSpec};
    use crate::shared::{AccountId, InstrumentName};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct EmptyResponse {}

    #[derive(Default)]
    struct ListFixtureRequest {
        account_id: Option<AccountId>,
        instrument: Option<InstrumentName>,
        count: Option<u32>,
        bearer_hint: Option<String>,
    }

    impl Endpoint for ListFixtureRequest {
        type Response = EmptyResponse;
        const METHOD: Method = Method::Get;
        const PATH: &'static str = "/v3/accounts/{accountID}/orders";
        const FIELDS: &'static [FieldSpec<Self>] = &[
            FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
            FieldSpec::query("instrument", |r: &Self| field::text(&r.instrument)),
            FieldSpec::query("count", |r: &Self| field::count(&r.count)).clamped(500),
            FieldSpec::header("X-Test-Hint", |r: &Self| field::text(&r.bearer_hint)),
        ];
    }

    #[derive(Default)]
    struct BodyFixtureRequest {
        account_id: Option<AccountId>,
        alias: Option<String>,
        margin_rate: Option<String>,
    }

    impl Endpoint for BodyFixtureRequest {
        type Response = EmptyResponse;
        const METHOD: Method = Method::Patch;
        const PATH: &'static str = "/v3/accounts/{accountID}/configuration";
        const FIELDS: &'static [FieldSpec<Self>] = &[
            FieldSpec::url_segment("accountID", |r: &Self| field::text(&r.account_id)).required(),
            FieldSpec::body("alias", |r: &Self| field::body("alias", &r.alias)),
            FieldSpec::body("marginRate", |r: &Self| field::body("marginRate", &r.margin_rate)),
        ];
    }

    #[test]
    fn test_placement_correctness() {
        let request = ListFixtureRequest {
            account_id: Some(AccountId::from("001-001-1234567-001")),
            count: Some(750),
            ..Default::default()
        };

        let wire = build(&request).unwrap();
        assert_eq!(wire.method, Method::Get);
        assert_eq!(wire.url, "/v3/accounts/001-001-1234567-001/orders");
        assert_eq!(
            wire.query,
            vec![("count".to_string(), "500".to_string())]
        );
        assert!(wire.headers.is_empty());
        assert!(wire.body.is_none());
    }

    #[test]
    fn test_missing_required_field_names_the_field() {
        let request = ListFixtureRequest {
            count: Some(10),
            ..Default::default()
        };

        let err = build(&request).unwrap_err();
        assert!(matches!(
            err,
            RequestError::MissingRequiredField { field: "accountID" }
        ));
    }

    #[test]
    fn test_query_and_header_declaration_order() {
        let request = ListFixtureRequest {
            account_id: Some(AccountId::from("acct")),
            instrument: Some(InstrumentName::from("EUR_USD")),
            count: Some(20),
            bearer_hint: Some("demo".to_string()),
        };

        let wire = build(&request).unwrap();
        assert_eq!(
            wire.query,
            vec![
                ("instrument".to_string(), "EUR_USD".to_string()),
                ("count".to_string(), "20".to_string()),
            ]
        );
        assert_eq!(
            wire.headers,
            vec![("X-Test-Hint".to_string(), "demo".to_string())]
        );
    }

    #[test]
    fn test_body_members_merge_into_one_document() {
        let request = BodyFixtureRequest {
            account_id: Some(AccountId::from("acct")),
            alias: Some("primary".to_string()),
            margin_rate: Some("0.02".to_string()),
        };

        let wire = build(&request).unwrap();
        let body = wire.body.unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "alias": "primary", "marginRate": "0.02" })
        );
    }

    #[test]
    fn test_absent_body_fields_are_omitted() {
        let request = BodyFixtureRequest {
            account_id: Some(AccountId::from("acct")),
            alias: Some("primary".to_string()),
            ..Default::default()
        };

        let wire = build(&request).unwrap();
        assert_eq!(wire.body.unwrap(), serde_json::json!({ "alias": "primary" }));
    }

    #[test]
    fn test_no_body_fields_means_no_body() {
        let request = BodyFixtureRequest {
            account_id: Some(AccountId::from("acct")),
            ..Default::default()
        };

        assert!(build(&request).unwrap().body.is_none());
    }

    #[derive(Default)]
    struct BrokenCatalogueRequest {
        count: Option<u32>,
    }

    impl Endpoint for BrokenCatalogueRequest {
        type Response = EmptyResponse;
        const METHOD: Method = Method::Get;
        const PATH: &'static str = "/v3/accounts/{accountID}/summary";
        // No declared field matches {accountID}: a catalogue bug.
        const FIELDS: &'static [FieldSpec<Self>] =
            &[FieldSpec::query("count", |r: &Self| field::count(&r.count))];
    }

    #[test]
    fn test_unmatched_placeholder_is_a_catalogue_error() {
        let err = build(&BrokenCatalogueRequest::default()).unwrap_err();
        match err {
            RequestError::UnresolvedPlaceholder { placeholder, .. } => {
                assert_eq!(placeholder, "accountID");
            }
            other => panic!("expected UnresolvedPlaceholder, got {other:?}"),
        }
    }

    #[test]
    fn test_query_string_percent_encodes_values() {
        let wire = WireRequest {
            method: Method::Get,
            url: "/v3/accounts/acct/pricing".to_string(),
            query: vec![("instruments".to_string(), "EUR_USD,USD_JPY".to_string())],
            headers: Vec::new(),
            body: None,
        };
        assert_eq!(
            wire.relative_url(),
            "/v3/accounts/acct/pricing?instruments=EUR_USD%2CUSD_JPY"
        );
    }
}
