#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use wsaddr_core::Responses;
use wsaddr_runtime::config::{self, Role};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
bindings:
  - name: "quotes"
    features:
      - id: addressing
        requierd: true # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
bindings:
  - name: "quotes"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.bindings[0].name, "quotes");
    assert_eq!(cfg.bindings[0].role, Role::Endpoint);
    assert!(cfg.bindings[0].features.is_empty());
}

#[test]
fn feature_defaults() {
    let ok = r#"
version: 1
bindings:
  - name: "quotes"
    role: client
    features:
      - id: addressing
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let f = &cfg.bindings[0].features[0];
    assert_eq!(cfg.bindings[0].role, Role::Client);
    assert!(f.enabled);
    assert!(!f.required);
    assert_eq!(f.responses, Responses::All);
}

#[test]
fn reference_service_and_port_type() {
    let ok = r#"
version: 1
references:
  - name: "stockQuoteProvider"
    service: "StockQuoteService"
    service_type: "StockQuoteProvider"
    lookup: "http://quotes.example/svc"
  - name: "stockQuoteService"
    service: "StockQuoteService"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.references[0].service, "StockQuoteService");
    assert_eq!(cfg.references[0].service_type.as_deref(), Some("StockQuoteProvider"));
    assert!(cfg.references[1].service_type.is_none());
}

#[test]
fn unsupported_version() {
    let bad = r#"
version: 2
bindings:
  - name: "quotes"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn duplicate_binding_names() {
    let bad = r#"
version: 1
bindings:
  - name: "quotes"
  - name: "quotes"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("duplicate binding name"));
}

#[test]
fn empty_config_is_rejected() {
    let err = config::load_from_str("version: 1\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn bad_listen_address() {
    let bad = r#"
version: 1
server:
  listen: "not-an-addr"
bindings:
  - name: "quotes"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("server.listen"));
}

#[test]
fn unknown_responses_value() {
    let bad = r#"
version: 1
bindings:
  - name: "quotes"
    features:
      - id: addressing
        responses: sometimes
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}
