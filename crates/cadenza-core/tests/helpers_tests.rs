use cadenza_core::testing::HELPERS;
use cadenza_core::{Envelope, NO_DATA, Recorder, STATUS_TABLE, respond};
use serde_json::{Value, json};

#[test]
fn test_helper_for_every_registered_status() {
    assert_eq!(HELPERS.len(), STATUS_TABLE.len());
    for ((code, name, _), status) in HELPERS.iter().zip(STATUS_TABLE) {
        assert_eq!(*code, status.code);
        assert_eq!(*name, status.name);
    }
}

#[test]
fn test_helpers_set_their_status_code() {
    for (code, name, helper) in HELPERS {
        let mut rec = Recorder::new();
        helper(&mut rec, None);

        assert_eq!(rec.status(), *code, "{name}");
    }
}

#[test]
fn test_helpers_match_generic_writer_without_payload() {
    for (code, name, helper) in HELPERS {
        let mut via_helper = Recorder::new();
        helper(&mut via_helper, None);

        let mut via_respond = Recorder::new();
        respond(&mut via_respond, *code, NO_DATA);

        assert_eq!(via_helper.status(), via_respond.status(), "{name}");
        assert_eq!(via_helper.body(), via_respond.body(), "{name}");
        assert_eq!(
            via_helper.header("content-type"),
            via_respond.header("content-type"),
            "{name}"
        );
    }
}

#[test]
fn test_helpers_match_generic_writer_with_payload() {
    let payload = json!({"items": [1, 2, 3], "next": null});

    for (code, name, helper) in HELPERS {
        let mut via_helper = Recorder::new();
        helper(&mut via_helper, Some(&payload));

        let mut via_respond = Recorder::new();
        respond(&mut via_respond, *code, Some(&payload));

        assert_eq!(via_helper.status(), via_respond.status(), "{name}");
        assert_eq!(via_helper.body(), via_respond.body(), "{name}");

        let envelope: Envelope<Value> = via_helper.envelope().expect("Failed to decode");
        assert_eq!(envelope.data, payload, "{name}");
    }
}

#[test]
fn test_teapot() {
    let mut rec = Recorder::new();
    cadenza_core::teapot(&mut rec, NO_DATA);

    assert_eq!(rec.status(), 418);
    assert_eq!(rec.body_str(), r#"{"code":418,"data":"I'm a teapot"}"#);
}

#[test]
fn test_continue_helper() {
    let mut rec = Recorder::new();
    cadenza_core::r#continue(&mut rec, Some("go on"));

    assert_eq!(rec.status(), 100);
    assert_eq!(rec.body_str(), r#"{"code":100,"data":"go on"}"#);
}

#[test]
fn test_switch_proxy_has_empty_reason() {
    let mut rec = Recorder::new();
    cadenza_core::switch_proxy(&mut rec, NO_DATA);

    assert_eq!(rec.status(), 306);
    assert_eq!(rec.body_str(), r#"{"code":306,"data":""}"#);
}

#[test]
fn test_helpers_accept_unsized_payloads() {
    let items: &[u32] = &[4, 5];
    let mut rec = Recorder::new();
    cadenza_core::created(&mut rec, Some(items));

    assert_eq!(rec.body_str(), r#"{"code":201,"data":[4,5]}"#);
}
