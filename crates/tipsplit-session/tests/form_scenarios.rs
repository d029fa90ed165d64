//! End-to-end form scenarios, driven the way the browser drives a session.

use tipsplit_core::TipSelection;
use tipsplit_session::{
    init_tracing, CalculatorSession, ErrorCode, InputEvent, RecordingDisplay, SessionConfig,
    SessionError,
};

fn new_session() -> CalculatorSession<RecordingDisplay> {
    init_tracing();
    let config = SessionConfig::default();
    let display = RecordingDisplay::new(&config);
    CalculatorSession::new(config, display).expect("default config is valid")
}

fn send(session: &mut CalculatorSession<RecordingDisplay>, payload: &str) {
    session.handle_json(payload).expect("event should be accepted");
}

fn shown(session: &CalculatorSession<RecordingDisplay>) -> (&str, &str) {
    (
        session.display().tip_text(),
        session.display().total_text(),
    )
}

#[test]
fn initial_load_shows_zero() {
    let session = new_session();
    assert_eq!(shown(&session), ("$0.00", "$0.00"));
    assert_eq!(session.display().selected_preset(), None);
}

#[test]
fn scenario_a_preset_split() {
    let mut session = new_session();
    send(&mut session, r#"{"type":"billChanged","text":"100"}"#);
    send(&mut session, r#"{"type":"presetClicked","presetId":"15"}"#);
    send(&mut session, r#"{"type":"peopleChanged","text":"4"}"#);

    assert_eq!(shown(&session), ("$3.75", "$28.75"));
    assert_eq!(session.display().selected_preset(), Some("15"));
}

#[test]
fn scenario_b_no_tip_selected() {
    let mut session = new_session();
    send(&mut session, r#"{"type":"billChanged","text":"50"}"#);
    send(&mut session, r#"{"type":"peopleChanged","text":"2"}"#);

    assert_eq!(shown(&session), ("$0.00", "$25.00"));
}

#[test]
fn scenario_c_zero_people() {
    let mut session = new_session();
    send(&mut session, r#"{"type":"billChanged","text":"75"}"#);
    send(&mut session, r#"{"type":"customTipChanged","text":"20"}"#);
    send(&mut session, r#"{"type":"peopleChanged","text":"0"}"#);

    assert_eq!(shown(&session), ("$0.00", "$0.00"));
    assert!(session.result().is_zero());
}

#[test]
fn scenario_d_unparsable_bill() {
    let mut session = new_session();
    send(&mut session, r#"{"type":"billChanged","text":"abc"}"#);
    send(&mut session, r#"{"type":"customTipChanged","text":"18"}"#);
    send(&mut session, r#"{"type":"peopleChanged","text":"3"}"#);

    assert_eq!(shown(&session), ("$0.00", "$0.00"));
    assert_eq!(session.state().bill_amount, None);
}

#[test]
fn scenario_e_preset_replaces_custom() {
    let mut session = new_session();
    send(&mut session, r#"{"type":"billChanged","text":"200"}"#);
    send(&mut session, r#"{"type":"peopleChanged","text":"2"}"#);
    send(&mut session, r#"{"type":"customTipChanged","text":"30"}"#);
    assert_eq!(shown(&session), ("$30.00", "$130.00"));

    send(&mut session, r#"{"type":"presetClicked","presetId":"10"}"#);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.custom_tip, "");
    assert_eq!(snapshot.tip_percentage, 10.0);
    assert_eq!(shown(&session), ("$10.00", "$110.00"));
    assert_eq!(session.display().selected_preset(), Some("10"));
}

#[test]
fn custom_tip_deselects_preset() {
    let mut session = new_session();
    send(&mut session, r#"{"type":"presetClicked","presetId":"25"}"#);
    assert_eq!(session.display().selected_preset(), Some("25"));

    send(&mut session, r#"{"type":"customTipChanged","text":"-3"}"#);
    assert_eq!(session.display().selected_preset(), None);
    assert_eq!(session.state().tip_percentage(), 0.0);
}

#[test]
fn scenario_f_reset() {
    let mut session = new_session();
    send(&mut session, r#"{"type":"billChanged","text":"100"}"#);
    send(&mut session, r#"{"type":"presetClicked","presetId":"50"}"#);
    send(&mut session, r#"{"type":"peopleChanged","text":"5"}"#);
    assert_eq!(shown(&session), ("$10.00", "$30.00"));

    send(&mut session, r#"{"type":"reset"}"#);

    assert_eq!(shown(&session), ("$0.00", "$0.00"));
    assert_eq!(session.display().selected_preset(), None);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.selection, TipSelection::NoneSelected);
    assert_eq!(snapshot.fields.bill, "");
    assert_eq!(snapshot.fields.people, "");
    assert_eq!(snapshot.custom_tip, "");
}

#[test]
fn share_just_below_half_cent_rounds_down() {
    let mut session = new_session();
    send(&mut session, r#"{"type":"billChanged","text":"2.23"}"#);
    send(&mut session, r#"{"type":"peopleChanged","text":"2"}"#);

    assert_eq!(shown(&session), ("$0.00", "$1.11"));
    assert_eq!(session.snapshot().view.total_per_person, "$1.11");
}

#[test]
fn repeated_events_give_same_result() {
    let mut session = new_session();
    send(&mut session, r#"{"type":"billChanged","text":"87.40"}"#);
    send(&mut session, r#"{"type":"peopleChanged","text":"3"}"#);

    let first = session
        .handle(InputEvent::CustomTipChanged {
            text: "17.5".to_string(),
        })
        .unwrap();
    let second = session
        .handle(InputEvent::CustomTipChanged {
            text: "17.5".to_string(),
        })
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn malformed_payload_is_rejected() {
    let mut session = new_session();
    let err = session.handle_json(r#"{"type":"splitEvenly"}"#).unwrap_err();

    assert!(matches!(err, SessionError::InvalidPayload(_)));
    assert_eq!(err.to_payload().code, ErrorCode::InvalidPayload);
    assert_eq!(session.display().render_count(), 1);
}

#[test]
fn configured_presets_and_symbol() {
    init_tracing();
    let config = SessionConfig::from_lookup(|key| match key {
        "TIPSPLIT_PRESETS" => Some("12,18,22".to_string()),
        "TIPSPLIT_CURRENCY_SYMBOL" => Some("£".to_string()),
        _ => None,
    });
    let display = RecordingDisplay::new(&config);
    let mut session = CalculatorSession::new(config, display).unwrap();

    send(&mut session, r#"{"type":"billChanged","text":"50"}"#);
    send(&mut session, r#"{"type":"peopleChanged","text":"1"}"#);
    send(&mut session, r#"{"type":"presetClicked","presetId":"18"}"#);
    assert_eq!(shown(&session), ("£9.00", "£59.00"));

    let err = session
        .handle_json(r#"{"type":"presetClicked","presetId":"15"}"#)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownPreset);
}

#[test]
fn snapshot_serializes_for_browser() {
    let mut session = new_session();
    send(&mut session, r#"{"type":"billChanged","text":"100"}"#);
    send(&mut session, r#"{"type":"presetClicked","presetId":"15"}"#);
    send(&mut session, r#"{"type":"peopleChanged","text":"4"}"#);

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["fields"]["bill"], "100");
    assert_eq!(json["selection"]["state"], "presetSelected");
    assert_eq!(json["selection"]["preset"]["id"], "15");
    assert_eq!(json["result"]["tipPerPerson"], 3.75);
    assert_eq!(json["view"]["totalPerPerson"], "$28.75");
    assert!(json["peopleFeedback"].is_null());
}
