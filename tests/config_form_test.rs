//! 配置表单测试
//!
//! 测试表单的填充、收集往返和提交前校验

use aprs_console::core::schema::form::FormState;
use aprs_console::core::schema::schema::CONFIG_SCHEMA;
use aprs_console::core::schema::types::{
    ConfigDocument, FieldValue,
};
use aprs_console::core::schema::validator::DocumentValidator;
use aprs_console::ConsoleError;

fn sample_document() -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    doc.set(
        "frequency_hz",
        FieldValue::Number(144390000.0),
    );
    doc.set("gain", FieldValue::Number(14.0));
    doc.set("if_gain", FieldValue::Number(47.0));
    doc.set(
        "callsign_source",
        FieldValue::Text("KD8ABC".to_string()),
    );
    doc.set(
        "callsign_dest",
        FieldValue::Text("APRS".to_string()),
    );
    doc.set("flags_before", FieldValue::Number(32.0));
    doc.set("flags_after", FieldValue::Number(32.0));
    doc.set(
        "send_ip",
        FieldValue::Text("127.0.0.1".to_string()),
    );
    doc.set("send_port", FieldValue::Number(14580.0));
    doc.set(
        "carrier_only",
        FieldValue::Boolean(true),
    );
    doc.set("device_index", FieldValue::Number(0.0));
    doc
}

#[test]
fn test_form_follows_schema_order() {
    let form = FormState::empty();

    assert_eq!(form.fields.len(), CONFIG_SCHEMA.len());
    for (input, spec) in
        form.fields.iter().zip(CONFIG_SCHEMA.iter())
    {
        assert_eq!(
            input.spec.key, spec.key,
            "form controls must follow schema order"
        );
    }
}

#[test]
fn test_collect_round_trips_document() {
    // 模式内的每个字段经 填充→收集 后保持原值
    let doc = sample_document();
    let form = FormState::from_document(&doc);
    let collected = form.collect().unwrap();

    assert_eq!(collected, doc);
}

#[test]
fn test_fetched_document_populates_controls() {
    let doc = sample_document();
    let mut form = FormState::from_document(&doc);

    let frequency =
        form.field_mut("frequency_hz").unwrap();
    assert_eq!(frequency.buffer, "144390000");

    let carrier =
        form.field_mut("carrier_only").unwrap();
    assert!(carrier.checked);
}

#[test]
fn test_missing_keys_leave_controls_unset() {
    let mut doc = ConfigDocument::new();
    doc.set("gain", FieldValue::Number(14.0));
    let mut form = FormState::from_document(&doc);

    let frequency =
        form.field_mut("frequency_hz").unwrap();
    assert!(frequency.buffer.is_empty());

    let carrier =
        form.field_mut("carrier_only").unwrap();
    assert!(!carrier.checked);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut doc = sample_document();
    doc.set(
        "beacon_interval",
        FieldValue::Number(600.0),
    );

    let form = FormState::from_document(&doc);
    assert_eq!(form.fields.len(), CONFIG_SCHEMA.len());

    // 收集结果只含模式内的键
    let collected = form.collect().unwrap();
    assert!(collected.get("beacon_interval").is_none());
    assert_eq!(collected.len(), CONFIG_SCHEMA.len());
}

#[test]
fn test_text_fields_are_trimmed() {
    let doc = sample_document();
    let mut form = FormState::from_document(&doc);

    form.field_mut("callsign_source")
        .unwrap()
        .buffer = "  KD8ABC  ".to_string();

    let collected = form.collect().unwrap();
    assert_eq!(
        collected
            .get("callsign_source")
            .unwrap()
            .as_text(),
        Some("KD8ABC")
    );
}

#[test]
fn test_numeric_fields_parse_as_floats() {
    let doc = sample_document();
    let mut form = FormState::from_document(&doc);

    form.field_mut("gain").unwrap().buffer =
        " 20.5 ".to_string();

    let collected = form.collect().unwrap();
    assert_eq!(
        collected.get("gain").unwrap().as_number(),
        Some(20.5)
    );
}

#[test]
fn test_invalid_number_rejects_submission() {
    let doc = sample_document();
    let mut form = FormState::from_document(&doc);

    form.field_mut("frequency_hz").unwrap().buffer =
        "144.39MHz".to_string();

    let err = form.collect().unwrap_err();
    match err {
        ConsoleError::Validation { field, .. } => {
            assert_eq!(field, "Frequency (Hz)");
        }
        other => panic!(
            "Expected validation error, got: {other}"
        ),
    }
}

#[test]
fn test_empty_number_rejects_submission() {
    let doc = sample_document();
    let mut form = FormState::from_document(&doc);

    form.field_mut("send_port").unwrap().buffer =
        String::new();

    assert!(form.collect().is_err());
}

#[test]
fn test_failed_collect_leaves_edits_in_place() {
    // 收集失败不触碰编辑缓冲，用户输入不丢失
    let mut form =
        FormState::from_document(&sample_document());
    form.field_mut("gain").unwrap().buffer =
        "abc".to_string();

    assert!(form.collect().is_err());
    assert_eq!(
        form.field_mut("gain").unwrap().buffer,
        "abc"
    );
}

#[test]
fn test_mandatory_fields_must_be_non_empty() {
    let mut doc = sample_document();
    doc.set(
        "callsign_source",
        FieldValue::Text(String::new()),
    );

    let err =
        DocumentValidator::validate_document(&doc)
            .unwrap_err();
    match err {
        ConsoleError::Validation { field, .. } => {
            assert_eq!(field, "Source Callsign");
        }
        other => panic!(
            "Expected validation error, got: {other}"
        ),
    }

    assert!(DocumentValidator::validate_document(
        &sample_document()
    )
    .is_ok());
}
