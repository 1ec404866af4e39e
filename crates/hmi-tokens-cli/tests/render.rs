//! Integration tests for CLI rendering.

use hmi_tokens::{BorderRadiusTokens, Dp, TokenError, audit, border_radius};
use hmi_tokens_cli::render::{
    audit_failed, audit_summary, audit_table, export_json, token_list_json, token_table,
};

#[test]
fn test_export_json_snapshot() {
    let json = export_json(border_radius()).expect("serialize tokens");
    insta::assert_snapshot!("export_json", json);
}

#[test]
fn test_token_table_lists_every_token() {
    let rendered = token_table(border_radius()).to_string();
    for name in [
        "radius0", "radius4", "radius8", "radius16", "radius24", "xs", "sm", "md",
    ] {
        assert!(rendered.contains(name), "missing {name} in:\n{rendered}");
    }
    assert!(rendered.contains("24dp"));
    assert!(rendered.contains("2dp"));
}

#[test]
fn test_token_list_json_records_aliases() {
    let list = token_list_json(border_radius());
    let entries = list.as_array().expect("array");
    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0]["name"], "radius0");
    assert_eq!(entries[0]["alias_of"], serde_json::Value::Null);
    assert_eq!(entries[5]["name"], "xs");
    assert_eq!(entries[5]["value"], 2.0);
    assert_eq!(entries[5]["alias_of"], serde_json::Value::Null);
    assert_eq!(entries[7]["name"], "md");
    assert_eq!(entries[7]["alias_of"], "radius8");
}

#[test]
fn test_audit_summary_clean() {
    let report = audit(border_radius());
    assert_eq!(audit_summary(&report), "all 8 tokens consistent");
}

#[test]
fn test_audit_table_for_drifted_set() {
    let tokens = BorderRadiusTokens {
        sm: Dp::new(5.0),
        radius0: Dp::new(-1.0),
        ..BorderRadiusTokens::PERFORMANCE_NIGHT
    };
    let report = audit(&tokens);
    assert_eq!(
        audit_summary(&report),
        "8 tokens checked: 1 error(s), 1 warning(s)"
    );
    let rendered = audit_table(&report).to_string();
    assert!(rendered.contains("NEGATIVE"));
    assert!(rendered.contains("ALIAS_DRIFT"));
    assert!(rendered.contains("WARN"));
}

#[test]
fn test_audit_failed_clean_set_passes() {
    let report = audit(border_radius());
    assert!(!audit_failed(&report, false));
    assert!(!audit_failed(&report, true));
}

#[test]
fn test_audit_failed_drift_only_depends_on_deny_warnings() {
    let report = audit(&BorderRadiusTokens {
        md: Dp::new(12.0),
        ..BorderRadiusTokens::PERFORMANCE_NIGHT
    });
    assert_eq!(report.warning_count(), 1);
    assert!(!report.has_errors());
    assert!(!audit_failed(&report, false));
    assert!(audit_failed(&report, true));
}

#[test]
fn test_audit_failed_on_negative_value() {
    let report = audit(&BorderRadiusTokens {
        radius24: Dp::new(-24.0),
        ..BorderRadiusTokens::PERFORMANCE_NIGHT
    });
    assert!(report.has_errors());
    assert!(audit_failed(&report, false));
    assert!(audit_failed(&report, true));
}

#[test]
fn test_unknown_token_lookup_fails() {
    assert_eq!(
        border_radius().lookup("lg"),
        Err(TokenError::UnknownToken("lg".to_string()))
    );
}
