//! Tests for the MCP tool layer.
//!
//! These tests build the rule table the way the binary does (built-ins plus
//! configured extras) and check the JSON the tools hand back to callers.

use phone_mcp_server::tools::{FormatParams, PhoneTools, RuleSource, ValidateParams};
use phone_mcp_server::{Config, PhoneMcpServer};
use rmcp::ServerHandler;
use std::sync::Arc;

fn tools_with_extras(extras: &str) -> PhoneTools {
    let config = Config {
        extra_rules: Config::parse_extra_rules(extras).unwrap(),
        ..Config::default()
    };
    PhoneTools::new(Arc::new(config.rule_table().unwrap()))
}

fn params(number: &str, code: &str) -> ValidateParams {
    ValidateParams {
        number: number.to_string(),
        dialing_code: code.to_string(),
    }
}

/// Test that configured rules are used and built-ins are untouched.
#[test]
fn test_configured_rules_flow_through_tools() {
    let tools = tools_with_extras("+233=9,+254=9!0");

    let ghana = tools.validate(&params("024 123 4567", "+233"));
    assert!(!ghana.valid, "10 digits should fail an exact 9 rule");
    assert_eq!(ghana.rule_source, RuleSource::Specific);

    let kenya = tools.validate(&params("712 345 678", "+254"));
    assert!(kenya.valid);

    let nigeria = tools.validate(&params("0803 123 4567", "+234"));
    assert!(!nigeria.valid);
    assert_eq!(nigeria.rule_description, "exactly 10 digits, not starting with 0");
}

/// Test the JSON shape of each tool response.
#[test]
fn test_tool_response_json() {
    let tools = PhoneTools::default();

    let format_json = serde_json::to_value(tools.format(&FormatParams {
        raw: "+1 (555) 123-4567".to_string(),
    }))
    .unwrap();
    assert_eq!(format_json["raw"], "+1 (555) 123-4567");
    assert_eq!(format_json["digits"], "15551234567");
    assert_eq!(format_json["formatted"], "155 512 34 56");

    let check_json = serde_json::to_value(tools.check(&params("(555) 123-4567", "+1"))).unwrap();
    assert_eq!(check_json["formatted"], "555 123 45 67");
    assert_eq!(check_json["dialing_code"], "+1");
    assert_eq!(check_json["digit_count"], 10);
    assert_eq!(check_json["valid"], true);
    assert_eq!(check_json["rule"]["kind"], "exact_length");
    assert_eq!(check_json["rule"]["length"], 10);

    let list_json = serde_json::to_value(tools.list_rules()).unwrap();
    assert_eq!(list_json["rules"][1]["dialing_code"], "+234");
    assert_eq!(list_json["rules"][1]["rule"]["forbidden_leading_digit"], "0");
    assert_eq!(list_json["default_rule"]["kind"], "length_range");
}

/// Test that garbage input is a normal `false`, not an error.
#[test]
fn test_garbage_input_is_not_an_error() {
    let tools = PhoneTools::default();

    let response = tools.check(&params("call me maybe", "???"));
    assert_eq!(response.formatted.as_str(), "");
    assert_eq!(response.validation.digit_count, 0);
    assert!(!response.validation.valid);
    assert_eq!(response.validation.rule_source, RuleSource::Default);
}

/// Test the server advertises tool support.
#[test]
fn test_server_info() {
    let server = PhoneMcpServer::new(Arc::new(Config::default().rule_table().unwrap()));
    let info = server.get_info();

    assert_eq!(info.server_info.name, "phone-mcp-server");
    assert!(info.capabilities.tools.is_some());
    assert_eq!(server.tools().rules().len(), 4);
}
