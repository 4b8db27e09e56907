// src/suppression.rs
//! Suppression heuristics: the dictionaries and structural checks that keep
//! the detection engine from drowning in false positives on programming
//! terms, natural language, and generated identifiers.

use crate::catalog::{
    CSS_FALSE_POSITIVES, HTML_XML_FALSE_POSITIVES, JS_JSP_CALL_FRAGMENTS, JS_JSP_FALSE_POSITIVES,
    TERRAFORM_FALSE_POSITIVES, TERRAFORM_KEYWORDS, TERRAFORM_RESOURCE_PATTERNS,
};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static DATE_TIME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d{4}-\d{2}-\d{2}",
        r"\d{2}/\d{2}/\d{4}",
        r"\d{2}-\d{2}-\d{4}",
        r"\d{2}:\d{2}:\d{2}",
        r"\d{2}:\d{2}",
        r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("static date/time regex must compile"))
    .collect()
});

fn file_extension(path: &str) -> Option<String> {
    path.to_lowercase().rsplit('.').next().map(str::to_string)
}

/// File-type-specific false-positive check.
#[must_use]
pub fn is_file_specific_false_positive(value: &str, path: &str) -> bool {
    let Some(ext) = file_extension(path) else {
        return false;
    };
    let value_lower = value.to_lowercase();

    match ext.as_str() {
        "js" | "jsx" | "ts" | "tsx" | "jsp" | "jspx" | "java" => {
            if JS_JSP_FALSE_POSITIVES.contains(value_lower.as_str()) {
                return true;
            }
            JS_JSP_CALL_FRAGMENTS
                .iter()
                .any(|frag| value_lower.contains(frag))
        }
        "css" | "scss" | "sass" | "less" => CSS_FALSE_POSITIVES.contains(value_lower.as_str()),
        "xml" | "html" | "htm" | "xhtml" => {
            HTML_XML_FALSE_POSITIVES.contains(value_lower.as_str())
        }
        "tf" => {
            if TERRAFORM_KEYWORDS.iter().any(|kw| value_lower.contains(kw)) {
                return true;
            }
            TERRAFORM_FALSE_POSITIVES.contains(value_lower.as_str())
        }
        _ => false,
    }
}

const COMMON_VALUES: &[&str] = &[
    "true", "false", "none", "null", "undefined", "localhost", "password", "username", "user",
    "test", "example", "demo",
];

const PROGRAMMING_TERMS: &[&str] = &[
    "button",
    "click",
    "press",
    "hover",
    "focus",
    "blur",
    "select",
    "submit",
    "cancel",
    "close",
    "open",
    "toggle",
    "show",
    "hide",
    "display",
    "visible",
    "hidden",
    "active",
    "disabled",
    "enabled",
    "primarykey",
    "foreignkey",
    "buttonkey",
    "presskey",
    "hotkey",
    "shortcutkey",
    "accesskey",
    "tabkey",
    "escapekey",
    "enterkey",
    "spacekey",
    "arrowkey",
    "functionkey",
    "controlkey",
    "shiftkey",
    "altkey",
    "metakey",
    "keycode",
    "keyname",
    "keyvalue",
    "keytype",
    "keymap",
    "keybind",
    "keypress",
    "keydown",
    "keyup",
    "keyboard",
    "string",
    "number",
    "boolean",
    "object",
    "array",
    "function",
    "method",
    "property",
    "attribute",
    "element",
    "component",
    "module",
    "package",
    "library",
    "framework",
    "plugin",
    "public",
    "private",
    "static",
    "assets",
    "images",
    "scripts",
    "styles",
    "components",
    "templates",
    "views",
    "models",
    "controllers",
    "services",
    "utils",
    "helpers",
    "config",
    "database",
    "table",
    "column",
    "index",
    "constraint",
    "trigger",
    "procedure",
    "varchar",
    "integer",
    "datetime",
    "timestamp",
    "request",
    "response",
    "session",
    "cookie",
    "header",
    "body",
    "param",
    "query",
    "route",
    "endpoint",
    "middleware",
    "controller",
    "service",
    "repository",
    "entity",
    "model",
    "view",
    "template",
    "application",
    "version",
    "production",
    "development",
    "staging",
    "environment",
    "profile",
    "configuration",
    "settings",
    "options",
    "preferences",
    "defaults",
    "constants",
    "variables",
    "parameters",
];

const NATURAL_LANGUAGE_TERMS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    "jan",
    "feb",
    "mar",
    "apr",
    "jun",
    "jul",
    "aug",
    "sep",
    "oct",
    "nov",
    "dec",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "mon",
    "tue",
    "wed",
    "thu",
    "fri",
    "sat",
    "sun",
    "description",
    "information",
    "documentation",
    "explanation",
    "content",
    "message",
    "comment",
    "title",
    "heading",
    "label",
    "caption",
    "text",
    "example",
    "sample",
    "placeholder",
    "default",
    "standard",
    "normal",
    "regular",
    "typical",
    "common",
    "general",
    "basic",
    "simple",
    "morning",
    "afternoon",
    "evening",
    "night",
    "today",
    "tomorrow",
    "yesterday",
    "weekend",
    "weekday",
    "minute",
    "hour",
    "second",
    "success",
    "failure",
    "error",
    "warning",
    "notice",
    "info",
    "complete",
    "incomplete",
    "pending",
    "processing",
    "finished",
    "started",
    "stopped",
    "running",
    "idle",
    "waiting",
    "unauthorized",
    "unauthorised",
    "forbidden",
    "denied",
    "rejected",
    "authenticated",
    "unauthenticated",
    "authorized",
    "authorised",
    "permission",
    "permissions",
    "privileges",
    "access",
    "accessible",
    "inaccessible",
    "restricted",
    "unrestricted",
    "public",
    "protected",
    "allowed",
    "disallowed",
    "granted",
    "revoked",
    "expired",
    "valid",
    "invalid",
    "verified",
    "unverified",
    "confirmed",
    "unconfirmed",
    "notfound",
    "badrequest",
    "servererror",
    "timeout",
    "conflict",
    "redirect",
    "moved",
    "created",
    "accepted",
    "nocontent",
    "modified",
    "cached",
    "gateway",
    "unavailable",
    "filename",
    "filepath",
    "directory",
    "folder",
    "document",
    "file",
    "extension",
    "format",
    "type",
    "size",
    "length",
    "width",
    "height",
];

const STRUCTURAL_MARKERS: &[&str] = &[
    "http://", "https://", "ftp://", "file://", ".com", ".org", ".net", ".edu", ".gov", ".js",
    ".css", ".html", ".jsp", ".php", ".png", ".jpg", ".gif", ".svg", "${", "#{", "{{",
    "function(", "return ", "var ", "let ", "const ",
];

const SENTENCE_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

const DESCRIPTIVE_INDICATORS: &[&str] = &[
    "description",
    "message",
    "text",
    "content",
    "title",
    "label",
    "comment",
    "note",
    "info",
    "details",
    "summary",
    "caption",
    "unauthorized",
    "unauthorised",
    "forbidden",
    "denied",
    "access",
    "permission",
    "authenticated",
    "authorized",
    "authorised",
    "status",
    "error",
    "warning",
    "notice",
    "alert",
    "notification",
    "response",
    "request",
    "header",
    "body",
    "payload",
    "endpoint",
];

const AUTH_MESSAGE_PATTERNS: &[&str] = &[
    "access denied",
    "permission denied",
    "unauthorized access",
    "authentication failed",
    "authorization failed",
    "login failed",
    "invalid credentials",
    "session expired",
    "token expired",
    "forbidden access",
    "access forbidden",
    "not authorized",
    "authentication required",
    "login required",
    "credentials required",
];

const IDENTIFIER_ROLE_SUFFIXES: &[&str] = &["key", "id", "name", "type", "mode", "flag", "option"];

const IDENTIFIER_ROLE_PREFIXES: &[&str] = &[
    "button", "press", "click", "hover", "focus", "tab", "escape", "enter", "space", "arrow",
    "function", "control", "shift", "alt", "meta", "primary", "foreign", "unique", "composite",
];

/// Decides whether a candidate matched value is noise rather than a secret:
/// length bounds, file-type context, known-term dictionaries, structural
/// markers, and identifier-shaped non-secrets.
#[must_use]
pub fn should_skip_value(value: &str, path: &str) -> bool {
    let len = value.chars().count();
    if len < 6 || len > 500 {
        return true;
    }

    if !path.is_empty() && is_file_specific_false_positive(value, path) {
        return true;
    }

    let value_lower = value.to_lowercase();

    if COMMON_VALUES.contains(&value_lower.as_str())
        || PROGRAMMING_TERMS.contains(&value_lower.as_str())
        || NATURAL_LANGUAGE_TERMS.contains(&value_lower.as_str())
    {
        return true;
    }

    if STRUCTURAL_MARKERS.iter().any(|m| value_lower.contains(m)) {
        return true;
    }

    if value_lower.contains(' ') {
        let words: Vec<&str> = value_lower.split_whitespace().collect();
        if words.len() >= 2 && words.iter().any(|w| SENTENCE_WORDS.contains(w)) {
            return true;
        }
    }

    if DATE_TIME_PATTERNS.iter().any(|re| re.is_match(value)) {
        return true;
    }

    if DESCRIPTIVE_INDICATORS
        .iter()
        .any(|ind| value_lower.contains(ind))
    {
        return true;
    }

    if AUTH_MESSAGE_PATTERNS
        .iter()
        .any(|pat| value_lower.contains(pat))
    {
        return true;
    }

    if IDENTIFIER_ROLE_SUFFIXES
        .iter()
        .any(|suf| value_lower.ends_with(suf))
        && IDENTIFIER_ROLE_PREFIXES
            .iter()
            .any(|pre| value_lower.contains(pre))
    {
        return true;
    }

    false
}

static JSP_SAFE_PATTERNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "getparameter",
        "getattribute",
        "setattribute",
        "removeattribute",
        "getproperty",
        "setproperty",
        "getvalue",
        "setvalue",
        "getitem",
        "setitem",
        "haskey",
        "containskey",
        "keyup",
        "keydown",
        "keypress",
        "keycode",
        "keyname",
        "primarykey",
        "foreignkey",
        "uniquekey",
        "compositekey",
        "partitionkey",
        "sortkey",
        "hashkey",
        "indexkey",
        "buttonkey",
        "hotkey",
        "shortcutkey",
        "accesskey",
        "presskey",
        "clickkey",
        "eventkey",
        "inputkey",
        "configkey",
        "datakey",
        "cachekey",
        "storagekey",
        "sessionkey",
        "requestkey",
        "paramkey",
        "headerkey",
        "actionkey",
        "routekey",
        "pathkey",
        "templatekey",
        "resourcekey",
        "messagekey",
        "propertykey",
        "settingkey",
    ]
    .into_iter()
    .collect()
});

const METHOD_SUFFIXES: &[&str] = &["parameter", "attribute", "property", "value", "item"];
const JSP_PREFIXES: &[&str] = &["get", "set", "has", "is", "contains", "remove", "add"];

static AUTH_STATUS_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "unauthorized",
        "unauthorised",
        "authenticated",
        "unauthenticated",
        "authorized",
        "authorised",
        "authentication",
        "authorization",
        "authstatus",
        "authstate",
        "authresult",
        "autherror",
        "authmessage",
        "authresponse",
        "authrequest",
        "authfailed",
        "authsuccess",
    ]
    .into_iter()
    .collect()
});

const SUSPICIOUS_TERMS: &[&str] = &[
    "token",
    "secret",
    "password",
    "pwd",
    "pass",
    "credential",
    "private",
    "cert",
    "ssh",
];

/// Decides whether an identifier's name suggests it holds a secret, using
/// layered "key"/"auth" special-casing rather than a flat keyword scan.
#[must_use]
pub fn is_suspicious_name(name: &str) -> bool {
    let name_lower = name.to_lowercase();

    if JSP_SAFE_PATTERNS.contains(name_lower.as_str()) {
        return false;
    }

    if METHOD_SUFFIXES.iter().any(|s| name_lower.ends_with(s)) {
        return false;
    }

    if JSP_PREFIXES.iter().any(|p| name_lower.starts_with(p)) {
        return false;
    }

    if AUTH_STATUS_TERMS.contains(name_lower.as_str()) {
        return false;
    }

    if name_lower.contains("key") {
        return name_lower == "key"
            || ["api", "secret", "private", "auth", "token"]
                .iter()
                .any(|t| name_lower.contains(t));
    }

    if name_lower.contains("auth") {
        return ["key", "token", "secret", "credential", "pass"]
            .iter()
            .any(|t| name_lower.contains(t));
    }

    SUSPICIOUS_TERMS.iter().any(|t| name_lower.contains(t))
}

/// Terraform-specific structural override: an entire line is noise if it
/// references network/keyring/project plumbing rather than a literal
/// credential, even if a pattern would otherwise match.
#[must_use]
pub fn should_skip_terraform_line(line: &str, path: &str) -> bool {
    if !path.to_lowercase().ends_with(".tf") {
        return false;
    }

    let line_lower = line.to_lowercase();

    if TERRAFORM_KEYWORDS.iter().any(|kw| line_lower.contains(kw)) {
        return true;
    }

    TERRAFORM_RESOURCE_PATTERNS
        .iter()
        .any(|pat| line_lower.contains(pat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_are_skipped() {
        assert!(should_skip_value("abc", ""));
    }

    #[test]
    fn common_words_are_skipped() {
        assert!(should_skip_value("password", ""));
        assert!(should_skip_value("localhost", ""));
    }

    #[test]
    fn urls_are_skipped() {
        assert!(should_skip_value("https://example.com/path", ""));
    }

    #[test]
    fn plausible_secret_is_not_skipped() {
        assert!(!should_skip_value("kX9z2mQ7wLp4vR8tYb3N", ""));
    }

    #[test]
    fn jsp_getter_is_not_suspicious() {
        assert!(!is_suspicious_name("getParameter"));
        assert!(!is_suspicious_name("primaryKey"));
    }

    #[test]
    fn auth_status_word_is_not_suspicious() {
        assert!(!is_suspicious_name("unauthorized"));
    }

    #[test]
    fn api_key_is_suspicious() {
        assert!(is_suspicious_name("apiKey"));
        assert!(is_suspicious_name("secret_key"));
    }

    #[test]
    fn bare_key_is_suspicious() {
        assert!(is_suspicious_name("key"));
    }

    #[test]
    fn auth_token_is_suspicious_but_bare_auth_is_not() {
        assert!(is_suspicious_name("auth_token"));
        assert!(!is_suspicious_name("authStatus"));
    }

    #[test]
    fn terraform_network_line_is_skipped() {
        assert!(should_skip_terraform_line(
            "resource \"google_compute_network\" \"main\" {}",
            "main.tf"
        ));
    }

    #[test]
    fn non_terraform_file_never_skipped_by_terraform_rule() {
        assert!(!should_skip_terraform_line(
            "resource \"google_compute_network\" \"main\" {}",
            "main.rs"
        ));
    }
}
