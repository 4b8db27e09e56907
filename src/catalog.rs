// src/catalog.rs
//! The fixed rule set: compiled-once pattern catalog, entropy thresholds,
//! and the exclusion/false-positive dictionaries the suppression layer
//! consults. Nothing here is user-editable; a deployment that wants
//! different behavior forks the catalog rather than configuring it at
//! runtime.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// One entry in the static pattern catalog.
pub struct Pattern {
    pub regex: &'static str,
    pub kind: &'static str,
    pub min_length: usize,
    pub require_entropy: bool,
    pub entropy_threshold: f64,
    pub check_name: bool,
}

pub const ENTROPY_DEFAULT: f64 = 4.3;
pub const ENTROPY_PASSWORD: f64 = 3.2;
pub const ENTROPY_GENERIC_KEY: f64 = 4.8;

/// Compiled-once regexes for the catalog above, in the same order.
pub static PATTERN_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|p| Regex::new(p.regex).expect("static pattern catalog regex must compile"))
        .collect()
});

pub static PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern {
            regex: r"AKIA[0-9A-Z]{16}",
            kind: "AWS Access Key ID",
            min_length: 20,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"ASIA[0-9A-Z]{16}",
            kind: "AWS Session Token ID",
            min_length: 20,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"AIza[0-9A-Za-z_\-]{35}",
            kind: "Google API Key",
            min_length: 39,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"xox[baprs]-[0-9A-Za-z\-]{10,}",
            kind: "Slack Token",
            min_length: 16,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"sk_live_[0-9A-Za-z]{24,}",
            kind: "Stripe Live Secret Key",
            min_length: 32,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"SG\.[0-9A-Za-z_\-]{22}\.[0-9A-Za-z_\-]{43}",
            kind: "SendGrid API Key",
            min_length: 60,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"sq0[a-z]{3}-[0-9A-Za-z\-_]{22,43}",
            kind: "Square Access Token",
            min_length: 30,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"ghp_[0-9A-Za-z]{36}",
            kind: "GitHub Personal Access Token",
            min_length: 40,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"gh[oprsu]_[0-9A-Za-z]{36}",
            kind: "GitHub Token",
            min_length: 40,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"glpat-[0-9A-Za-z\-_]{20}",
            kind: "GitLab Personal Access Token",
            min_length: 26,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"sk-[a-zA-Z0-9_-]{36,}",
            kind: "OpenAI API Key",
            min_length: 39,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+",
            kind: "JWT Token",
            min_length: 30,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"ssh-(rsa|ed25519|dss) [A-Za-z0-9+/]+={0,2}",
            kind: "SSH Public Key",
            min_length: 40,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"-----BEGIN\s+(?:RSA|OPENSSH|DSA|EC|PGP)?\s*PRIVATE KEY-----",
            kind: "Private Key Header",
            min_length: 0,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"(?i)bearer\s+[a-zA-Z0-9_\-.]{10,}",
            kind: "Bearer Token",
            min_length: 17,
            require_entropy: false,
            entropy_threshold: ENTROPY_DEFAULT,
            check_name: false,
        },
        Pattern {
            regex: r"\b[0-9a-fA-F]{40,}\b",
            kind: "Generic Long Hex String",
            min_length: 40,
            require_entropy: true,
            entropy_threshold: ENTROPY_GENERIC_KEY,
            check_name: false,
        },
        Pattern {
            regex: r"\b[A-Za-z0-9+/]{64,}={0,2}\b",
            kind: "Generic Base64 Blob",
            min_length: 64,
            require_entropy: true,
            entropy_threshold: ENTROPY_GENERIC_KEY,
            check_name: false,
        },
    ]
});

/// Extensions never scanned regardless of content (archives, binaries, media).
pub static EXCLUDED_EXTENSIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "zip", "gz", "tar", "rar", "7z", "exe", "dll", "so", "dylib", "jar", "war", "ear",
        "class", "pyc", "o", "a", "lib", "obj", "bin", "jpg", "jpeg", "png", "gif", "bmp", "ico",
        "mp3", "mp4", "avi", "mov", "wmv", "flv", "pdf", "doc", "docx", "xls", "xlsx", "ppt",
        "pptx", "ttf", "otf", "woff", "woff2", "eot", "svg", "tif", "tiff", "webp",
    ]
    .into_iter()
    .collect()
});

/// Directory path components that prune a whole subtree from scanning.
pub static EXCLUDED_DIRECTORIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "distribution",
        "node_modules",
        "vendor",
        "build",
        "dist",
        "reports",
        "scan_results",
        "__pycache__",
        ".git",
        "target",
        "test",
        "tests",
    ]
    .into_iter()
    .collect()
});

/// Basename substrings that exclude a file regardless of directory or
/// extension (e.g. `sample_tokens.test.py`).
pub static EXCLUDED_FILENAME_SUBSTRINGS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| vec!["test"]);

/// Extensions that are themselves sensitive-material containers: always
/// reported regardless of content (certificates, keystores).
pub static DISALLOWED_EXTENSIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "crt",
        "cer",
        "ca-bundle",
        "p7b",
        "p7c",
        "p7s",
        "pem",
        "jceks",
        "key",
        "keystore",
        "jks",
        "p12",
        "pfx",
    ]
    .into_iter()
    .collect()
});

/// Keywords that make a Terraform line a structural reference rather than
/// a literal secret (resource names, network/keyring identifiers).
pub static TERRAFORM_KEYWORDS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| vec!["keyrings", "networks", "subnetworks", "projects/"]);

pub static TERRAFORM_RESOURCE_PATTERNS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "google_compute_network",
        "google_compute_subnetwork",
        "google_kms_keyring",
        "google_project",
        "google_project_service",
        "google_project_iam",
        "data.google_project",
        "data.google_compute_network",
        "data.google_kms_keyring",
    ]
});

/// Per-extension identifiers and method-call fragments that are structural
/// noise, not secrets, for JS/TS/JSP/Java files.
pub static JS_JSP_FALSE_POSITIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "onclick",
        "onload",
        "onchange",
        "onsubmit",
        "onfocus",
        "onblur",
        "onkeydown",
        "onkeyup",
        "onkeypress",
        "onmousedown",
        "onmouseup",
        "classname",
        "classlist",
        "innerhtml",
        "innertext",
        "textcontent",
        "getattribute",
        "setattribute",
        "removeattribute",
        "hasattribute",
        "getelementbyid",
        "getelementsbyclass",
        "queryselector",
        "usestate",
        "useeffect",
        "usecontext",
        "usememo",
        "usecallback",
        "componentdidmount",
        "componentwillunmount",
        "shouldcomponentupdate",
        "requestmapping",
        "pathvariable",
        "requestparam",
        "modelandview",
        "httpservletrequest",
        "httpservletresponse",
        "httpmethod",
        "getparameter",
        "getproperty",
        "setproperty",
        "getvalue",
        "setvalue",
        "getitem",
        "setitem",
        "haskey",
        "containskey",
        "getintparameter",
        "getstringparameter",
        "getbooleanparameter",
        "userkey",
        "sessionkey",
        "requestkey",
        "paramkey",
        "configkey",
        "messagekey",
        "resourcekey",
        "propertykey",
        "datakey",
        "itemkey",
        "pagekey",
        "formkey",
        "fieldkey",
        "inputkey",
        "outputkey",
        "sortkey",
        "filterkey",
        "searchkey",
        "querykey",
        "resultkey",
        "primarykey",
        "foreignkey",
        "uniquekey",
        "compositekey",
        "partitionkey",
        "indexkey",
        "hashkey",
        "entitykey",
        "buttonkey",
        "hotkey",
        "shortcutkey",
        "accesskey",
        "tabkey",
        "presskey",
        "clickkey",
        "eventkey",
        "keycode",
        "keyname",
        "keyup",
        "keydown",
        "keypress",
        "keyboard",
        "contextpath",
        "servletpath",
        "requesturi",
        "querystring",
        "sessionattribute",
        "modelattribute",
        "restcontroller",
    ]
    .into_iter()
    .collect()
});

pub static JS_JSP_CALL_FRAGMENTS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "document.",
        "window.",
        "console.",
        "jquery.",
        "$.",
        "angular.",
        "react.",
        "vue.",
        "this.",
        "event.",
        "target.",
        "currenttarget.",
        "response.",
        "request.",
        "session.",
        "application.",
        "pagecontext.",
        ".getparameter(",
        ".getattribute(",
        ".setattribute(",
        ".getproperty(",
        ".setproperty(",
        ".getvalue(",
        ".setvalue(",
        ".get(",
        ".put(",
        ".containskey(",
        ".haskey(",
        ".keyup(",
        ".keydown(",
        ".keypress(",
    ]
});

pub static CSS_FALSE_POSITIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "background",
        "foreground",
        "border",
        "margin",
        "padding",
        "position",
        "display",
        "visibility",
        "overflow",
        "float",
        "fontfamily",
        "fontsize",
        "fontweight",
        "textalign",
        "textdecoration",
        "lineheight",
        "letterspacing",
        "wordspacing",
        "whitespace",
    ]
    .into_iter()
    .collect()
});

pub static HTML_XML_FALSE_POSITIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "charset",
        "viewport",
        "description",
        "keywords",
        "author",
        "generator",
        "robots",
        "canonical",
        "stylesheet",
        "javascript",
        "alternate",
        "shortcut",
        "manifest",
        "application",
    ]
    .into_iter()
    .collect()
});

pub static TERRAFORM_FALSE_POSITIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "google_compute_network",
        "google_compute_subnetwork",
        "google_kms_keyring",
        "google_project",
        "google_project_service",
        "google_project_iam",
        "data.google_project",
        "data.google_compute_network",
        "data.google_kms_keyring",
        "var.project_id",
        "var.network_name",
        "var.subnetwork_name",
        "var.keyring_name",
        "local.project_id",
        "local.network_name",
        "local.subnetwork_name",
        "terraform.workspace",
        "terraform.workspace_name",
        "terraform.workspace_id",
    ]
    .into_iter()
    .collect()
});

/// Checks whether a tracked-file path should be excluded from scanning
/// entirely: by extension, by a path component naming an excluded
/// directory, or by a basename substring. Deterministic and
/// order-independent over its inputs.
#[must_use]
pub fn should_exclude_file(path: &str) -> bool {
    let lower = path.to_lowercase();

    if let Some(ext) = lower.rsplit('.').next() {
        if EXCLUDED_EXTENSIONS.contains(ext) {
            return true;
        }
    }

    if lower
        .split('/')
        .any(|component| EXCLUDED_DIRECTORIES.contains(component))
    {
        return true;
    }

    let basename = lower.rsplit('/').next().unwrap_or(&lower);
    EXCLUDED_FILENAME_SUBSTRINGS
        .iter()
        .any(|token| basename.contains(token))
}

/// Extensions that are themselves sensitive-material containers regardless
/// of content (certificates, keystores, private-key files).
#[must_use]
pub fn is_disallowed_extension(path: &str) -> bool {
    let lower = path.to_lowercase();
    lower
        .rsplit('.')
        .next()
        .is_some_and(|ext| DISALLOWED_EXTENSIONS.contains(ext))
}
