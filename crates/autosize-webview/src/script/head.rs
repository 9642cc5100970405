//! `document.head` injection for styles and link descriptors.

use autosize_common::FileLink;

/// Quote a value as a JavaScript string literal.
///
/// JSON string syntax is a subset of JS string syntax, so serde's encoder
/// gives correct escaping for quotes, backslashes, and control characters.
pub(crate) fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Build the `injectHead()` function body for the given styles and links.
///
/// Styles are appended in order, after which each link descriptor becomes a
/// `<link>` element. Every injected node carries `data-autosize` so a later
/// installation can remove it.
pub(super) fn inject_head_fn(styles: &[&str], files: &[FileLink]) -> String {
    let mut js = String::from(
        "\n    function injectHead() {\n        var head = document.head || document.getElementsByTagName('head')[0];\n        if (!head) {\n            return;\n        }\n",
    );

    for style in styles {
        js.push_str(&format!(
            "        (function () {{\n            var el = document.createElement('style');\n            el.setAttribute('data-autosize', '');\n            el.appendChild(document.createTextNode({}));\n            head.appendChild(el);\n        }}());\n",
            js_string(style)
        ));
    }

    for file in files {
        js.push_str(&format!(
            "        (function () {{\n            var el = document.createElement('link');\n            el.setAttribute('data-autosize', '');\n            el.rel = {};\n            el.type = {};\n            el.href = {};\n            head.appendChild(el);\n        }}());\n",
            js_string(&file.rel),
            js_string(&file.link_type),
            js_string(&file.href),
        ));
    }

    js.push_str("    }\n");
    js
}
