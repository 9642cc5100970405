//! JavaScript fragments assembled by [`ScriptTemplate`](super::ScriptTemplate).
//!
//! Every fragment lives inside one IIFE that installs itself on
//! `window.__autosize`. Re-running the program tears the previous
//! installation down first, so injecting it again after a configuration
//! change replaces listeners and observers instead of stacking them.

/// Opens the IIFE and tears down any previous installation.
pub(super) const PRELUDE: &str = r#"
;(function () {
    var ns = window.__autosize = window.__autosize || {};
    if (typeof ns.teardown === 'function') {
        ns.teardown();
    }
    ns.counter = ns.counter || 0;
"#;

/// Wraps the body's original children so one stable element is measured.
pub(super) const WRAP_BODY: &str = r#"
    function prepareRoot() {
        if (!document.body || document.getElementById('height-wrapper')) {
            return;
        }
        var wrapper = document.createElement('div');
        wrapper.id = 'height-wrapper';
        while (document.body.firstChild instanceof Node) {
            wrapper.appendChild(document.body.firstChild);
        }
        document.body.appendChild(wrapper);
    }
"#;

/// Iframe content is already isolated in its own element.
pub(super) const KEEP_BODY: &str = r#"
    function prepareRoot() {}
"#;

/// Writes the report into the title and bumps the location fragment so the
/// host sees a fresh navigation state even when the title repeats.
pub(super) const REPORT_VIA_TITLE: &str = r#"
    function report(w, h) {
        document.title = w + ',' + h;
        ns.counter += 1;
        window.location.hash = ns.counter;
    }
"#;

/// Posts the report through the IPC bridge.
pub(super) const REPORT_VIA_IPC: &str = r#"
    function report(w, h) {
        ns.counter += 1;
        if (window.autosize && window.autosize.ipc) {
            window.autosize.ipc.send('size_report', w + ',' + h);
        } else if (window.ipc) {
            window.ipc.postMessage(JSON.stringify({ kind: 'size_report', payload: w + ',' + h }));
        }
    }
"#;

/// Measures the effective root. Only a height change is reported.
///
/// Nothing is measured until `start()` has prepared the root; triggers that
/// fire while the body is still being parsed are dropped.
pub(super) const UPDATE_SIZE: &str = r#"
    var ready = false;
    function updateSize() {
        if (!ready) {
            return;
        }
        var root = document.body && document.body.firstElementChild;
        if (!root) {
            return;
        }
        var rect = root.getBoundingClientRect();
        var newWidth = Math.round(rect.width);
        var newHeight = Math.round(rect.height);
        if (newHeight !== height) {
            height = newHeight;
            width = newWidth;
            report(newWidth, newHeight);
        }
    }
"#;

/// Removes head elements left by a previous installation.
pub(super) const CLEAR_HEAD: &str = r#"
    function clearInjected() {
        var stale = document.querySelectorAll('[data-autosize]');
        for (var k = 0; k < stale.length; k++) {
            stale[k].parentNode.removeChild(stale[k]);
        }
    }
"#;

/// Installs triggers and the teardown hook, then closes the IIFE.
pub(super) const TRIGGERS: &str = r#"
    function start() {
        clearInjected();
        injectHead();
        prepareRoot();
        ready = true;
        updateSize();
    }
    var Observer = window.MutationObserver || window.WebKitMutationObserver;
    var observer = Observer ? new Observer(updateSize) : null;
    if (observer) {
        observer.observe(document, { subtree: true, childList: true, attributes: true });
    }
    window.addEventListener('load', updateSize);
    window.addEventListener('resize', updateSize);
    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', start);
    } else {
        start();
    }
    ns.update = updateSize;
    ns.teardown = function () {
        if (observer) {
            observer.disconnect();
        }
        window.removeEventListener('load', updateSize);
        window.removeEventListener('resize', updateSize);
        document.removeEventListener('DOMContentLoaded', start);
    };
}());
"#;

/// Transparent background and no document-level scrolling.
pub(super) const BASE_STYLE: &str =
    "html, body { background: transparent; margin: 0; overflow: hidden; }";
