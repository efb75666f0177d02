//! Client-side script that styles the terms page.

/// Styles the three text callbacks (title, purpose, terms), HTML-decodes the
/// terms and defines `completed()` for the login UI.
///
/// It also sets the wrapper's `submitted` guard, so the page waits for the
/// user's button press instead of submitting itself.
pub const TERMS_DISPLAY_SCRIPT: &str = r#"var callbackScript = document.createElement("script");
callbackScript.type = "text/javascript";
callbackScript.text = "function completed() { document.querySelector(\"input[type=submit]\").click(); }";
document.body.appendChild(callbackScript);

submitted = true;

var decodeHTML = function (html) {
    var txt = document.createElement('textarea');
    txt.innerHTML = html;
    return txt.value;
};

function callback() {
    var title = document.getElementById('callback_1');
    title.className = "0 h1";
    title.align = "center";

    var message = document.getElementById('callback_2');
    message.className = "0 h3";
    message.align = "center";

    var terms = document.getElementById('callback_3');
    terms.className = "form-control  pre-scrollable";
    terms.style = "height: 150px;";
    terms.innerHTML = decodeHTML(terms.innerHTML);
}

if (document.readyState !== 'loading') {
    callback();
} else {
    document.addEventListener("DOMContentLoaded", callback);
}"#;

/// Wrap `script` in a self-submitting function bound to the form element
/// `output_id`.
///
/// The wrapper submits the page's form once, on a zero-delay timer, unless
/// `script` sets `submitted`. `_terms` is not interpolated; the terms are
/// sent in their own text callback.
pub fn client_side_script_executor(script: &str, _terms: &str, output_id: &str) -> String {
    format!(
        "(function(output) {{\n\
        \x20   var autoSubmitDelay = 0,\n\
        \x20       submitted = false;\n\
        \x20   function submit() {{\n\
        \x20       if (submitted) {{\n\
        \x20           return;\n\
        \x20       }}\n\
        \x20       document.forms[0].submit();\n\
        \x20       submitted = true;\n\
        \x20   }}\n\
        \x20   {script}\n\
        \x20   setTimeout(submit, autoSubmitDelay);\n\
        }}) (document.forms[0].elements['{output_id}']);\n"
    )
}
