//! Page bindings and CSS values that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module lets us unit-test the
//! element inventory and the style strings on the host.

use numtape::geometry::InputPlacement;
use numtape::problem::Field;

pub const EXPRESSION_ID: &str = "expression";
pub const CANVAS_ID: &str = "canvas";
/// Optional JSON `WidgetConfig` on the canvas element.
pub const CONFIG_ATTR: &str = "data-config";
pub const ARC_COLOR: &str = "red";

/// Every element id the page must provide.
pub fn required_element_ids() -> Vec<&'static str> {
    let mut ids = vec![EXPRESSION_ID, CANVAS_ID];
    ids.extend(Field::all().iter().map(|f| f.element_id()));
    ids
}

pub fn css_px(v: f64) -> String {
    format!("{v}px")
}

/// Inline style properties that make an input visible at `placement`.
pub fn input_style(placement: InputPlacement) -> Vec<(&'static str, String)> {
    let mut props = vec![("display", "block".to_string())];
    match placement {
        InputPlacement::At { left, top } => {
            props.push(("top", css_px(top)));
            props.push(("left", css_px(left)));
        }
        InputPlacement::RightEdge { right } => props.push(("right", css_px(right))),
    }
    props
}

/// Style for the label that replaces a frozen input, at the input's offsets.
pub fn label_style(top: &str, left: &str) -> Vec<(&'static str, String)> {
    vec![
        ("display", "block".to_string()),
        ("position", "absolute".to_string()),
        ("top", top.to_string()),
        ("left", left.to_string()),
    ]
}

/// Text shown in a frozen label.
pub fn label_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
