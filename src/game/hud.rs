//! Countdown and score displays.
//!
//! Both sit above the field, stay hidden while Idle, and are revealed when a
//! round starts. The clock renders `minutes:seconds` with unpadded seconds —
//! kept as-is from the original display contract.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Renders a second count as `M:S` (no zero padding on seconds).
pub fn format_clock(total_secs: u32) -> String {
    format!("{}:{}", total_secs / 60, total_secs % 60)
}

pub struct Hud {
    timer: HtmlElement,
    score: HtmlElement,
}

impl Hud {
    pub fn mount(doc: &Document) -> Result<Self, JsValue> {
        let timer = ensure_badge(doc, "cp-timer", "left:calc(50% - 120px)")?;
        let score = ensure_badge(doc, "cp-score", "left:calc(50% + 60px)")?;
        Ok(Self { timer, score })
    }

    /// Reveals both displays (round start).
    pub fn show(&self) {
        self.timer.style().set_property("visibility", "visible").ok();
        self.score.style().set_property("visibility", "visible").ok();
    }

    pub fn hide(&self) {
        self.timer.style().set_property("visibility", "hidden").ok();
        self.score.style().set_property("visibility", "hidden").ok();
    }

    pub fn render_clock(&self, remaining_secs: u32) {
        self.timer.set_text_content(Some(&format_clock(remaining_secs)));
    }

    /// Shows how many carrots are still out there, not the raw score.
    pub fn render_carrots_left(&self, left: u32) {
        self.score.set_text_content(Some(&left.to_string()));
    }
}

fn ensure_badge(doc: &Document, id: &str, offset: &str) -> Result<HtmlElement, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el.dyn_into()?);
    }
    let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
    el.set_id(id);
    el.set_attribute(
        "style",
        &format!(
            "position:fixed; top:14px; {offset}; min-width:56px; text-align:center; \
             font-family:'Fira Code', monospace; font-size:22px; padding:6px 12px; \
             background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:8px; \
             color:#ffd166; z-index:40; visibility:hidden;"
        ),
    )?;
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&el)?;
    Ok(el)
}
