//! Outcome overlay: one message line and the replay control.
//!
//! Visibility is a single class marker (`cp-hidden`); the class rule is
//! injected once at mount so the scaffold works on a bare page. Messages do
//! not queue — each `show` overwrites the previous text.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Class marker that keeps the overlay (or any scaffold element) off-screen.
pub const HIDDEN_CLASS: &str = "cp-hidden";

pub struct PopUp {
    root: Element,
    message: Element,
    replay: HtmlElement,
}

impl PopUp {
    pub fn mount(doc: &Document) -> Result<Self, JsValue> {
        ensure_stylesheet(doc)?;
        let root = if let Some(el) = doc.get_element_by_id("cp-popup") {
            el
        } else {
            let el = doc.create_element("div")?;
            el.set_id("cp-popup");
            el.set_attribute(
                "style",
                "position:fixed; left:50%; top:45%; transform:translate(-50%,-50%); \
                 display:flex; flex-direction:column; align-items:center; gap:14px; \
                 font-family:'Fira Code', monospace; font-size:28px; padding:22px 36px; \
                 background:rgba(0,0,0,0.72); border:1px solid #333; border-radius:12px; \
                 color:#ffffff; z-index:50;",
            )?;
            el.class_list().add_1(HIDDEN_CLASS)?;
            doc.body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&el)?;
            el
        };

        let message = match doc.get_element_by_id("cp-popup-msg") {
            Some(el) => el,
            None => {
                let el = doc.create_element("span")?;
                el.set_id("cp-popup-msg");
                root.append_child(&el)?;
                el
            }
        };

        let replay: HtmlElement = match doc.get_element_by_id("cp-popup-replay") {
            Some(el) => el.dyn_into()?,
            None => {
                let el: HtmlElement = doc.create_element("button")?.dyn_into()?;
                el.set_id("cp-popup-replay");
                el.set_text_content(Some("\u{21bb}"));
                el.set_attribute(
                    "style",
                    "font-size:26px; padding:4px 18px; border-radius:8px; cursor:pointer;",
                )?;
                root.append_child(&el)?;
                el
            }
        };

        Ok(Self { root, message, replay })
    }

    /// The replay control; the controller wires its click listener.
    pub fn replay_button(&self) -> &HtmlElement {
        &self.replay
    }

    /// Replaces the message text and reveals the overlay.
    pub fn show(&self, text: &str) {
        self.message.set_text_content(Some(text));
        self.root.class_list().remove_1(HIDDEN_CLASS).ok();
    }

    pub fn hide(&self) {
        self.root.class_list().add_1(HIDDEN_CLASS).ok();
    }
}

fn ensure_stylesheet(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id("cp-style").is_some() {
        return Ok(());
    }
    let style = doc.create_element("style")?;
    style.set_id("cp-style");
    style.set_text_content(Some(&format!(".{HIDDEN_CLASS}{{display:none;}}")));
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&style)?;
    Ok(())
}
