//! The playing field: random sprite placement plus the container element.
//!
//! Placement is a pure function (`scatter`) so bounds behavior is testable
//! off-browser; `FieldView` owns the DOM half. Overlapping sprites are
//! allowed — placement draws are independent with no collision check.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::rng::FieldRng;
use super::round::ItemKind;

/// Sprite edge length in CSS pixels. Placement keeps the whole sprite
/// inside the field, so draws range over `[0, dim - ITEM_SIZE]`.
pub const ITEM_SIZE: f64 = 80.0;

/// Field size used when the container has no measurable box of its own
/// (freshly created scaffold with no page CSS).
const DEFAULT_FIELD_W: f64 = 800.0;
const DEFAULT_FIELD_H: f64 = 500.0;

/// Draws `count` independent uniform positions for sprites of `ITEM_SIZE`
/// within a `field_w x field_h` box. Fields smaller than a sprite clamp the
/// range to zero rather than placing outside the box.
pub fn scatter(rng: &mut FieldRng, count: u32, field_w: f64, field_h: f64) -> Vec<(f64, f64)> {
    let max_x = (field_w - ITEM_SIZE).max(0.0);
    let max_y = (field_h - ITEM_SIZE).max(0.0);
    (0..count)
        .map(|_| (rng.gen_range_f64(0.0, max_x), rng.gen_range_f64(0.0, max_y)))
        .collect()
}

/// The field container and its bounds, measured once at mount.
pub struct FieldView {
    doc: Document,
    root: Element,
    width: f64,
    height: f64,
}

impl FieldView {
    /// Creates or reuses the `#cp-field` container under `body` and measures
    /// its box. The box is assumed stable for the session (no resize handling).
    pub fn mount(doc: &Document) -> Result<Self, JsValue> {
        let root = if let Some(el) = doc.get_element_by_id("cp-field") {
            el
        } else {
            let el = doc.create_element("div")?;
            el.set_id("cp-field");
            el.set_attribute(
                "style",
                "position:relative; width:800px; height:500px; margin:16px auto; \
                 background:#7cb342; border-radius:14px; overflow:hidden;",
            )?;
            doc.body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&el)?;
            el
        };
        let rect = root.get_bounding_client_rect();
        let (width, height) = if rect.width() >= ITEM_SIZE && rect.height() >= ITEM_SIZE {
            (rect.width(), rect.height())
        } else {
            (DEFAULT_FIELD_W, DEFAULT_FIELD_H)
        };
        Ok(Self {
            doc: doc.clone(),
            root,
            width,
            height,
        })
    }

    pub fn element(&self) -> &Element {
        &self.root
    }

    /// Removes every spawned sprite so restarts never stack items.
    pub fn clear(&self) {
        self.root.set_inner_html("");
    }

    /// Appends `count` sprites of `kind` at fresh random positions.
    pub fn populate(&self, kind: ItemKind, count: u32, rng: &mut FieldRng) -> Result<(), JsValue> {
        for (x, y) in scatter(rng, count, self.width, self.height) {
            let item = self.doc.create_element("img")?;
            item.set_attribute("class", kind.class_name())?;
            item.set_attribute("src", kind.sprite_path())?;
            item.set_attribute(
                "style",
                &format!(
                    "position:absolute; left:{x:.0}px; top:{y:.0}px; \
                     width:{ITEM_SIZE}px; height:{ITEM_SIZE}px; cursor:pointer;"
                ),
            )?;
            self.root.append_child(&item)?;
        }
        Ok(())
    }
}
