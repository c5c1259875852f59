//! Game controller: DOM scaffold, input wiring, and the round lifecycle.
//!
//! Everything stateful lives in one `Controller` behind a thread-local cell;
//! every handler (toggle, replay, delegated field clicks, countdown tick)
//! enters through it, so there is a single logical thread of control. All
//! subscriptions are registered in `mount` and removed in `unmount` — no
//! closure is ever leaked to the page.

mod audio;
mod popup;
pub mod field;
pub mod hud;
pub mod rng;
pub mod round;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, window};

use crate::{BUG_COUNT, CARROT_COUNT, ROUND_DURATION_SECS};
use audio::{AudioCueSet, Cue};
use field::FieldView;
use hud::Hud;
use popup::PopUp;
use rng::FieldRng;
use round::{ClickOutcome, ItemKind, Round, TickOutcome};

const PLAY_LABEL: &str = "\u{25b6}";
const STOP_LABEL: &str = "\u{25a0}";

const WIN_TEXT: &str = "YOU WIN!";
const LOSE_TEXT: &str = "YOU LOST..";
const REPLAY_TEXT: &str = "REPLAY?";

// --- Controller state --------------------------------------------------------

/// A "click" subscription that can be unhooked again at teardown.
struct ClickListener {
    target: EventTarget,
    cb: Closure<dyn FnMut(MouseEvent)>,
}

impl ClickListener {
    fn attach(target: &EventTarget, cb: Closure<dyn FnMut(MouseEvent)>) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            cb,
        })
    }
}

// Unhooks the subscription before the closure is freed, so a dropped
// listener can never leave the page calling into a dead callback.
impl Drop for ClickListener {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback("click", self.cb.as_ref().unchecked_ref())
            .ok();
    }
}

struct Controller {
    round: Round,
    rng: FieldRng,
    field: FieldView,
    hud: Hud,
    popup: PopUp,
    audio: AudioCueSet,
    button: HtmlElement,
    interval_id: Option<i32>,
    // Lives for the whole mount so cancelling the interval from inside its
    // own callback never frees the executing closure.
    tick_cb: Closure<dyn FnMut()>,
    // Held for teardown only; dropping them detaches the page listeners.
    _listeners: Vec<ClickListener>,
}

thread_local! {
    static CONTROLLER: RefCell<Option<Controller>> = RefCell::new(None);
}

fn with_controller(f: impl FnOnce(&mut Controller)) {
    CONTROLLER.with(|cell| {
        if let Some(ctrl) = cell.borrow_mut().as_mut() {
            f(ctrl);
        }
    });
}

// --- Mount / teardown --------------------------------------------------------

/// Builds (or reuses) the scaffold under `body`, wires all input, and leaves
/// the game Idle. A second mount replaces the first.
pub fn mount() -> Result<(), JsValue> {
    unmount();
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let field = FieldView::mount(&doc)?;
    let hud = Hud::mount(&doc)?;
    let popup = PopUp::mount(&doc)?;
    let audio = AudioCueSet::load()?;
    let button = ensure_toggle_button(&doc)?;

    // Handlers reach the controller through the thread-local cell; none of
    // them captures DOM state of its own.
    let toggle_cb = Closure::wrap(Box::new(move |_evt: MouseEvent| {
        with_controller(|ctrl| {
            if ctrl.round.is_running() {
                stop_round(ctrl);
            } else {
                start_round(ctrl);
            }
        });
    }) as Box<dyn FnMut(_)>);

    let replay_cb = Closure::wrap(Box::new(move |_evt: MouseEvent| {
        with_controller(start_round);
    }) as Box<dyn FnMut(_)>);

    let field_cb = Closure::wrap(Box::new(move |evt: MouseEvent| {
        with_controller(|ctrl| on_field_click(ctrl, &evt));
    }) as Box<dyn FnMut(_)>);

    let tick_cb = Closure::wrap(Box::new(move || {
        with_controller(on_tick);
    }) as Box<dyn FnMut()>);

    let listeners = vec![
        ClickListener::attach(button.as_ref(), toggle_cb)?,
        ClickListener::attach(popup.replay_button().as_ref(), replay_cb)?,
        ClickListener::attach(field.element().as_ref(), field_cb)?,
    ];

    CONTROLLER.with(|cell| {
        cell.replace(Some(Controller {
            round: Round::new(CARROT_COUNT),
            rng: FieldRng::seeded(),
            field,
            hud,
            popup,
            audio,
            button,
            interval_id: None,
            tick_cb,
            _listeners: listeners,
        }))
    });
    clog("carrot-patch mounted");
    Ok(())
}

/// Unhooks listeners, cancels the countdown, silences audio, and drops the
/// controller. No-op when nothing is mounted.
pub fn unmount() {
    CONTROLLER.with(|cell| {
        if let Some(ctrl) = cell.borrow_mut().take() {
            if let Some(id) = ctrl.interval_id {
                if let Some(win) = window() {
                    win.clear_interval_with_handle(id);
                }
            }
            ctrl.audio.stop_background();
            // Dropping the controller detaches every listener and only then
            // frees the closures.
        }
    });
}

// --- Round lifecycle ---------------------------------------------------------

fn start_round(ctrl: &mut Controller) {
    ctrl.round.begin(ROUND_DURATION_SECS);
    ctrl.popup.hide();
    ctrl.field.clear();
    ctrl.field
        .populate(ItemKind::Carrot, CARROT_COUNT, &mut ctrl.rng)
        .ok();
    ctrl.field
        .populate(ItemKind::Bug, BUG_COUNT, &mut ctrl.rng)
        .ok();
    ctrl.hud.show();
    ctrl.hud.render_clock(ctrl.round.remaining_secs());
    ctrl.hud.render_carrots_left(ctrl.round.carrots_left());
    show_stop_button(ctrl);
    start_interval(ctrl);
    ctrl.audio.start_background();
}

/// Manual abort mid-round: freeze the clock where it is and offer a replay.
fn stop_round(ctrl: &mut Controller) {
    if !ctrl.round.abort() {
        return;
    }
    cancel_interval(ctrl);
    hide_button(ctrl);
    ctrl.popup.show(REPLAY_TEXT);
    ctrl.audio.play(Cue::Alert);
    ctrl.audio.stop_background();
}

/// Single terminal transition for win and lose alike. The interval is
/// cancelled before the outcome is presented so no stale tick can land.
fn finish_round(ctrl: &mut Controller, win: bool) {
    cancel_interval(ctrl);
    hide_button(ctrl);
    ctrl.audio.play(if win { Cue::Win } else { Cue::BugPull });
    ctrl.audio.stop_background();
    ctrl.popup.show(if win { WIN_TEXT } else { LOSE_TEXT });
    clog(if win { "round won" } else { "round lost" });
}

// --- Handlers ----------------------------------------------------------------

fn on_field_click(ctrl: &mut Controller, evt: &MouseEvent) {
    let Some(target) = evt.target() else { return };
    let Some(el) = target.dyn_ref::<Element>() else {
        return;
    };
    let classes = el.class_list();
    let kind = if classes.contains(ItemKind::Carrot.class_name()) {
        ItemKind::Carrot
    } else if classes.contains(ItemKind::Bug.class_name()) {
        ItemKind::Bug
    } else {
        return;
    };
    match ctrl.round.item_clicked(kind) {
        ClickOutcome::Ignored => {}
        ClickOutcome::Scored { left } => {
            el.remove();
            ctrl.audio.play(Cue::CarrotPull);
            ctrl.hud.render_carrots_left(left);
        }
        ClickOutcome::Cleared => {
            el.remove();
            ctrl.audio.play(Cue::CarrotPull);
            ctrl.hud.render_carrots_left(0);
            finish_round(ctrl, true);
        }
        ClickOutcome::Struck => finish_round(ctrl, false),
    }
}

fn on_tick(ctrl: &mut Controller) {
    match ctrl.round.tick() {
        TickOutcome::Ignored => {}
        TickOutcome::Counting { remaining } => ctrl.hud.render_clock(remaining),
        TickOutcome::Expired { win } => {
            ctrl.hud.render_clock(0);
            finish_round(ctrl, win);
        }
    }
}

// --- Countdown interval ------------------------------------------------------

fn start_interval(ctrl: &mut Controller) {
    cancel_interval(ctrl);
    if let Some(win) = window() {
        match win.set_interval_with_callback_and_timeout_and_arguments_0(
            ctrl.tick_cb.as_ref().unchecked_ref(),
            1000,
        ) {
            Ok(id) => ctrl.interval_id = Some(id),
            Err(_) => clog("countdown interval could not be scheduled"),
        }
    }
}

fn cancel_interval(ctrl: &mut Controller) {
    if let Some(id) = ctrl.interval_id.take() {
        if let Some(win) = window() {
            win.clear_interval_with_handle(id);
        }
    }
}

// --- Scaffold ----------------------------------------------------------------

fn ensure_toggle_button(doc: &Document) -> Result<HtmlElement, JsValue> {
    if let Some(el) = doc.get_element_by_id("cp-game-btn") {
        return Ok(el.dyn_into()?);
    }
    let el: HtmlElement = doc.create_element("button")?.dyn_into()?;
    el.set_id("cp-game-btn");
    el.set_text_content(Some(PLAY_LABEL));
    el.set_attribute(
        "style",
        "position:fixed; top:12px; left:50%; transform:translateX(-50%); \
         font-size:24px; padding:6px 20px; border-radius:8px; cursor:pointer; z-index:40;",
    )?;
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&el)?;
    Ok(el)
}

fn show_stop_button(ctrl: &Controller) {
    ctrl.button.set_text_content(Some(STOP_LABEL));
    ctrl.button.style().set_property("visibility", "visible").ok();
}

fn hide_button(ctrl: &Controller) {
    ctrl.button.style().set_property("visibility", "hidden").ok();
}

fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
