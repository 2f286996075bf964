use crate::keymap::{self, KeyAction, PALETTE};
use instant::Instant;
use morph_core::{SceneDriver, Swipe};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<SceneDriver>>,
    palette_index: &Cell<usize>,
    started: Instant,
) {
    let Some(action) = keymap::action_for_key(&ev.key()) else {
        return;
    };
    let now_sec = started.elapsed().as_secs_f64();
    let mut scene = scene.borrow_mut();
    match action {
        KeyAction::Digit(d) => {
            if let Some(name) = scene.select_digit(d, now_sec) {
                log::info!("[keys] digit {} -> `{}`", d, name);
            }
        }
        KeyAction::NextPattern => {
            scene.step_pattern(Swipe::Right, now_sec);
        }
        KeyAction::PrevPattern => {
            scene.step_pattern(Swipe::Left, now_sec);
        }
        KeyAction::CycleColor => {
            let i = keymap::next_palette_index(palette_index.get());
            palette_index.set(i);
            scene.set_color_base(PALETTE[i]);
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(scene: Rc<RefCell<SceneDriver>>, started: Instant) {
    if let Some(window) = web::window() {
        let palette_index = Cell::new(0usize);
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene, &palette_index, started);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
