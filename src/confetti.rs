//! Bridge to the canvas-confetti global loaded by the host page.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Object, Reflect};

pub struct Burst {
    pub origin_x: f64,
    pub origin_y: f64,
    pub particle_count: u32,
    pub spread: f64,
    pub start_velocity: f64,
    pub ticks: f64,
    pub z_index: i32,
}

impl Burst {
    fn to_options(&self) -> JsValue {
        let origin = Object::new();
        let _ = Reflect::set(&origin, &JsValue::from_str("x"), &self.origin_x.into());
        let _ = Reflect::set(&origin, &JsValue::from_str("y"), &self.origin_y.into());
        let opts = Object::new();
        let _ = Reflect::set(&opts, &JsValue::from_str("origin"), &origin);
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("particleCount"),
            &(self.particle_count as f64).into(),
        );
        let _ = Reflect::set(&opts, &JsValue::from_str("spread"), &self.spread.into());
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("startVelocity"),
            &self.start_velocity.into(),
        );
        let _ = Reflect::set(&opts, &JsValue::from_str("ticks"), &self.ticks.into());
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("zIndex"),
            &(self.z_index as f64).into(),
        );
        opts.into()
    }
}

fn confetti_global() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("confetti"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Fire one burst. A missing or broken confetti script is a silent no-op.
pub fn fire(burst: &Burst) {
    if let Some(confetti) = confetti_global() {
        let _ = confetti.call1(&JsValue::NULL, &burst.to_options());
    }
}
