use std::cell::RefCell;
use std::rc::Rc;

use web_sys::js_sys;
use yew::prelude::*;

use crate::celebrate::{burst_origins, particle_count, SPREAD_DEGREES, START_VELOCITY, TICKS};
use crate::confetti::{self, Burst};
use crate::config::{BURST_INTERVAL_MS, CELEBRATION_MS};

/// Invisible driver for the acceptance confetti. Mounted once on the terminal
/// screen; it runs its five-second window and cancels its own timer.
#[function_component(CelebrationEffect)]
pub fn celebration_effect() -> Html {
    use_effect_with_deps(
        move |_| {
            let ends_at = js_sys::Date::now() + CELEBRATION_MS;
            let interval_handle = Rc::new(RefCell::new(None));
            let interval_handle_clone = interval_handle.clone();
            let interval = gloo_timers::callback::Interval::new(BURST_INTERVAL_MS, move || {
                let remaining = ends_at - js_sys::Date::now();
                if remaining <= 0.0 {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                    return;
                }
                let count = particle_count(remaining);
                let (left, right) = burst_origins(&mut || js_sys::Math::random());
                for (x, y) in [left, right] {
                    confetti::fire(&Burst {
                        origin_x: x,
                        origin_y: y,
                        particle_count: count,
                        spread: SPREAD_DEGREES,
                        start_velocity: START_VELOCITY,
                        ticks: TICKS,
                        z_index: 0,
                    });
                }
            });
            *interval_handle_clone.borrow_mut() = Some(interval);
            move || {
                if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                    drop(interval);
                }
            }
        },
        (),
    );
    html! {}
}
