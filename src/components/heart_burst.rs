use web_sys::js_sys;
use yew::prelude::*;

use crate::celebrate::heart_burst;

const HEART_CSS: &str = r#"
.heart-burst {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    pointer-events: none;
}
.heart-burst span {
    position: absolute;
    opacity: 0;
    animation: heart-pop 1s ease-out forwards;
}
@keyframes heart-pop {
    0% { transform: translate(0, 0) scale(0); opacity: 1; }
    50% { transform: translate(calc(var(--tx) * 0.5), calc(var(--ty) * 0.5)) scale(1.5); opacity: 1; }
    100% { transform: translate(var(--tx), var(--ty)) scale(0); opacity: 0; }
}
"#;

/// Short-lived radial spray of hearts around the advance button. The parent
/// mounts a fresh instance per pulse, so the layout is rolled on mount.
#[function_component(HeartBurst)]
pub fn heart_burst_overlay() -> Html {
    let hearts = use_memo(|_| heart_burst(&mut || js_sys::Math::random()), ());
    html! {
        <div class="heart-burst">
            <style>{ HEART_CSS }</style>
            { for hearts.iter().enumerate().map(|(i, heart)| {
                let style = format!(
                    "--tx: {:.1}px; --ty: {:.1}px; color: {}; animation-delay: {:.2}s;",
                    heart.x_offset, heart.y_offset, heart.color, heart.delay_secs
                );
                html! { <span key={i.to_string()} style={style}>{ "❤" }</span> }
            }) }
        </div>
    }
}
