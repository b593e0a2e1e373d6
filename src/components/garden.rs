use web_sys::js_sys;
use yew::prelude::*;

use crate::garden::{generate_garden, OrnamentSpec};

const GARDEN_CSS: &str = r#"
@keyframes garden-rise {
    from { transform: translateY(100vh); }
    to { transform: translateY(-10vh); }
}
@keyframes garden-sway {
    0%, 100% { transform: translateX(0); }
    33% { transform: translateX(1.5rem); }
    66% { transform: translateX(-1.5rem); }
}
@keyframes garden-flutter {
    0%, 100% { transform: translateX(0) scale(0.8); }
    33% { transform: translateX(1.5rem) scale(1.1); }
    66% { transform: translateX(-1.5rem) scale(0.95); }
}
"#;

#[derive(Properties, PartialEq)]
pub struct OrnamentProps {
    pub spec: OrnamentSpec,
}

#[function_component(FloatingOrnament)]
pub fn floating_ornament(props: &OrnamentProps) -> Html {
    let spec = &props.spec;
    // `backwards` keeps the ornament parked below the viewport through its
    // start delay.
    let outer_style = format!(
        "position: absolute; top: 0; left: {:.2}%; font-size: {:.2}rem; z-index: -1; \
         pointer-events: none; animation: garden-rise {:.2}s linear {:.2}s infinite backwards;",
        spec.x_percent, spec.size_rem, spec.rise_secs, spec.delay_secs
    );
    let (sway, sway_secs) = if spec.fluttering {
        ("garden-flutter", 2.0)
    } else {
        ("garden-sway", 4.0)
    };
    let inner_style = format!("animation: {} {}s ease-in-out infinite;", sway, sway_secs);
    html! {
        <div style={outer_style}>
            <div style={inner_style}>{ spec.symbol }</div>
        </div>
    }
}

#[function_component(FloatingGarden)]
pub fn floating_garden() -> Html {
    let specs = use_state(Vec::<OrnamentSpec>::new);
    {
        let specs = specs.clone();
        // Generate the garden only on initial mount
        use_effect_with_deps(
            move |_| {
                specs.set(generate_garden(&mut || js_sys::Math::random()));
                || ()
            },
            (),
        );
    }
    html! {
        <>
            <style>{ GARDEN_CSS }</style>
            { for specs.iter().enumerate().map(|(i, spec)| html! {
                <FloatingOrnament key={i.to_string()} spec={spec.clone()} />
            }) }
        </>
    }
}
