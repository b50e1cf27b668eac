use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Transition delay in milliseconds, used to stagger grids.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node.cast::<Element>() {
                    let on_intersect = Closure::<dyn Fn(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let hit = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|e| e.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if hit {
                                visible.set(true);
                                observer.disconnect();
                            }
                        },
                    );

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from(0.2));
                    if let Ok(created) = IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        created.observe(&element);
                        observer = Some(created);
                    }
                    callback = Some(on_intersect);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    let state_class = if *visible { "reveal visible" } else { "reveal" };

    html! {
        <div
            ref={node}
            class={classes!(state_class, props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
