use js_sys::{Function, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::Window;
use yew::prelude::*;

const SCRIPT_ID: &str = "analytics-script";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub src: &'static str,
}

/// Page-view analytics. Loads the reporting script once; the arena never talks to it.
#[function_component]
pub fn Analytics(props: &Props) -> Html {
    let src = props.src;
    use_effect_with_deps(move |_| {
        if let Some(window) = web_sys::window() {
            match inject(&window, src) {
                Ok(true) => debug!(src, "analytics script injected"),
                Ok(false) => {}
                Err(e) => warn!("Failed to load analytics: {:?}", e),
            }
        }
        || ()
    }, ());

    html! {}
}

fn inject(window: &Window, src: &str) -> Result<bool, JsValue> {
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.get_element_by_id(SCRIPT_ID).is_some() {
        return Ok(false);
    }

    let queue = JsValue::from_str("va");
    if Reflect::get(window, &queue)?.is_undefined() {
        let stub = Function::new_no_args("(window.vaq = window.vaq || []).push(arguments);");
        Reflect::set(window, &queue, &stub)?;
    }

    let script = document.create_element("script")?;
    script.set_id(SCRIPT_ID);
    script.set_attribute("src", src)?;
    script.set_attribute("defer", "true")?;
    let head = document.head().ok_or_else(|| JsValue::from_str("no head"))?;
    head.append_child(&script)?;
    Ok(true)
}
