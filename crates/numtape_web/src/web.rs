use std::cell::RefCell;
use std::rc::Rc;

use numtape::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::ui_model::{CANVAS_ID, CONFIG_ATTR, EXPRESSION_ID};

mod canvas;
mod surface;

use surface::DomSurface;

type SharedWidget = Rc<RefCell<Widget<DomSurface>>>;

pub fn start() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            web_sys::console::error_1(&JsValue::from_str(&format!("numtape: {e}")));
        }
    });
}

fn log_err(res: Result<(), String>) {
    if let Err(e) = res {
        web_sys::console::warn_1(&JsValue::from_str(&format!("numtape: {e}")));
    }
}

async fn run() -> Result<(), String> {
    let window = web_sys::window().ok_or("no window".to_string())?;
    let document = window.document().ok_or("no document".to_string())?;

    let canvas_el = element_as::<web_sys::HtmlCanvasElement>(&document, CANVAS_ID)?;
    let config = match canvas_el.get_attribute(CONFIG_ATTR) {
        Some(json) => WidgetConfig::from_json_str(&json).map_err(|e| e.to_string())?,
        None => WidgetConfig::default(),
    };

    canvas::size_canvas(&canvas_el, &config.geometry);
    let ctx = canvas::context_2d(&canvas_el)?;

    // Nothing is drawn until the tape asset is in.
    let tape = load_image(&config.tape_asset).await?;

    let surface = DomSurface {
        expression: element_as::<web_sys::HtmlElement>(&document, EXPRESSION_ID)?,
        inputs: [
            element_as::<web_sys::HtmlInputElement>(&document, Field::A.element_id())?,
            element_as::<web_sys::HtmlInputElement>(&document, Field::B.element_id())?,
            element_as::<web_sys::HtmlInputElement>(&document, Field::Sum.element_id())?,
        ],
        document,
        ctx,
        tape,
    };

    let mut rng = match config.seed {
        Some(seed) => Prng::new(seed),
        None => Prng::from_unit_f64(js_sys::Math::random()),
    };
    let problem = Problem::generate(&mut rng, config.max_number);
    let widget: SharedWidget = Rc::new(RefCell::new(
        Widget::new(problem, &config, surface).map_err(|e| e.to_string())?,
    ));

    widget.borrow_mut().start();

    for &field in Field::all() {
        let input = widget.borrow().surface().input(field).clone();
        attach_listeners(&widget, field, &input)?;
    }
    Ok(())
}

fn element_as<T: JsCast>(document: &web_sys::Document, id: &str) -> Result<T, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("#{id}: missing element"))?
        .dyn_into::<T>()
        .map_err(|_| format!("#{id}: unexpected element type"))
}

fn attach_listeners(
    widget: &SharedWidget,
    field: Field,
    input: &web_sys::HtmlInputElement,
) -> Result<(), String> {
    let on_key = {
        let widget = widget.clone();
        Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            // A listener can fire while a render is still running (focus moves).
            let Ok(mut w) = widget.try_borrow_mut() else {
                return;
            };
            if !w.on_key_press(field, &ev.key()).allows() {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>)
    };
    input
        .add_event_listener_with_callback("keypress", on_key.as_ref().unchecked_ref())
        .map_err(|_| "keypress: add_event_listener threw".to_string())?;
    on_key.forget();

    let on_change = {
        let widget = widget.clone();
        Closure::wrap(Box::new(move |ev: web_sys::Event| {
            let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Ok(mut w) = widget.try_borrow_mut() else {
                return;
            };
            w.on_field_commit(field, &target.value());
        }) as Box<dyn FnMut(_)>)
    };
    input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(|_| "change: add_event_listener threw".to_string())?;
    on_change.forget();

    Ok(())
}

/// Resolve once `src` has loaded.
async fn load_image(src: &str) -> Result<web_sys::HtmlImageElement, String> {
    let img = web_sys::HtmlImageElement::new().map_err(|_| "image: new failed".to_string())?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::wrap(Box::new(move || {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        }) as Box<dyn FnMut()>);
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::wrap(Box::new(move || {
            let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str("image: load error"));
        }) as Box<dyn FnMut()>);
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    });

    img.set_src(src);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| format!("image: failed to load {src}"))?;
    Ok(img)
}
