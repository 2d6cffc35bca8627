use wasm_bindgen::JsCast;

use numtape::geometry::{ArcPath, InputPlacement, TapeGeometry};
use numtape::problem::Field;
use numtape::surface::Surface;

use super::{canvas, log_err};
use crate::ui_model::{input_style, label_style, label_text};

/// The page's canvas, readout and three inputs.
pub(super) struct DomSurface {
    pub(super) document: web_sys::Document,
    pub(super) ctx: web_sys::CanvasRenderingContext2d,
    pub(super) tape: web_sys::HtmlImageElement,
    pub(super) expression: web_sys::HtmlElement,
    pub(super) inputs: [web_sys::HtmlInputElement; 3],
}

impl DomSurface {
    pub(super) fn input(&self, field: Field) -> &web_sys::HtmlInputElement {
        match field {
            Field::A => &self.inputs[0],
            Field::B => &self.inputs[1],
            Field::Sum => &self.inputs[2],
        }
    }

    fn apply_style(el: &web_sys::HtmlElement, props: &[(&str, String)]) -> Result<(), String> {
        let style = el.style();
        for (name, value) in props {
            style
                .set_property(name, value)
                .map_err(|_| format!("style: set {name} threw"))?;
        }
        Ok(())
    }

    fn replace_with_label(&self, field: Field, value: Option<i64>) -> Result<(), String> {
        let input = self.input(field);
        let label = self
            .document
            .create_element("span")
            .map_err(|_| "document: create_element failed".to_string())?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| "document: span cast failed".to_string())?;

        label.set_inner_text(&label_text(value));
        let style = input.style();
        let top = style.get_property_value("top").unwrap_or_default();
        let left = style.get_property_value("left").unwrap_or_default();
        Self::apply_style(&label, &label_style(&top, &left))?;

        let parent = input
            .parent_node()
            .ok_or_else(|| format!("{}: input has no parent", field.element_id()))?;
        parent
            .replace_child(&label, input)
            .map_err(|_| "dom: replace_child threw".to_string())?;
        Ok(())
    }
}

impl Surface for DomSurface {
    fn draw_tape(&mut self, geometry: &TapeGeometry) {
        log_err(canvas::draw_tape(&self.ctx, &self.tape, geometry));
    }

    fn stroke_arc(&mut self, arc: &ArcPath) {
        canvas::stroke_arc(&self.ctx, arc);
    }

    fn show_input(&mut self, field: Field, placement: InputPlacement) {
        let input = self.input(field);
        log_err(Self::apply_style(input, &input_style(placement)));
        log_err(input.focus().map_err(|_| "input: focus threw".to_string()));
    }

    fn freeze_input(&mut self, field: Field, value: Option<i64>) {
        log_err(self.replace_with_label(field, value));
    }

    fn hide_input(&mut self, field: Field) {
        let props = [("display", "none".to_string())];
        log_err(Self::apply_style(self.input(field), &props));
    }

    fn set_expression(&mut self, text: &str) {
        self.expression.set_inner_text(text);
    }
}
