use wasm_bindgen::JsCast;

use numtape::geometry::{ArcPath, TapeGeometry};

use crate::ui_model::ARC_COLOR;

pub(super) fn context_2d(
    canvas: &web_sys::HtmlCanvasElement,
) -> Result<web_sys::CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())
}

/// Size the canvas to both bands.
pub(super) fn size_canvas(canvas: &web_sys::HtmlCanvasElement, g: &TapeGeometry) {
    let (w, h) = g.canvas_size();
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
}

/// The tape image, scaled into the lower band.
pub(super) fn draw_tape(
    ctx: &web_sys::CanvasRenderingContext2d,
    tape: &web_sys::HtmlImageElement,
    g: &TapeGeometry,
) -> Result<(), String> {
    ctx.draw_image_with_html_image_element_and_dw_and_dh(tape, 0.0, g.height, g.width, g.height)
        .map_err(|_| "canvas: draw_image threw".to_string())
}

pub(super) fn stroke_arc(ctx: &web_sys::CanvasRenderingContext2d, arc: &ArcPath) {
    ctx.set_stroke_style_str(ARC_COLOR);

    ctx.begin_path();
    ctx.move_to(arc.start.x, arc.start.y);
    for seg in [arc.rise, arc.fall] {
        ctx.bezier_curve_to(
            seg.c1.x, seg.c1.y, seg.c2.x, seg.c2.y, seg.to.x, seg.to.y,
        );
    }
    ctx.stroke();

    let head = arc.head;
    ctx.begin_path();
    ctx.move_to(head.tip.x, head.tip.y);
    ctx.line_to(head.upper.x, head.upper.y);
    ctx.move_to(head.tip.x, head.tip.y);
    ctx.line_to(head.lower.x, head.lower.y);
    ctx.stroke();
}
