use std::f64::consts::PI;

use shared::constants::POINTER_ANGLE;
use shared::shared_wheel_game::{slice_angle, WHEEL_SLICES};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Current rotation in radians.
    pub angle: f64,
    pub is_spinning: bool,
    #[prop_or_default]
    pub highlighted: Option<usize>,
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn draw_wheel(
    canvas: &HtmlCanvasElement,
    angle: f64,
    is_spinning: bool,
    highlighted: Option<usize>,
) -> Result<(), JsValue> {
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;
    let dark = is_dark_mode();
    let w = slice_angle();

    context.clear_rect(0.0, 0.0, width, height);

    // Outer glow, brighter while spinning
    let glow_intensity = if is_spinning { 0.25 } else { 0.15 };
    context.begin_path();
    if dark {
        context.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow_intensity));
    } else {
        context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
    }
    context.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI)?;
    context.fill();

    for (i, slice) in WHEEL_SLICES.iter().enumerate() {
        let start = angle + i as f64 * w;
        let end = start + w;

        context.begin_path();
        context.move_to(center_x, center_y);
        context.arc(center_x, center_y, radius, start, end)?;
        context.close_path();
        context.set_fill_style_str(slice.color);
        context.fill();
        context.set_stroke_style_str(if dark { "rgba(255, 255, 255, 0.5)" } else { "#ffffff" });
        context.set_line_width(2.0);
        context.stroke();

        context.save();
        context.translate(center_x, center_y)?;
        context.rotate(start + w / 2.0)?;
        context.set_text_align("right");
        context.set_text_baseline("middle");
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 15px sans-serif");
        context.fill_text(slice.label, radius - 12.0, 0.0)?;
        context.restore();
    }

    if let (Some(index), false) = (highlighted, is_spinning) {
        let start = angle + index as f64 * w;
        context.begin_path();
        context.move_to(center_x, center_y);
        context.arc(center_x, center_y, radius, start, start + w)?;
        context.close_path();
        context.set_stroke_style_str("#facc15");
        context.set_line_width(6.0);
        context.stroke();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#8b5cf6" });
    context.arc(center_x, center_y, radius * 0.15, 0.0, 2.0 * PI)?;
    context.fill();

    // Pointer, drawn at the same angle the landed slice is resolved against
    let (sin, cos) = POINTER_ANGLE.sin_cos();
    let tip = (center_x + (radius - 12.0) * cos, center_y + (radius - 12.0) * sin);
    let base = (center_x + (radius + 16.0) * cos, center_y + (radius + 16.0) * sin);
    let half_width = 12.0;
    context.begin_path();
    context.move_to(tip.0, tip.1);
    context.line_to(base.0 - half_width * sin, base.1 + half_width * cos);
    context.line_to(base.0 + half_width * sin, base.1 - half_width * cos);
    context.close_path();
    context.set_fill_style_str("#ef4444");
    context.fill();
    context.set_stroke_style_str("#ffffff");
    context.set_line_width(2.0);
    context.stroke();

    Ok(())
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.angle, props.is_spinning, props.highlighted),
            move |(angle, is_spinning, highlighted)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(err) = draw_wheel(&canvas, *angle, *is_spinning, *highlighted) {
                        log::error!("Failed to draw wheel: {:?}", err);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width="440"
            height="440"
            class="max-w-full h-auto"
        />
    }
}
