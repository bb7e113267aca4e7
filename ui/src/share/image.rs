use std::fmt::Write as _;

use crate::core::cells::{Cell, CellState};
use crate::core::layout::GridGeometry;

const BACKGROUND: &str = "#f5efe0";
const INK: &str = "#164e2d";
const CURRENT: &str = "#ff6b6b";
const EVENT_RING: &str = "#ffd166";

/// Rendered image width; the grid is scaled to fit.
const TARGET_WIDTH: f64 = 1200.0;

/// Standalone SVG of the grid, drawn from the model rather than the page.
pub fn grid_svg(geometry: &GridGeometry, cells: &[Cell]) -> String {
    let pad = geometry.padding;
    let width = geometry.total_grid_width + pad * 2.0;
    let height = geometry.total_grid_height + pad * 2.0;
    let scale = if width > 0.0 { TARGET_WIDTH / width } else { 1.0 };
    let radius = geometry.dot_size / 2.0;
    let step = geometry.dot_size + geometry.gap;

    let mut svg = String::with_capacity(cells.len() * 96 + 256);
    let _ = write!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{}' height='{}' viewBox='0 0 {width} {height}'>",
        (width * scale).round(),
        (height * scale).round(),
    );
    let _ = write!(svg, "<rect width='{width}' height='{height}' fill='{BACKGROUND}'/>");

    for cell in cells {
        let (col, row) = geometry.position_of(cell.index);
        let cx = pad + f64::from(col) * step + radius;
        let cy = pad + f64::from(row) * step + radius;
        let paint = match cell.state {
            CellState::Current => format!("fill='{CURRENT}'"),
            CellState::Past if cell.has_event => {
                format!("fill='{INK}' stroke='{EVENT_RING}' stroke-width='{}'", (radius * 0.3).max(0.5))
            }
            CellState::Past => format!("fill='{INK}'"),
            CellState::Future => format!(
                "fill='none' stroke='{INK}' stroke-width='{}'",
                (radius * 0.15).max(0.25)
            ),
        };
        let _ = write!(svg, "<circle cx='{cx}' cy='{cy}' r='{radius}' {paint}/>");
    }

    svg.push_str("</svg>");
    svg
}

/// Render the grid to PNG and hand it to the user.
pub async fn download_grid_image(svg: String) -> Result<String, String> {
    let png = rasterize(&svg).await?;
    let filename = format!("life-calendar-{}.png", timestamp_slug());
    let delivery = download_bytes(&filename, "image/png", png).await?;
    Ok(match delivery {
        Some(path) => format!("Image saved to {path}"),
        None => "Image download started".to_string(),
    })
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "share".into())
}

#[cfg(not(target_arch = "wasm32"))]
async fn rasterize(svg: &str) -> Result<Vec<u8>, String> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default()).map_err(|err| err.to_string())?;
    let size = tree.size().to_int_size();
    let mut pixmap =
        tiny_skia::Pixmap::new(size.width(), size.height()).ok_or("Unable to allocate image")?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap.encode_png().map_err(|err| err.to_string())
}

#[cfg(target_arch = "wasm32")]
async fn rasterize(svg: &str) -> Result<Vec<u8>, String> {
    use base64::Engine as _;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
    };

    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(svg));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| "Unable to build SVG blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Unable to create SVG URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document unavailable")?;

    let image = HtmlImageElement::new().map_err(|_| "Unable to create image")?;
    image.set_src(&url);
    JsFuture::from(image.decode())
        .await
        .map_err(|_| "Image decode failed")?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| "Unable to create canvas")?
        .dyn_into()
        .map_err(|_| "Canvas cast failed")?;
    canvas.set_width(image.natural_width());
    canvas.set_height(image.natural_height());

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| "Canvas context unavailable")?
        .ok_or("Canvas context missing")?
        .dyn_into()
        .map_err(|_| "Context cast failed")?;
    context
        .draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(|_| "Unable to draw image")?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| "Unable to serialise canvas")?;
    Url::revoke_object_url(&url).ok();

    base64::engine::general_purpose::STANDARD
        .decode(data_url.split(',').nth(1).ok_or("Malformed data URL")?)
        .map_err(|_| "PNG decode failed".to_string())
}

/// Copy share text; web uses a hidden textarea, native uses the OS clipboard.
pub async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .and_then(|html| html.exec_command("copy").ok())
            .unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err("Clipboard copy blocked".into())
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = desktop_export_dir()?;
        std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        std::fs::write(&path, bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    use crate::core::config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};

    let dirs = directories::ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cells::build_cells;
    use crate::core::events::LifeEvents;
    use crate::core::layout::solve;
    use crate::core::temporal::snapshot_from_estimate;
    use time::macros::date;

    fn sample() -> (GridGeometry, Vec<Cell>) {
        let snapshot = snapshot_from_estimate(1990, 80.0, date!(2024 - 01 - 01));
        let geometry = solve(snapshot.total_months, 800.0, 600.0);
        let cells = build_cells(&snapshot, &LifeEvents::milestones());
        (geometry, cells)
    }

    #[test]
    fn svg_has_one_circle_per_cell() {
        let (geometry, cells) = sample();
        let svg = grid_svg(&geometry, &cells);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), cells.len());
        assert_eq!(svg.matches(CURRENT).count(), 1);
        assert!(svg.contains(EVENT_RING));
        assert!(svg.contains("width='1200'"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn rasterizes_to_png() {
        let (geometry, cells) = sample();
        let svg = grid_svg(&geometry, &cells);
        let png = futures::executor::block_on(rasterize(&svg)).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
