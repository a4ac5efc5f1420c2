use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Surface dimensions: logical (CSS-pixel) size, device scale, and the
/// physical backing-store size derived from them.
///
/// Recomputed atomically on every resize; `physical = logical * scale`
/// holds after any call sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub logical_width: f64,
    pub logical_height: f64,
    pub scale: f64,
    pub physical_width: f64,
    pub physical_height: f64,
}

impl SurfaceSize {
    pub fn compute(logical_width: f64, logical_height: f64, scale: f64) -> Self {
        Self {
            logical_width,
            logical_height,
            scale,
            physical_width: logical_width * scale,
            physical_height: logical_height * scale,
        }
    }
}

/// Owns the canvas and its 2D context, and keeps the backing store in sync
/// with the displayed size and device pixel ratio.
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: SurfaceSize,
}

impl Surface {
    /// Acquire the 2D context and perform the initial sizing. A missing
    /// context is fatal; there is no recovery path.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("failed to get 2d canvas context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut surface = Self {
            canvas,
            ctx,
            size: SurfaceSize::compute(0.0, 0.0, 1.0),
        };
        surface.resize()?;
        Ok(surface)
    }

    /// Re-derive dimensions from the displayed element size and the current
    /// device pixel ratio.
    ///
    /// The device scale is applied with an absolute `set_transform`, not a
    /// relative `scale`, so repeated resizes cannot compound the transform.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        let scale = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let logical_width = self.canvas.offset_width() as f64;
        let logical_height = self.canvas.offset_height() as f64;

        self.size = SurfaceSize::compute(logical_width, logical_height, scale);
        self.canvas.set_width(self.size.physical_width as u32);
        self.canvas.set_height(self.size.physical_height as u32);
        self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;
        Ok(())
    }

    pub fn ctx(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_is_logical_times_scale() {
        let size = SurfaceSize::compute(640.0, 480.0, 2.0);
        assert_eq!(size.physical_width, 1280.0);
        assert_eq!(size.physical_height, 960.0);
        assert_eq!(size.logical_width, 640.0);
    }

    #[test]
    fn test_no_compounding_across_resizes() {
        // Regression test for the transform-compounding defect: recomputing
        // from the same inputs must be idempotent, and any sequence of
        // resizes preserves physical = logical * scale.
        let mut size = SurfaceSize::compute(640.0, 480.0, 2.0);
        for _ in 0..10 {
            size = SurfaceSize::compute(size.logical_width, size.logical_height, 2.0);
            assert_eq!(size.physical_width, size.logical_width * 2.0);
            assert_eq!(size.physical_height, size.logical_height * 2.0);
        }

        for (w, h, scale) in [(800.0, 600.0, 1.0), (375.0, 812.0, 3.0), (640.0, 480.0, 1.5)] {
            size = SurfaceSize::compute(w, h, scale);
            assert_eq!(size.physical_width, w * scale);
            assert_eq!(size.physical_height, h * scale);
            assert_eq!(size.scale, scale);
        }
    }

    #[test]
    fn test_unit_scale_is_identity() {
        let size = SurfaceSize::compute(1024.0, 768.0, 1.0);
        assert_eq!(size.physical_width, size.logical_width);
        assert_eq!(size.physical_height, size.logical_height);
    }
}
