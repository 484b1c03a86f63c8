use crate::foundation::core::{Affine, BezPath};
use crate::foundation::error::{RingletError, RingletResult};
use crate::shapes::kind::{Geometry, LayerRole, Paint};
use crate::shapes::ring::AngularGradient;

/// Rendered frame in row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, 4 per pixel.
    pub data: Vec<u8>,
    /// Whether `data` is alpha-premultiplied.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 bytes of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Copy of the pixel data with straight (non-premultiplied) alpha.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Straight-alpha RGBA8 colors per layer role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Color of track layers.
    pub track: [u8; 4],
    /// Color of progress layers.
    pub fill: [u8; 4],
    /// Color of decorative layers.
    pub accent: [u8; 4],
    /// Background cleared before drawing; `None` leaves the frame transparent.
    pub clear: Option<[u8; 4]>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            track: [255, 149, 0, 51],
            fill: [255, 149, 0, 255],
            accent: [236, 236, 242, 255],
            clear: Some([18, 20, 28, 255]),
        }
    }
}

impl Palette {
    fn color_for(&self, role: LayerRole) -> [u8; 4] {
        match role {
            LayerRole::Track => self.track,
            LayerRole::Fill => self.fill,
            LayerRole::Accent => self.accent,
        }
    }
}

/// CPU rasterizer powered by `vello_cpu`, reusing its render context across frames.
pub struct CpuRasterizer {
    palette: Palette,
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for CpuRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRasterizer")
            .field("palette", &self.palette)
            .field("has_ctx", &self.ctx.is_some())
            .finish()
    }
}

impl CpuRasterizer {
    /// Create a rasterizer drawing with `palette`.
    pub fn new(palette: Palette) -> Self {
        Self { palette, ctx: None }
    }

    /// Paint all layers of `geometry` onto a fresh `width` x `height` frame.
    pub fn render(
        &mut self,
        geometry: &Geometry,
        width: u32,
        height: u32,
    ) -> RingletResult<FrameRGBA> {
        let w = surface_dim(width, "width")?;
        let h = surface_dim(height, "height")?;
        let palette = self.palette;

        let data = self.with_ctx_mut(w, h, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            if let Some([r, g, b, a]) = palette.clear {
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(w),
                    f64::from(h),
                ));
            }

            for layer in geometry.layers() {
                if layer.path.is_empty() {
                    continue;
                }
                let clip = layer.clip.as_ref().map(|c| bezpath_to_cpu(&c.to_bezpath()));
                if let Some(clip) = &clip {
                    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    ctx.push_clip_layer(clip);
                }

                let color = palette.color_for(layer.role);
                ctx.set_transform(affine_to_cpu(layer.transform));
                match &layer.gradient {
                    Some(gradient) => {
                        ctx.set_paint_transform(sweep_frame(gradient));
                        ctx.set_paint(sweep_paint(gradient, color));
                    }
                    None => {
                        let [r, g, b, a] = color;
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                    }
                }
                let path = bezpath_to_cpu(&layer.path.to_bezpath());
                match &layer.paint {
                    Paint::Fill => ctx.fill_path(&path),
                    Paint::Stroke(stroke) => {
                        ctx.set_stroke(stroke_to_cpu(&stroke.to_kurbo()));
                        ctx.stroke_path(&path);
                    }
                }
                ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

                if clip.is_some() {
                    ctx.pop_layer();
                }
            }

            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.render_to_pixmap(&mut pixmap);
            Ok(pixmap.data_as_u8_slice().to_vec())
        })?;

        tracing::debug!(width, height, "rasterized geometry");
        Ok(FrameRGBA {
            width,
            height,
            data,
            premultiplied: true,
        })
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> RingletResult<R>,
    ) -> RingletResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl Default for CpuRasterizer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

fn surface_dim(v: u32, what: &str) -> RingletResult<u16> {
    if v == 0 {
        return Err(RingletError::render(format!("surface {what} must be > 0")));
    }
    u16::try_from(v)
        .map_err(|_| RingletError::render(format!("surface {what} {v} exceeds {}", u16::MAX)))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn stroke_to_cpu(s: &kurbo::Stroke) -> vello_cpu::kurbo::Stroke {
    use vello_cpu::kurbo::{Cap, Join};

    let cap = |c: kurbo::Cap| match c {
        kurbo::Cap::Butt => Cap::Butt,
        kurbo::Cap::Square => Cap::Square,
        kurbo::Cap::Round => Cap::Round,
    };
    let join = match s.join {
        kurbo::Join::Bevel => Join::Bevel,
        kurbo::Join::Miter => Join::Miter,
        kurbo::Join::Round => Join::Round,
    };
    let out = vello_cpu::kurbo::Stroke::new(s.width)
        .with_join(join)
        .with_miter_limit(s.miter_limit)
        .with_start_cap(cap(s.start_cap))
        .with_end_cap(cap(s.end_cap));
    if s.dash_pattern.is_empty() {
        out
    } else {
        out.with_dashes(s.dash_offset, s.dash_pattern.iter().copied())
    }
}

/// Rotation taking the gradient's first stop from angle 0 to `start_deg`.
fn sweep_frame(g: &AngularGradient) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::rotate_about(
        g.start_deg.to_radians(),
        vello_cpu::kurbo::Point::new(g.center.x, g.center.y),
    )
}

/// Sweep gradient from `color` to `color` at half opacity, spanning `end_deg - start_deg`.
///
/// The start angle is applied through [`sweep_frame`], so the gradient itself always begins
/// at 0 and never sees a negative angle.
fn sweep_paint(g: &AngularGradient, [r, gr, b, a]: [u8; 4]) -> vello_cpu::peniko::Gradient {
    use vello_cpu::peniko::{Color, Gradient};

    let span = (g.end_deg - g.start_deg).abs().clamp(f64::EPSILON, 360.0);
    Gradient::new_sweep(
        vello_cpu::kurbo::Point::new(g.center.x, g.center.y),
        0.0,
        span.to_radians() as f32,
    )
    .with_stops([Color::from_rgba8(r, gr, b, a), Color::from_rgba8(r, gr, b, a / 2)])
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
