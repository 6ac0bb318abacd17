use crate::core::{FigureRect, FigureRectangle, Panel, Side, Viewport};
use crate::error::GridResult;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::StackGrid;

const POINTS_PER_INCH: f64 = 72.0;
const LABEL_FONT_POINTS: f64 = 14.0;
const LABEL_PAD_POINTS: f64 = 32.0;

/// Figure-fraction to pixel mapping for one viewport.
#[derive(Debug, Clone, Copy)]
struct PixelSpace {
    width: f64,
    height: f64,
    px_per_point: f64,
}

impl PixelSpace {
    fn new(viewport: Viewport, dpi: f64) -> Self {
        Self {
            width: f64::from(viewport.width),
            height: f64::from(viewport.height),
            px_per_point: dpi / POINTS_PER_INCH,
        }
    }

    /// Pixel y grows downward; figure-fraction y grows upward.
    fn point(self, (fx, fy): (f64, f64)) -> (f64, f64) {
        (fx * self.width, (1.0 - fy) * self.height)
    }

    fn panel_point(self, bounds: FigureRect, fx: f64, fy: f64) -> (f64, f64) {
        self.point(bounds.fraction_to_figure(fx, fy))
    }

    fn points(self, points: f64) -> f64 {
        points * self.px_per_point
    }

    fn rect(self, bounds: FigureRectangle, fill: Color) -> RectPrimitive {
        let (ox, oy) = bounds.origin;
        let x0 = ox.min(ox + bounds.width);
        let y_top = oy.max(oy + bounds.height);
        let (x, y) = self.point((x0, y_top));
        RectPrimitive::new(
            x,
            y,
            bounds.width.abs() * self.width,
            bounds.height.abs() * self.height,
            fill,
        )
    }
}

impl<R: Renderer> StackGrid<R> {
    /// Materializes patches, visible spines, cutout marks and stack labels as
    /// pixel-space primitives in paint order.
    pub fn build_render_frame(&self) -> GridResult<RenderFrame> {
        let size = self.state.figure.size();
        let viewport = size.viewport();
        let space = PixelSpace::new(viewport, size.dpi);
        let mut frame = RenderFrame::new(viewport);

        let mut patches = self.state.figure.patches().to_vec();
        patches.sort_by_key(|patch| patch.style.z_order);
        for patch in patches {
            let style = patch.style;
            let fill = style
                .face
                .map_or(Color::TRANSPARENT, |face| face.with_alpha(face.alpha * style.alpha));
            let mut rect = space.rect(patch.bounds, fill);
            if let Some(edge) = style.edge {
                rect = rect.with_border(
                    space.points(style.line_width),
                    edge.with_alpha(edge.alpha * style.alpha),
                );
            }
            frame.rects.push(rect);
        }

        let mut panels = self.state.panels.values().collect::<Vec<_>>();
        panels.sort_by_key(|panel| (panel.z_order, panel.id));
        for panel in panels {
            append_spines(&mut frame, space, panel);
            append_cutouts(&mut frame, space, panel);
            if let Some(text) = label_primitive(space, panel) {
                frame.texts.push(text);
            }
        }

        Ok(frame)
    }
}

fn append_spines(frame: &mut RenderFrame, space: PixelSpace, panel: &Panel) {
    let bounds = panel.bounds;
    for (side, spine) in panel.spines.iter() {
        if !spine.visible {
            continue;
        }
        let p = spine.position;
        let ((x1, y1), (x2, y2)) = match side {
            Side::Left | Side::Right => (
                space.panel_point(bounds, p, 0.0),
                space.panel_point(bounds, p, 1.0),
            ),
            Side::Top | Side::Bottom => (
                space.panel_point(bounds, 0.0, p),
                space.panel_point(bounds, 1.0, p),
            ),
        };
        frame.lines.push(LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            space.points(spine.width),
            spine.color,
        ));
    }
}

fn append_cutouts(frame: &mut RenderFrame, space: PixelSpace, panel: &Panel) {
    for mark in &panel.cutouts {
        let (x1, y1) = space.panel_point(panel.bounds, mark.from.0, mark.from.1);
        let (x2, y2) = space.panel_point(panel.bounds, mark.to.0, mark.to.1);
        frame.lines.push(LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            space.points(mark.width),
            Color::BLACK,
        ));
    }
}

/// Places the label outside its data-side spine, reading along that spine.
fn label_primitive(space: PixelSpace, panel: &Panel) -> Option<TextPrimitive> {
    let label = panel.label.as_ref().filter(|label| !label.text.is_empty())?;
    let spine = panel.spines.get(label.side);
    let pad = space.points(LABEL_PAD_POINTS);
    let font = space.points(LABEL_FONT_POINTS);
    let p = spine.position;

    let (x, y, rotation) = match label.side {
        Side::Left => {
            let (x, y) = space.panel_point(panel.bounds, p, 0.5);
            (x - pad, y, -90.0)
        }
        Side::Right => {
            let (x, y) = space.panel_point(panel.bounds, p, 0.5);
            (x + pad, y, 90.0)
        }
        Side::Top => {
            let (x, y) = space.panel_point(panel.bounds, 0.5, p);
            (x, y - pad, 0.0)
        }
        Side::Bottom => {
            let (x, y) = space.panel_point(panel.bounds, 0.5, p);
            (x, y + pad, 0.0)
        }
    };
    Some(
        TextPrimitive::new(
            label.text.clone(),
            x,
            y,
            font,
            Color::BLACK,
            TextHAlign::Center,
        )
        .with_rotation(rotation),
    )
}
