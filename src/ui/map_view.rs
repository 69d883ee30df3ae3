//! Zeichnet Karte, Regionen und Marker mit dem egui-Painter.

use crate::app::AppState;
use crate::core::style::{parse_hex_color, DEFAULT_MARKER_COLOR};
use crate::core::{resolve_style, Camera2D, Catalog, MapGeometry, SubtypeKey};

const MAP_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(38, 44, 52);
const TILE_GRID: egui::Color32 = egui::Color32::from_rgb(58, 66, 78);
const REGION_STROKE: egui::Color32 = egui::Color32::from_rgb(255, 202, 40);

/// Pin-Farbe eines Subtyps als egui-Farbe.
pub(crate) fn marker_color(catalog: &Catalog, key: &SubtypeKey) -> egui::Color32 {
    let style = resolve_style(catalog, key);
    let [r, g, b, a] = parse_hex_color(style.color)
        .or_else(|| parse_hex_color(DEFAULT_MARKER_COLOR))
        .unwrap_or([229, 57, 53, 255]);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Rechnet eine Kartenposition in eine Bildschirmposition innerhalb von `rect` um.
pub(crate) fn world_to_screen(camera: &Camera2D, rect: egui::Rect, world: glam::Vec2) -> egui::Pos2 {
    let local = camera.world_to_screen(world, glam::Vec2::new(rect.width(), rect.height()));
    rect.min + egui::vec2(local.x, local.y)
}

/// Zeichnet die gewählte Karte in `rect`.
pub fn paint_map(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let Some(map) = state.selected_map() else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No map selected",
            egui::FontId::proportional(20.0),
            egui::Color32::WHITE,
        );
        return;
    };

    let camera = &state.view.camera;
    let (width, height) = map.pixel_size();
    let (width, height) = (width as f32, height as f32);

    let map_rect = egui::Rect::from_two_pos(
        world_to_screen(camera, rect, glam::Vec2::new(0.0, height)),
        world_to_screen(camera, rect, glam::Vec2::new(width, 0.0)),
    );
    painter.rect_filled(map_rect, 0.0, MAP_BACKGROUND);

    if let MapGeometry::Tiled {
        tile_width,
        tile_height,
        tiles_x,
        tiles_y,
        ..
    } = map.geometry
    {
        paint_tile_grid(painter, camera, rect, tile_width, tile_height, tiles_x, tiles_y);
    }

    for region in state.visible_regions() {
        if region.polygon.len() < 3 {
            continue;
        }
        let points = region
            .polygon
            .iter()
            .map(|p| world_to_screen(camera, rect, glam::Vec2::from(*p)))
            .collect::<Vec<_>>();
        painter.add(egui::Shape::closed_line(
            points,
            egui::Stroke::new(1.5, REGION_STROKE),
        ));
    }

    paint_markers(painter, rect, state);
}

#[allow(clippy::too_many_arguments)]
fn paint_tile_grid(
    painter: &egui::Painter,
    camera: &Camera2D,
    rect: egui::Rect,
    tile_width: u32,
    tile_height: u32,
    tiles_x: u32,
    tiles_y: u32,
) {
    let stroke = egui::Stroke::new(1.0, TILE_GRID);
    let total = glam::Vec2::new(
        (tile_width * tiles_x) as f32,
        (tile_height * tiles_y) as f32,
    );

    for x in 1..tiles_x {
        let wx = (x * tile_width) as f32;
        painter.line_segment(
            [
                world_to_screen(camera, rect, glam::Vec2::new(wx, 0.0)),
                world_to_screen(camera, rect, glam::Vec2::new(wx, total.y)),
            ],
            stroke,
        );
    }
    for y in 1..tiles_y {
        let wy = (y * tile_height) as f32;
        painter.line_segment(
            [
                world_to_screen(camera, rect, glam::Vec2::new(0.0, wy)),
                world_to_screen(camera, rect, glam::Vec2::new(total.x, wy)),
            ],
            stroke,
        );
    }
}

fn paint_markers(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let camera = &state.view.camera;
    let radius = state.options.marker_radius_px;
    let clip = rect.expand(radius);
    let selected = state.selection.selected_marker_id.as_deref();

    for marker in state.visible_markers() {
        let pos = world_to_screen(camera, rect, marker.world_pos());
        if !clip.contains(pos) {
            continue;
        }

        let mut color = marker_color(&state.catalog, &marker.subtype_key());
        if state.is_marker_completed(&marker.id) {
            color = color.gamma_multiply(state.options.completed_marker_opacity);
        }

        painter.circle_filled(pos, radius, color);
        painter.circle_stroke(pos, radius, egui::Stroke::new(1.0, egui::Color32::BLACK));

        if selected == Some(marker.id.as_str()) {
            painter.circle_stroke(
                pos,
                radius + 3.0,
                egui::Stroke::new(2.0, egui::Color32::WHITE),
            );
        }

        if state.view.show_labels {
            painter.text(
                pos - egui::vec2(0.0, radius + 2.0),
                egui::Align2::CENTER_BOTTOM,
                marker.display_name(),
                egui::FontId::proportional(11.0),
                egui::Color32::WHITE,
            );
        }
    }
}
