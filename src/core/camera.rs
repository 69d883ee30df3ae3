//! 2D-Kamera für Pan und Zoom über der Karte.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
///
/// Kartenkoordinaten haben die y-Achse nach oben, der Bildschirm nach unten.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Kartenpunkt in der Viewport-Mitte
    pub position: Vec2,
    /// Bildschirm-Pixel pro Karteneinheit (1.0 = 1:1)
    pub zoom: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.25;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 4.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt, der Zoom bleibt erhalten
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera um ein Delta in Karteneinheiten
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Rechnet Kartenkoordinaten in Viewport-Koordinaten um (Ursprung oben links).
    pub fn world_to_screen(&self, world: Vec2, screen_size: Vec2) -> Vec2 {
        let offset = (world - self.position) * self.zoom;
        Vec2::new(
            screen_size.x / 2.0 + offset.x,
            screen_size.y / 2.0 - offset.y,
        )
    }

    /// Rechnet Viewport-Koordinaten in Kartenkoordinaten um.
    pub fn screen_to_world(&self, screen: Vec2, screen_size: Vec2) -> Vec2 {
        let offset = Vec2::new(
            screen.x - screen_size.x / 2.0,
            screen_size.y / 2.0 - screen.y,
        );
        self.position + offset / self.zoom
    }

    /// Rechnet ein Bildschirm-Delta (Pixel, y nach unten) in ein Karten-Delta um.
    pub fn screen_delta_to_world(&self, delta: Vec2) -> Vec2 {
        Vec2::new(delta.x, -delta.y) / self.zoom
    }

    /// Pick-Radius in Karteneinheiten für einen Pixel-Radius.
    pub fn pick_radius_world(&self, pick_radius_px: f32) -> f32 {
        pick_radius_px / self.zoom.max(f32::EPSILON)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
