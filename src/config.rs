use std::time::Duration;

use eframe::egui::{self, Color32, Vec2};

pub const WINDOW_TITLE: &str = "desktop clock";
pub const WINDOW_SIZE: Vec2 = Vec2::new(300.0, 300.0);
pub const WINDOW_POSITION: [f32; 2] = [100.0, 100.0];

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Dark disc at roughly half opacity.
pub const BACKGROUND: Color32 = Color32::from_rgba_premultiplied(15, 15, 15, 128);

pub const LABEL_COLOR: Color32 = Color32::WHITE;
pub const LABEL_FONT_SIZE: f32 = 14.0;

/// How a single hand is stroked. `inset` is subtracted from the dial radius
/// to get the hand length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandStyle {
    pub color: Color32,
    pub width: f32,
    pub inset: f32,
}

pub const SECOND_HAND: HandStyle = HandStyle {
    color: Color32::RED,
    width: 3.0,
    inset: 30.0,
};

pub const MINUTE_HAND: HandStyle = HandStyle {
    color: Color32::BLUE,
    width: 5.0,
    inset: 30.0,
};

pub const HOUR_HAND: HandStyle = HandStyle {
    color: Color32::from_rgb(0, 128, 0),
    width: 7.0,
    inset: 40.0,
};

/// Frameless, fixed-size, transparent viewport.
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_SIZE)
            .with_max_inner_size(WINDOW_SIZE)
            .with_position(WINDOW_POSITION)
            .with_resizable(false)
            .with_decorations(false)
            .with_transparent(true),
        multisampling: 4,
        ..Default::default()
    }
}
