use eframe::egui::{pos2, vec2, Align2, FontId, Pos2, Rect, Stroke};

use crate::canvas::{Canvas, Transform};
use crate::config::{self, HandStyle};
use crate::hands::HandAngles;

/// Distance of the numerals from the dial edge.
const LABEL_INSET: f32 = 10.0;

/// Layout of the clock face inside the window rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dial {
    center: Pos2,
    radius: f32,
    disc_radius: f32,
}

impl Dial {
    pub fn new(rect: Rect) -> Self {
        let width = rect.width() as i32;
        let height = rect.height() as i32;
        let radius = width.min(height) / 2 - 10;
        Self {
            center: rect.center(),
            radius: radius as f32,
            disc_radius: rect.width().min(rect.height()) / 2.0,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn hand_length(&self, hand: &HandStyle) -> f32 {
        self.radius - hand.inset
    }

    /// Where numeral `hour` (1..=12) is anchored, in window coordinates.
    pub fn label_position(&self, hour: u32) -> Pos2 {
        let mut t = Transform::default();
        self.place_label(&mut t, hour);
        t.apply(Pos2::ZERO)
    }

    fn place_label(&self, t: &mut Transform, hour: u32) {
        let angle = label_angle(hour);
        t.translate(self.center.to_vec2());
        t.rotate(angle);
        t.translate(vec2(0.0, -(self.radius - LABEL_INSET)));
        t.rotate(-angle);
    }

    pub fn paint(&self, canvas: &mut Canvas<'_>, angles: &HandAngles) {
        canvas.fill_circle(self.center, self.disc_radius, config::BACKGROUND);

        self.paint_hand(canvas, angles.second, &config::SECOND_HAND);
        self.paint_hand(canvas, angles.minute, &config::MINUTE_HAND);
        self.paint_hand(canvas, angles.hour, &config::HOUR_HAND);

        for hour in 1..=12 {
            canvas.scoped(|c| {
                self.place_label(c.transform_mut(), hour);
                c.text(
                    Pos2::ZERO,
                    Align2::CENTER_CENTER,
                    &hour.to_string(),
                    FontId::proportional(config::LABEL_FONT_SIZE),
                    config::LABEL_COLOR,
                );
            });
        }
    }

    fn paint_hand(&self, canvas: &mut Canvas<'_>, angle: f32, hand: &HandStyle) {
        let length = self.hand_length(hand);
        canvas.scoped(|c| {
            c.translate(self.center.to_vec2());
            c.rotate(angle);
            c.line(
                Pos2::ZERO,
                pos2(0.0, -length),
                Stroke::new(hand.width, hand.color),
            );
        });
    }
}

pub fn label_angle(hour: u32) -> f32 {
    ((hour * 30) % 360) as f32
}
