use eframe::egui::{self, Pos2, Rect, ViewportCommand, Visuals};
use tokio::sync::watch;

use crate::canvas::Canvas;
use crate::config;
use crate::dial::Dial;
use crate::drag::DragGesture;
use crate::hands::HandAngles;
use crate::mask::CircularMask;
use crate::ticker::{self, Tick};

/// What the window should do in response to one frame's pointer input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerAction {
    None,
    StartDrag,
    MoveTo(Pos2),
    EndDrag,
    Close,
}

/// Pointer state for one frame, with positions in window-local points.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerInput {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    pub double_clicked: bool,
}

impl PointerInput {
    fn read(ctx: &egui::Context) -> Self {
        ctx.input(|i| {
            let button = egui::PointerButton::Primary;
            Self {
                pos: i.pointer.latest_pos(),
                pressed: i.pointer.button_pressed(button),
                down: i.pointer.button_down(button),
                released: i.pointer.button_released(button),
                double_clicked: i.pointer.button_double_clicked(button),
            }
        })
    }
}

/// The round clock window. All fields are owned by the UI thread.
pub struct ClockWindow {
    angles: HandAngles,
    drag: DragGesture,
    mask: CircularMask,
    dial: Dial,
    ticks: Option<watch::Receiver<Tick>>,
    origin_unknown_logged: bool,
}

impl ClockWindow {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(Visuals {
            window_fill: egui::Color32::TRANSPARENT,
            panel_fill: egui::Color32::TRANSPARENT,
            ..Visuals::dark()
        });

        let mut app = Self::with_bounds(Rect::from_min_size(Pos2::ZERO, config::WINDOW_SIZE));
        app.ticks = Some(ticker::spawn(cc.egui_ctx.clone()));
        tracing::info!(
            size = ?config::WINDOW_SIZE,
            radius = app.dial.radius(),
            "clock window created"
        );
        app
    }

    /// A window with no tick source, showing the current time.
    pub fn with_bounds(bounds: Rect) -> Self {
        Self {
            angles: HandAngles::at(&chrono::Local::now()),
            drag: DragGesture::default(),
            mask: CircularMask::inscribed_in(bounds),
            dial: Dial::new(bounds),
            ticks: None,
            origin_unknown_logged: false,
        }
    }

    #[cfg(test)]
    fn angles(&self) -> &HandAngles {
        &self.angles
    }

    #[cfg(test)]
    fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn on_tick<T: chrono::Timelike>(&mut self, now: &T) {
        self.angles = HandAngles::at(now);
    }

    /// Runs the drag/close gestures. `window_origin` is the window's top-left
    /// corner on screen; pointer positions are translated with it. Without a
    /// known origin there is nothing to anchor a drag to, so only close works.
    pub fn on_pointer(
        &mut self,
        input: &PointerInput,
        window_origin: Option<Pos2>,
    ) -> PointerAction {
        let inside = input.pos.is_some_and(|p| self.mask.contains(p));

        if input.double_clicked && inside {
            self.drag.release();
            return PointerAction::Close;
        }

        let Some(window_origin) = window_origin else {
            if self.drag.is_dragging() {
                self.drag.release();
                return PointerAction::EndDrag;
            }
            return PointerAction::None;
        };
        let screen = |local: Pos2| window_origin + local.to_vec2();

        if input.pressed && inside {
            if let Some(pos) = input.pos {
                self.drag.press(screen(pos), window_origin);
                return PointerAction::StartDrag;
            }
        }

        if self.drag.is_dragging() && (input.released || !input.down) {
            self.drag.release();
            return PointerAction::EndDrag;
        }

        if input.down {
            if let Some(target) = input.pos.and_then(|p| self.drag.move_to(screen(p))) {
                if target != window_origin {
                    return PointerAction::MoveTo(target);
                }
            }
        }

        PointerAction::None
    }

    fn paint(&self, ui: &egui::Ui) {
        let mut canvas = Canvas::new(ui.painter());
        self.dial.paint(&mut canvas, &self.angles);
    }
}

impl eframe::App for ClockWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(tick) = self.ticks.as_mut().and_then(ticker::latest) {
            self.on_tick(&tick);
        }

        let window_origin = ctx.input(|i| i.viewport().outer_rect).map(|r| r.min);
        if window_origin.is_none() && !self.origin_unknown_logged {
            tracing::debug!("window position not reported by the platform, dragging disabled");
            self.origin_unknown_logged = true;
        }

        match self.on_pointer(&PointerInput::read(ctx), window_origin) {
            PointerAction::None => {}
            PointerAction::StartDrag => tracing::debug!(?window_origin, "drag started"),
            PointerAction::MoveTo(pos) => {
                tracing::trace!(?pos, "moving window");
                ctx.send_viewport_cmd(ViewportCommand::OuterPosition(pos));
            }
            PointerAction::EndDrag => tracing::debug!(?window_origin, "drag finished"),
            PointerAction::Close => {
                tracing::info!("double-click, closing clock window");
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.paint(ui));
    }

    fn clear_color(&self, _visuals: &Visuals) -> [f32; 4] {
        egui::Color32::TRANSPARENT.to_normalized_gamma_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use eframe::egui::{pos2, vec2};

    fn window() -> ClockWindow {
        ClockWindow::with_bounds(Rect::from_min_size(Pos2::ZERO, config::WINDOW_SIZE))
    }

    fn press(at: Pos2) -> PointerInput {
        PointerInput {
            pos: Some(at),
            pressed: true,
            down: true,
            ..Default::default()
        }
    }

    fn hold(at: Pos2) -> PointerInput {
        PointerInput {
            pos: Some(at),
            down: true,
            ..Default::default()
        }
    }

    fn double_click(at: Pos2) -> PointerInput {
        PointerInput {
            pos: Some(at),
            double_clicked: true,
            ..Default::default()
        }
    }

    #[test]
    fn tick_updates_every_hand() {
        let mut clock = window();
        clock.on_tick(&NaiveTime::from_hms_opt(9, 20, 15).unwrap());
        assert_eq!(
            *clock.angles(),
            HandAngles {
                second: 90.0,
                minute: 120.0,
                hour: 280.0,
            }
        );
    }

    #[test]
    fn drag_follows_the_cursor_with_a_fixed_offset() {
        let mut clock = window();
        let origin = pos2(100.0, 100.0);

        assert_eq!(clock.on_pointer(&press(pos2(150.0, 150.0)), Some(origin)), PointerAction::StartDrag);
        assert!(clock.is_dragging());

        // Pointer moves 40 right, 25 down in window space.
        let action = clock.on_pointer(&hold(pos2(190.0, 175.0)), Some(origin));
        assert_eq!(action, PointerAction::MoveTo(pos2(140.0, 125.0)));

        // After the OS moved the window, the pointer is back at the anchor.
        let moved = pos2(140.0, 125.0);
        assert_eq!(clock.on_pointer(&hold(pos2(150.0, 150.0)), Some(moved)), PointerAction::None);

        let release = PointerInput {
            pos: Some(pos2(150.0, 150.0)),
            released: true,
            ..Default::default()
        };
        assert_eq!(clock.on_pointer(&release, Some(moved)), PointerAction::EndDrag);
        assert!(!clock.is_dragging());
    }

    #[test]
    fn press_in_a_clipped_corner_does_not_start_a_drag() {
        let mut clock = window();
        let origin = pos2(100.0, 100.0);
        assert_eq!(clock.on_pointer(&press(pos2(5.0, 5.0)), Some(origin)), PointerAction::None);
        assert_eq!(clock.on_pointer(&hold(pos2(50.0, 50.0)), Some(origin)), PointerAction::None);
        assert!(!clock.is_dragging());
    }

    #[test]
    fn double_click_anywhere_on_the_disc_closes() {
        let origin = pos2(0.0, 0.0);
        for at in [pos2(150.0, 150.0), pos2(20.0, 150.0), pos2(150.0, 295.0), pos2(250.0, 80.0)] {
            let mut clock = window();
            assert_eq!(clock.on_pointer(&double_click(at), Some(origin)), PointerAction::Close);
        }
    }

    #[test]
    fn double_click_outside_the_disc_is_ignored() {
        let mut clock = window();
        let action = clock.on_pointer(&double_click(pos2(2.0, 298.0)), Some(Pos2::ZERO));
        assert_eq!(action, PointerAction::None);
    }

    #[test]
    fn move_without_a_press_does_nothing() {
        let mut clock = window();
        let action = clock.on_pointer(&hold(pos2(150.0, 150.0)), Some(Pos2::ZERO));
        assert_eq!(action, PointerAction::None);
    }

    #[test]
    fn press_point_maps_back_to_the_window_origin() {
        let mut clock = window();
        let origin = pos2(10.0, 10.0);
        clock.on_pointer(&press(pos2(100.0, 100.0)), Some(origin));
        let screen_anchor = origin + vec2(100.0, 100.0);
        assert_eq!(clock.drag.move_to(screen_anchor), Some(origin));
    }

    #[test]
    fn unknown_window_position_disables_dragging_but_not_closing() {
        let mut clock = window();
        let center = pos2(150.0, 150.0);
        assert_eq!(clock.on_pointer(&press(center), None), PointerAction::None);
        assert_eq!(clock.on_pointer(&hold(pos2(200.0, 200.0)), None), PointerAction::None);
        assert!(!clock.is_dragging());
        assert_eq!(clock.on_pointer(&double_click(center), None), PointerAction::Close);
    }

    #[test]
    fn losing_the_window_position_mid_drag_ends_the_drag() {
        let mut clock = window();
        let center = pos2(150.0, 150.0);
        clock.on_pointer(&press(center), Some(pos2(100.0, 100.0)));
        assert_eq!(clock.on_pointer(&hold(center), None), PointerAction::EndDrag);
        assert!(!clock.is_dragging());
    }

    #[test]
    fn paint_draws_the_hands_at_the_last_tick() {
        let mut clock = window();
        clock.on_tick(&NaiveTime::from_hms_opt(6, 0, 15).unwrap());

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| clock.paint(ui));
        });

        let ends: Vec<(Pos2, egui::Color32)> = output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::LineSegment { points, stroke } => Some((points[1], stroke.color)),
                _ => None,
            })
            .collect();
        assert_eq!(ends.len(), 3);

        let near = |a: Pos2, b: Pos2| (a - b).length() < 1e-3;
        // 15 s points at three, 0 min at twelve, 6 h at six.
        assert!(near(ends[0].0, pos2(260.0, 150.0)), "{:?}", ends[0]);
        assert_eq!(ends[0].1, config::SECOND_HAND.color);
        assert!(near(ends[1].0, pos2(150.0, 40.0)), "{:?}", ends[1]);
        assert_eq!(ends[1].1, config::MINUTE_HAND.color);
        assert!(near(ends[2].0, pos2(150.0, 250.0)), "{:?}", ends[2]);
        assert_eq!(ends[2].1, config::HOUR_HAND.color);
    }
}
