use chrono::Timelike;

/// Rotation of each hand in degrees, clockwise from twelve o'clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandAngles {
    pub second: f32,
    pub minute: f32,
    pub hour: f32,
}

impl HandAngles {
    pub fn at<T: Timelike>(time: &T) -> Self {
        let minutes = time.minute();
        Self {
            second: second_angle(time.second()),
            minute: minute_angle(minutes),
            hour: hour_angle(time.hour(), minutes),
        }
    }
}

pub fn second_angle(seconds: u32) -> f32 {
    // chrono folds a leap second into :59.
    ((seconds % 60) * 6) as f32
}

pub fn minute_angle(minutes: u32) -> f32 {
    ((minutes % 60) * 6) as f32
}

pub fn hour_angle(hours: u32, minutes: u32) -> f32 {
    ((hours % 12) * 30) as f32 + (minutes % 60) as f32 * 0.5
}
