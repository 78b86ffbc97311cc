//! Frame driver
//!
//! One frame: clear the background, advance and draw every sparkle, fill every
//! figure, present, then wait out the frame interval.

use crate::platform::FrameClock;
use crate::renderer::{Canvas, rgb};
use crate::settings::Palette;
use crate::sim::SimState;

/// Frames between FPS reports in the log
const REPORT_INTERVAL: u64 = 300;

/// Advance the simulation one step and draw it
pub fn render_frame(state: &mut SimState, canvas: &mut impl Canvas, palette: &Palette) {
    canvas.clear(rgb(palette.background));

    let sparkle_color = rgb(palette.sparkle);
    state.advance(|p| canvas.draw_point(p, sparkle_color));

    let figure_color = rgb(palette.figure);
    for figure in state.world().figures() {
        canvas.fill_polygon(figure.boundary_points(), figure_color);
    }

    canvas.present();
}

/// Run frames until `should_quit` returns true or `max_frames` is reached
///
/// `should_quit` is polled before every frame with the number of frames done.
/// Returns the number of frames rendered.
pub fn run(
    state: &mut SimState,
    canvas: &mut impl Canvas,
    clock: &mut FrameClock,
    palette: &Palette,
    max_frames: Option<u64>,
    mut should_quit: impl FnMut(u64) -> bool,
) -> u64 {
    let mut frames = 0;
    while max_frames.is_none_or(|max| frames < max) && !should_quit(frames) {
        render_frame(state, canvas, palette);
        clock.tick();
        frames += 1;

        if frames % REPORT_INTERVAL == 0 {
            log::info!("Frame {}: {:.1} fps", state.frame, clock.fps());
        }
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use glam::DVec2;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Point(DVec2),
        Polygon(usize),
        Present,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, _color: [f32; 4]) {
            self.calls.push(Call::Clear);
        }

        fn draw_point(&mut self, p: DVec2, _color: [f32; 4]) {
            self.calls.push(Call::Point(p));
        }

        fn fill_polygon(&mut self, points: &[DVec2], _color: [f32; 4]) {
            self.calls.push(Call::Polygon(points.len()));
        }

        fn present(&mut self) {
            self.calls.push(Call::Present);
        }
    }

    fn scene() -> Settings {
        Settings {
            width: 200.0,
            height: 200.0,
            sparkle_count: 2,
            seed: Some(5),
            fps: 0,
            figures: vec![
                vec![
                    DVec2::new(10.0, 10.0),
                    DVec2::new(30.0, 10.0),
                    DVec2::new(20.0, 30.0),
                ],
                vec![
                    DVec2::new(150.0, 150.0),
                    DVec2::new(180.0, 150.0),
                    DVec2::new(180.0, 180.0),
                    DVec2::new(150.0, 180.0),
                ],
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_frame_call_order() {
        let settings = scene();
        let mut state = SimState::new(&settings).unwrap();
        let mut canvas = Recorder::default();

        render_frame(&mut state, &mut canvas, &settings.palette);

        let spawn = DVec2::new(100.0, 100.0);
        assert_eq!(
            canvas.calls,
            vec![
                Call::Clear,
                Call::Point(spawn),
                Call::Point(spawn),
                Call::Polygon(3),
                Call::Polygon(4),
                Call::Present,
            ]
        );
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_run_stops_at_max_frames() {
        let settings = scene();
        let mut state = SimState::new(&settings).unwrap();
        let mut canvas = Recorder::default();
        let mut clock = FrameClock::new(0);

        let frames = run(&mut state, &mut canvas, &mut clock, &settings.palette, Some(5), |_| false);
        assert_eq!(frames, 5);
        assert_eq!(state.frame, 5);
        assert_eq!(clock.frames(), 5);
        assert_eq!(canvas.calls.iter().filter(|c| **c == Call::Present).count(), 5);
    }

    #[test]
    fn test_run_honours_quit_signal() {
        let settings = scene();
        let mut state = SimState::new(&settings).unwrap();
        let mut canvas = Recorder::default();
        let mut clock = FrameClock::new(0);

        let frames = run(&mut state, &mut canvas, &mut clock, &settings.palette, None, |n| n == 3);
        assert_eq!(frames, 3);
    }
}
