//! The scene: what is drawn on each frame, in which order, and in which
//! colors.

use crate::anim::{AnimationState, Physics};
use crate::geom::{
    shadow::shadow,
    sphere::Ball,
    tiles::{Shade, tiles},
};
use crate::math::{
    color::{Color3, Color4, rgb, rgba},
    point::pt2,
    vec::{Vec2, vec2},
};

use super::{Screen, raster::ScreenPt, stats::Stats, target::Target};

/// The colors of the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color3,
    pub shadow: Color4,
    pub grid: Color4,
    pub light: Color4,
    pub dark: Color4,
}

/// The purple reference grid behind and below the ball.
///
/// The back wall is a square grid; the floor is drawn in perspective, with
/// lines fanning out from the bottom of the wall towards the viewer, and
/// a few horizontal lines getting wider towards the bottom of the window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid {
    /// The x coordinate of the leftmost vertical line.
    pub left: f32,
    /// The width and height of a single grid cell.
    pub cell: f32,
    /// The number of horizontal lines on the wall.
    pub rows: usize,
    /// The number of vertical lines on the wall.
    pub cols: usize,
    /// The y coordinate where the wall meets the floor.
    pub horizon: f32,
    /// The y coordinate of the near edge of the floor.
    pub bottom: f32,
    /// The horizontal distance between the near ends of the floor lines.
    pub fan_step: f32,
    /// The y coordinates of the horizontal floor lines.
    pub floor_lines: [f32; 3],
    /// The width of the window.
    pub width: f32,
}

/// Everything that is drawn each frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scene {
    pub palette: Palette,
    pub grid: Grid,
    pub ball: Ball,
    /// The offset of the shadow relative to the ball.
    pub shadow_offset: Vec2<Screen>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: rgb(0xAA, 0xAA, 0xAA),
            shadow: rgba(0x66, 0x66, 0x66, 0xFF),
            grid: rgba(0xB7, 0x2D, 0xA8, 0xFF),
            light: rgba(0xFF, 0xFF, 0xFF, 0xFF),
            dark: rgba(0xFF, 0x00, 0x00, 0xFF),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            left: 50.0,
            cell: 36.0,
            rows: 13,
            cols: 16,
            horizon: 432.0,
            bottom: 480.0,
            fan_step: 42.66,
            floor_lines: [442.0, 454.0, 468.0],
            width: 640.0,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            grid: Grid::default(),
            ball: Ball::default(),
            shadow_offset: vec2(50.0, 0.0),
        }
    }
}

impl Palette {
    /// Returns the color of tiles of shade `s`.
    pub fn tile(&self, s: Shade) -> Color4 {
        match s {
            Shade::Light => self.light,
            Shade::Dark => self.dark,
        }
    }
}

impl Grid {
    /// Returns the line segments of the grid.
    ///
    /// Floor line endpoints are truncated to whole pixels.
    pub fn lines(&self) -> impl Iterator<Item = [ScreenPt; 2]> {
        let Self { left, cell, horizon, bottom, .. } = *self;
        let right = left + (self.cols - 1) as f32 * cell;

        let trunc = |x| crate::math::float::f32::trunc(x);

        let wall_rows = (0..self.rows).map(move |i| {
            let y = i as f32 * cell;
            [pt2(left, y), pt2(right, y)]
        });
        let wall_cols = (0..self.cols).map(move |i| {
            let x = left + i as f32 * cell;
            [pt2(x, 0.0), pt2(x, horizon)]
        });
        let fan_step = self.fan_step;
        let fan = (0..self.cols).map(move |i| {
            let x0 = left + i as f32 * cell;
            let x1 = trunc(i as f32 * fan_step);
            [pt2(x0, horizon), pt2(x1, bottom)]
        });
        let width = self.width;
        let floor = self.floor_lines.into_iter().map(move |y| {
            let x = left - left * (y - horizon) / (bottom - horizon);
            [pt2(trunc(x), y), pt2(trunc(width - x), y)]
        });

        wall_rows.chain(wall_cols).chain(fan).chain(floor)
    }
}

impl Scene {
    /// Draws the scene with the ball in state `st` into `target`.
    ///
    /// The target is first cleared to the background color; then the
    /// shadow, the grid, and finally the tiles of the ball are drawn on top
    /// of each other, in that order.
    ///
    /// Returns statistics of the frame. A primitive counts as output if it
    /// produced at least one pixel.
    pub fn draw<T>(&self, st: &AnimationState, target: &mut T) -> Stats
    where
        T: Target + ?Sized,
    {
        let pal = &self.palette;
        let mut stats = Stats::start();

        target.clear(pal.background);

        let lattice = self.ball.project(st);

        let shadow = shadow(&lattice, self.shadow_offset);
        let px = target.fill_polygon(&shadow, pal.shadow);
        stats.polys.i += 1;
        stats.polys.o += (px.o > 0) as usize;
        stats.pixels += px;

        for seg in self.grid.lines() {
            let px = target.line(seg, pal.grid);
            stats.lines.i += 1;
            stats.lines.o += (px.o > 0) as usize;
            stats.pixels += px;
        }

        for tile in tiles(&lattice, st.is_alternate()) {
            let px = target.fill_polygon(&tile.quad.0, pal.tile(tile.shade));
            stats.polys.i += 1;
            stats.polys.o += (px.o > 0) as usize;
            stats.pixels += px;
        }

        stats.frames = 1;
        stats.finish()
    }

    /// Advances `st` by one frame, then draws the scene in the new state.
    ///
    /// The initial state is never drawn: the first frame already shows the
    /// ball one step into its motion.
    pub fn step_and_draw<T>(
        &self,
        st: &mut AnimationState,
        phys: &Physics,
        target: &mut T,
    ) -> Stats
    where
        T: Target + ?Sized,
    {
        *st = st.step(phys);
        self.draw(st, target)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::math::color::Color3;
    use crate::render::stats::Throughput;

    use super::*;

    /// Records the drawing commands it receives.
    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    #[derive(Debug, PartialEq)]
    enum Cmd {
        Clear(Color3),
        Line([ScreenPt; 2], Color4),
        Poly(usize, Color4),
    }

    impl Target for Recorder {
        fn clear(&mut self, color: Color3) {
            self.cmds.push(Cmd::Clear(color));
        }
        fn line(&mut self, seg: [ScreenPt; 2], color: Color4) -> Throughput {
            self.cmds.push(Cmd::Line(seg, color));
            Throughput { i: 1, o: 1 }
        }
        fn fill_polygon(
            &mut self,
            verts: &[ScreenPt],
            color: Color4,
        ) -> Throughput {
            self.cmds.push(Cmd::Poly(verts.len(), color));
            Throughput { i: 1, o: 1 }
        }
    }

    #[test]
    fn grid_has_48_lines() {
        assert_eq!(Grid::default().lines().count(), 13 + 16 + 16 + 3);
    }

    #[test]
    fn wall_lines() {
        let lines: Vec<_> = Grid::default().lines().collect();
        // Horizontal
        assert_eq!(lines[0], [pt2(50.0, 0.0), pt2(590.0, 0.0)]);
        assert_eq!(lines[12], [pt2(50.0, 432.0), pt2(590.0, 432.0)]);
        // Vertical
        assert_eq!(lines[13], [pt2(50.0, 0.0), pt2(50.0, 432.0)]);
        assert_eq!(lines[28], [pt2(590.0, 0.0), pt2(590.0, 432.0)]);
    }

    #[test]
    fn floor_lines() {
        let lines: Vec<_> = Grid::default().lines().collect();
        // Fan
        assert_eq!(lines[29], [pt2(50.0, 432.0), pt2(0.0, 480.0)]);
        assert_eq!(lines[30], [pt2(86.0, 432.0), pt2(42.0, 480.0)]);
        assert_eq!(lines[44], [pt2(590.0, 432.0), pt2(639.0, 480.0)]);
        // Horizontal
        assert_eq!(lines[45], [pt2(39.0, 442.0), pt2(600.0, 442.0)]);
        assert_eq!(lines[46], [pt2(27.0, 454.0), pt2(612.0, 454.0)]);
        assert_eq!(lines[47], [pt2(12.0, 468.0), pt2(627.0, 468.0)]);
    }

    #[test]
    fn draw_order() {
        let scene = Scene::default();
        let pal = scene.palette;
        let mut rec = Recorder::default();

        let stats = scene.draw(&AnimationState::default(), &mut rec);
        let cmds = rec.cmds;

        assert_eq!(cmds.len(), 1 + 1 + 48 + 72);
        assert_eq!(cmds[0], Cmd::Clear(pal.background));
        assert_eq!(cmds[1], Cmd::Poly(16, pal.shadow));
        assert!(matches!(cmds[2], Cmd::Line(_, c) if c == pal.grid));
        assert!(matches!(cmds[49], Cmd::Line(_, c) if c == pal.grid));
        assert_eq!(cmds[50], Cmd::Poly(4, pal.light));
        assert_eq!(cmds[51], Cmd::Poly(4, pal.dark));

        assert_eq!(stats.frames, 1);
        assert_eq!(stats.polys, Throughput { i: 73, o: 73 });
        assert_eq!(stats.lines, Throughput { i: 48, o: 48 });
    }

    #[test]
    fn first_frame_shows_stepped_state() {
        let scene = Scene::default();
        let phys = Physics::default();
        let init = AnimationState::new(&phys);

        let mut st = init;
        let mut rec = Recorder::default();
        let stats = scene.step_and_draw(&mut st, &phys, &mut rec);

        let mut expected = Recorder::default();
        scene.draw(&init.step(&phys), &mut expected);

        assert_eq!(st, init.step(&phys));
        assert_eq!(rec.cmds, expected.cmds);
        assert_eq!(stats.frames, 1);

        // Phase 0 would start with a light tile, phase 42.5 starts dark
        assert_eq!(rec.cmds[50], Cmd::Poly(4, scene.palette.dark));
    }

    #[test]
    fn alternate_phase_starts_with_dark_tile() {
        let scene = Scene::default();
        let st = AnimationState { phase: 30.0, ..AnimationState::default() };
        let mut rec = Recorder::default();

        scene.draw(&st, &mut rec);

        assert_eq!(rec.cmds[50], Cmd::Poly(4, scene.palette.dark));
    }
}
