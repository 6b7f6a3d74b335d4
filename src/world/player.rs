use bitflags::bitflags;
use glam::DVec2;

bitflags! {
    /// Held-key state. Directional bits flip on every key transition.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct InputFlags: u8 {
        const FORWARD  = 0x01;
        const LEFT     = 0x02;
        const BACKWARD = 0x04;
        const RIGHT    = 0x08;
        const EXIT     = 0x10;
    }
}

/// Player view-point on the grid.
///
/// * `dir` is the heading, `plane` the camera plane; both are always
///   rotated together so they stay perpendicular.
/// * FoV = `2 * atan(|plane| / |dir|)`; the spawn pose gives 90°.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pos: DVec2,
    dir: DVec2,
    plane: DVec2,
    pub keys: InputFlags,
}

impl Player {
    /// Player at `pos` looking along `dir` with horizontal FoV `fov`
    /// (radians). `dir` is normalised.
    pub fn new(pos: DVec2, dir: DVec2, fov: f64) -> Self {
        let dir = dir.normalize_or(DVec2::NEG_X);
        // (x, y) -> (y, -x): (-1, 0) gets the (0, 1) plane
        let plane = DVec2::new(dir.y, -dir.x) * (fov * 0.5).tan();
        Self {
            pos,
            dir,
            plane,
            keys: InputFlags::empty(),
        }
    }

    /// Fixed spawn pose: (8, 8) facing -X with a (0, 1) camera plane.
    pub fn spawn() -> Self {
        Self {
            pos: DVec2::new(8.0, 8.0),
            dir: DVec2::new(-1.0, 0.0),
            plane: DVec2::new(0.0, 1.0),
            keys: InputFlags::empty(),
        }
    }

    #[inline]
    pub fn dir(&self) -> DVec2 {
        self.dir
    }

    #[inline]
    pub fn plane(&self) -> DVec2 {
        self.plane
    }

    /// Horizontal field of view in radians.
    pub fn fov(&self) -> f64 {
        2.0 * (self.plane.length() / self.dir.length()).atan()
    }

    /// Rotate heading and camera plane by `angle` (positive = left).
    ///
    /// Both vectors go through the same matrix built from the
    /// pre-rotation components.
    pub fn rotate(&mut self, angle: f64) {
        let (s, c) = angle.sin_cos();
        let turn = |v: DVec2| DVec2::new(v.x * c - v.y * s, v.x * s + v.y * c);
        self.dir = turn(self.dir);
        self.plane = turn(self.plane);
    }

    /// Flip the held state of `flag`.
    #[inline]
    pub fn toggle(&mut self, flag: InputFlags) {
        self.keys.toggle(flag);
    }

    #[inline]
    pub fn wants_exit(&self) -> bool {
        self.keys.contains(InputFlags::EXIT)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn spawn_pose_has_90_deg_fov() {
        let p = Player::spawn();
        assert!((p.fov() - FRAC_PI_2).abs() < EPS);
        assert_eq!(p.dir().dot(p.plane()), 0.0);
    }

    #[test]
    fn new_matches_spawn_pose() {
        let p = Player::new(DVec2::new(8.0, 8.0), DVec2::new(-2.0, 0.0), FRAC_PI_2);
        let s = Player::spawn();
        assert!((p.dir() - s.dir()).length() < EPS);
        assert!((p.plane() - s.plane()).length() < EPS);
    }

    #[test]
    fn rotation_keeps_plane_perpendicular() {
        let mut p = Player::spawn();
        for i in 0..1000 {
            p.rotate(if i % 3 == 0 { -0.0567 } else { 0.0391 });
            assert!(p.dir().dot(p.plane()).abs() < 1e-9);
        }
        assert!((p.fov() - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn left_then_right_restores_vectors() {
        let mut p = Player::spawn();
        let before = p;
        for theta in [0.01, 0.0567, 0.3, 1.0, 3.0] {
            p.rotate(theta);
            p.rotate(-theta);
            assert!((p.dir() - before.dir()).length() < 1e-12);
            assert!((p.plane() - before.plane()).length() < 1e-12);
        }
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut p = Player::spawn();
        for flag in [
            InputFlags::FORWARD,
            InputFlags::LEFT,
            InputFlags::BACKWARD,
            InputFlags::RIGHT,
        ] {
            let before = p.keys;
            p.toggle(flag);
            assert!(p.keys.contains(flag));
            p.toggle(flag);
            assert_eq!(p.keys, before);
        }
    }
}
