use crate::Error;
use std::convert::TryFrom;
use std::fmt;

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x as f32, p.y as f32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Four corner points in the order top-left, top-right, bottom-right, bottom-left.
///
/// Convexity is not checked: a crossed or mirrored quadrilateral simply yields a
/// mirrored transform. Only quadrilaterals that cannot define a perspective
/// transform at all are rejected, see [is_degenerate](Quadrilateral::is_degenerate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadrilateral(pub [Point; 4]);

impl Quadrilateral {
    pub const fn new(
        top_left: Point,
        top_right: Point,
        bottom_right: Point,
        bottom_left: Point,
    ) -> Self {
        Quadrilateral([top_left, top_right, bottom_right, bottom_left])
    }

    /// The axis aligned quadrilateral covering a `width` x `height` image.
    pub fn full_frame(width: u32, height: u32) -> Self {
        let (w, h) = (width as i32, height as i32);
        Quadrilateral::new(
            Point::new(0, 0),
            Point::new(w, 0),
            Point::new(w, h),
            Point::new(0, h),
        )
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.0
    }

    /// True if any three corners are collinear (duplicated corners included).
    ///
    /// A homography onto a rectangle maps every triple of corners to a
    /// non-collinear triple, so such a quadrilateral has no perspective transform.
    pub fn is_degenerate(&self) -> bool {
        let p = &self.0;
        [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)]
            .iter()
            .any(|&(a, b, c)| cross(p[a], p[b], p[c]) == 0)
    }

    pub(crate) fn as_control_points(&self) -> [(f32, f32); 4] {
        let p = &self.0;
        [p[0].into(), p[1].into(), p[2].into(), p[3].into()]
    }
}

impl TryFrom<&[Point]> for Quadrilateral {
    type Error = Error;

    fn try_from(points: &[Point]) -> Result<Self, Self::Error> {
        match *points {
            [a, b, c, d] => Ok(Quadrilateral([a, b, c, d])),
            _ => Err(Error::InvalidQuadrilateral(points.len())),
        }
    }
}

impl From<[(i32, i32); 4]> for Quadrilateral {
    fn from(p: [(i32, i32); 4]) -> Self {
        Quadrilateral([p[0].into(), p[1].into(), p[2].into(), p[3].into()])
    }
}

impl fmt::Display for Quadrilateral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}-{}-{}-{}", a, b, c, d)
    }
}

// z component of (b - a) x (c - a). Differences of i32 need 33 bits, their
// products 65, so this is exact in i128 for any three points.
fn cross(a: Point, b: Point, c: Point) -> i128 {
    let (abx, aby) = (b.x as i128 - a.x as i128, b.y as i128 - a.y as i128);
    let (acx, acy) = (c.x as i128 - a.x as i128, c.y as i128 - a.y as i128);
    abx * acy - aby * acx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_is_not_degenerate() {
        let quad = Quadrilateral::from([(100, 100), (400, 100), (400, 400), (100, 400)]);
        assert!(!quad.is_degenerate());
    }

    #[test]
    fn test_collinear_is_degenerate() {
        let quad = Quadrilateral::from([(0, 0), (10, 10), (20, 20), (30, 30)]);
        assert!(quad.is_degenerate());
        // only three of the four on a line
        let quad = Quadrilateral::from([(0, 0), (10, 0), (20, 0), (5, 40)]);
        assert!(quad.is_degenerate());
    }

    #[test]
    fn test_duplicate_corner_is_degenerate() {
        let quad = Quadrilateral::from([(0, 0), (0, 0), (50, 50), (0, 50)]);
        assert!(quad.is_degenerate());
    }

    #[test]
    fn test_mirrored_is_accepted() {
        // top-right and top-left swapped
        let quad = Quadrilateral::from([(400, 100), (100, 100), (100, 400), (400, 400)]);
        assert!(!quad.is_degenerate());
    }

    #[test]
    fn test_try_from_slice() {
        let points = [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        match Quadrilateral::try_from(&points[..]) {
            Err(Error::InvalidQuadrilateral(n)) => assert_eq!(n, 3),
            other => panic!("unexpected {:?}", other),
        }
        let points = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(0, 1),
        ];
        let quad = Quadrilateral::try_from(&points[..]).unwrap();
        assert_eq!(quad, Quadrilateral::full_frame(1, 1));
    }

    #[test]
    fn test_extreme_coordinates() {
        let (min, max) = (i32::MIN, i32::MAX);
        let quad = Quadrilateral::from([(min, min), (max, min), (max, max), (min, max)]);
        assert!(!quad.is_degenerate());
        // on the diagonal y = x
        let quad = Quadrilateral::from([(min, min), (0, 0), (max, max), (min, max)]);
        assert!(quad.is_degenerate());
        let quad = Quadrilateral::from([(max, max), (min, min), (max, min), (min, max)]);
        assert!(!quad.is_degenerate());
    }

    #[test]
    fn test_display() {
        let quad = Quadrilateral::full_frame(2, 3);
        assert_eq!(quad.to_string(), "(0,0)-(2,0)-(2,3)-(0,3)");
    }
}
