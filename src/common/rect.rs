use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in absolute pixel coordinates.
///
/// `(x, y)` is the top-left corner with x=0 at the left edge of the image and
/// y=0 at the top. Width and height are never negative for a rect produced by
/// the decoder.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Builds a rect from a floating point center point and size.
    ///
    /// Coordinates are truncated toward zero when converted to integer
    /// pixels. Truncation matches the reference decoder; callers that need
    /// rounding should round before constructing the rect.
    pub fn from_cxcy_wh(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self {
            x: (cx - w / 2.0) as i32,
            y: (cy - h / 2.0) as i32,
            w: w as i32,
            h: h as i32,
        }
    }

    /// Returns the minimum x-coordinate of the bounding box.
    pub fn x_min(&self) -> i32 {
        self.x
    }

    /// The minimum y-coordinate of the bounding box.
    pub fn y_min(&self) -> i32 {
        self.y
    }

    /// Returns the maximum x-coordinate of the bounding box.
    pub fn x_max(&self) -> i32 {
        self.x + self.w
    }

    /// The maximum y-coordinate of the bounding box.
    pub fn y_max(&self) -> i32 {
        self.y + self.h
    }

    /// Returns the center x-coordinate of the bounding box.
    pub fn cx(&self) -> f32 {
        self.x as f32 + self.w as f32 / 2.
    }

    /// Returns the center y-coordinate of the bounding box.
    pub fn cy(&self) -> f32 {
        self.y as f32 + self.h as f32 / 2.
    }

    /// Returns the bounding box coordinates as `(x1, y1, x2, y2)`.
    pub fn xy1_xy2(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.x_max(), self.y_max())
    }

    /// Returns the bounding box coordinates and size as `(x, y, w, h)`.
    pub fn xy_wh(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.w, self.h)
    }

    /// Computes the area of the bounding box.
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Computes the intersection area between this bounding box and another.
    pub fn intersect(&self, other: &Rect) -> i64 {
        let left = self.x_min().max(other.x_min());
        let right = self.x_max().min(other.x_max());
        let top = self.y_min().max(other.y_min());
        let bottom = self.y_max().min(other.y_max());
        (right - left).max(0) as i64 * (bottom - top).max(0) as i64
    }

    /// Computes the union area between this bounding box and another.
    pub fn union(&self, other: &Rect) -> i64 {
        self.area() + other.area() - self.intersect(other)
    }

    /// Computes the intersection over union (IoU) between this bounding box
    /// and another.
    ///
    /// Symmetric and bounded in `[0, 1]`. Disjoint rects give 0; a rect with
    /// zero area gives 0 against anything, including itself.
    pub fn iou(&self, other: &Rect) -> f32 {
        if self.area() == 0 || other.area() == 0 {
            return 0.0;
        }
        let union = self.union(other);
        if union <= 0 {
            return 0.0;
        }
        self.intersect(other) as f32 / union as f32
    }

    /// Checks if this bounding box completely contains another bounding box `other`.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x_min() <= other.x_min()
            && self.x_max() >= other.x_max()
            && self.y_min() <= other.y_min()
            && self.y_max() >= other.y_max()
    }
}
