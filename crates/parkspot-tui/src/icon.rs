//! Marker icon rasterization.
//!
//! The marker is defined as a vector icon (polyline strokes in a unit
//! square) and rasterized into a small monochrome bitmap, which the map view
//! then projects into world coordinates as a point cloud. This keeps the
//! icon resolution-independent: the same strokes render at any marker
//! footprint the camera implies.

/// A stroke in icon space: unit square, origin top-left, y growing downward.
pub type Stroke = ((f64, f64), (f64, f64));

/// A vector icon as a list of polyline strokes.
#[derive(Debug, Clone, Copy)]
pub struct VectorIcon {
    /// Strokes in unit-square coordinates.
    pub strokes: &'static [Stroke],
}

/// The parked-car marker: side view, roof left-to-right, two wheels.
pub const CAR_ICON: VectorIcon = VectorIcon {
    strokes: &[
        // cabin
        ((0.30, 0.25), (0.65, 0.25)),
        ((0.65, 0.25), (0.80, 0.45)),
        ((0.30, 0.25), (0.20, 0.45)),
        // body
        ((0.05, 0.45), (0.95, 0.45)),
        ((0.05, 0.45), (0.05, 0.70)),
        ((0.95, 0.45), (0.95, 0.70)),
        ((0.05, 0.70), (0.18, 0.70)),
        ((0.42, 0.70), (0.58, 0.70)),
        ((0.82, 0.70), (0.95, 0.70)),
        // wheels
        ((0.22, 0.70), (0.30, 0.88)),
        ((0.30, 0.88), (0.38, 0.70)),
        ((0.62, 0.70), (0.70, 0.88)),
        ((0.70, 0.88), (0.78, 0.70)),
    ],
};

/// Monochrome raster of a vector icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBitmap {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl IconBitmap {
    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at `(x, y)` is lit. Out-of-range reads are unlit.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Iterate over lit pixel coordinates.
    pub fn lit(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(index, _)| (index % self.width, index / self.width))
    }

    fn set(&mut self, x: usize, y: usize) {
        self.cells[y * self.width + x] = true;
    }
}

impl VectorIcon {
    /// Rasterize into a `width` x `height` bitmap.
    ///
    /// Stroke endpoints outside the unit square are clamped to the bitmap
    /// edge rather than dropped, so a malformed icon still renders inside
    /// its bounds.
    pub fn rasterize(&self, width: usize, height: usize) -> IconBitmap {
        let mut bitmap =
            IconBitmap { width, height, cells: vec![false; width * height] };
        if width == 0 || height == 0 {
            return bitmap;
        }
        for &(from, to) in self.strokes {
            let (x0, y0) = to_pixel(from, width, height);
            let (x1, y1) = to_pixel(to, width, height);
            draw_line(&mut bitmap, x0, y0, x1, y1);
        }
        bitmap
    }
}

/// Project the lit pixels of a bitmap onto world coordinates.
///
/// The bitmap is centered on `(lon, lat)` with the given footprint in
/// degrees; pixel rows grow downward while latitude grows upward, so the
/// vertical axis flips.
pub fn project(
    bitmap: &IconBitmap,
    lon: f64,
    lat: f64,
    lon_footprint: f64,
    lat_footprint: f64,
) -> Vec<(f64, f64)> {
    let width = bitmap.width() as f64;
    let height = bitmap.height() as f64;
    bitmap
        .lit()
        .map(|(px, py)| {
            let x = lon - lon_footprint / 2.0 + (px as f64 + 0.5) / width * lon_footprint;
            let y = lat + lat_footprint / 2.0 - (py as f64 + 0.5) / height * lat_footprint;
            (x, y)
        })
        .collect()
}

fn to_pixel((u, v): (f64, f64), width: usize, height: usize) -> (i64, i64) {
    let x = (u * (width as f64 - 1.0)).round() as i64;
    let y = (v * (height as f64 - 1.0)).round() as i64;
    (x.clamp(0, width as i64 - 1), y.clamp(0, height as i64 - 1))
}

/// Bresenham line draw; endpoints are already clamped in-bounds.
fn draw_line(bitmap: &mut IconBitmap, x0: i64, y0: i64, x1: i64, y1: i64) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };
    let mut error = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        bitmap.set(x as usize, y as usize);
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_stroke_lights_a_row() {
        let icon = VectorIcon { strokes: &[((0.0, 0.0), (1.0, 0.0))] };
        let bitmap = icon.rasterize(8, 4);
        for x in 0..8 {
            assert!(bitmap.get(x, 0), "pixel {x},0 should be lit");
        }
        assert_eq!(bitmap.lit().count(), 8);
    }

    #[test]
    fn diagonal_stroke_is_connected() {
        let icon = VectorIcon { strokes: &[((0.0, 0.0), (1.0, 1.0))] };
        let bitmap = icon.rasterize(8, 8);
        for i in 0..8 {
            assert!(bitmap.get(i, i));
        }
    }

    #[test]
    fn out_of_range_strokes_clamp_to_bounds() {
        let icon = VectorIcon { strokes: &[((-2.0, 0.5), (3.0, 0.5))] };
        let bitmap = icon.rasterize(8, 8);
        assert!(bitmap.lit().count() > 0);
        for (x, y) in bitmap.lit() {
            assert!(x < 8 && y < 8);
        }
    }

    #[test]
    fn rasterization_is_deterministic() {
        let first = CAR_ICON.rasterize(24, 12);
        let second = CAR_ICON.rasterize(24, 12);
        assert_eq!(first, second);
    }

    #[test]
    fn car_icon_is_nonempty_and_in_bounds() {
        let bitmap = CAR_ICON.rasterize(24, 12);
        assert!(bitmap.lit().count() > 20);
        for (x, y) in bitmap.lit() {
            assert!(x < 24 && y < 12);
        }
    }

    #[test]
    fn zero_sized_raster_is_empty() {
        assert_eq!(CAR_ICON.rasterize(0, 8).lit().count(), 0);
    }

    #[test]
    fn projection_stays_inside_footprint() {
        let bitmap = CAR_ICON.rasterize(24, 12);
        let points = project(&bitmap, 10.0, 50.0, 2.0, 1.0);
        assert!(!points.is_empty());
        for (x, y) in points {
            assert!((9.0..=11.0).contains(&x), "lon {x} outside footprint");
            assert!((49.5..=50.5).contains(&y), "lat {y} outside footprint");
        }
    }

    #[test]
    fn projection_flips_vertical_axis() {
        // A stroke along the icon's top row must project above the center.
        let icon = VectorIcon { strokes: &[((0.0, 0.0), (1.0, 0.0))] };
        let bitmap = icon.rasterize(8, 8);
        let points = project(&bitmap, 0.0, 0.0, 1.0, 1.0);
        assert!(points.iter().all(|&(_, y)| y > 0.0));
    }
}
