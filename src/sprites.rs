//! Procedural sprite painters
//!
//! Every sprite the games draw is painted here from rounded rectangles,
//! circles and one polygon, into plain RGBA buffers. The same painters
//! serve two consumers: `cargo xtask gen-assets` bakes them to PNG files,
//! and the runtime uses them as silent fallbacks when those files are
//! absent (see `assets`).

use std::path::Path;

use image::{ImageResult, Rgba, RgbaImage};

/// Identifies one paintable sprite and its nominal pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Waiter,
    Police,
    Beer,
    Pretzel,
    Mug,
    Stun,
}

impl SpriteId {
    pub const ALL: [SpriteId; 7] = [
        SpriteId::Player,
        SpriteId::Waiter,
        SpriteId::Police,
        SpriteId::Beer,
        SpriteId::Pretzel,
        SpriteId::Mug,
        SpriteId::Stun,
    ];

    /// File stem used for the baked PNG override
    pub fn name(self) -> &'static str {
        match self {
            SpriteId::Player => "player",
            SpriteId::Waiter => "waiter",
            SpriteId::Police => "police",
            SpriteId::Beer => "beer",
            SpriteId::Pretzel => "pretzel",
            SpriteId::Mug => "mug",
            SpriteId::Stun => "stun",
        }
    }

    /// Nominal size in pixels (painters emit exactly this, overrides are
    /// drawn scaled to it)
    pub fn size(self) -> (u32, u32) {
        match self {
            SpriteId::Player => (46, 62),
            SpriteId::Waiter => (50, 62),
            SpriteId::Police => (50, 62),
            SpriteId::Beer => (26, 34),
            SpriteId::Pretzel => (30, 30),
            SpriteId::Mug => (22, 22),
            SpriteId::Stun => (30, 30),
        }
    }
}

/// Paint a sprite into a fresh transparent buffer of its nominal size.
pub fn paint(id: SpriteId) -> RgbaImage {
    let (w, h) = id.size();
    let mut img = RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 0]));
    match id {
        SpriteId::Player => paint_player(&mut img),
        SpriteId::Waiter => paint_waiter(&mut img),
        SpriteId::Police => paint_police(&mut img),
        SpriteId::Beer => paint_beer(&mut img),
        SpriteId::Pretzel => paint_pretzel(&mut img),
        SpriteId::Mug => paint_mug(&mut img),
        SpriteId::Stun => paint_stun(&mut img),
    }
    img
}

/// Bake every sprite to `<dir>/<name>.png`, creating the directory.
pub fn write_all(dir: &Path) -> ImageResult<()> {
    std::fs::create_dir_all(dir)?;
    for id in SpriteId::ALL {
        paint(id).save(dir.join(format!("{}.png", id.name())))?;
    }
    Ok(())
}

// ── Individual sprites ───────────────────────────────────────────────────────

fn paint_player(img: &mut RgbaImage) {
    rounded_rect(img, 10, 20, 32, 30, 6, rgb(43, 94, 188)); // lederhosen torso
    rounded_rect(img, 14, 4, 24, 20, 9, rgb(245, 228, 202)); // head
    rounded_rect(img, 16, 10, 20, 8, 4, rgb(210, 130, 70)); // hair
    rounded_rect(img, 6, 22, 36, 8, 5, rgb(245, 245, 245)); // shirt band
    rounded_rect(img, 12, 50, 10, 12, 4, rgb(82, 56, 38)); // legs
    rounded_rect(img, 30, 50, 10, 12, 4, rgb(82, 56, 38));
}

fn paint_waiter(img: &mut RgbaImage) {
    rounded_rect(img, 10, 20, 32, 34, 6, rgb(32, 32, 32));
    rounded_rect(img, 14, 4, 24, 20, 9, rgb(245, 232, 205));
    rounded_rect(img, 6, 24, 36, 8, 5, rgb(230, 230, 230));
    rounded_rect(img, 7, 13, 34, 5, 3, rgb(60, 60, 60));
    rounded_rect(img, 12, 54, 10, 10, 3, rgb(72, 72, 72));
    rounded_rect(img, 30, 54, 10, 10, 3, rgb(72, 72, 72));
    rounded_rect(img, 40, 12, 11, 5, 3, rgb(190, 190, 190)); // serving tray
}

fn paint_police(img: &mut RgbaImage) {
    rounded_rect(img, 10, 20, 32, 34, 6, rgb(28, 78, 166));
    rounded_rect(img, 14, 4, 24, 20, 9, rgb(245, 232, 205));
    rounded_rect(img, 8, 11, 34, 6, 3, rgb(18, 44, 110)); // cap
    rounded_rect(img, 16, 28, 20, 5, 3, rgb(225, 225, 225)); // belt
    rounded_rect(img, 12, 54, 10, 10, 3, rgb(26, 60, 130));
    rounded_rect(img, 30, 54, 10, 10, 3, rgb(26, 60, 130));
}

fn paint_beer(img: &mut RgbaImage) {
    rounded_rect(img, 6, 8, 14, 24, 5, rgb(252, 198, 71)); // glass
    rounded_rect(img, 5, 2, 16, 10, 5, rgb(255, 244, 207)); // foam
    rounded_rect(img, 18, 12, 6, 12, 3, rgb(238, 238, 238)); // handle
    rounded_rect(img, 8, 11, 3, 15, 2, rgb(255, 255, 255)); // shine
}

fn paint_pretzel(img: &mut RgbaImage) {
    ring(img, 11, 12, 7, 5, rgb(177, 109, 56));
    ring(img, 21, 12, 7, 5, rgb(177, 109, 56));
    ring(img, 16, 21, 7, 5, rgb(177, 109, 56));
    circle(img, 16, 21, 1, rgb(232, 202, 146)); // salt fleck
}

fn paint_mug(img: &mut RgbaImage) {
    rounded_rect(img, 5, 7, 16, 15, 4, rgb(235, 235, 235));
    rounded_rect(img, 7, 9, 12, 11, 3, rgb(249, 200, 86));
    rounded_rect(img, 18, 10, 5, 9, 3, rgb(235, 235, 235));
}

fn paint_stun(img: &mut RgbaImage) {
    const POINTS: [(f32, f32); 9] = [
        (14.0, 1.0),
        (18.0, 10.0),
        (27.0, 10.0),
        (19.0, 16.0),
        (23.0, 26.0),
        (11.0, 17.0),
        (3.0, 17.0),
        (9.0, 10.0),
        (1.0, 10.0),
    ];
    polygon(img, &POINTS, rgb(247, 212, 87));
    polygon_outline(img, &POINTS, 2, rgb(171, 129, 21));
}

// ── Painting primitives ──────────────────────────────────────────────────────

fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

fn put(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Filled rectangle with quarter-circle corners of the given radius.
fn rounded_rect(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, radius: i32, color: Rgba<u8>) {
    let r = radius.min(w / 2).min(h / 2).max(0);
    for py in y..y + h {
        for px in x..x + w {
            if in_corner_cut(px, py, x, y, w, h, r) {
                continue;
            }
            put(img, px, py, color);
        }
    }
}

/// True when the pixel lies in a corner square but outside its radius arc.
fn in_corner_cut(px: i32, py: i32, x: i32, y: i32, w: i32, h: i32, r: i32) -> bool {
    if r == 0 {
        return false;
    }
    let cx = if px < x + r {
        x + r
    } else if px >= x + w - r {
        x + w - 1 - r
    } else {
        return false;
    };
    let cy = if py < y + r {
        y + r
    } else if py >= y + h - r {
        y + h - 1 - r
    } else {
        return false;
    };
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy > r * r
}

fn circle(img: &mut RgbaImage, cx: i32, cy: i32, radius: i32, color: Rgba<u8>) {
    for py in cy - radius..=cy + radius {
        for px in cx - radius..=cx + radius {
            let (dx, dy) = (px - cx, py - cy);
            if dx * dx + dy * dy <= radius * radius {
                put(img, px, py, color);
            }
        }
    }
}

/// Annulus: outer radius `radius`, stroke extending `width` inward.
fn ring(img: &mut RgbaImage, cx: i32, cy: i32, radius: i32, width: i32, color: Rgba<u8>) {
    let inner = (radius - width).max(0);
    for py in cy - radius..=cy + radius {
        for px in cx - radius..=cx + radius {
            let (dx, dy) = (px - cx, py - cy);
            let d2 = dx * dx + dy * dy;
            if d2 <= radius * radius && d2 > inner * inner {
                put(img, px, py, color);
            }
        }
    }
}

/// Even-odd scanline fill of a simple polygon.
fn polygon(img: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>) {
    let (min_y, max_y) = points.iter().fold((f32::MAX, f32::MIN), |(lo, hi), p| {
        (lo.min(p.1), hi.max(p.1))
    });
    for py in min_y.floor() as i32..=max_y.ceil() as i32 {
        let ys = py as f32 + 0.5;
        let mut xs: Vec<f32> = Vec::new();
        for i in 0..points.len() {
            let (x1, y1) = points[i];
            let (x2, y2) = points[(i + 1) % points.len()];
            if (y1 <= ys) != (y2 <= ys) {
                xs.push(x1 + (ys - y1) / (y2 - y1) * (x2 - x1));
            }
        }
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in xs.chunks(2) {
            if let [start, end] = pair {
                for px in start.round() as i32..end.round() as i32 {
                    put(img, px, py, color);
                }
            }
        }
    }
}

/// Stroke each polygon edge with a square brush of the given width.
fn polygon_outline(img: &mut RgbaImage, points: &[(f32, f32)], width: i32, color: Rgba<u8>) {
    let half = (width as f32 * 0.5).ceil() as i32;
    for i in 0..points.len() {
        let (x1, y1) = points[i];
        let (x2, y2) = points[(i + 1) % points.len()];
        let steps = ((x2 - x1).abs().max((y2 - y1).abs()).ceil() as i32 * 2).max(1);
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let bx = (x1 + (x2 - x1) * t).round() as i32;
            let by = (y1 + (y2 - y1) * t).round() as i32;
            for dy in -half..half {
                for dx in -half..half {
                    put(img, bx + dx, by + dy, color);
                }
            }
        }
    }
}
