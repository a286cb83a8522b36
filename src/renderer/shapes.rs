//! Shape generation for 2D primitives
//!
//! Every function appends triangles (three vertices each) to `out`.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Axis-aligned filled rectangle
pub fn rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Segment masks for digits 0-9, bits a..g (top, top-right, bottom-right,
/// bottom, bottom-left, top-left, middle)
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Seven-segment digit with its top-left corner at `pos`.
/// `height` is the digit height; width is half of it.
pub fn digit(out: &mut Vec<Vertex>, pos: Vec2, height: f32, value: u8, color: [f32; 4]) {
    let Some(&mask) = DIGIT_SEGMENTS.get(value as usize) else {
        return;
    };
    let w = height / 2.0;
    let half = height / 2.0;
    let t = (height / 8.0).max(1.0);

    // (x, y, width, height) per segment, relative to `pos`
    let segments = [
        (0.0, 0.0, w, t),                   // a
        (w - t, 0.0, t, half),              // b
        (w - t, half, t, half),             // c
        (0.0, height - t, w, t),            // d
        (0.0, half, t, half),               // e
        (0.0, 0.0, t, half),                // f
        (0.0, half - t / 2.0, w, t),        // g
    ];

    for (bit, &(x, y, sw, sh)) in segments.iter().enumerate() {
        if mask & (1 << bit) != 0 {
            rect(out, pos + Vec2::new(x, y), Vec2::new(sw, sh), color);
        }
    }
}

/// A non-negative number as seven-segment digits, left to right
pub fn number(out: &mut Vec<Vertex>, pos: Vec2, height: f32, value: u64, color: [f32; 4]) {
    let advance = height / 2.0 + height / 4.0;
    for (i, ch) in value.to_string().bytes().enumerate() {
        let x = pos.x + i as f32 * advance;
        digit(out, Vec2::new(x, pos.y), height, ch - b'0', color);
    }
}
