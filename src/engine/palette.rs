use glam::Vec3;
use rand::Rng;

/// Four-colour powder set. Every particle colour in a splash is a point on
/// the gradient shadow -> base -> mid -> highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub base: [u8; 3],
    pub highlight: [u8; 3],
    pub shadow: [u8; 3],
    pub mid: [u8; 3],
}

pub const PALETTES: [Palette; 8] = [
    Palette {
        name: "hot pink",
        base: [0xFF, 0x14, 0x93],
        highlight: [0xFF, 0xB6, 0xDD],
        shadow: [0x8B, 0x0A, 0x50],
        mid: [0xFF, 0x5C, 0xB4],
    },
    Palette {
        name: "golden yellow",
        base: [0xFF, 0xD6, 0x00],
        highlight: [0xFF, 0xFD, 0xE7],
        shadow: [0xF9, 0xA8, 0x25],
        mid: [0xFF, 0xE9, 0x6A],
    },
    Palette {
        name: "vivid blue",
        base: [0x29, 0x79, 0xFF],
        highlight: [0xBB, 0xDE, 0xFB],
        shadow: [0x0D, 0x47, 0xA1],
        mid: [0x64, 0xA6, 0xFF],
    },
    Palette {
        name: "green",
        base: [0x00, 0xE6, 0x76],
        highlight: [0xB9, 0xF6, 0xCA],
        shadow: [0x1B, 0x5E, 0x20],
        mid: [0x5E, 0xF0, 0x9C],
    },
    Palette {
        name: "deep orange",
        base: [0xFF, 0x6D, 0x00],
        highlight: [0xFF, 0xE0, 0xB2],
        shadow: [0xBF, 0x36, 0x0C],
        mid: [0xFF, 0x9E, 0x40],
    },
    Palette {
        name: "purple",
        base: [0xD5, 0x00, 0xF9],
        highlight: [0xF3, 0xE5, 0xF5],
        shadow: [0x6A, 0x1B, 0x9A],
        mid: [0xE0, 0x5C, 0xFB],
    },
    Palette {
        name: "magenta",
        base: [0xF5, 0x00, 0x57],
        highlight: [0xFC, 0xE4, 0xEC],
        shadow: [0x88, 0x0E, 0x4F],
        mid: [0xFF, 0x4F, 0x8B],
    },
    Palette {
        name: "teal",
        base: [0x00, 0xBC, 0xD4],
        highlight: [0xE0, 0xF7, 0xFA],
        shadow: [0x00, 0x60, 0x64],
        mid: [0x4D, 0xD5, 0xE6],
    },
];

impl Palette {
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Palette {
        PALETTES[rng.gen_range(0..PALETTES.len())]
    }

    /// Colour at `mix` along the palette gradient; `mix` is clamped to [0, 1].
    pub fn sample(&self, mix: f32) -> [u8; 3] {
        let stops = [self.shadow, self.base, self.mid, self.highlight];
        let mix = if mix.is_finite() { mix.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = mix * (stops.len() - 1) as f32;
        let i = (scaled.floor() as usize).min(stops.len() - 2);
        let t = scaled - i as f32;
        let c = to_vec3(stops[i]).lerp(to_vec3(stops[i + 1]), t);
        [c.x.round() as u8, c.y.round() as u8, c.z.round() as u8]
    }
}

#[inline]
fn to_vec3(c: [u8; 3]) -> Vec3 {
    Vec3::new(c[0] as f32, c[1] as f32, c[2] as f32)
}
