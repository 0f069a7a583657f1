// SPDX-License-Identifier: MIT
//
// Linear-color transform layer.
//
// Pure, stateless conversions between the color spaces the HCT model is
// built on. Every function is total: any real input produces a real output,
// and callers clamp pathological values (NaN, out-of-gamut) themselves.
//
// Pipeline:
//
//   sRGB ↔ Linear sRGB ↔ XYZ (D65) ↔ Lab ↔ LCH
//
// The arithmetic is written out term by term (no fused multiply-add) so
// the resulting hex values match the published palettes bit for bit.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

// ─── Color Types ─────────────────────────────────────────────────────────────

/// A gamma-encoded sRGB color with components nominally in [0, 1].
///
/// Values produced by the gamut solver may sit up to `1e-4` outside the unit
/// cube; packing to ARGB clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A gamma-decoded (physically linear) sRGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE 1931 tristimulus values relative to the D65 white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE 1976 L*a*b*. `l` runs 0 (black) to 100 (white).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Polar Lab: lightness, chroma (≥ 0) and hue in degrees, [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray with every channel set to `value`.
    #[inline]
    #[must_use]
    pub const fn gray(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Create from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
    }

    /// Remove the sRGB transfer curve.
    #[must_use]
    pub fn to_linear(self) -> LinearRgb {
        LinearRgb {
            r: srgb_to_linear(self.r),
            g: srgb_to_linear(self.g),
            b: srgb_to_linear(self.b),
        }
    }
}

impl LinearRgb {
    /// Apply the sRGB transfer curve.
    #[must_use]
    pub fn to_srgb(self) -> Rgb {
        Rgb::new(
            linear_to_srgb(self.r),
            linear_to_srgb(self.g),
            linear_to_srgb(self.b),
        )
    }
}

// ─── Constants ───────────────────────────────────────────────────────────────

/// Linear sRGB → XYZ (D65).
pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_338_95, 0.357_620_64, 0.180_510_42],
    [0.212_672_85, 0.715_168_68, 0.072_158_48],
    [0.019_331_42, 0.119_194_85, 0.950_533_73],
];

/// XYZ (D65) → linear sRGB. Specified independently, not the exact inverse
/// of [`SRGB_TO_XYZ`].
pub const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

/// D65 reference white.
pub const WHITE_POINT_D65: Xyz = Xyz {
    x: 0.950_47,
    y: 1.0,
    z: 1.088_83,
};

/// Lab breakpoint, (6/29)³.
const LAB_EPSILON: f64 = 0.008_856;

/// Slope of the linear Lab segment in the forward direction.
const LAB_KAPPA: f64 = 903.3;

/// Slope of the linear Lab segment in the inverse direction.
const LAB_INV_SLOPE: f64 = 7.787;

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

// ─── Linear sRGB ↔ XYZ ──────────────────────────────────────────────────────

#[inline]
fn mat3_mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Linear sRGB → XYZ.
#[must_use]
pub fn linear_rgb_to_xyz(rgb: LinearRgb) -> Xyz {
    let [x, y, z] = mat3_mul(&SRGB_TO_XYZ, [rgb.r, rgb.g, rgb.b]);
    Xyz { x, y, z }
}

/// XYZ → linear sRGB. The result may lie outside the unit cube.
#[must_use]
pub fn xyz_to_linear_rgb(xyz: Xyz) -> LinearRgb {
    let [r, g, b] = mat3_mul(&XYZ_TO_SRGB, [xyz.x, xyz.y, xyz.z]);
    LinearRgb { r, g, b }
}

// ─── XYZ ↔ Lab ──────────────────────────────────────────────────────────────

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cube = f.powf(3.0);
    if cube > LAB_EPSILON {
        cube
    } else {
        (f - 16.0 / 116.0) / LAB_INV_SLOPE
    }
}

/// XYZ → CIE 1976 Lab, referenced to D65.
#[must_use]
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / WHITE_POINT_D65.x);
    let fy = lab_f(xyz.y / WHITE_POINT_D65.y);
    let fz = lab_f(xyz.z / WHITE_POINT_D65.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// CIE 1976 Lab → XYZ, referenced to D65.
#[must_use]
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    Xyz {
        x: WHITE_POINT_D65.x * lab_f_inv(fx),
        y: WHITE_POINT_D65.y * lab_f_inv(fy),
        z: WHITE_POINT_D65.z * lab_f_inv(fz),
    }
}

// ─── Lab ↔ LCH ──────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Lab → LCH. Hue is `atan2(b, a)` in degrees, shifted into [0, 360).
#[must_use]
pub fn lab_to_lch(lab: Lab) -> Lch {
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
    let mut h = lab.b.atan2(lab.a) * 180.0 / PI;
    if h < 0.0 {
        h += 360.0;
    }
    Lch { l: lab.l, c, h }
}

/// LCH → Lab.
#[must_use]
pub fn lch_to_lab(lch: Lch) -> Lab {
    let h_rad = lch.h * PI / 180.0;
    Lab {
        l: lch.l,
        a: lch.c * h_rad.cos(),
        b: lch.c * h_rad.sin(),
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

/// sRGB → LCH.
#[must_use]
pub fn rgb_to_lch(rgb: Rgb) -> Lch {
    lab_to_lch(xyz_to_lab(linear_rgb_to_xyz(rgb.to_linear())))
}

/// LCH → sRGB. The result may be out of gamut; nothing is clamped.
#[must_use]
pub fn lch_to_rgb(lch: Lch) -> Rgb {
    xyz_to_linear_rgb(lab_to_xyz(lch_to_lab(lch))).to_srgb()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
