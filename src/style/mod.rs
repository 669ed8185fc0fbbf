//! Paint attribute resolution
//!
//! The renderer never works with colors directly. It asks a
//! [`StyleProvider`] for opaque [`Paint`] tokens once, caches the resolved
//! pair, and hands tokens to the surface on every draw. Hosts re-resolve
//! the cache when their theme changes; draw calls themselves never consult
//! the provider.

use crate::utils::color::Rgb;

/// Appearance role a paint token is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintRole {
    /// Active segment or stroke
    Lit,
    /// Inactive segment ghost and erase fill
    Unlit,
}

/// Opaque paint token handed to surfaces.
///
/// Rendering code only moves these around; what a token means visually is
/// decided by the provider that issued it and the surface that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint(Rgb);

impl Paint {
    pub const fn new(rgb: Rgb) -> Self {
        Self(rgb)
    }

    /// Color carried by this token (for output backends).
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.0
    }
}

/// Source of paint tokens. The seam between displays and the host theme.
pub trait StyleProvider {
    fn paint_for(&self, role: PaintRole) -> Paint;
}

/// Two-color style provider: classic lit-on-ghost LED look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub lit: Rgb,
    pub unlit: Rgb,
}

impl Palette {
    pub const fn new(lit: Rgb, unlit: Rgb) -> Self {
        Self { lit, unlit }
    }
}

impl Default for Palette {
    fn default() -> Self {
        // Neon green on a barely-visible ghost, the usual LED panel look
        Self::new(Rgb::new(0x39, 0xff, 0x14), Rgb::new(0x0f, 0x2e, 0x12))
    }
}

impl StyleProvider for Palette {
    fn paint_for(&self, role: PaintRole) -> Paint {
        match role {
            PaintRole::Lit => Paint::new(self.lit),
            PaintRole::Unlit => Paint::new(self.unlit),
        }
    }
}

/// Resolved lit/unlit pair cached by each display.
///
/// Displays hold one of these instead of a provider reference, so a draw
/// call is a pure function of previously resolved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintAttrs {
    pub lit: Paint,
    pub unlit: Paint,
}

impl PaintAttrs {
    /// Resolve both roles from the provider.
    pub fn resolve(provider: &dyn StyleProvider) -> Self {
        Self {
            lit: provider.paint_for(PaintRole::Lit),
            unlit: provider.paint_for(PaintRole::Unlit),
        }
    }
}
