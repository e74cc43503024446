//! The contract a concrete renderer fulfils.

use std::convert::Infallible;

use crate::scene::{DrawOp, ExportOptions, Scene};

/// A drawing surface the editor can paint a [`Scene`] onto.
///
/// Implementations are external (GPU canvas, SVG writer, test double);
/// the core only drives them. Exports must honor the requested resolution
/// regardless of any on-screen display scale.
pub trait Surface {
    /// Backend failure type.
    type Error;

    /// Apply a single draw operation.
    fn draw(&mut self, op: &DrawOp) -> Result<(), Self::Error>;

    /// Encode the current surface contents per `options`.
    fn export(&mut self, options: &ExportOptions) -> Result<Vec<u8>, Self::Error>;
}

/// Paint `scene` onto `surface` in order, stopping at the first failure.
pub fn present<S: Surface>(scene: &Scene, surface: &mut S) -> Result<(), S::Error> {
    for op in &scene.ops {
        surface.draw(op)?;
    }
    Ok(())
}

/// Surface double that records every operation it is asked to draw.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Operations in the order they were drawn.
    pub ops: Vec<DrawOp>,
    /// Export requests in the order they were made.
    pub exports: Vec<ExportOptions>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn draw(&mut self, op: &DrawOp) -> Result<(), Self::Error> {
        self.ops.push(op.clone());
        Ok(())
    }

    fn export(&mut self, options: &ExportOptions) -> Result<Vec<u8>, Self::Error> {
        self.exports.push(options.clone());
        Ok(Vec::new())
    }
}
