use crate::error::{Result, SatError};
use crate::query::Rect;

pub fn validate_grid_len(width: usize, height: usize, len: usize) -> Result<()> {
    let need = width.checked_mul(height).ok_or_else(|| {
        SatError::Validation(format!("grid {}x{} overflows usize", width, height))
    })?;
    if len != need {
        return Err(SatError::Validation(format!(
            "grid {}x{} needs {} samples, got {}",
            width, height, need, len
        )));
    }
    Ok(())
}

/// Inclusive rectangle must be ordered and fully inside `width x height`.
pub fn validate_rect(rect: Rect, width: usize, height: usize) -> Result<()> {
    let ok = rect.x0 <= rect.x1 && rect.y0 <= rect.y1 && rect.x1 < width && rect.y1 < height;
    if !ok {
        return Err(SatError::Rect {
            x0: rect.x0,
            y0: rect.y0,
            x1: rect.x1,
            y1: rect.y1,
            width,
            height,
        });
    }
    Ok(())
}
