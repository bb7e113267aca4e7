//! Grid sizing: pick a column count that gives the largest square cells
//! while fitting every month inside the padded container.
//!
//! Gap width interacts with the column count, so instead of a closed form
//! we scan column counts around `sqrt(total)` and keep the best candidate.
//!
//! ```text
//! cols ∈ [ceil(sqrt(n/2)), ceil(sqrt(2n))]
//! rows = ceil(n / cols)
//! dot  = min((W - (cols-1)·gap) / cols, (H - (rows-1)·gap) / rows)
//! ```

use tracing::debug;

use super::config::{LayoutConfig, TOTAL_MONTHS_MAX, TOTAL_MONTHS_MIN};

/// Measured (or fallback) container extent in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both sides positive and finite.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Whether `other` differs by at least `threshold` pixels on either side.
    pub fn differs_from(&self, other: &ContainerSize, threshold: f64) -> bool {
        (self.width - other.width).abs() >= threshold
            || (self.height - other.height).abs() >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub num_columns: u32,
    pub num_rows: u32,
    /// Side of one square cell, already floored to whole pixels.
    pub dot_size: f64,
    pub gap: f64,
    pub total_grid_width: f64,
    pub total_grid_height: f64,
    /// Padding applied on each side of the container.
    pub padding: f64,
}

impl GridGeometry {
    fn from_parts(num_columns: u32, num_rows: u32, dot_size: f64, gap: f64, padding: f64) -> Self {
        let cols = f64::from(num_columns);
        let rows = f64::from(num_rows);
        Self {
            num_columns,
            num_rows,
            dot_size,
            gap,
            total_grid_width: cols * dot_size + (cols - 1.0) * gap,
            total_grid_height: rows * dot_size + (rows - 1.0) * gap,
            padding,
        }
    }

    /// Cell capacity of the chosen arrangement.
    pub fn capacity(&self) -> u64 {
        u64::from(self.num_columns) * u64::from(self.num_rows)
    }

    /// Zero-based (column, row) of a cell in row-major order.
    pub fn position_of(&self, index: u32) -> (u32, u32) {
        let cols = self.num_columns.max(1);
        (index % cols, index / cols)
    }
}

/// Solve with the default layout configuration.
pub fn solve(total_months: u32, container_width: f64, container_height: f64) -> GridGeometry {
    solve_with(
        &LayoutConfig::default(),
        total_months,
        ContainerSize::new(container_width, container_height),
    )
}

pub fn solve_with(config: &LayoutConfig, total_months: u32, container: ContainerSize) -> GridGeometry {
    let total = total_months.clamp(TOTAL_MONTHS_MIN, TOTAL_MONTHS_MAX);
    let size = if container.is_measured() {
        container
    } else {
        ContainerSize::new(config.fallback_width, config.fallback_height)
    };

    let available_width = size.width - config.padding * 2.0;
    let available_height = size.height - config.padding * 2.0;
    let gap = config.gap;

    let (min_cols, max_cols) = column_range(total);
    let mut best: Option<(u32, u32, f64)> = None;

    for cols in min_cols..=max_cols {
        let rows = total.div_ceil(cols);
        let max_dot_width = (available_width - f64::from(cols - 1) * gap) / f64::from(cols);
        let max_dot_height = (available_height - f64::from(rows - 1) * gap) / f64::from(rows);
        let dot_size = max_dot_width.min(max_dot_height);

        if dot_size < config.min_dot_size || !dot_size.is_finite() {
            continue;
        }
        if best.map_or(true, |(_, _, best_dot)| dot_size > best_dot) {
            best = Some((cols, rows, dot_size));
        }
    }

    let geometry = match best {
        Some((cols, rows, dot_size)) => {
            GridGeometry::from_parts(cols, rows, dot_size.floor(), gap, config.padding)
        }
        None => {
            debug!(total, ?size, "no column count meets the minimum cell size; degenerate layout");
            GridGeometry::from_parts(1, total, 1.0, 1.0, config.padding)
        }
    };

    debug!(
        total,
        width = size.width,
        height = size.height,
        cols = geometry.num_columns,
        rows = geometry.num_rows,
        dot = geometry.dot_size,
        "grid solved"
    );
    geometry
}

/// Candidate column counts, centered on `sqrt(total)`.
pub fn column_range(total: u32) -> (u32, u32) {
    let n = f64::from(total.max(1));
    let low = (n * 0.5).sqrt().ceil() as u32;
    let high = (n * 2.0).sqrt().ceil() as u32;
    (low.max(1), high.max(low.max(1)))
}
