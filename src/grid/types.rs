use std::ops::Index;

#[cfg(feature = "serde")]
use crate::error::{PricingError, PricingResult};
use crate::models::bs::OptionSide;

/// Prices for one option side over a volatility × spot mesh.
///
/// Stored row-major: row `i` is the `i`-th volatility, column `j` the `j`-th
/// spot. A grid always has at least one row and one column, and holds
/// exactly `rows × columns` values; deserialized grids are checked for this.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPriceGrid")
)]
pub struct PriceGrid {
    side: OptionSide,
    n_rows: usize,
    n_cols: usize,
    values: Vec<f64>,
}

impl PriceGrid {
    /// Flatten evaluated rows; every row must hold `n_cols` prices.
    pub(crate) fn from_rows(side: OptionSide, rows: Vec<Vec<f64>>, n_cols: usize) -> Self {
        let n_rows = rows.len();
        let mut values = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            debug_assert_eq!(row.len(), n_cols);
            values.extend(row);
        }
        Self {
            side,
            n_rows,
            n_cols,
            values,
        }
    }

    pub fn side(&self) -> OptionSide {
        self.side
    }

    /// `(rows, columns)` = `(volatility count, spot count)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    pub fn get(&self, vol_index: usize, spot_index: usize) -> Option<f64> {
        if vol_index < self.n_rows && spot_index < self.n_cols {
            Some(self.values[vol_index * self.n_cols + spot_index])
        } else {
            None
        }
    }

    pub fn row(&self, vol_index: usize) -> Option<&[f64]> {
        if vol_index < self.n_rows {
            let start = vol_index * self.n_cols;
            Some(&self.values[start..start + self.n_cols])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.n_cols.max(1))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl Index<(usize, usize)> for PriceGrid {
    type Output = f64;

    fn index(&self, (vol_index, spot_index): (usize, usize)) -> &f64 {
        assert!(
            vol_index < self.n_rows && spot_index < self.n_cols,
            "grid index ({}, {}) out of bounds for shape ({}, {})",
            vol_index,
            spot_index,
            self.n_rows,
            self.n_cols
        );
        &self.values[vol_index * self.n_cols + spot_index]
    }
}

/// Unchecked wire form of [`PriceGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPriceGrid {
    side: OptionSide,
    n_rows: usize,
    n_cols: usize,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPriceGrid> for PriceGrid {
    type Error = PricingError;

    fn try_from(raw: RawPriceGrid) -> PricingResult<Self> {
        if raw.n_rows == 0 || raw.n_cols == 0 {
            return Err(PricingError::invalid_parameter(format!(
                "price grid must have at least one row and column, got {}x{}",
                raw.n_rows, raw.n_cols
            )));
        }
        if raw.n_rows.checked_mul(raw.n_cols) != Some(raw.values.len()) {
            return Err(PricingError::invalid_parameter(format!(
                "price grid of shape {}x{} holds {} values",
                raw.n_rows,
                raw.n_cols,
                raw.values.len()
            )));
        }
        Ok(Self {
            side: raw.side,
            n_rows: raw.n_rows,
            n_cols: raw.n_cols,
            values: raw.values,
        })
    }
}

/// Call and put surfaces together with the axes they were evaluated on.
///
/// Both grids share the shape `(vols.len(), spots.len())`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawHeatmapGrids")
)]
pub struct HeatmapGrids {
    pub call: PriceGrid,
    pub put: PriceGrid,
    /// Column axis
    pub spots: Vec<f64>,
    /// Row axis
    pub vols: Vec<f64>,
}

impl HeatmapGrids {
    pub fn grid(&self, side: OptionSide) -> &PriceGrid {
        match side {
            OptionSide::Call => &self.call,
            OptionSide::Put => &self.put,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.call.shape()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHeatmapGrids {
    call: PriceGrid,
    put: PriceGrid,
    spots: Vec<f64>,
    vols: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHeatmapGrids> for HeatmapGrids {
    type Error = PricingError;

    fn try_from(raw: RawHeatmapGrids) -> PricingResult<Self> {
        let expected = (raw.vols.len(), raw.spots.len());
        if raw.call.shape() != expected || raw.put.shape() != expected {
            return Err(PricingError::invalid_parameter(format!(
                "grid shapes call {:?} / put {:?} do not match axes {:?}",
                raw.call.shape(),
                raw.put.shape(),
                expected
            )));
        }
        Ok(Self {
            call: raw.call,
            put: raw.put,
            spots: raw.spots,
            vols: raw.vols,
        })
    }
}
