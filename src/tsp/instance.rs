use crate::error::{OnionError, Result};

/// Travel costs between every ordered pair of cities.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TspInstance {
    costs: Vec<Vec<u32>>,
}

impl TspInstance {
    /// Creates an instance from a square cost matrix; `costs[i][j]` is the
    /// cost of travelling from city `i` to city `j`.
    ///
    /// # Errors
    ///
    /// Returns [`OnionError::InvalidInstance`] if the matrix is empty or not square.
    pub fn from_matrix(costs: Vec<Vec<u32>>) -> Result<Self> {
        if costs.is_empty() {
            return Err(OnionError::InvalidInstance(
                "Cost matrix must contain at least one city".to_string(),
            ));
        }
        let n = costs.len();
        if let Some((row, len)) = costs
            .iter()
            .enumerate()
            .map(|(i, row)| (i, row.len()))
            .find(|&(_, len)| len != n)
        {
            return Err(OnionError::InvalidInstance(format!(
                "Cost matrix is not square: row {} has {} entries, expected {}",
                row, len, n
            )));
        }
        Ok(Self { costs })
    }

    /// Creates a symmetric instance from planar coordinates, using Euclidean
    /// distances rounded to the nearest integer.
    ///
    /// # Errors
    ///
    /// Returns [`OnionError::InvalidInstance`] if no coordinates are given,
    /// and [`OnionError::InvalidNumericValue`] for non-finite coordinates or
    /// distances that do not fit in `u32`.
    pub fn from_coordinates(points: &[(f64, f64)]) -> Result<Self> {
        if let Some((x, y)) = points
            .iter()
            .copied()
            .find(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(OnionError::InvalidNumericValue(format!(
                "Non-finite coordinate: ({}, {})",
                x, y
            )));
        }

        let mut costs = vec![vec![0u32; points.len()]; points.len()];
        for (i, &(xi, yi)) in points.iter().enumerate() {
            for (j, &(xj, yj)) in points.iter().enumerate().skip(i + 1) {
                let distance = ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt().round();
                if distance > f64::from(u32::MAX) {
                    return Err(OnionError::InvalidNumericValue(format!(
                        "Distance between cities {} and {} overflows: {}",
                        i, j, distance
                    )));
                }
                costs[i][j] = distance as u32;
                costs[j][i] = distance as u32;
            }
        }
        Self::from_matrix(costs)
    }

    pub fn num_cities(&self) -> usize {
        self.costs.len()
    }

    /// Cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either city is out of range.
    pub fn cost(&self, from: usize, to: usize) -> u32 {
        self.costs[from][to]
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.num_cities();
        (0..n).all(|i| (i + 1..n).all(|j| self.costs[i][j] == self.costs[j][i]))
    }
}
