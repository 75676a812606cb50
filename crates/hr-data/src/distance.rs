//! Travel costs between the depot and objects.
//!
//! # Data layout
//!
//! Object-to-object costs are a dense `size × size` row-major matrix where
//! row/column `k` holds object `k + 1`.  Depot costs are kept in a map keyed
//! by object id, so sparse or very large ids in the depot file cost nothing
//! extra:
//!
//! ```text
//! distance(0, o)   = depot[o]
//! distance(o, 0)   = depot[o]
//! distance(a, b)   = matrix[(a - 1) * size + (b - 1)]
//! ```
//!
//! The matrix is made symmetric at construction time.  If the source data
//! disagrees with its transpose, both cells are replaced by the integer
//! average, and the diagonal is forced to zero.

use log::warn;
use rustc_hash::FxHashMap;

use hr_core::{MovePoints, ObjectId};

use crate::{DataError, DataResult};

/// Symmetric travel-cost table over the depot and all objects.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    depot:  FxHashMap<ObjectId, MovePoints>,
    matrix: Vec<MovePoints>,
    size:   usize,
}

impl DistanceTable {
    /// Build a table from `(object, depot distance)` pairs and a row-major
    /// `size × size` object matrix.
    ///
    /// Fails if the matrix length is not `size * size` or if any cost is
    /// negative.  Objects absent from `depot_rows` get depot distance 0.
    pub fn new(
        depot_rows: impl IntoIterator<Item = (ObjectId, MovePoints)>,
        size:       usize,
        mut matrix: Vec<MovePoints>,
    ) -> DataResult<Self> {
        if matrix.len() != size * size {
            return Err(DataError::MatrixSizeMismatch {
                expected: size * size,
                got:      matrix.len(),
            });
        }

        let mut depot = FxHashMap::default();
        for (id, d) in depot_rows {
            if d < 0 {
                return Err(DataError::NegativeDistance { from: ObjectId::DEPOT, to: id, value: d });
            }
            if !id.is_depot() {
                depot.insert(id, d);
            }
        }

        for (k, &d) in matrix.iter().enumerate() {
            if d < 0 {
                return Err(DataError::NegativeDistance {
                    from:  ObjectId((k / size) as u32 + 1),
                    to:    ObjectId((k % size) as u32 + 1),
                    value: d,
                });
            }
        }

        let mut asymmetric = 0usize;
        for i in 0..size {
            matrix[i * size + i] = 0;
            for j in (i + 1)..size {
                let (a, b) = (matrix[i * size + j], matrix[j * size + i]);
                if a != b {
                    asymmetric += 1;
                    let avg = (a + b) / 2;
                    matrix[i * size + j] = avg;
                    matrix[j * size + i] = avg;
                }
            }
        }
        if asymmetric > 0 {
            warn!("distance matrix had {asymmetric} asymmetric pairs; averaged with its transpose");
        }

        Ok(Self { depot, matrix, size })
    }

    /// Travel cost between two locations.  Either endpoint may be the depot.
    ///
    /// Ids outside the table cost 0; callers pass only ids that the
    /// submission normalizer and the catalog have already vetted.
    pub fn distance(&self, from: ObjectId, to: ObjectId) -> MovePoints {
        if from == to {
            return 0;
        }
        if from.is_depot() {
            return self.depot_distance(to);
        }
        if to.is_depot() {
            return self.depot_distance(from);
        }
        let (i, j) = (from.index() - 1, to.index() - 1);
        if i >= self.size || j >= self.size {
            return 0;
        }
        self.matrix[i * self.size + j]
    }

    /// Cost from the depot to `object`.
    #[inline]
    pub fn depot_distance(&self, object: ObjectId) -> MovePoints {
        self.depot.get(&object).copied().unwrap_or(0)
    }

    /// Number of objects covered by the pairwise matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Always `true` after construction; exposed for diagnostics and tests.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| self.matrix[i * self.size + j] == self.matrix[j * self.size + i])
        })
    }
}
