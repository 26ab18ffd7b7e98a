//! Built-in example matrices.
//!
//! A small catalog of textbook matrices grouped by the calculator page they
//! illustrate. Hosts list them, and the CLI accepts their ids via `--preset`.

use serde::Serialize;

use crate::primitives::errors::MatcalcError;
use crate::primitives::matrix::Matrix;

/// Calculator page a preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetGroup {
    /// Row echelon form, rank and inverse.
    RankInverse,
    /// Characteristic polynomial and eigenvalues.
    Eigenvalues,
    /// Symmetric / skew-symmetric decomposition.
    Decomposition,
    /// Triangular analysis of a pair `(A, B)`.
    Triangular,
}

/// A named example.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    /// Stable identifier, unique across all groups.
    pub id: &'static str,
    /// Page the preset belongs to.
    pub group: PresetGroup,
    /// Short title.
    pub label: &'static str,
    /// What the example demonstrates.
    pub description: &'static str,
    /// Matrix `A`.
    pub a: &'static [&'static [f64]],
    /// Matrix `B` (triangular pairs only).
    pub b: Option<&'static [&'static [f64]]>,
}

impl Preset {
    /// Matrix `A` as a [`Matrix`].
    pub fn matrix_a(&self) -> Result<Matrix<f64>, MatcalcError> {
        Matrix::from_rows(self.a)
    }

    /// Matrix `B` as a [`Matrix`], when present.
    pub fn matrix_b(&self) -> Option<Result<Matrix<f64>, MatcalcError>> {
        self.b.map(Matrix::from_rows)
    }
}

/// All built-in presets.
pub const PRESETS: &[Preset] = &[
    // Rank and inverse
    Preset {
        id: "3x3-easy",
        group: PresetGroup::RankInverse,
        label: "Simple 3x3 matrix",
        description: "Easy rank check; rows are linearly dependent.",
        a: &[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]],
        b: None,
    },
    Preset {
        id: "3x3-invertible",
        group: PresetGroup::RankInverse,
        label: "Invertible 3x3 matrix",
        description: "Non-zero determinant, good for testing the inverse.",
        a: &[&[2.0, 1.0, 1.0], &[1.0, 3.0, 2.0], &[1.0, 0.0, 0.0]],
        b: None,
    },
    Preset {
        id: "2x2-invertible",
        group: PresetGroup::RankInverse,
        label: "Invertible 2x2 matrix",
        description: "Small example that is certainly invertible.",
        a: &[&[4.0, 7.0], &[2.0, 6.0]],
        b: None,
    },
    Preset {
        id: "2x2-singular",
        group: PresetGroup::RankInverse,
        label: "Singular 2x2 matrix",
        description: "Zero determinant, so no inverse.",
        a: &[&[1.0, 2.0], &[2.0, 4.0]],
        b: None,
    },
    Preset {
        id: "4x3-rectangular",
        group: PresetGroup::RankInverse,
        label: "Rectangular 4x3 matrix",
        description: "Rank and echelon form of a non-square matrix.",
        a: &[
            &[1.0, 2.0, 0.0],
            &[3.0, 6.0, 0.0],
            &[1.0, 1.0, 1.0],
            &[2.0, 3.0, 1.0],
        ],
        b: None,
    },
    // Eigenvalues
    Preset {
        id: "diag-2x2",
        group: PresetGroup::Eigenvalues,
        label: "Diagonal 2x2",
        description: "Eigenvalues are the diagonal entries.",
        a: &[&[4.0, 0.0], &[0.0, -2.0]],
        b: None,
    },
    Preset {
        id: "general-2x2",
        group: PresetGroup::Eigenvalues,
        label: "General 2x2",
        description: "Two distinct real eigenvalues.",
        a: &[&[2.0, 1.0], &[1.0, 2.0]],
        b: None,
    },
    Preset {
        id: "rotation-2x2",
        group: PresetGroup::Eigenvalues,
        label: "2D rotation",
        description: "No real eigenvalues.",
        a: &[&[0.0, -1.0], &[1.0, 0.0]],
        b: None,
    },
    Preset {
        id: "upper-3x3-eigen",
        group: PresetGroup::Eigenvalues,
        label: "Triangular 3x3",
        description: "Eigenvalues are the diagonal entries.",
        a: &[&[3.0, 1.0, 2.0], &[0.0, 4.0, 1.0], &[0.0, 0.0, -1.0]],
        b: None,
    },
    // Decomposition
    Preset {
        id: "2x2-simple",
        group: PresetGroup::Decomposition,
        label: "Simple 2x2 matrix",
        description: "Small example, easy to check by hand.",
        a: &[&[1.0, 2.0], &[3.0, 4.0]],
        b: None,
    },
    Preset {
        id: "3x3-mixed",
        group: PresetGroup::Decomposition,
        label: "Mixed 3x3 matrix",
        description: "Positive and negative entries.",
        a: &[&[2.0, -1.0, 0.0], &[3.0, 5.0, 4.0], &[0.0, -2.0, 1.0]],
        b: None,
    },
    Preset {
        id: "3x3-symmetric",
        group: PresetGroup::Decomposition,
        label: "Symmetric 3x3 matrix",
        description: "Already symmetric; the skew part is zero.",
        a: &[&[2.0, 1.0, 3.0], &[1.0, 4.0, 0.0], &[3.0, 0.0, -1.0]],
        b: None,
    },
    // Triangular pairs
    Preset {
        id: "upper-3x3",
        group: PresetGroup::Triangular,
        label: "Two upper triangular 3x3 matrices",
        description: "Inverse and product stay upper triangular.",
        a: &[&[2.0, 1.0, -1.0], &[0.0, 3.0, 4.0], &[0.0, 0.0, 5.0]],
        b: Some(&[&[1.0, -2.0, 0.0], &[0.0, 4.0, 1.0], &[0.0, 0.0, 2.0]]),
    },
    Preset {
        id: "lower-3x3",
        group: PresetGroup::Triangular,
        label: "Two lower triangular 3x3 matrices",
        description: "Product and inverse (if any) stay lower triangular.",
        a: &[&[1.0, 0.0, 0.0], &[2.0, 3.0, 0.0], &[-1.0, 4.0, 2.0]],
        b: Some(&[&[2.0, 0.0, 0.0], &[1.0, 1.0, 0.0], &[3.0, -2.0, 1.0]]),
    },
    Preset {
        id: "non-triangular",
        group: PresetGroup::Triangular,
        label: "Non-triangular matrix",
        description: "A is not triangular; B is the identity.",
        a: &[&[1.0, 2.0, 0.0], &[3.0, 4.0, 5.0], &[0.0, 6.0, 7.0]],
        b: Some(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]]),
    },
];

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Presets belonging to `group`.
pub fn presets_in(group: PresetGroup) -> impl Iterator<Item = &'static Preset> {
    PRESETS.iter().filter(move |p| p.group == group)
}
