//! Text rendering of kernel results.
//!
//! ## Purpose
//!
//! This module implements `Display` for every result record so hosts can
//! print a complete, human-readable report with `println!("{}", result)`.
//!
//! ## Design notes
//!
//! * **Derived from values**: Rendering reads already computed fields and
//!   never recomputes anything.
//! * **Consistent numbers**: Every number goes through
//!   [`format_number`], so integers print without decimals.

use core::fmt;

use num_traits::Float;

use crate::algorithms::echelon::RowEchelonResult;
use crate::algorithms::eigen::CharacteristicPolynomialResult;
use crate::algorithms::inverse::RankAndInverseResult;
use crate::algorithms::structure::{MatrixDecompositionResult, TriangularAnalysis};
use crate::math::format::format_number;
use crate::primitives::matrix::Matrix;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn write_section<T: Float>(f: &mut fmt::Formatter<'_>, title: &str, m: &Matrix<T>) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}:", title)?;
    write!(f, "{}", m)
}

impl<T: Float> fmt::Display for RowEchelonResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(
            f,
            "  Shape: {}x{}",
            self.row_echelon_form.rows(),
            self.row_echelon_form.cols()
        )?;
        writeln!(f, "  Rank:  {}", self.rank)?;
        write_section(f, "Row Echelon Form", &self.row_echelon_form)
    }
}

impl<T: Float> fmt::Display for RankAndInverseResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(
            f,
            "  Shape:    {}x{}",
            self.row_echelon_form.rows(),
            self.row_echelon_form.cols()
        )?;
        writeln!(f, "  Rank:     {}", self.rank)?;
        writeln!(f, "  Square:   {}", yes_no(self.is_square))?;
        let inverse_note = match (self.is_square, self.has_inverse) {
            (true, true) => "yes",
            (true, false) => "no (singular)",
            (false, _) => "no (not square)",
        };
        writeln!(f, "  Inverse:  {}", inverse_note)?;

        write_section(f, "Row Echelon Form", &self.row_echelon_form)?;
        if let Some(inverse) = &self.inverse {
            write_section(f, "Inverse", inverse)?;
        }
        Ok(())
    }
}

impl<T: Float> fmt::Display for MatrixDecompositionResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symmetric part S = (A + A^T) / 2:")?;
        write!(f, "{}", self.symmetric)?;
        write_section(f, "Skew-symmetric part K = (A - A^T) / 2", &self.skew_symmetric)
    }
}

impl<T: Float> fmt::Display for CharacteristicPolynomialResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Size:       {}x{}", self.size, self.size)?;
        writeln!(f, "  p(λ) =      {}", self.formatted_polynomial)?;

        if self.has_real_eigenvalues {
            let values: Vec<String> = self.eigenvalues.iter().map(|&v| format_number(v)).collect();
            writeln!(f, "  Eigenvalues: {}", values.join(", "))
        } else {
            writeln!(f, "  Eigenvalues: no real eigenvalues")
        }
    }
}

impl<T: Float> fmt::Display for TriangularAnalysis<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Size:    {}", self.size)?;
        writeln!(f, "  A:       {}", self.a_type)?;
        writeln!(f, "  B:       {}", self.b_type)?;

        match self.inverse_a_type {
            Some(kind) => writeln!(f, "  A^-1:    {}", kind)?,
            None => writeln!(f, "  A^-1:    does not exist")?,
        }
        match self.product_type {
            Some(kind) => writeln!(f, "  A*B:     {}", kind)?,
            None => writeln!(f, "  A*B:     incompatible shapes")?,
        }

        if let Some(inverse) = &self.inverse_a {
            write_section(f, "A^-1", inverse)?;
        }
        if let Some(product) = &self.product {
            write_section(f, "A*B", product)?;
        }
        Ok(())
    }
}
