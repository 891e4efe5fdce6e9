use std::fmt;

use faer::MatRef;

use crate::ZeroCheck;

/// Render a matrix row by row in a bracketed layout.
///
/// Entries are printed in scientific notation with 8 significant digits and
/// right aligned to a common width, e.g.
///
/// ```text
/// [[   1.0000000e0 -2.5000000e-1]
///  [   0.0000000e0   3.0000000e0]]
/// ```
pub fn format_matrix(mat: MatRef<'_, f64>) -> String {
    if mat.nrows() == 0 || mat.ncols() == 0 {
        return "[]".to_string();
    }

    let cells: Vec<Vec<String>> = (0..mat.nrows())
        .map(|i| {
            (0..mat.ncols())
                .map(|j| format!("{:.7e}", mat.read(i, j)))
                .collect()
        })
        .collect();

    // one leading space keeps positive values aligned with negative ones
    let width = cells.iter().flatten().map(|c| c.len()).max().unwrap_or(0) + 1;

    let rows: Vec<String> = cells
        .iter()
        .map(|row| {
            let cols: Vec<String> = row.iter().map(|c| format!("{c:>width$}")).collect();
            format!("[{}]", cols.join(""))
        })
        .collect();

    format!("[{}]", rows.join("\n "))
}

/// Human readable answer for the zero check.
pub fn verdict(is_zero: bool) -> &'static str {
    if is_zero {
        "Yes"
    } else {
        "No"
    }
}

/// Console report of a projector computation.
pub struct Report<'a> {
    /// The input matrix.
    pub m: MatRef<'a, f64>,
    /// The computed projector.
    pub p: MatRef<'a, f64>,
    /// The verification of `M * P`.
    pub check: &'a ZeroCheck,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix M:")?;
        writeln!(f, "{}", format_matrix(self.m))?;
        writeln!(f, "\nMatrix P:")?;
        writeln!(f, "{}", format_matrix(self.p))?;
        writeln!(f, "\nMatrix M * P:")?;
        writeln!(f, "{}", format_matrix(self.check.product.as_ref()))?;
        write!(
            f,
            "\nIs M * P approximately the zero matrix? {}",
            verdict(self.check.is_zero)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{check_zero_product, utils::matrix_from_array};
    use faer::Mat;

    #[test]
    fn test_format_matrix() {
        let mat = matrix_from_array(&[[1.0, -0.25], [0.0, 3.0]]);
        assert_eq!(
            format_matrix(mat.as_ref()),
            "[[   1.0000000e0 -2.5000000e-1]\n [   0.0000000e0   3.0000000e0]]"
        );
    }

    #[test]
    fn test_format_matrix_empty() {
        let mat = Mat::<f64>::zeros(0, 3);
        assert_eq!(format_matrix(mat.as_ref()), "[]");
    }

    #[test]
    fn test_verdict() {
        assert_eq!(verdict(true), "Yes");
        assert_eq!(verdict(false), "No");
    }

    #[test]
    fn test_report_sections() {
        let m = matrix_from_array(&[[1.0, 0.0]]);
        let p = matrix_from_array(&[[0.0, 0.0], [0.0, 1.0]]);
        let check = check_zero_product(m.as_ref(), p.as_ref());
        let report = Report {
            m: m.as_ref(),
            p: p.as_ref(),
            check: &check,
        }
        .to_string();

        assert!(report.starts_with("Matrix M:\n"));
        assert!(report.contains("\nMatrix P:\n"));
        assert!(report.contains("\nMatrix M * P:\n"));
        assert!(report.ends_with("Is M * P approximately the zero matrix? Yes"));
    }
}
