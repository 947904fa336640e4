//! FIR filter taps and their plain-text form
//!
//! The text form is one floating-point tap per entry, separated by any
//! whitespace, no header. `#` starts a comment that runs to end of line.

use crate::error::{AnalysisError, Result};
use std::fmt::Write as _;
use std::ops::Deref;

/// Taps h[0..N-1] of a causal FIR filter
///
/// Always holds at least one finite tap.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCoefficients {
    taps: Vec<f64>,
}

impl FilterCoefficients {
    /// Wrap taps, rejecting empty or non-finite input
    pub fn new(taps: Vec<f64>) -> Result<Self> {
        validate_taps(&taps)?;
        Ok(Self { taps })
    }

    /// Parse the whitespace/newline-delimited text form
    pub fn from_text(text: &str) -> Result<Self> {
        let mut taps = Vec::new();

        for (line_idx, line) in text.lines().enumerate() {
            let content = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };

            for token in content.split_whitespace() {
                let value = token.parse::<f64>().map_err(|_| AnalysisError::Parse {
                    line: line_idx + 1,
                    token: token.to_string(),
                })?;
                taps.push(value);
            }
        }

        log::debug!("parsed {} filter taps", taps.len());
        Self::new(taps)
    }

    /// Render one tap per line with 15 fractional digits
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.taps.len() * 20);
        for tap in &self.taps {
            // Writing to a String cannot fail
            let _ = writeln!(out, "{:.15}", tap);
        }
        out
    }

    /// Filter length N
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// Always false; kept for slice-like ergonomics
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// Index of the centre tap, (N-1)/2
    pub fn center_index(&self) -> usize {
        (self.taps.len() - 1) / 2
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.taps
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.taps
    }
}

impl Deref for FilterCoefficients {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.taps
    }
}

impl AsRef<[f64]> for FilterCoefficients {
    fn as_ref(&self) -> &[f64] {
        &self.taps
    }
}

impl TryFrom<Vec<f64>> for FilterCoefficients {
    type Error = AnalysisError;

    fn try_from(taps: Vec<f64>) -> Result<Self> {
        Self::new(taps)
    }
}

/// Shared N ≥ 1 and finiteness check for raw tap slices
pub(crate) fn validate_taps(taps: &[f64]) -> Result<()> {
    if taps.is_empty() {
        return Err(AnalysisError::invalid("filter must have at least one coefficient"));
    }
    if let Some(idx) = taps.iter().position(|t| !t.is_finite()) {
        return Err(AnalysisError::invalid(format!(
            "coefficient {} is not finite ({})",
            idx, taps[idx]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_newline_delimited() {
        let text = "0.25\n0.5\n0.25\n";
        let coeffs = FilterCoefficients::from_text(text).unwrap();
        assert_eq!(coeffs.as_slice(), &[0.25, 0.5, 0.25]);
        assert_eq!(coeffs.center_index(), 1);
    }

    #[test]
    fn test_parse_mixed_whitespace_and_comments() {
        let text = "# lowpass taps\n 1e-3\t-2.5E-2  0.1 # trailing\n\n  0.7\n";
        let coeffs = FilterCoefficients::from_text(text).unwrap();
        assert_eq!(coeffs.len(), 4);
        assert!((coeffs[1] + 0.025).abs() < 1e-15);
    }

    #[test]
    fn test_parse_reports_line_and_token() {
        let err = FilterCoefficients::from_text("0.1\n0.2\nabc\n").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Parse {
                line: 3,
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_empty_text_is_invalid() {
        let err = FilterCoefficients::from_text("# nothing here\n\n").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_non_finite_tap_rejected() {
        assert!(FilterCoefficients::new(vec![1.0, f64::NAN]).is_err());
        assert!(FilterCoefficients::from_text("1.0 inf").is_err());
    }

    #[test]
    fn test_text_output_format() {
        let coeffs = FilterCoefficients::new(vec![0.5, -0.125]).unwrap();
        assert_eq!(coeffs.to_text(), "0.500000000000000\n-0.125000000000000\n");

        let reparsed = FilterCoefficients::from_text(&coeffs.to_text()).unwrap();
        assert_eq!(reparsed, coeffs);
    }
}
