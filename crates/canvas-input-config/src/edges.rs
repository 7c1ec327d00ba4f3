//! Box edge values (padding, margin) normalized from one, two or four sizes.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxEdges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl BoxEdges {
    pub const fn uniform(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Expands 1, 2, 3 or 4 values into four edges using CSS shorthand order.
    pub fn normalize4(values: &[f32]) -> Option<Self> {
        match *values {
            [all] => Some(Self::uniform(all)),
            [v, h] => Some(Self::symmetric(v, h)),
            [top, h, bottom] => Some(Self {
                top,
                right: h,
                bottom,
                left: h,
            }),
            [top, right, bottom, left] => Some(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => None,
        }
    }

    /// Expands 1 or 2 values into a `(vertical, horizontal)` pair.
    pub fn normalize2(values: &[f32]) -> Option<(f32, f32)> {
        match *values {
            [all] => Some((all, all)),
            [v, h] => Some((v, h)),
            _ => None,
        }
    }

    /// Parses `"5px"`, `"5px 10px"`, `"1px 2px 3px"` or `"1px 2px 3px 4px"`.
    ///
    /// Unitless numbers are read as pixels. Negative sizes are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let values = s
            .split_whitespace()
            .map(|part| {
                let number = part.strip_suffix("px").unwrap_or(part);
                number
                    .parse::<f32>()
                    .ok()
                    .filter(|v| v.is_finite() && *v >= 0.0)
            })
            .collect::<Option<Vec<f32>>>()?;
        Self::normalize4(&values)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl fmt::Display for BoxEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize4_shorthands() {
        assert_eq!(BoxEdges::normalize4(&[5.0]), Some(BoxEdges::uniform(5.0)));
        assert_eq!(
            BoxEdges::normalize4(&[5.0, 10.0]),
            Some(BoxEdges::symmetric(5.0, 10.0))
        );
        let three = BoxEdges::normalize4(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!((three.top, three.right, three.bottom, three.left), (1.0, 2.0, 3.0, 2.0));
        let four = BoxEdges::normalize4(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!((four.top, four.right, four.bottom, four.left), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(BoxEdges::normalize4(&[]), None);
        assert_eq!(BoxEdges::normalize4(&[1.0; 5]), None);
    }

    #[test]
    fn test_normalize2() {
        assert_eq!(BoxEdges::normalize2(&[3.0]), Some((3.0, 3.0)));
        assert_eq!(BoxEdges::normalize2(&[3.0, 4.0]), Some((3.0, 4.0)));
        assert_eq!(BoxEdges::normalize2(&[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(BoxEdges::parse("5px"), Some(BoxEdges::uniform(5.0)));
        assert_eq!(BoxEdges::parse("5px 10"), Some(BoxEdges::symmetric(5.0, 10.0)));
        assert_eq!(BoxEdges::parse("  1px   2px 3px 4px "), BoxEdges::normalize4(&[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(BoxEdges::parse(""), None);
        assert_eq!(BoxEdges::parse("5em"), None);
        assert_eq!(BoxEdges::parse("-1px"), None);
        assert_eq!(BoxEdges::parse("1px 2px 3px 4px 5px"), None);
        assert_eq!(BoxEdges::parse("wide").unwrap_or_default(), BoxEdges::default());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let edges = BoxEdges::normalize4(&[1.0, 2.5, 3.0, 4.0]).unwrap();
        assert_eq!(edges.to_string(), "1px 2.5px 3px 4px");
        assert_eq!(BoxEdges::parse(&edges.to_string()), Some(edges));
    }

    #[test]
    fn test_sums() {
        let edges = BoxEdges::normalize4(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(edges.horizontal(), 6.0);
        assert_eq!(edges.vertical(), 4.0);
    }
}
