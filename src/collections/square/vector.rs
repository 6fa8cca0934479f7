//! Module for rows and columns of a `Square`

use std::fmt;
use std::fmt::Debug;

use self::Dimension::{Col, Row};

/// The axis a run of cells follows: along a row or down a column
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Row,
    Col,
}

impl Dimension {
    /// The dimension crossing this one
    pub fn perpendicular(self) -> Dimension {
        match self {
            Row => Col,
            Col => Row,
        }
    }
}

impl Debug for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Row => "Row",
            Col => "Col",
        };
        write!(f, "{}", label)
    }
}
