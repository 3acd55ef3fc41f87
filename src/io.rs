//! Text boundary: the whitespace-separated point-cloud format and the plane
//! output line.
//!
//! Input layout: the tolerance, the point count, then `count` triples of
//! `x y z`. Any whitespace (including newlines) separates tokens.

use std::io::Read;

use crate::error::ParseError;
use crate::models::PlaneCoefficients;
use crate::types::Point3D;

/// Parsed contents of a point-cloud file.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudInput {
    pub tolerance: f64,
    pub points: Vec<Point3D>,
}

/// Read and validate a point cloud from `reader`.
pub fn read_point_cloud<R: Read>(mut reader: R) -> Result<CloudInput, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_point_cloud(&text)
}

/// Parse a point cloud from an in-memory string.
pub fn parse_point_cloud(text: &str) -> Result<CloudInput, ParseError> {
    let mut tokens = text.split_whitespace().enumerate();

    let (pos, token) = tokens.next().ok_or(ParseError::MissingTolerance)?;
    let tolerance = parse_number::<f64>(token, pos)?;

    let (pos, token) = tokens.next().ok_or(ParseError::MissingCount)?;
    let declared = parse_number::<usize>(token, pos)?;

    let coords = tokens
        .map(|(pos, token)| parse_number::<f64>(token, pos))
        .collect::<Result<Vec<f64>, _>>()?;

    let trailing = coords.len() % 3;
    if trailing != 0 {
        return Err(ParseError::TruncatedTriple(trailing));
    }
    let found = coords.len() / 3;
    if found != declared {
        return Err(ParseError::CountMismatch { declared, found });
    }
    if found < 3 {
        return Err(ParseError::NotEnoughPoints(found));
    }

    let points = coords
        .chunks_exact(3)
        .map(|c| Point3D::new(c[0], c[1], c[2]))
        .collect();

    Ok(CloudInput { tolerance, points })
}

fn parse_number<T: std::str::FromStr>(token: &str, position: usize) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
        position,
    })
}

/// `a b c d` with six decimals each.
pub fn format_plane(plane: &PlaneCoefficients) -> String {
    format!(
        "{:.6} {:.6} {:.6} {:.6}",
        plane.a, plane.b, plane.c, plane.d
    )
}
