//! Decoders for the individual sections of a diagram file.
//!
//! Every decoder receives the raw text of one section together with the
//! 1-based input line it starts on, so that errors can point at the exact
//! offending line of the input.

use super::records::{EdgeRecord, NodeRecord, PolygonRecord};
use super::ParseOptions;
use crate::error::FormatError;
use crate::math::Point;

/// Literal header of a polygon section.
pub const POLYGONS_HEADER: &str = "POLYGONS";
/// Literal header of an edge section.
pub const EDGES_HEADER: &str = "EDGES";
/// Header written by producers that label node sections.
pub const NODES_HEADER: &str = "NODES";

const TOKEN_SEPARATOR: char = ' ';

/// A slice of the input together with its position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Section<'a> {
    pub name: &'static str,
    pub text: &'a str,
    pub first_line: usize,
}

/// Splits `text` on `separator`, pairing every piece with the input line it
/// starts on.
pub(crate) fn split_numbered<'a>(
    text: &'a str,
    separator: &str,
    first_line: usize,
) -> Vec<(usize, &'a str)> {
    let newlines_in_separator = separator.matches('\n').count();
    let mut line = first_line;
    let mut pieces = Vec::new();
    for piece in text.split(separator) {
        pieces.push((line, piece));
        line += piece.matches('\n').count() + newlines_in_separator;
    }
    pieces
}

fn parse_float(
    token: &str,
    section: &'static str,
    line: usize,
    field: &str,
) -> Result<f64, FormatError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(FormatError::malformed(
            section,
            line,
            format!("empty {field} field"),
        ));
    }
    trimmed.parse::<f64>().map_err(|_| {
        FormatError::malformed(section, line, format!("{field} {trimmed:?} is not a number"))
    })
}

fn parse_point(
    tokens: &[&str],
    section: &'static str,
    line: usize,
) -> Result<Point, FormatError> {
    let x = parse_float(tokens[0], section, line, "x coordinate")?;
    let y = parse_float(tokens[1], section, line, "y coordinate")?;
    if !x.is_finite() || !y.is_finite() {
        return Err(FormatError::malformed(
            section,
            line,
            format!("point ({x}, {y}) is not finite"),
        ));
    }
    Ok(Point::new(x, y))
}

/// Splits a `<a>\t<b>` line into its two halves.
fn split_pair<'a>(
    text: &'a str,
    separator: &str,
    section: &'static str,
    line: usize,
) -> Result<(&'a str, &'a str), FormatError> {
    let parts: Vec<&str> = text.split(separator).collect();
    match parts.as_slice() {
        [left, right] => Ok((left, right)),
        _ => Err(FormatError::malformed(
            section,
            line,
            format!(
                "expected 2 fields separated by {separator:?}, found {}",
                parts.len()
            ),
        )),
    }
}

fn expect_header(
    found: &str,
    expected: &str,
    section: &'static str,
    line: usize,
) -> Result<(), FormatError> {
    if found == expected {
        Ok(())
    } else {
        Err(FormatError::malformed(
            section,
            line,
            format!("expected {expected:?} header, found {found:?}"),
        ))
    }
}

/// Decodes a `POLYGONS` section.
pub(crate) fn parse_polygons(
    section: Section<'_>,
    options: &ParseOptions,
) -> Result<Vec<PolygonRecord>, FormatError> {
    let chunks = split_numbered(section.text, &options.polygon_separator, section.first_line);
    let Some(((header_line, header), polygons)) = chunks.split_first() else {
        return Err(FormatError::malformed(section.name, section.first_line, "empty section"));
    };
    expect_header(header, POLYGONS_HEADER, section.name, *header_line)?;

    polygons
        .iter()
        .map(|&(line, polygon)| {
            split_numbered(polygon, &options.point_separator, line)
                .into_iter()
                .map(|(line, point)| {
                    let tokens: Vec<&str> = point.split(TOKEN_SEPARATOR).collect();
                    if tokens.len() != 2 {
                        return Err(FormatError::malformed(
                            section.name,
                            line,
                            format!("expected 2 coordinates, found {}", tokens.len()),
                        ));
                    }
                    parse_point(&tokens, section.name, line)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(PolygonRecord::new)
        })
        .collect()
}

/// Decodes an `EDGES` section.
pub(crate) fn parse_edges(
    section: Section<'_>,
    options: &ParseOptions,
) -> Result<Vec<EdgeRecord>, FormatError> {
    let lines = split_numbered(section.text, &options.line_separator, section.first_line);
    let Some(((header_line, header), body)) = lines.split_first() else {
        return Err(FormatError::malformed(section.name, section.first_line, "empty section"));
    };
    expect_header(header, EDGES_HEADER, section.name, *header_line)?;

    let mut edges = Vec::with_capacity(body.len());
    for &(line, text) in body {
        if text.is_empty() {
            continue;
        }
        edges.push(parse_edge_line(text, section.name, line, options)?);
    }
    Ok(edges)
}

fn parse_edge_line(
    text: &str,
    section: &'static str,
    line: usize,
    options: &ParseOptions,
) -> Result<EdgeRecord, FormatError> {
    let (geometry, radii) = split_pair(text, &options.radius_separator, section, line)?;

    let geometry: Vec<&str> = geometry.split(TOKEN_SEPARATOR).collect();
    if geometry.len() != 4 && geometry.len() != 6 {
        return Err(FormatError::malformed(
            section,
            line,
            format!(
                "expected 4 or 6 geometry values, found {}",
                geometry.len()
            ),
        ));
    }
    let radii: Vec<&str> = radii.split(TOKEN_SEPARATOR).collect();
    if radii.len() != 2 {
        return Err(FormatError::malformed(
            section,
            line,
            format!("expected 2 radii, found {}", radii.len()),
        ));
    }

    let first_point = parse_point(&geometry[0..2], section, line)?;
    let second_point = parse_point(&geometry[2..4], section, line)?;
    let virtual_point = if geometry.len() == 6 {
        Some(parse_point(&geometry[4..6], section, line)?)
    } else {
        None
    };
    let radii = (
        parse_float(radii[0], section, line, "radius")?,
        parse_float(radii[1], section, line, "radius")?,
    );

    Ok(EdgeRecord {
        first_point,
        second_point,
        virtual_point,
        radii,
    })
}

/// Decodes a node section. The first line is a header and is skipped unless
/// [`ParseOptions::require_node_header`] asks for it to be checked.
pub(crate) fn parse_nodes(
    section: Section<'_>,
    options: &ParseOptions,
) -> Result<Vec<NodeRecord>, FormatError> {
    let lines = split_numbered(section.text, &options.line_separator, section.first_line);
    let Some(((header_line, header), body)) = lines.split_first() else {
        return Err(FormatError::malformed(section.name, section.first_line, "empty section"));
    };
    if options.require_node_header {
        expect_header(header, NODES_HEADER, section.name, *header_line)?;
    }

    let mut nodes = Vec::with_capacity(body.len());
    for &(line, text) in body {
        if text.is_empty() {
            continue;
        }
        let (point, radius) = split_pair(text, &options.radius_separator, section.name, line)?;
        let tokens: Vec<&str> = point.split(TOKEN_SEPARATOR).collect();
        if tokens.len() != 2 {
            return Err(FormatError::malformed(
                section.name,
                line,
                format!("expected 2 coordinates, found {}", tokens.len()),
            ));
        }
        let point = parse_point(&tokens, section.name, line)?;
        let radius = parse_float(radius, section.name, line, "radius")?;
        if radius < 0.0 || radius.is_nan() {
            return Err(FormatError::malformed(
                section.name,
                line,
                format!("radius {radius} must be non-negative"),
            ));
        }
        nodes.push(NodeRecord::new(nodes.len(), point, radius));
    }
    Ok(nodes)
}

/// Reads the terminal count: the last non-blank line of the header chunk.
pub(crate) fn parse_terminal_count(
    section: Section<'_>,
    options: &ParseOptions,
) -> Result<usize, FormatError> {
    let lines = split_numbered(section.text, &options.line_separator, section.first_line);
    let Some(&(line, token)) = lines.iter().rev().find(|(_, text)| !text.trim().is_empty())
    else {
        return Err(FormatError::malformed(
            section.name,
            section.first_line,
            "missing terminal count",
        ));
    };
    let token = token.trim();
    token.parse::<usize>().map_err(|_| {
        FormatError::malformed(
            section.name,
            line,
            format!("terminal count {token:?} is not a non-negative integer"),
        )
    })
}
