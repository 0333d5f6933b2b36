use std::convert::TryFrom;

use crate::map::{build_sector_polygon, Map, Polygon, Vertex};

/// Tests whether a point is inside a polygon using the even-odd rule: count how many edges a ray
/// cast from the point towards +x crosses.
///
/// Edges run between consecutive points, plus a closing edge from the last point back to the
/// first. Horizontal edges never count as crossings. Points exactly on an edge may be inside or
/// outside depending on the edge's orientation.
pub fn point_in_polygon(x: f64, y: f64, points: &[Vertex]) -> bool {
    let mut inside = false;

    let closing_edge = points.last().zip(points.first());
    let edges = points
        .windows(2)
        .map(|pair| (&pair[0], &pair[1]))
        .chain(closing_edge);

    for (a, b) in edges {
        let (xa, ya) = (f64::from(a.x), f64::from(a.y));
        let (xb, yb) = (f64::from(b.x), f64::from(b.y));

        // Both checks are needed: the first keeps the division from seeing `ya == yb`.
        if (ya > y) != (yb > y) && x < (xb - xa) * (y - ya) / (yb - ya) + xa {
            inside = !inside;
        }
    }

    inside
}

/// Tests whether a point is inside a shape made of several rings, such as the ones returned by
/// [`build_sector_rings`]. A point inside an odd number of rings is inside the shape, so a ring
/// nested in another one cuts a hole.
///
/// [`build_sector_rings`]: crate::map::build_sector_rings
pub fn rings_contain(rings: &[Polygon], x: f64, y: f64) -> bool {
    rings.iter().filter(|ring| ring.contains(x, y)).count() % 2 == 1
}

/// Finds the first sector, by number, whose [polygon] contains the point. Sectors without a
/// polygon are skipped.
///
/// Every sector's polygon is rebuilt on each call, so this is slow for repeated lookups.
///
/// [polygon]: crate::map::build_sector_polygon
pub fn locate_point(map: &Map, x: f64, y: f64) -> Option<u16> {
    (0..map.sectors.len()).find_map(|number| {
        let number = u16::try_from(number).ok()?;
        let polygon = build_sector_polygon(map, number)?;
        let inside = polygon.contains(x, y);
        log::trace!("{}: ({}, {}) in sector #{}: {}", map, x, y, number, inside);

        if inside {
            Some(number)
        } else {
            None
        }
    })
}
