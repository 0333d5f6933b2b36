use std::collections::VecDeque;
use std::ops::Deref;

use crate::map::{point_in_polygon, Map, Vertex};

/// A closed ring of points outlining (part of) a sector. The first point is repeated at the end.
///
/// Polygons are rebuilt from the map every time they're asked for and aren't guaranteed to be
/// simple. Sectors with unusual geometry can produce self-intersecting or badly closed rings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polygon(Vec<Vertex>);

impl Polygon {
    /// The ring's points, first point last as well.
    pub fn points(&self) -> &[Vertex] {
        &self.0
    }

    /// Returns `true` if the point is inside the polygon according to the even-odd rule. Points
    /// exactly on an edge may land on either side.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        point_in_polygon(x, y, &self.0)
    }

    /// Returns `true` if the last point is the same as the first.
    pub fn is_closed(&self) -> bool {
        self.0.first() == self.0.last()
    }
}

impl Deref for Polygon {
    type Target = [Vertex];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Vertex>> for Polygon {
    fn from(points: Vec<Vertex>) -> Self {
        Self(points)
    }
}

/// A directed edge of a sector, oriented so that the sector is on its right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Segment {
    start: Vertex,
    end: Vertex,
}

/// How a segment attaches to one end of a growing path, and the new point it contributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Attach {
    Tail(Vertex),
    Head(Vertex),
}

impl Segment {
    fn attach_to(&self, head: Vertex, tail: Vertex) -> Option<Attach> {
        if self.start == tail {
            Some(Attach::Tail(self.end))
        } else if self.end == tail {
            Some(Attach::Tail(self.start))
        } else if self.start == head {
            Some(Attach::Head(self.end))
        } else if self.end == head {
            Some(Attach::Head(self.start))
        } else {
            None
        }
    }
}

/// Reconstructs the outline of a sector from the linedefs bordering it.
///
/// Every linedef whose front sidedef belongs to the sector contributes an edge from its start
/// vertex to its end vertex. Back sidedefs contribute the reverse edge. The edges are then chained
/// greedily into a single path starting from the first one, which is closed into a ring.
///
/// Returns `None` if no linedef borders the sector.
///
/// Only one chain is built. If the sector's border has several loops, such as a room with a pillar
/// in the middle, the loops that don't connect to the first edge are left out. Use
/// [`build_sector_rings`] to get all of them.
pub fn build_sector_polygon(map: &Map, sector: u16) -> Option<Polygon> {
    let mut pool = sector_segments(map, sector);
    if pool.is_empty() {
        return None;
    }

    let polygon = chain(&mut pool);
    if !pool.is_empty() {
        log::debug!(
            "{}: sector #{} has {} unchained segments",
            map,
            sector,
            pool.len()
        );
    }

    Some(polygon)
}

/// Reconstructs every loop of a sector's outline, one ring per chain of connected edges.
///
/// The first ring is the same as [`build_sector_polygon`]'s. Returns an empty list if no linedef
/// borders the sector.
pub fn build_sector_rings(map: &Map, sector: u16) -> Vec<Polygon> {
    let mut pool = sector_segments(map, sector);
    let mut rings = Vec::new();

    while !pool.is_empty() {
        rings.push(chain(&mut pool));
    }

    rings
}

/// Collects the sector's edges in linedef order.
fn sector_segments(map: &Map, sector: u16) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (number, linedef) in map.linedefs.iter().enumerate() {
        let is_sector_side = |side: Option<u16>| match side {
            Some(side) => match map.sidedefs.get(side) {
                Some(sidedef) => sidedef.sector == sector,
                None => {
                    log::warn!("{}: linedef #{} has invalid sidedef #{}", map, number, side);
                    false
                }
            },
            None => false,
        };

        let front = is_sector_side(linedef.front_sidedef);
        let back = is_sector_side(linedef.back_sidedef);
        if !front && !back {
            continue;
        }

        let (start, end) = match (linedef.start_vertex(map), linedef.end_vertex(map)) {
            (Some(&start), Some(&end)) => (start, end),
            _ => {
                log::warn!("{}: linedef #{} has an invalid vertex", map, number);
                continue;
            }
        };

        if front {
            segments.push(Segment { start, end });
        }
        if back {
            segments.push(Segment {
                start: end,
                end: start,
            });
        }
    }

    segments
}

/// Grows a path from the first segment in the pool, attaching segments to either end until none
/// fit, then closes it. Attached segments are removed from the pool; the rest keep their order.
///
/// # Panics
///
/// Panics if `pool` is empty.
fn chain(pool: &mut Vec<Segment>) -> Polygon {
    let first = pool.remove(0);
    let mut path = VecDeque::from(vec![first.start, first.end]);

    loop {
        let head = path[0];
        let tail = path[path.len() - 1];

        let found = pool
            .iter()
            .enumerate()
            .find_map(|(index, segment)| Some((index, segment.attach_to(head, tail)?)));

        match found {
            Some((index, attach)) => {
                pool.remove(index);
                match attach {
                    Attach::Tail(point) => path.push_back(point),
                    Attach::Head(point) => path.push_front(point),
                }
            }
            None => break,
        }
    }

    if path.front() != path.back() {
        path.push_back(path[0]);
    }

    Polygon(path.into())
}
