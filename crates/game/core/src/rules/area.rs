use crate::state::Position;

/// Where in the world a rule listens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    Point(Position),
    Points(&'static [Position]),
    /// Inclusive rectangle; rows and columns are the one-cell-wide cases.
    Rect { min: Position, max: Position },
    /// Matches every coordinate, for item-driven branches.
    Anywhere,
}

impl Area {
    pub const fn at(x: i32, y: i32) -> Self {
        Area::Point(Position::new(x, y))
    }

    /// Column `x`, rows `top..=bottom`.
    pub const fn column(x: i32, top: i32, bottom: i32) -> Self {
        Area::Rect {
            min: Position::new(x, top),
            max: Position::new(x, bottom),
        }
    }

    /// Row `y`, columns `left..=right`.
    pub const fn row(y: i32, left: i32, right: i32) -> Self {
        Area::Rect {
            min: Position::new(left, y),
            max: Position::new(right, y),
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        match self {
            Area::Point(point) => *point == position,
            Area::Points(points) => points.contains(&position),
            Area::Rect { min, max } => {
                (min.x..=max.x).contains(&position.x) && (min.y..=max.y).contains(&position.y)
            }
            Area::Anywhere => true,
        }
    }

    /// Coordinates that must lie on the map for the area to be meaningful.
    pub(crate) fn anchors(&self) -> Vec<Position> {
        match self {
            Area::Point(point) => vec![*point],
            Area::Points(points) => points.to_vec(),
            Area::Rect { min, max } => vec![*min, *max],
            Area::Anywhere => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_inclusive() {
        let column = Area::column(0, 16, 18);
        assert!(column.contains(Position::new(0, 16)));
        assert!(column.contains(Position::new(0, 18)));
        assert!(!column.contains(Position::new(0, 19)));
        assert!(!column.contains(Position::new(1, 17)));

        let row = Area::row(3, 5, 7);
        assert!(row.contains(Position::new(6, 3)));
        assert!(!row.contains(Position::new(8, 3)));
    }

    #[test]
    fn point_sets_match_members_only() {
        const GATES: &[Position] = &[Position::new(4, 16), Position::new(4, 18)];
        let area = Area::Points(GATES);
        assert!(area.contains(Position::new(4, 18)));
        assert!(!area.contains(Position::new(4, 17)));
        assert_eq!(area.anchors().len(), 2);
    }
}
