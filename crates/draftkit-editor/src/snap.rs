//! Grid and sibling snapping for interactive transforms.
//!
//! The manager is consulted while a move, resize or rotate gesture is in
//! flight. It never touches the diagram; it only bends the gesture's
//! delta and reports which line it snapped to, so the frontend can draw
//! a guide.

use draftkit_core::{Transform, Vec2};

use crate::model::Diagram;

const GRID_SIZE: f64 = 20.0;
const SNAP_GRID: f64 = 10.0;
const SNAP_SHAPE: f64 = 5.0;
const ROTATE_STEP: f64 = 15.0;
const ROTATE_MARGIN: f64 = 5.0;

/// What a snap line was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKind {
    /// A multiple of the background grid.
    Grid,
    /// The left, right, top or bottom edge of an unselected item.
    Edge,
    /// The center of an unselected item.
    Center,
}

/// One line a gesture snapped to, in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapLine {
    pub value: f64,
    pub kind: SnapKind,
}

/// The adjusted delta plus the lines that produced the adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub delta: Vec2,
    pub x: Option<SnapLine>,
    pub y: Option<SnapLine>,
}

impl SnapResult {
    fn unsnapped(delta: Vec2) -> Self {
        Self {
            delta,
            x: None,
            y: None,
        }
    }
}

/// Snapping rules for move, resize and rotate gestures.
///
/// Tolerances are divided by the zoom factor so the capture radius stays
/// constant on screen. Candidate lines per axis are the grid multiples
/// inside the view plus the edges and centers of every root item outside
/// the current selection; the closest line within tolerance wins.
#[derive(Debug, Clone)]
pub struct SnapManager {
    grid_size: f64,
    snap_grid: f64,
    snap_shape: f64,
    rotate_step: f64,
    rotate_margin: f64,
}

impl Default for SnapManager {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            snap_grid: SNAP_GRID,
            snap_shape: SNAP_SHAPE,
            rotate_step: ROTATE_STEP,
            rotate_margin: ROTATE_MARGIN,
        }
    }
}

impl SnapManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snaps a move gesture.
    ///
    /// `transform` is the selection bounds at gesture start and `delta`
    /// the translation so far. The moved bounds' left, center and right
    /// (top, center, bottom) are tested per axis. `disabled` passes the
    /// delta through, which is what holding shift does.
    pub fn snap_moving(
        &self,
        diagram: &Diagram,
        view_size: Vec2,
        transform: &Transform,
        delta: Vec2,
        zoom: f64,
        disabled: bool,
    ) -> SnapResult {
        let mut result = SnapResult::unsnapped(delta);
        if disabled {
            return result;
        }

        let aabb = transform.aabb();
        let (x_lines, y_lines) = self.item_lines(diagram);

        let x_points = [
            aabb.left() + delta.x,
            aabb.center_x() + delta.x,
            aabb.right() + delta.x,
        ];
        let y_points = [
            aabb.top() + delta.y,
            aabb.center_y() + delta.y,
            aabb.bottom() + delta.y,
        ];

        if let Some((correction, line)) = self.snap_axis(&x_points, &x_lines, view_size.x, zoom) {
            result.delta.x += correction;
            result.x = Some(line);
        }
        if let Some((correction, line)) = self.snap_axis(&y_points, &y_lines, view_size.y, zoom) {
            result.delta.y += correction;
            result.y = Some(line);
        }

        result
    }

    /// Snaps a resize gesture.
    ///
    /// `delta` is the size delta and `drag_offset` the handle that was
    /// grabbed, `-0.5`, `0` or `0.5` per axis. Only the edge that is
    /// actually moving is tested. Rotated selections pass through, their
    /// edges are not axis aligned.
    pub fn snap_resizing(
        &self,
        diagram: &Diagram,
        view_size: Vec2,
        transform: &Transform,
        delta: Vec2,
        zoom: f64,
        disabled: bool,
        drag_offset: Vec2,
    ) -> SnapResult {
        let mut result = SnapResult::unsnapped(delta);
        if disabled || !transform.rotation().is_zero() {
            return result;
        }

        let aabb = transform.aabb();
        let (x_lines, y_lines) = self.item_lines(diagram);

        if drag_offset.x > 0.0 {
            if let Some((correction, line)) =
                self.snap_axis(&[aabb.right() + delta.x], &x_lines, view_size.x, zoom)
            {
                result.delta.x += correction;
                result.x = Some(line);
            }
        } else if drag_offset.x < 0.0 {
            if let Some((correction, line)) =
                self.snap_axis(&[aabb.left() - delta.x], &x_lines, view_size.x, zoom)
            {
                result.delta.x -= correction;
                result.x = Some(line);
            }
        }

        if drag_offset.y > 0.0 {
            if let Some((correction, line)) =
                self.snap_axis(&[aabb.bottom() + delta.y], &y_lines, view_size.y, zoom)
            {
                result.delta.y += correction;
                result.y = Some(line);
            }
        } else if drag_offset.y < 0.0 {
            if let Some((correction, line)) =
                self.snap_axis(&[aabb.top() - delta.y], &y_lines, view_size.y, zoom)
            {
                result.delta.y -= correction;
                result.y = Some(line);
            }
        }

        result
    }

    /// Snaps a rotate gesture and returns the adjusted rotation delta in
    /// degrees.
    ///
    /// The cumulative angle, start rotation plus delta, is pulled to the
    /// nearest step when it comes within the margin, so an item rotated
    /// by hand still lands on 15, 30, 45 and so on.
    pub fn snap_rotating(&self, transform: &Transform, delta: f64, disabled: bool) -> f64 {
        if disabled {
            return delta;
        }

        let start = transform.rotation().degrees();
        let total = start + delta;
        let stepped = (total / self.rotate_step).round() * self.rotate_step;

        if (stepped - total).abs() < self.rotate_margin {
            stepped - start
        } else {
            delta
        }
    }

    /// Closest line within tolerance for one axis, as the correction to
    /// add to the delta plus the winning line.
    fn snap_axis(
        &self,
        points: &[f64],
        lines: &[(f64, SnapKind)],
        view_extent: f64,
        zoom: f64,
    ) -> Option<(f64, SnapLine)> {
        let grid_tolerance = self.snap_grid / zoom;
        let shape_tolerance = self.snap_shape / zoom;

        let mut best: Option<(f64, f64, SnapLine)> = None;

        for &point in points {
            let line = (point / self.grid_size).round() * self.grid_size;
            if line >= 0.0 && line <= view_extent {
                consider(&mut best, line, SnapKind::Grid, grid_tolerance, point);
            }
        }

        for &(value, kind) in lines {
            for &point in points {
                consider(&mut best, value, kind, shape_tolerance, point);
            }
        }

        best.map(|(_, correction, line)| (correction, line))
    }

    /// Edge and center lines of every root item outside the selection.
    fn item_lines(&self, diagram: &Diagram) -> (Vec<(f64, SnapKind)>, Vec<(f64, SnapKind)>) {
        let mut x_lines = Vec::new();
        let mut y_lines = Vec::new();

        for id in diagram.root_ids().iter() {
            if diagram.selected_ids().contains(id) {
                continue;
            }
            let item = match diagram.items().get(id) {
                Some(item) => item,
                None => continue,
            };

            let aabb = item.bounds(diagram).aabb();

            x_lines.push((aabb.left(), SnapKind::Edge));
            x_lines.push((aabb.right(), SnapKind::Edge));
            x_lines.push((aabb.center_x(), SnapKind::Center));

            y_lines.push((aabb.top(), SnapKind::Edge));
            y_lines.push((aabb.bottom(), SnapKind::Edge));
            y_lines.push((aabb.center_y(), SnapKind::Center));
        }

        (x_lines, y_lines)
    }
}

fn consider(
    best: &mut Option<(f64, f64, SnapLine)>,
    value: f64,
    kind: SnapKind,
    tolerance: f64,
    point: f64,
) {
    let distance = (value - point).abs();
    if distance > tolerance {
        return;
    }
    if best.map_or(true, |(closest, _, _)| distance < closest) {
        *best = Some((distance, value - point, SnapLine { value, kind }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DiagramShape;
    use draftkit_core::Rotation;

    const VIEW: Vec2 = Vec2::new(1000.0, 1000.0);

    fn diagram() -> Diagram {
        // The mover sits at aabb (98, 100)..(198, 130), the snap target
        // at (203, 300)..(303, 330).
        Diagram::empty("d1")
            .add_shape(
                DiagramShape::new("mover", "Button", 100.0, 30.0)
                    .transform_with(|t| t.move_to(Vec2::new(148.0, 115.0))),
            )
            .add_shape(
                DiagramShape::new("target", "Button", 100.0, 30.0)
                    .transform_with(|t| t.move_to(Vec2::new(253.0, 315.0))),
            )
            .select_items(&["mover".to_string()])
    }

    fn mover_transform(diagram: &Diagram) -> Transform {
        diagram.items().get("mover").unwrap().bounds(diagram)
    }

    #[test]
    fn moving_snaps_to_the_nearest_grid_line() {
        let diagram = diagram();
        let transform = mover_transform(&diagram);

        let result = SnapManager::new().snap_moving(
            &diagram,
            VIEW,
            &transform,
            Vec2::new(1.0, 0.0),
            1.0,
            false,
        );

        // Left edge 98 + 1 pulls to the 100 grid line.
        assert_eq!(result.delta, Vec2::new(2.0, 0.0));
        assert_eq!(
            result.x,
            Some(SnapLine {
                value: 100.0,
                kind: SnapKind::Grid
            })
        );
        // The top edge already sits on a grid line.
        assert_eq!(
            result.y,
            Some(SnapLine {
                value: 100.0,
                kind: SnapKind::Grid
            })
        );
    }

    #[test]
    fn a_closer_item_edge_beats_the_grid() {
        let diagram = diagram();
        let transform = mover_transform(&diagram);

        // Right edge 198 + 6 = 204: grid line 200 is 4 away, the target's
        // left edge 203 only 1.
        let result = SnapManager::new().snap_moving(
            &diagram,
            VIEW,
            &transform,
            Vec2::new(6.0, 0.0),
            1.0,
            false,
        );

        assert_eq!(result.delta.x, 5.0);
        assert_eq!(
            result.x,
            Some(SnapLine {
                value: 203.0,
                kind: SnapKind::Edge
            })
        );
    }

    #[test]
    fn zoom_shrinks_the_capture_radius() {
        let diagram = diagram();
        let transform = mover_transform(&diagram);

        // Right edge lands on 205: at zoom 4 the tolerances drop to 2.5
        // and 1.25, so neither the grid nor the edge captures.
        let result = SnapManager::new().snap_moving(
            &diagram,
            VIEW,
            &transform,
            Vec2::new(7.0, 0.0),
            4.0,
            false,
        );

        assert_eq!(result.delta.x, 7.0);
        assert_eq!(result.x, None);
    }

    #[test]
    fn disabled_passes_the_delta_through() {
        let diagram = diagram();
        let transform = mover_transform(&diagram);

        let result = SnapManager::new().snap_moving(
            &diagram,
            VIEW,
            &transform,
            Vec2::new(1.0, 1.0),
            1.0,
            true,
        );

        assert_eq!(result.delta, Vec2::new(1.0, 1.0));
        assert_eq!(result.x, None);
        assert_eq!(result.y, None);
    }

    #[test]
    fn resizing_snaps_only_the_dragged_edge() {
        let diagram = diagram();
        let transform = mover_transform(&diagram);

        // Dragging the right edge: 198 + 4 = 202 grows until flush with
        // the target's left edge at 203. The top edge sits exactly on a
        // grid line but no y handle is active.
        let result = SnapManager::new().snap_resizing(
            &diagram,
            VIEW,
            &transform,
            Vec2::new(4.0, 0.0),
            1.0,
            false,
            Vec2::new(0.5, 0.0),
        );

        assert_eq!(result.delta, Vec2::new(5.0, 0.0));
        assert_eq!(
            result.x,
            Some(SnapLine {
                value: 203.0,
                kind: SnapKind::Edge
            })
        );
        assert_eq!(result.y, None);
    }

    #[test]
    fn resizing_the_left_edge_adjusts_the_size_delta_the_other_way() {
        let diagram = diagram();
        let transform = mover_transform(&diagram);

        // Dragging the left edge outwards by 3: 98 - 3 = 95, five away
        // from the 100 grid line within the 10 tolerance, snapping the
        // growth back to 98 - (-2) = 100.
        let result = SnapManager::new().snap_resizing(
            &diagram,
            VIEW,
            &transform,
            Vec2::new(3.0, 0.0),
            1.0,
            false,
            Vec2::new(-0.5, 0.0),
        );

        assert_eq!(result.delta.x, -2.0);
        assert_eq!(
            result.x,
            Some(SnapLine {
                value: 100.0,
                kind: SnapKind::Grid
            })
        );
    }

    #[test]
    fn rotated_selections_never_snap_while_resizing() {
        let diagram = diagram();
        let transform = mover_transform(&diagram).rotate_to(Rotation::from_degrees(30.0));

        let result = SnapManager::new().snap_resizing(
            &diagram,
            VIEW,
            &transform,
            Vec2::new(4.0, 0.0),
            1.0,
            false,
            Vec2::new(0.5, 0.0),
        );

        assert_eq!(result.delta, Vec2::new(4.0, 0.0));
        assert_eq!(result.x, None);
    }

    #[test]
    fn rotation_pulls_to_the_nearest_step() {
        let transform = Transform::new(Vec2::ZERO, Vec2::new(100.0, 100.0), Rotation::from_degrees(10.0));

        let delta = SnapManager::new().snap_rotating(&transform, 4.0, false);

        // 10 + 4 = 14 is within 5 of the 15 degree step.
        assert_eq!(delta, 5.0);
    }

    #[test]
    fn rotation_outside_the_margin_keeps_the_raw_delta() {
        let transform = Transform::new(Vec2::ZERO, Vec2::new(100.0, 100.0), Rotation::ZERO);

        let delta = SnapManager::new().snap_rotating(&transform, 8.0, false);

        assert_eq!(delta, 8.0);
    }

    #[test]
    fn selected_items_are_not_snap_targets() {
        // Select both items: the target's edge at 203 must not capture.
        let diagram = diagram().select_items(&["mover".to_string(), "target".to_string()]);
        let transform = mover_transform(&diagram);

        let result = SnapManager::new().snap_moving(
            &diagram,
            VIEW,
            &transform,
            Vec2::new(6.0, 0.0),
            1.0,
            false,
        );

        // Only the grid is left: the moved left edge at 104 pulls back
        // to the 100 line.
        assert_eq!(result.delta.x, 2.0);
        assert_eq!(
            result.x,
            Some(SnapLine {
                value: 100.0,
                kind: SnapKind::Grid
            })
        );
    }
}
