use super::FrameMap;
use super::Primary;
use super::Rect;
use super::SlotAssignment;
use super::WindowId;
use crate::rect::round_half_up;

pub trait Arrangement {
    /// Frames for every assigned window in clockwise order, with the primary
    /// region(s) taking `ratio` of the width of `area`.
    fn calculate(&self, area: &Rect, ratio: f64) -> FrameMap;
}

impl Arrangement for SlotAssignment {
    fn calculate(&self, area: &Rect, ratio: f64) -> FrameMap {
        let primary_width = round_half_up(f64::from(area.width) * ratio);

        let (primaries, primary_left, primary_right) = match &self.primary {
            Primary::Single(id) => {
                let left = round_half_up(
                    f64::from(area.x) + (f64::from(area.width) - f64::from(primary_width)) / 2.0,
                );

                (
                    vec![(id.clone(), area.column(left, primary_width))],
                    left,
                    left.saturating_add(primary_width),
                )
            }
            Primary::Twin(centre_left, centre_right) => {
                // the seam stays on the midline no matter how the halves round
                let midline = round_half_up(f64::from(area.x) + f64::from(area.width) / 2.0);
                let left_width = primary_width.div_euclid(2);
                let right_width = primary_width - left_width;

                (
                    vec![
                        (
                            centre_left.clone(),
                            area.column(midline.saturating_sub(left_width), left_width),
                        ),
                        (centre_right.clone(), area.column(midline, right_width)),
                    ],
                    midline.saturating_sub(left_width),
                    midline.saturating_add(right_width),
                )
            }
        };

        let left_region = area.span(area.x, primary_left);
        let right_region = area.span(primary_right, area.right_edge());

        tracing::debug!(
            "primary width {} at {}, left region {:?}, right region {:?}",
            primary_width,
            primary_left,
            left_region,
            right_region
        );

        let mut frames = FrameMap::with_capacity(self.left.len() + primaries.len() + self.right.len());

        side(&mut frames, &left_region, &self.left);
        for (id, frame) in primaries {
            frames.push(id, frame);
        }
        side(&mut frames, &right_region, &self.right);

        frames
    }
}

fn side(frames: &mut FrameMap, region: &Rect, ids: &[WindowId]) {
    let layouts = columns(region, ids.len());
    if layouts.len() < ids.len() {
        tracing::warn!(
            "side region {:?} has no room, {} window(s) will not be placed",
            region,
            ids.len()
        );
    }

    for (id, layout) in ids.iter().zip(layouts) {
        frames.push(id.clone(), layout);
    }
}

/// Split `area` into `len` full-height columns of equal width, left to right.
///
/// The last column absorbs the rounding remainder so the columns always sum
/// to the width of `area`. Nothing is produced for an empty region.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn columns(area: &Rect, len: usize) -> Vec<Rect> {
    if len == 0 || area.width <= 0 {
        return vec![];
    }

    let len = len as i32;
    let column_width = area.width / len;

    (0..len)
        .map(|i| {
            let width = if i == len - 1 {
                area.width - column_width * (len - 1)
            } else {
                column_width
            };

            area.column(area.x.saturating_add(i * column_width), width)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to create a test area
    fn test_area() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 1000,
            height: 600,
        }
    }

    fn ids(ids: &[&str]) -> Vec<WindowId> {
        ids.iter().map(|id| WindowId::from(*id)).collect()
    }

    mod columns_tests {
        use super::*;

        #[test]
        fn test_columns_equal_width() {
            let area = test_area();
            let layouts = columns(&area, 4);

            assert_eq!(layouts.len(), 4);
            // Each column should be 250 pixels wide (1000 / 4)
            for layout in &layouts {
                assert_eq!(layout.width, 250);
                assert_eq!(layout.height, 600);
            }
        }

        #[test]
        fn test_columns_last_column_gets_remainder() {
            let area = Rect::new(10, 5, 100, 50);
            let layouts = columns(&area, 3);

            assert_eq!(layouts[0], Rect::new(10, 5, 33, 50));
            assert_eq!(layouts[1], Rect::new(43, 5, 33, 50));
            assert_eq!(layouts[2], Rect::new(76, 5, 34, 50));
        }

        #[test]
        fn test_columns_narrower_than_count() {
            let area = Rect::new(0, 0, 2, 50);
            let layouts = columns(&area, 3);

            assert_eq!(layouts.len(), 3);
            assert_eq!(layouts[0].width, 0);
            assert_eq!(layouts[1].width, 0);
            assert_eq!(layouts[2].width, 2);
        }

        #[test]
        fn test_columns_empty_region() {
            assert!(columns(&Rect::new(0, 0, 0, 50), 2).is_empty());
            assert!(columns(&Rect::new(0, 0, -5, 50), 2).is_empty());
            assert!(columns(&test_area(), 0).is_empty());
        }
    }

    mod single_primary_tests {
        use super::*;

        #[test]
        fn test_primary_is_centered() {
            let assignment = SlotAssignment {
                primary: Primary::Single(WindowId::from("A")),
                left: ids(&["B"]),
                right: ids(&["C"]),
            };

            let frames = assignment.calculate(&test_area(), 0.4);
            let order: Vec<_> = frames.ids().cloned().collect();

            assert_eq!(order, ids(&["B", "A", "C"]));
            assert_eq!(frames.get(&WindowId::from("A")), Some(&Rect::new(300, 0, 400, 600)));
            assert_eq!(frames.get(&WindowId::from("B")), Some(&Rect::new(0, 0, 300, 600)));
            assert_eq!(frames.get(&WindowId::from("C")), Some(&Rect::new(700, 0, 300, 600)));
        }

        #[test]
        fn test_offset_area_rounds_half_up() {
            let assignment = SlotAssignment {
                primary: Primary::Single(WindowId::from("A")),
                left: ids(&["B"]),
                right: vec![],
            };

            // (1001 - 400) / 2 = 300.5, which rounds up
            let area = Rect::new(100, 20, 1001, 500);
            let frames = assignment.calculate(&area, 0.4);

            assert_eq!(frames.get(&WindowId::from("A")), Some(&Rect::new(401, 20, 400, 500)));
            assert_eq!(frames.get(&WindowId::from("B")), Some(&Rect::new(100, 20, 301, 500)));
        }

        #[test]
        fn test_uneven_sides() {
            let assignment = SlotAssignment {
                primary: Primary::Single(WindowId::from("A")),
                left: ids(&["B", "D"]),
                right: ids(&["C"]),
            };

            let frames = assignment.calculate(&test_area(), 0.4);
            let order: Vec<_> = frames.ids().cloned().collect();

            assert_eq!(order, ids(&["B", "D", "A", "C"]));
            assert_eq!(frames.get(&WindowId::from("B")), Some(&Rect::new(0, 0, 150, 600)));
            assert_eq!(frames.get(&WindowId::from("D")), Some(&Rect::new(150, 0, 150, 600)));
        }
    }

    mod twin_primary_tests {
        use super::*;

        #[test]
        fn test_twins_meet_at_midline() {
            let assignment = SlotAssignment {
                primary: Primary::Twin(WindowId::from("W1"), WindowId::from("W2")),
                left: ids(&["W0"]),
                right: ids(&["W3"]),
            };

            let frames = assignment.calculate(&test_area(), 0.5);
            let order: Vec<_> = frames.ids().cloned().collect();

            assert_eq!(order, ids(&["W0", "W1", "W2", "W3"]));
            assert_eq!(frames.get(&WindowId::from("W1")), Some(&Rect::new(250, 0, 250, 600)));
            assert_eq!(frames.get(&WindowId::from("W2")), Some(&Rect::new(500, 0, 250, 600)));
        }

        #[test]
        fn test_odd_primary_width_right_pane_takes_remainder() {
            let assignment = SlotAssignment {
                primary: Primary::Twin(WindowId::from("L"), WindowId::from("R")),
                left: vec![],
                right: vec![],
            };

            // round(1001 * 0.5) = 501 -> 250 + 251, midline round(500.5) = 501
            let area = Rect::new(0, 0, 1001, 600);
            let frames = assignment.calculate(&area, 0.5);

            let left = frames.get(&WindowId::from("L")).unwrap();
            let right = frames.get(&WindowId::from("R")).unwrap();
            assert_eq!(left.right_edge(), 501);
            assert_eq!(right.x, 501);
            assert_eq!(left.width, 250);
            assert_eq!(right.width, 251);
        }
    }
}
