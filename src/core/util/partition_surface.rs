use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("cannot partition a degenerate {width}x{height} surface")]
    DegenerateSurface { width: u32, height: u32 },
    #[error("worker count must be between 1 and the surface width {width}, got {workers}")]
    InvalidWorkerCount { workers: u32, width: u32 },
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
}

/// One worker's share of a pass: a full-height strip and the tiles it
/// publishes in order (top half, then bottom half).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripPlan {
    pub strip: PixelRect,
    pub tiles: Vec<PixelRect>,
}

fn strip_for_worker(
    worker: u32,
    strip_width: u32,
    workers: u32,
    surface_width: u32,
    surface_height: u32,
) -> Result<PixelRect, PixelRectError> {
    let left = worker * strip_width;

    let width = if worker == workers - 1 {
        surface_width - left // Last strip takes any remainder columns
    } else {
        strip_width
    };

    PixelRect::new(left, 0, width, surface_height)
}

fn split_halves(strip: PixelRect) -> Result<Vec<PixelRect>, PixelRectError> {
    let top_height = strip.height() / 2;

    if top_height == 0 {
        return Ok(vec![strip]);
    }

    Ok(vec![
        PixelRect::new(strip.left(), 0, strip.width(), top_height)?,
        PixelRect::new(strip.left(), top_height, strip.width(), strip.height() - top_height)?,
    ])
}

/// Splits the surface into `workers` vertical strips, each halved horizontally.
pub fn partition_surface(width: u32, height: u32, workers: u32) -> Result<Vec<StripPlan>, PartitionError> {
    if width == 0 || height == 0 {
        return Err(PartitionError::DegenerateSurface { width, height });
    }

    if workers == 0 || workers > width {
        return Err(PartitionError::InvalidWorkerCount { workers, width });
    }

    let strip_width = width / workers;

    (0..workers)
        .map(|worker| {
            let strip = strip_for_worker(worker, strip_width, workers, width, height)?;

            Ok(StripPlan {
                strip,
                tiles: split_halves(strip)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(plans: &[StripPlan], width: u32, height: u32) {
        let mut hits = vec![0u8; (width * height) as usize];

        for plan in plans {
            for tile in &plan.tiles {
                assert!(tile.left() >= plan.strip.left() && tile.right() <= plan.strip.right());

                for y in tile.top()..tile.bottom() {
                    for x in tile.left()..tile.right() {
                        hits[(y * width + x) as usize] += 1;
                    }
                }
            }
        }

        assert!(hits.iter().all(|&count| count == 1), "tiles must cover every pixel exactly once");
    }

    #[test]
    fn test_even_split() {
        let plans = partition_surface(8, 4, 4).unwrap();

        assert_eq!(plans.len(), 4);
        for (i, plan) in plans.iter().enumerate() {
            assert_eq!(plan.strip, PixelRect::new(i as u32 * 2, 0, 2, 4).unwrap());
            assert_eq!(
                plan.tiles,
                vec![
                    PixelRect::new(i as u32 * 2, 0, 2, 2).unwrap(),
                    PixelRect::new(i as u32 * 2, 2, 2, 2).unwrap(),
                ]
            );
        }
    }

    #[test]
    fn test_last_strip_absorbs_remainder_columns() {
        let plans = partition_surface(10, 5, 3).unwrap();

        assert_eq!(plans[0].strip.width(), 3);
        assert_eq!(plans[1].strip.width(), 3);
        assert_eq!(plans[2].strip.width(), 4);
        assert_eq!(plans[2].strip.right(), 10);
    }

    #[test]
    fn test_odd_height_gives_bottom_half_the_extra_row() {
        let plans = partition_surface(4, 7, 1).unwrap();

        assert_eq!(plans[0].tiles[0].height(), 3);
        assert_eq!(plans[0].tiles[1].top(), 3);
        assert_eq!(plans[0].tiles[1].height(), 4);
    }

    #[test]
    fn test_single_row_surface_has_one_tile_per_strip() {
        let plans = partition_surface(6, 1, 2).unwrap();

        assert!(plans.iter().all(|plan| plan.tiles.len() == 1));
        assert_exact_cover(&plans, 6, 1);
    }

    #[test]
    fn test_tiles_cover_surface_exactly_once() {
        for (width, height, workers) in [(1, 1, 1), (7, 3, 2), (1280, 9, 12), (33, 32, 33), (5, 100, 4)] {
            let plans = partition_surface(width, height, workers).unwrap();

            assert_eq!(plans.len(), workers as usize);
            assert_exact_cover(&plans, width, height);
        }
    }

    #[test]
    fn test_tiles_are_pairwise_disjoint() {
        let plans = partition_surface(50, 20, 6).unwrap();
        let tiles: Vec<PixelRect> = plans.iter().flat_map(|plan| plan.tiles.clone()).collect();

        for (i, a) in tiles.iter().enumerate() {
            for b in &tiles[i + 1..] {
                assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_degenerate_surface_is_rejected() {
        assert_eq!(
            partition_surface(0, 10, 1),
            Err(PartitionError::DegenerateSurface { width: 0, height: 10 })
        );
        assert_eq!(
            partition_surface(10, 0, 1),
            Err(PartitionError::DegenerateSurface { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_worker_count_is_validated() {
        assert_eq!(
            partition_surface(4, 4, 0),
            Err(PartitionError::InvalidWorkerCount { workers: 0, width: 4 })
        );
        assert_eq!(
            partition_surface(4, 4, 5),
            Err(PartitionError::InvalidWorkerCount { workers: 5, width: 4 })
        );
    }
}
