/// Strip index of a render, from its vertical angle, horizontal angle and
/// oscillation offset. Tuned for the rig's grid: vertical angles -90..=90 in
/// steps of 20, horizontal angles from 10 in steps of 20.
pub fn placement_index(v: i64, h: i64, osc: i64) -> f64{
    let (v, h, osc) = (v as f64, h as f64, osc as f64);
    let mut index = -80.0 + ((v + 90.0) / 20.0) * 90.0;
    if v == 90.0 {
        index -= 80.0;
    }
    index += 10.0 * ((h - 10.0) / 20.0);
    index + osc
}

/// Horizontal pixel offset of a tile; may be negative or past the canvas.
/// Saturates instead of wrapping, so huge indices stay off the canvas.
pub fn pixel_offset(index: f64, tile_width: u32) -> i64{
    (index.floor() as i64).saturating_mul(tile_width as i64)
}

#[cfg(test)]
mod tests{

    use super::*;

    #[test]
    fn test_first_row_start(){
        assert_eq!(placement_index(-90, 10, 0), -80.0);
        assert_eq!(pixel_offset(-80.0, 64), -80 * 64);
    }

    #[test]
    fn test_vertical_steps(){
        assert_eq!(placement_index(-70, 10, 0), 10.0);
        assert_eq!(placement_index(-50, 10, 0), 100.0);
        assert_eq!(placement_index(70, 10, 0), 640.0);
        // top row is pulled back by an extra 80
        assert_eq!(placement_index(90, 10, 0), 650.0);
    }

    #[test]
    fn test_horizontal_and_osc(){
        assert_eq!(placement_index(-70, 30, 0), 20.0);
        assert_eq!(placement_index(-70, 50, 0), 30.0);
        assert_eq!(placement_index(-70, 10, 3), 13.0);
        assert_eq!(placement_index(-70, 10, -4), 6.0);
        assert_eq!(placement_index(-90, 10, 80), 0.0);
    }

    #[test]
    fn test_off_grid_is_fractional(){
        assert_eq!(placement_index(-80, 10, 0), -35.0);
        assert_eq!(placement_index(-90, 15, 0), -77.5);
        assert_eq!(placement_index(-90, 0, 0), -85.0);
    }

    #[test]
    fn test_offset_floors(){
        // floor, not truncation toward zero
        assert_eq!(pixel_offset(-77.5, 10), -780);
        assert_eq!(pixel_offset(2.5, 10), 20);
        assert_eq!(pixel_offset(-0.5, 10), -10);
        assert_eq!(pixel_offset(3.0, 0), 0);
    }

    #[test]
    fn test_offset_saturates(){
        let index = placement_index(-90, 10, 100_000_000_000_000_000);
        assert_eq!(pixel_offset(index, 512), i64::MAX);
        let index = placement_index(-90, 10, -100_000_000_000_000_000);
        assert_eq!(pixel_offset(index, 512), i64::MIN);
        assert_eq!(pixel_offset(f64::INFINITY, 1), i64::MAX);
    }
}
