//! Content-box measurement for drop targets.

use dragdrop_core::Position;

/// Raw element measurements taken from the DOM at event time.
///
/// `client_*` include padding (`clientWidth`/`clientHeight`), and the
/// pointer offset is relative to the padding edge (`offsetX`/`offsetY`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContentBox {
    pub client_width: f64,
    pub client_height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ContentBox {
    /// Convert to a position relative to the content box.
    ///
    /// Offsets on the padding come out negative or larger than the box.
    pub fn position(&self) -> Position {
        Position {
            width: self.client_width - self.padding_left - self.padding_right,
            height: self.client_height - self.padding_top - self.padding_bottom,
            x: self.offset_x - self.padding_left,
            y: self.offset_y - self.padding_top,
        }
    }
}

/// Parse a computed CSS pixel length such as `"12px"` or `"0.5px"`.
///
/// Anything unparseable counts as zero.
pub fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f64>()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_without_padding() {
        let metrics = ContentBox {
            client_width: 100.0,
            client_height: 50.0,
            offset_x: 10.0,
            offset_y: 10.0,
            ..Default::default()
        };
        assert_eq!(metrics.position(), Position::new(100.0, 50.0, 10.0, 10.0));
    }

    #[test]
    fn test_position_subtracts_padding() {
        let metrics = ContentBox {
            client_width: 120.0,
            client_height: 70.0,
            padding_left: 10.0,
            padding_right: 10.0,
            padding_top: 5.0,
            padding_bottom: 15.0,
            offset_x: 4.0,
            offset_y: 60.0,
        };
        let pos = metrics.position();
        assert_eq!(pos, Position::new(100.0, 50.0, -6.0, 55.0));
        assert!(!pos.is_inside());
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("12px"), 12.0);
        assert_eq!(parse_px(" 0.5px "), 0.5);
        assert_eq!(parse_px("8"), 8.0);
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
    }
}
