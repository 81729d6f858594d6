use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// 计算居中的固定尺寸矩形，超出范围时裁剪到 `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(10, 4, Rect::new(0, 0, 30, 12));
        assert_eq!(rect, Rect::new(10, 4, 10, 4));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 8, 2);
        let rect = centered_rect(20, 10, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
