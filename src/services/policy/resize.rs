use crate::debug_if_enabled;
use crate::geometry::{Point, Size};
use crate::services::tools::{WindowId, WindowManagerTools};

/// Применить новую геометрию окна.
///
/// Сначала хост ограничивает позицию и размер по своим правилам, затем
/// получает один запрос на изменение. Пол минимального размера
/// обеспечивает вызывающий код.
pub fn resize(tools: &dyn WindowManagerTools, window: WindowId, top_left: Point, size: Size) {
    let mut top_left = top_left;
    let mut size = size;

    tools.constrain_resize(window, &mut top_left, &mut size);
    debug_if_enabled!("Ресайз {}: {} {}", window, top_left, size);
    tools.modify_window_geometry(window, top_left, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;
    use crate::services::tools::{InMemoryTools, ToolCall};

    #[test]
    fn test_resize_constrains_before_modify() {
        let tools = InMemoryTools::new(Some(Rectangle::new(Point::new(0, 0), Size::new(100, 100))));
        let id = tools.add_window("term", "t", Rectangle::new(Point::new(10, 10), Size::new(20, 20)));

        resize(&tools, id, Point::new(500, 20), Size::new(30, 30));

        assert_eq!(
            tools.calls(),
            vec![
                ToolCall::ConstrainResize(id),
                ToolCall::Modify {
                    window: id,
                    top_left: Point::new(99, 20),
                    size: Size::new(30, 30),
                },
            ]
        );
        assert_eq!(tools.window(id).unwrap().top_left, Point::new(99, 20));
    }
}
