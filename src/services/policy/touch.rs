use crate::events::{Contact, TouchAction, TouchEvent};
use crate::geometry::{Displacement, Point, Size, SizeDelta};
use crate::services::tools::WindowManagerTools;
use crate::{debug_if_enabled, trace_if_enabled};
use std::sync::Arc;

use super::resize::resize;

/// Перемещение и ресайз доступны только тремя пальцами
pub const GESTURE_CONTACTS: usize = 3;

/// Ограничивающий прямоугольник всех касаний
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinchExtent {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl PinchExtent {
    fn of(contacts: &[Contact]) -> Self {
        let mut left = i32::MAX;
        let mut top = i32::MAX;
        let mut right = i32::MIN;
        let mut bottom = i32::MIN;

        for contact in contacts {
            let Point { x, y } = contact.position;
            left = left.min(x);
            top = top.min(y);
            right = right.max(x);
            bottom = bottom.max(y);
        }

        Self {
            left,
            top,
            width: span(left, right),
            height: span(top, bottom),
        }
    }
}

/// Расстояние между краями, прижатое к диапазону i32
fn span(from: i32, to: i32) -> i32 {
    let span = i64::from(to) - i64::from(from);
    span.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Разбор одного события мультитача
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchFrame {
    pub centroid: Point,
    /// Нет свежих касаний: набор пальцев не менялся
    pub is_drag: bool,
    /// Ни одно касание не двигалось
    pub is_select: bool,
    pub extent: PinchExtent,
    pub count: usize,
}

impl TouchFrame {
    /// `None`, если касаний нет или хотя бы один палец поднят
    pub fn analyse(contacts: &[Contact]) -> Option<Self> {
        if contacts.is_empty() {
            return None;
        }

        let mut is_drag = true;
        let mut is_select = true;
        for contact in contacts {
            match contact.action {
                TouchAction::Up => return None,
                TouchAction::Down => is_drag = false,
                TouchAction::Change => is_select = false,
            }
        }

        let count = contacts.len() as i64;
        let (total_x, total_y) = contacts.iter().fold((0i64, 0i64), |(x, y), contact| {
            (x + i64::from(contact.position.x), y + i64::from(contact.position.y))
        });
        let centroid = Point::new((total_x / count) as i32, (total_y / count) as i32);

        Some(Self {
            centroid,
            is_drag,
            is_select,
            extent: PinchExtent::of(contacts),
            count: contacts.len(),
        })
    }
}

/// Выбор окна касанием, перемещение и "щипок"-ресайз тремя пальцами
pub struct TouchGesture {
    tools: Arc<dyn WindowManagerTools>,
    minimum: Size,
    previous: PinchExtent,
}

impl TouchGesture {
    pub fn new(tools: Arc<dyn WindowManagerTools>, minimum: Size) -> Self {
        Self {
            tools,
            minimum,
            previous: PinchExtent::default(),
        }
    }

    pub fn previous_extent(&self) -> PinchExtent {
        self.previous
    }

    pub fn handle(&mut self, event: &TouchEvent) -> bool {
        let Some(frame) = TouchFrame::analyse(&event.contacts) else {
            trace_if_enabled!("Касание без жеста: {}", event);
            return false;
        };

        if frame.is_select {
            if let Some(window) = self.tools.window_at(frame.centroid) {
                self.tools.select_active_window(window);
            }
        }

        if frame.count != GESTURE_CONTACTS {
            return false;
        }

        let mut consumed = false;
        if frame.is_drag {
            self.pinch(frame.extent);
            consumed = true;
        }

        self.previous = frame.extent;
        consumed
    }

    fn pinch(&self, extent: PinchExtent) {
        let Some(window) = self.tools.active_window() else {
            return;
        };
        let Some(rect) = self.tools.window_geometry(window) else {
            return;
        };

        let delta = SizeDelta::new(
            extent.width.saturating_sub(self.previous.width),
            extent.height.saturating_sub(self.previous.height),
        );
        let movement = Displacement::new(
            extent.left.saturating_sub(self.previous.left),
            extent.top.saturating_sub(self.previous.top),
        );

        debug_if_enabled!("Щипок {}: сдвиг {}, размер {:+}/{:+}", window, movement, delta.dw, delta.dh);
        resize(
            self.tools.as_ref(),
            window,
            rect.top_left + movement,
            rect.size.resized(delta, self.minimum),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;
    use crate::services::tools::{InMemoryTools, ToolCall, WindowId};

    const MINIMUM: Size = Size::new(5, 5);

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn setup() -> (Arc<InMemoryTools>, WindowId, TouchGesture) {
        let tools = Arc::new(InMemoryTools::new(None));
        let id = tools.add_window(
            "term",
            "t",
            Rectangle::new(Point::new(0, 0), Size::new(100, 100)),
        );
        let gesture = TouchGesture::new(tools.clone(), MINIMUM);
        (tools, id, gesture)
    }

    #[test]
    fn test_three_fresh_contacts_select_by_centroid() {
        let contacts = TouchEvent::uniform(&points(&[(0, 0), (10, 0), (5, 10)]), TouchAction::Down);
        let frame = TouchFrame::analyse(&contacts.contacts).unwrap();

        assert_eq!(frame.centroid, Point::new(5, 3));
        assert!(!frame.is_drag);
        assert!(frame.is_select);
        assert_eq!(
            frame.extent,
            PinchExtent { left: 0, top: 0, width: 10, height: 10 }
        );
    }

    #[test]
    fn test_moving_contacts_are_not_select() {
        let event = TouchEvent::uniform(&points(&[(0, 0), (20, 0), (5, 10)]), TouchAction::Change);
        let frame = TouchFrame::analyse(&event.contacts).unwrap();

        assert!(frame.is_drag);
        assert!(!frame.is_select);
    }

    #[test]
    fn test_empty_event_is_not_a_gesture() {
        let (tools, _id, mut gesture) = setup();

        assert!(TouchFrame::analyse(&[]).is_none());
        assert!(!gesture.handle(&TouchEvent::uniform(&[], TouchAction::Down)));
        assert!(tools.calls().is_empty());
    }

    #[test]
    fn test_extent_is_order_independent() {
        let a = TouchEvent::uniform(&points(&[(30, 5), (0, 40), (10, 0)]), TouchAction::Change);
        let b = TouchEvent::uniform(&points(&[(0, 40), (10, 0), (30, 5)]), TouchAction::Change);

        let extent = PinchExtent { left: 0, top: 0, width: 30, height: 40 };
        assert_eq!(TouchFrame::analyse(&a.contacts).unwrap().extent, extent);
        assert_eq!(TouchFrame::analyse(&b.contacts).unwrap().extent, extent);
    }

    #[test]
    fn test_tap_selects_window_under_centroid() {
        let (tools, id, mut gesture) = setup();

        let event = TouchEvent::uniform(&points(&[(0, 0), (10, 0), (5, 10)]), TouchAction::Down);
        assert!(!gesture.handle(&event));

        assert_eq!(tools.active_window(), Some(id));
        assert_eq!(
            gesture.previous_extent(),
            PinchExtent { left: 0, top: 0, width: 10, height: 10 }
        );
    }

    #[test]
    fn test_pinch_grows_width() {
        let (tools, id, mut gesture) = setup();

        gesture.handle(&TouchEvent::uniform(
            &points(&[(0, 0), (10, 0), (5, 10)]),
            TouchAction::Down,
        ));
        tools.clear_calls();

        let event = TouchEvent::uniform(&points(&[(0, 0), (20, 0), (5, 10)]), TouchAction::Change);
        assert!(gesture.handle(&event));

        let window = tools.window(id).unwrap();
        assert_eq!(window.size, Size::new(110, 100));
        assert_eq!(window.top_left, Point::new(0, 0));
        assert_eq!(
            gesture.previous_extent(),
            PinchExtent { left: 0, top: 0, width: 20, height: 10 }
        );
    }

    #[test]
    fn test_three_finger_drag_moves_window() {
        let (tools, id, mut gesture) = setup();

        gesture.handle(&TouchEvent::uniform(
            &points(&[(10, 10), (20, 10), (15, 20)]),
            TouchAction::Down,
        ));
        gesture.handle(&TouchEvent::uniform(
            &points(&[(40, 30), (50, 30), (45, 40)]),
            TouchAction::Change,
        ));

        let window = tools.window(id).unwrap();
        assert_eq!(window.top_left, Point::new(30, 20));
        assert_eq!(window.size, Size::new(100, 100));
    }

    #[test]
    fn test_pinch_shrink_is_floored() {
        let (tools, id, mut gesture) = setup();
        tools.select_active_window(id);

        gesture.handle(&TouchEvent::uniform(
            &points(&[(0, 0), (500, 0), (250, 500)]),
            TouchAction::Down,
        ));
        gesture.handle(&TouchEvent::uniform(
            &points(&[(0, 0), (10, 0), (5, 10)]),
            TouchAction::Change,
        ));

        assert_eq!(tools.window(id).unwrap().size, MINIMUM);
    }

    #[test]
    fn test_lifted_contact_leaves_state_untouched() {
        let (tools, _id, mut gesture) = setup();

        gesture.handle(&TouchEvent::uniform(
            &points(&[(0, 0), (10, 0), (5, 10)]),
            TouchAction::Down,
        ));
        gesture.handle(&TouchEvent::uniform(
            &points(&[(2, 2), (14, 2), (7, 12)]),
            TouchAction::Change,
        ));
        let before = gesture.previous_extent();
        tools.clear_calls();

        let lifted = TouchEvent::new([
            Contact::new(0, Point::new(50, 50), TouchAction::Change),
            Contact::new(1, Point::new(90, 50), TouchAction::Up),
            Contact::new(2, Point::new(70, 90), TouchAction::Change),
        ]);
        assert!(!gesture.handle(&lifted));
        assert_eq!(gesture.previous_extent(), before);
        assert!(tools.calls().is_empty());
    }

    #[test]
    fn test_two_and_four_fingers_only_select() {
        let (tools, id, mut gesture) = setup();

        for coords in [
            &[(0, 0), (10, 10)][..],
            &[(0, 0), (10, 0), (0, 10), (10, 10)][..],
        ] {
            assert!(!gesture.handle(&TouchEvent::uniform(&points(coords), TouchAction::Down)));
            assert!(!gesture.handle(&TouchEvent::uniform(&points(coords), TouchAction::Change)));
        }

        assert_eq!(tools.calls(), vec![ToolCall::SelectActive(id), ToolCall::SelectActive(id)]);
        assert_eq!(gesture.previous_extent(), PinchExtent::default());
    }

    #[test]
    fn test_far_apart_contacts_saturate_extent() {
        let (tools, id, mut gesture) = setup();
        tools.select_active_window(id);

        let wide = points(&[(-2_000_000_000, 0), (2_000_000_000, 0), (0, 10)]);
        let frame = TouchFrame::analyse(&TouchEvent::uniform(&wide, TouchAction::Down).contacts)
            .unwrap();
        assert_eq!(frame.extent.width, i32::MAX);
        assert_eq!(frame.extent.height, 10);

        gesture.handle(&TouchEvent::uniform(&points(&[(0, 0), (10, 0), (5, 10)]), TouchAction::Down));
        assert!(gesture.handle(&TouchEvent::uniform(&wide, TouchAction::Change)));
        assert!(gesture.handle(&TouchEvent::uniform(
            &points(&[(0, 0), (10, 0), (5, 10)]),
            TouchAction::Change,
        )));

        let window = tools.window(id).unwrap();
        assert!(window.size.width >= MINIMUM.width);
        assert!(window.size.height >= MINIMUM.height);
    }

    #[test]
    fn test_drag_without_active_window_is_consumed() {
        let tools = Arc::new(InMemoryTools::new(None));
        let mut gesture = TouchGesture::new(tools.clone(), MINIMUM);

        let event = TouchEvent::uniform(&points(&[(0, 0), (10, 0), (5, 10)]), TouchAction::Change);
        assert!(gesture.handle(&event));
        assert!(tools.calls().is_empty());
    }
}
