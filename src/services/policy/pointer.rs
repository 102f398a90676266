use crate::events::{PointerAction, PointerButtons, PointerEvent};
use crate::geometry::{Displacement, Point, Rectangle, Size};
use crate::services::tools::{WindowId, WindowManagerTools};
use crate::{debug_if_enabled, trace_if_enabled};
use std::sync::Arc;

use super::resize::resize;

/// Режим ресайза указателем.
///
/// Углы определяются один раз в начале ресайза и держатся, пока
/// средняя кнопка с Alt не отпущена, поэтому окно не "перескакивает"
/// на другой угол, когда курсор пересекает его центр.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeMode {
    #[default]
    Idle,
    Resizing {
        /// Левый край следует за курсором, правый неподвижен
        moves_left: bool,
        /// Верхний край следует за курсором, нижний неподвижен
        moves_top: bool,
    },
}

impl ResizeMode {
    /// Выбрать неподвижный угол: самый дальний от курсора.
    ///
    /// Кандидаты проверяются в порядке bottom-right, top-right,
    /// bottom-left, top-left; при равенстве остаётся более ранний.
    pub fn detect(rect: Rectangle, cursor: Point) -> Self {
        let mut anchor = rect.bottom_right();

        for corner in [rect.top_right(), rect.bottom_left(), rect.top_left] {
            if (cursor - anchor).length_squared() < (cursor - corner).length_squared() {
                anchor = corner;
            }
        }

        ResizeMode::Resizing {
            moves_left: anchor.x != rect.top_left.x,
            moves_top: anchor.y != rect.top_left.y,
        }
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, ResizeMode::Resizing { .. })
    }
}

/// Посчитать новые позицию и размер окна для ресайза указателем.
///
/// Размер никогда не опускается ниже `minimum`. Позиция меняется только
/// по осям, где движется левый/верхний край.
pub fn pointer_resize_target(
    rect: Rectangle,
    movement: Displacement,
    moves_left: bool,
    moves_top: bool,
    minimum: Size,
) -> (Point, Size) {
    let mut movement = movement;

    let mut width = if moves_left {
        rect.size.width.saturating_sub(movement.dx)
    } else {
        rect.size.width.saturating_add(movement.dx)
    };
    let mut height = if moves_top {
        rect.size.height.saturating_sub(movement.dy)
    } else {
        rect.size.height.saturating_add(movement.dy)
    };

    if width < minimum.width {
        width = minimum.width;
        if movement.dx > 0 {
            movement.dx = 0;
        }
    }

    if height < minimum.height {
        height = minimum.height;
        if movement.dy > 0 {
            movement.dy = 0;
        }
    }

    if !moves_left {
        movement.dx = 0;
    }

    if !moves_top {
        movement.dy = 0;
    }

    (rect.top_left + movement, Size::new(width, height))
}

/// Перемещение окна Alt+левая кнопка и ресайз Alt+средняя кнопка
pub struct PointerGesture {
    tools: Arc<dyn WindowManagerTools>,
    minimum: Size,
    previous_cursor: Point,
    mode: ResizeMode,
}

impl PointerGesture {
    pub fn new(tools: Arc<dyn WindowManagerTools>, minimum: Size) -> Self {
        Self {
            tools,
            minimum,
            previous_cursor: Point::default(),
            mode: ResizeMode::Idle,
        }
    }

    pub fn mode(&self) -> ResizeMode {
        self.mode
    }

    pub fn previous_cursor(&self) -> Point {
        self.previous_cursor
    }

    /// Обработать событие указателя. Возвращает `true`, если событие
    /// поглощено жестом.
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        let cursor = event.position;
        let mut consumed = false;
        let mut resized = None;

        if event.action == PointerAction::Motion && event.modifiers.is_alt_only() {
            if event.is_pressed(PointerButtons::PRIMARY) {
                self.drag(cursor);
                consumed = true;
            }

            if event.is_pressed(PointerButtons::TERTIARY) {
                resized = self.resize(cursor);
                consumed = true;
            }
        }

        // Любое событие без ресайза сбрасывает режим
        self.mode = resized.unwrap_or(ResizeMode::Idle);
        self.previous_cursor = cursor;

        trace_if_enabled!("Указатель {} -> {:?}, consumed={}", cursor, self.mode, consumed);
        consumed
    }

    /// Окно берётся под предыдущей позицией курсора: нажатие могло
    /// начаться на окне, а первое движение уже вывести курсор за край.
    fn drag(&self, cursor: Point) {
        let Some(target) = self.tools.window_at(self.previous_cursor) else {
            return;
        };

        self.tools.select_active_window(target);
        let movement = cursor - self.previous_cursor;
        debug_if_enabled!("Перетаскивание {} на {}", target, movement);
        self.tools.drag_active_window(movement);
    }

    fn resize(&self, cursor: Point) -> Option<ResizeMode> {
        let window = self.resize_target()?;
        let rect = self.tools.window_geometry(window)?;

        let mode = match self.mode {
            ResizeMode::Idle => {
                let mode = ResizeMode::detect(rect, self.previous_cursor);
                debug_if_enabled!("Начало ресайза {} из {}: {:?}", window, self.previous_cursor, mode);
                mode
            }
            resizing => resizing,
        };

        let ResizeMode::Resizing { moves_left, moves_top } = mode else {
            return None;
        };

        let (top_left, size) = pointer_resize_target(
            rect,
            cursor - self.previous_cursor,
            moves_left,
            moves_top,
            self.minimum,
        );
        resize(self.tools.as_ref(), window, top_left, size);

        Some(mode)
    }

    fn resize_target(&self) -> Option<WindowId> {
        if self.mode.is_resizing() {
            return self.tools.active_window();
        }

        let target = self.tools.window_at(self.previous_cursor)?;
        self.tools.select_active_window(target)
    }
}
