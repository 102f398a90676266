use crate::config::DesktopConfig;
use crate::geometry::{Displacement, Point, Rectangle, Size};
use parking_lot::RwLock;
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, info, warn};

use super::r#trait::{WindowId, WindowManagerTools};

/// Окно рабочего стола в памяти
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app: String,
    pub title: String,
    pub top_left: Point,
    pub size: Size,
}

impl WindowRecord {
    pub fn rectangle(&self) -> Rectangle {
        Rectangle::new(self.top_left, self.size)
    }
}

/// Сколько последних вызовов хранит журнал
pub const CALL_JOURNAL_LIMIT: usize = 256;

/// Журнал изменяющих вызовов, полученных хостом
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    SelectActive(WindowId),
    Drag(Displacement),
    ConstrainResize(WindowId),
    Modify {
        window: WindowId,
        top_left: Point,
        size: Size,
    },
    Close(WindowId),
    FocusNextApplication,
    FocusNextWithinApplication,
}

#[derive(Debug, Default)]
struct Desktop {
    // Порядок наложения: последний элемент сверху
    windows: Vec<WindowRecord>,
    active: Option<WindowId>,
    bounds: Option<Rectangle>,
    next_id: u64,
    calls: VecDeque<ToolCall>,
}

impl Desktop {
    fn record(&mut self, call: ToolCall) {
        if self.calls.len() == CALL_JOURNAL_LIMIT {
            self.calls.pop_front();
        }
        self.calls.push_back(call);
    }

    fn position(&self, window: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == window)
    }

    fn get(&self, window: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window)
    }

    fn active_record(&self) -> Option<&WindowRecord> {
        self.active.and_then(|id| self.get(id))
    }

    fn raise_and_activate(&mut self, window: WindowId) -> Option<WindowId> {
        let index = self.position(window)?;
        let record = self.windows.remove(index);
        self.windows.push(record);
        self.active = Some(window);
        Some(window)
    }

    /// Приложения в порядке появления их первого окна
    fn applications(&self) -> Vec<String> {
        let mut ordered: Vec<&WindowRecord> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.id);

        let mut seen = BTreeSet::new();
        ordered
            .into_iter()
            .filter(|w| seen.insert(w.app.as_str()))
            .map(|w| w.app.clone())
            .collect()
    }
}

/// Рабочий стол в памяти процесса.
///
/// Используется бинарником вместо настоящего композитора и тестами как
/// записывающий хост.
#[derive(Debug, Default)]
pub struct InMemoryTools {
    desktop: RwLock<Desktop>,
}

impl InMemoryTools {
    pub fn new(bounds: Option<Rectangle>) -> Self {
        Self {
            desktop: RwLock::new(Desktop {
                bounds,
                ..Desktop::default()
            }),
        }
    }

    pub fn from_config(config: &DesktopConfig) -> Self {
        let tools = Self::new(config.bounds);
        for window in &config.windows {
            tools.add_window(
                &window.app,
                &window.title,
                Rectangle::new(
                    Point::new(window.x, window.y),
                    Size::new(window.width, window.height),
                ),
            );
        }
        info!("Рабочий стол инициализирован: {} окон", config.windows.len());
        tools
    }

    /// Добавить окно поверх остальных. Новое окно не становится активным.
    pub fn add_window(&self, app: &str, title: &str, rect: Rectangle) -> WindowId {
        let mut desktop = self.desktop.write();
        desktop.next_id += 1;
        let id = WindowId(desktop.next_id);
        desktop.windows.push(WindowRecord {
            id,
            app: app.to_string(),
            title: title.to_string(),
            top_left: rect.top_left,
            size: rect.size,
        });
        debug!("Добавлено окно {} \"{}\" ({}) {}", id, title, app, rect);
        id
    }

    /// Снимок окон в порядке наложения (снизу вверх)
    pub fn windows(&self) -> Vec<WindowRecord> {
        self.desktop.read().windows.clone()
    }

    pub fn window(&self, window: WindowId) -> Option<WindowRecord> {
        self.desktop.read().get(window).cloned()
    }

    /// Последние вызовы, не больше `CALL_JOURNAL_LIMIT`
    pub fn calls(&self) -> Vec<ToolCall> {
        self.desktop.read().calls.iter().cloned().collect()
    }

    pub fn clear_calls(&self) {
        self.desktop.write().calls.clear();
    }
}

impl WindowManagerTools for InMemoryTools {
    fn window_at(&self, point: Point) -> Option<WindowId> {
        self.desktop
            .read()
            .windows
            .iter()
            .rev()
            .find(|w| w.rectangle().contains(point))
            .map(|w| w.id)
    }

    fn select_active_window(&self, window: WindowId) -> Option<WindowId> {
        let mut desktop = self.desktop.write();
        desktop.record(ToolCall::SelectActive(window));

        if desktop.active == Some(window) {
            return Some(window);
        }
        match desktop.raise_and_activate(window) {
            Some(id) => {
                info!("Активное окно: {}", id);
                Some(id)
            }
            None => {
                warn!("Попытка активировать неизвестное окно {}", window);
                None
            }
        }
    }

    fn active_window(&self) -> Option<WindowId> {
        let desktop = self.desktop.read();
        desktop.active_record().map(|w| w.id)
    }

    fn window_geometry(&self, window: WindowId) -> Option<Rectangle> {
        self.desktop.read().get(window).map(WindowRecord::rectangle)
    }

    fn drag_active_window(&self, movement: Displacement) {
        let mut desktop = self.desktop.write();
        desktop.record(ToolCall::Drag(movement));

        let Some(active) = desktop.active else {
            return;
        };
        if let Some(record) = desktop.windows.iter_mut().find(|w| w.id == active) {
            record.top_left = record.top_left + movement;
            info!("Перемещение {} на {} -> {}", record.id, movement, record.top_left);
        }
    }

    fn constrain_resize(&self, window: WindowId, top_left: &mut Point, size: &mut Size) {
        let mut desktop = self.desktop.write();
        desktop.record(ToolCall::ConstrainResize(window));

        // Собственный пол хоста: окно не может исчезнуть
        size.width = size.width.max(1);
        size.height = size.height.max(1);

        // Хотя бы один пиксель окна остаётся в пределах экрана
        if let Some(bounds) = desktop.bounds {
            let min_x = bounds.top_left.x.saturating_sub(size.width - 1);
            let max_x = bounds.top_left.x.saturating_add(bounds.size.width - 1);
            let min_y = bounds.top_left.y.saturating_sub(size.height - 1);
            let max_y = bounds.top_left.y.saturating_add(bounds.size.height - 1);
            top_left.x = top_left.x.clamp(min_x, max_x);
            top_left.y = top_left.y.clamp(min_y, max_y);
        }
    }

    fn modify_window_geometry(&self, window: WindowId, top_left: Point, size: Size) {
        let mut desktop = self.desktop.write();
        desktop.record(ToolCall::Modify {
            window,
            top_left,
            size,
        });

        if let Some(record) = desktop.windows.iter_mut().find(|w| w.id == window) {
            record.top_left = top_left;
            record.size = size;
            info!("Геометрия {} -> {} {}", window, top_left, size);
        }
    }

    fn ask_client_to_close(&self, window: WindowId) {
        let mut desktop = self.desktop.write();
        desktop.record(ToolCall::Close(window));

        let Some(index) = desktop.position(window) else {
            return;
        };
        let record = desktop.windows.remove(index);
        info!("Клиент закрыл окно {} \"{}\"", record.id, record.title);

        if desktop.active == Some(window) {
            desktop.active = desktop.windows.last().map(|w| w.id);
        }
    }

    fn focus_next_application(&self) {
        let mut desktop = self.desktop.write();
        desktop.record(ToolCall::FocusNextApplication);

        let apps = desktop.applications();
        if apps.is_empty() {
            return;
        }

        let next = match desktop.active_record() {
            Some(active) => {
                let current = apps.iter().position(|app| *app == active.app).unwrap_or(0);
                &apps[(current + 1) % apps.len()]
            }
            None => &apps[0],
        };

        let target = desktop
            .windows
            .iter()
            .rev()
            .find(|w| w.app == *next)
            .map(|w| w.id);
        if let Some(target) = target {
            desktop.raise_and_activate(target);
            info!("Фокус на приложение {}: {}", next, target);
        }
    }

    fn focus_next_within_application(&self) {
        let mut desktop = self.desktop.write();
        desktop.record(ToolCall::FocusNextWithinApplication);

        let Some(active) = desktop.active_record().cloned() else {
            return;
        };

        let mut siblings: Vec<WindowId> = desktop
            .windows
            .iter()
            .filter(|w| w.app == active.app)
            .map(|w| w.id)
            .collect();
        siblings.sort();

        let current = siblings.iter().position(|&id| id == active.id).unwrap_or(0);
        let next = siblings[(current + 1) % siblings.len()];
        if next != active.id {
            desktop.raise_and_activate(next);
            info!("Фокус на следующее окно {} ({})", next, active.app);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_window_at_prefers_topmost() {
        let tools = InMemoryTools::new(None);
        let below = tools.add_window("term", "below", rect(0, 0, 100, 100));
        let above = tools.add_window("term", "above", rect(50, 50, 100, 100));

        assert_eq!(tools.window_at(Point::new(10, 10)), Some(below));
        assert_eq!(tools.window_at(Point::new(60, 60)), Some(above));
        assert_eq!(tools.window_at(Point::new(500, 500)), None);

        tools.select_active_window(below);
        assert_eq!(tools.window_at(Point::new(60, 60)), Some(below));
    }

    #[test]
    fn test_select_unknown_window() {
        let tools = InMemoryTools::new(None);
        assert_eq!(tools.select_active_window(WindowId(42)), None);
        assert_eq!(tools.active_window(), None);
    }

    #[test]
    fn test_drag_moves_active_window() {
        let tools = InMemoryTools::new(None);
        let id = tools.add_window("term", "t", rect(10, 10, 50, 50));

        // Без активного окна перемещать нечего
        tools.drag_active_window(Displacement::new(5, 5));
        assert_eq!(tools.window(id).unwrap().top_left, Point::new(10, 10));

        tools.select_active_window(id);
        tools.drag_active_window(Displacement::new(5, -3));
        assert_eq!(tools.window(id).unwrap().top_left, Point::new(15, 7));
    }

    #[test]
    fn test_constrain_resize_keeps_window_on_screen() {
        let tools = InMemoryTools::new(Some(rect(0, 0, 800, 600)));
        let id = tools.add_window("term", "t", rect(10, 10, 50, 50));

        let mut top_left = Point::new(-500, 900);
        let mut size = Size::new(0, 40);
        tools.constrain_resize(id, &mut top_left, &mut size);

        assert_eq!(size, Size::new(1, 40));
        assert_eq!(top_left, Point::new(0, 599));
    }

    #[test]
    fn test_close_activates_topmost_remaining() {
        let tools = InMemoryTools::new(None);
        let first = tools.add_window("a", "first", rect(0, 0, 10, 10));
        let second = tools.add_window("b", "second", rect(0, 0, 10, 10));

        tools.select_active_window(second);
        tools.ask_client_to_close(second);

        assert_eq!(tools.active_window(), Some(first));
        assert!(tools.window(second).is_none());
    }

    #[test]
    fn test_focus_next_application_cycles() {
        let tools = InMemoryTools::new(None);
        let term = tools.add_window("term", "t1", rect(0, 0, 10, 10));
        let browser = tools.add_window("browser", "b1", rect(0, 0, 10, 10));
        let editor = tools.add_window("editor", "e1", rect(0, 0, 10, 10));

        tools.select_active_window(term);
        tools.focus_next_application();
        assert_eq!(tools.active_window(), Some(browser));
        tools.focus_next_application();
        assert_eq!(tools.active_window(), Some(editor));
        tools.focus_next_application();
        assert_eq!(tools.active_window(), Some(term));
    }

    #[test]
    fn test_focus_next_within_application_cycles() {
        let tools = InMemoryTools::new(None);
        let t1 = tools.add_window("term", "t1", rect(0, 0, 10, 10));
        let _other = tools.add_window("browser", "b1", rect(0, 0, 10, 10));
        let t2 = tools.add_window("term", "t2", rect(0, 0, 10, 10));

        tools.select_active_window(t1);
        tools.focus_next_within_application();
        assert_eq!(tools.active_window(), Some(t2));
        tools.focus_next_within_application();
        assert_eq!(tools.active_window(), Some(t1));
    }

    #[test]
    fn test_calls_are_recorded() {
        let tools = InMemoryTools::new(None);
        let id = tools.add_window("term", "t", rect(0, 0, 10, 10));

        tools.window_at(Point::new(1, 1));
        tools.select_active_window(id);
        tools.focus_next_application();

        assert_eq!(
            tools.calls(),
            vec![ToolCall::SelectActive(id), ToolCall::FocusNextApplication]
        );

        tools.clear_calls();
        assert!(tools.calls().is_empty());
    }

    #[test]
    fn test_call_journal_keeps_only_recent_calls() {
        let tools = InMemoryTools::new(None);
        let id = tools.add_window("term", "t", rect(0, 0, 10, 10));
        tools.select_active_window(id);

        for step in 0..(CALL_JOURNAL_LIMIT as i32 + 10) {
            tools.drag_active_window(Displacement::new(step, 0));
        }

        let calls = tools.calls();
        assert_eq!(calls.len(), CALL_JOURNAL_LIMIT);
        assert_eq!(calls[0], ToolCall::Drag(Displacement::new(10, 0)));
        assert_eq!(
            calls.last(),
            Some(&ToolCall::Drag(Displacement::new(CALL_JOURNAL_LIMIT as i32 + 9, 0)))
        );
    }
}
