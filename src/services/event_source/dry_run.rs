use crate::config::{Config, DesktopConfig};
use crate::error::Result;
use crate::events::{
    InputEvent, KeyboardEvent, Modifiers, PointerButtons, PointerEvent, TouchAction, TouchEvent,
};
use crate::geometry::Point;
use crate::services::EventDispatcher;
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::info;

use super::r#trait::EventSourceTrait;

/// Проигрывает встроенный сценарий вместо реального ввода
pub struct DryRunEventSource {
    config: Arc<Config>,
    dispatcher: EventDispatcher,
}

impl DryRunEventSource {
    pub fn new(config: Arc<Config>, dispatcher: EventDispatcher) -> Self {
        Self { config, dispatcher }
    }

    async fn run_impl(mut self) -> Result<()> {
        info!("Dry-run режим - события берутся из встроенного сценария");

        let script = demo_script(&self.config.desktop);
        let mut ticker = interval(Duration::from_millis(self.config.source.replay_interval_ms));

        for (step, event) in script.iter().enumerate() {
            ticker.tick().await;
            let consumed = self.dispatcher.dispatch(event);
            info!("Dry-run #{}: {} -> consumed={}", step + 1, event, consumed);
        }

        info!("Сценарий завершён: {}", self.dispatcher.stats());
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventSourceTrait for DryRunEventSource {
    async fn run(self: Box<Self>) -> Result<()> {
        (*self).run_impl().await
    }
}

/// Сценарий строится от первого окна рабочего стола: клик, Alt-перетаскивание,
/// ресайз средней кнопкой от правого нижнего угла, щипок тремя пальцами,
/// Alt+` , Alt+Tab и Alt+F4.
pub fn demo_script(desktop: &DesktopConfig) -> Vec<InputEvent> {
    let mut script = Vec::new();

    if let Some(window) = desktop.windows.first() {
        let center = Point::new(window.x + window.width / 2, window.y + window.height / 2);
        let corner = Point::new(window.x + window.width - 2, window.y + window.height - 2);

        // Клик и перетаскивание за центр
        script.push(InputEvent::Pointer(PointerEvent::button_down(
            center,
            PointerButtons::PRIMARY,
            Modifiers::ALT,
        )));
        for step in 1..=4 {
            script.push(InputEvent::Pointer(PointerEvent::motion(
                Point::new(center.x + step * 10, center.y + step * 5),
                PointerButtons::PRIMARY,
                Modifiers::ALT,
            )));
        }

        // Курсор к правому нижнему углу сдвинутого окна, затем ресайз
        let corner = Point::new(corner.x + 40, corner.y + 20);
        script.push(InputEvent::Pointer(PointerEvent::motion(
            corner,
            PointerButtons::empty(),
            Modifiers::empty(),
        )));
        for step in 1..=4 {
            script.push(InputEvent::Pointer(PointerEvent::motion(
                Point::new(corner.x + step * 15, corner.y + step * 10),
                PointerButtons::TERTIARY,
                Modifiers::ALT,
            )));
        }

        // Щипок тремя пальцами внутри окна
        let fingers = |spread: i32| {
            [
                Point::new(center.x + 40 - spread, center.y + 20),
                Point::new(center.x + 40 + spread, center.y + 20),
                Point::new(center.x + 40, center.y + 20 + spread),
            ]
        };
        script.push(InputEvent::Touch(TouchEvent::uniform(&fingers(20), TouchAction::Down)));
        for spread in [30, 40, 50] {
            script.push(InputEvent::Touch(TouchEvent::uniform(&fingers(spread), TouchAction::Change)));
        }
        script.push(InputEvent::Touch(TouchEvent::uniform(&fingers(50), TouchAction::Up)));
    }

    script.push(InputEvent::Keyboard(KeyboardEvent::down(
        evdev::KeyCode::KEY_GRAVE,
        Modifiers::ALT,
    )));
    script.push(InputEvent::Keyboard(KeyboardEvent::down(
        evdev::KeyCode::KEY_TAB,
        Modifiers::ALT,
    )));
    // С Shift жест не срабатывает
    script.push(InputEvent::Keyboard(KeyboardEvent::down(
        evdev::KeyCode::KEY_TAB,
        Modifiers::ALT | Modifiers::SHIFT,
    )));
    script.push(InputEvent::Keyboard(KeyboardEvent::down(
        evdev::KeyCode::KEY_F4,
        Modifiers::ALT,
    )));

    script
}
