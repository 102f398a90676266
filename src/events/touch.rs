use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::Modifiers;

/// Действие отдельного касания в рамках события
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchAction {
    Down,
    Up,
    Change,
}

/// Одно активное касание
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i32,
    pub position: Point,
    pub action: TouchAction,
}

impl Contact {
    pub fn new(id: i32, position: Point, action: TouchAction) -> Self {
        Self {
            id,
            position,
            action,
        }
    }
}

/// Событие мультитача. Пять пальцев помещаются без аллокации.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub contacts: SmallVec<[Contact; 5]>,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl TouchEvent {
    pub fn new(contacts: impl IntoIterator<Item = Contact>) -> Self {
        Self {
            contacts: contacts.into_iter().collect(),
            modifiers: Modifiers::empty(),
        }
    }

    /// Все касания с одним и тем же действием, id по порядку
    pub fn uniform(points: &[Point], action: TouchAction) -> Self {
        Self::new(
            points
                .iter()
                .enumerate()
                .map(|(i, &position)| Contact::new(i as i32, position, action)),
        )
    }
}

impl fmt::Display for TouchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "touch x{}", self.contacts.len())?;
        for contact in &self.contacts {
            write!(f, " #{}:{:?}@{}", contact.id, contact.action, contact.position)?;
        }
        Ok(())
    }
}
