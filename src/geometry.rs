use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Точка в координатах экрана
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Смещение между двумя точками
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Квадрат длины в i64, чтобы не переполниться на больших экранах
    pub fn length_squared(&self) -> i64 {
        let dx = i64::from(self.dx);
        let dy = i64::from(self.dy);
        dx * dx + dy * dy
    }
}

impl fmt::Display for Displacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:+}, {:+}]", self.dx, self.dy)
    }
}

impl Sub for Point {
    type Output = Displacement;

    fn sub(self, rhs: Point) -> Displacement {
        Displacement::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Add<Displacement> for Point {
    type Output = Point;

    fn add(self, rhs: Displacement) -> Point {
        Point::new(self.x.saturating_add(rhs.dx), self.y.saturating_add(rhs.dy))
    }
}

/// Размер окна. Ширина и высота не бывают отрицательными.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Применить приращение и прижать результат к минимальному размеру
    pub fn resized(self, delta: SizeDelta, minimum: Size) -> Size {
        Size::new(
            self.width.saturating_add(delta.dw).max(minimum.width),
            self.height.saturating_add(delta.dh).max(minimum.height),
        )
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Приращение ширины и высоты
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SizeDelta {
    pub dw: i32,
    pub dh: i32,
}

impl SizeDelta {
    pub const fn new(dw: i32, dh: i32) -> Self {
        Self { dw, dh }
    }
}

/// Прямоугольник окна: левый верхний угол плюс размер
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub top_left: Point,
    pub size: Size,
}

impl Rectangle {
    pub const fn new(top_left: Point, size: Size) -> Self {
        Self { top_left, size }
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top_left.y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.top_left.x, self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    fn right(&self) -> i32 {
        self.top_left.x.saturating_add(self.size.width)
    }

    fn bottom(&self) -> i32 {
        self.top_left.y.saturating_add(self.size.height)
    }

    /// Полуоткрытая проверка: правая и нижняя границы не входят
    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        let left = i64::from(self.top_left.x);
        let top = i64::from(self.top_left.y);

        x >= left
            && y >= top
            && x < left + i64::from(self.size.width)
            && y < top + i64::from(self.size.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.top_left, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_algebra() {
        let a = Point::new(10, 20);
        let b = Point::new(4, 25);

        assert_eq!(a - b, Displacement::new(6, -5));
        assert_eq!(b + (a - b), a);
        assert_eq!((a - b).length_squared(), 61);
    }

    #[test]
    fn test_size_resized_is_floored() {
        let minimum = Size::new(5, 5);
        let size = Size::new(20, 30);

        assert_eq!(size.resized(SizeDelta::new(10, -5), minimum), Size::new(30, 25));
        assert_eq!(size.resized(SizeDelta::new(-100, -31), minimum), minimum);
        assert_eq!(size.resized(SizeDelta::new(-16, 0), minimum), Size::new(5, 30));
    }

    #[test]
    fn test_rectangle_corners() {
        let rect = Rectangle::new(Point::new(10, 20), Size::new(100, 50));

        assert_eq!(rect.top_right(), Point::new(110, 20));
        assert_eq!(rect.bottom_left(), Point::new(10, 70));
        assert_eq!(rect.bottom_right(), Point::new(110, 70));
    }

    #[test]
    fn test_rectangle_contains_is_half_open() {
        let rect = Rectangle::new(Point::new(0, 0), Size::new(10, 10));

        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(9, 9)));
        assert!(!rect.contains(Point::new(10, 5)));
        assert!(!rect.contains(Point::new(5, 10)));
        assert!(!rect.contains(Point::new(-1, 5)));
    }

    #[test]
    fn test_arithmetic_saturates_at_screen_extremes() {
        let far_left = Point::new(i32::MIN, 0);
        let far_right = Point::new(i32::MAX, 0);

        assert_eq!(far_right - far_left, Displacement::new(i32::MAX, 0));
        assert_eq!(far_right + Displacement::new(10, 0), far_right);
        assert_eq!(
            Size::new(i32::MAX, 10).resized(SizeDelta::new(1, 0), Size::new(5, 5)),
            Size::new(i32::MAX, 10)
        );

        let huge = Rectangle::new(Point::new(i32::MAX - 5, 0), Size::new(100, 10));
        assert_eq!(huge.bottom_right(), Point::new(i32::MAX, 10));
        assert!(huge.contains(Point::new(i32::MAX, 5)));
    }
}
