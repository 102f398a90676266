use thiserror::Error;

#[derive(Error, Debug)]
pub enum WmError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Неизвестная клавиша: {0}")]
    UnknownKey(String),
}

pub type Result<T> = std::result::Result<T, WmError>;

// Удобный макрос для создания ошибок
#[macro_export]
macro_rules! wm_error {
    (unknown_key, $($arg:tt)*) => {
        $crate::error::WmError::UnknownKey(format!($($arg)*))
    };
}
