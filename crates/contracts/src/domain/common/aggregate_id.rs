/// Backend primary keys are plain integers.
pub type EntityId = i64;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId: Sized + Copy {
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_from_tab_keys() {
        assert_eq!(<i64 as AggregateId>::from_string("42"), Ok(42));
        assert_eq!(<i64 as AggregateId>::from_string(" 7 "), Ok(7));
        assert!(<i64 as AggregateId>::from_string("abc").is_err());
        assert_eq!(12_i64.as_string(), "12");
    }
}
