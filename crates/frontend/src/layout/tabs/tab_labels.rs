use contracts::system::permissions::Screen;

/// Заголовок таба, для неизвестного ключа "Pestaña".
pub fn tab_label_for_key(key: &str) -> &'static str {
    Screen::from_tab_key(key)
        .map(Screen::label)
        .unwrap_or("Pestaña")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_come_from_screens() {
        assert_eq!(tab_label_for_key("a006_color"), "Colores");
        assert_eq!(tab_label_for_key("sys_work_groups"), "Grupos de trabajo");
        assert_eq!(tab_label_for_key("d400_monthly_summary"), "Pestaña");
    }
}
