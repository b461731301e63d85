/// Утилиты для работы со списками (поиск, сортировка)
use std::cmp::Ordering;

/// Trait для строк таблицы, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive substring match. An empty filter matches everything.
pub fn text_matches(text: &str, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&filter.to_lowercase())
}

/// Сравнение строк с учётом локали браузера (`String.prototype.localeCompare`)
#[cfg(target_arch = "wasm32")]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new())
        .cmp(&0)
}

/// Вне браузера: сравнение без учёта регистра, затем побайтовое
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Сортирует список по ключу, только по возрастанию
pub fn sort_by_text<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| locale_cmp(key(a), key(b)));
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_column: Option<usize>, column: usize) -> &'static str {
    if current_column == Some(column) {
        " ▲"
    } else {
        " ⇅"
    }
}

/// CSS класс индикатора сортировки
pub fn get_sort_class(current_column: Option<usize>, column: usize) -> &'static str {
    if current_column == Some(column) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}
