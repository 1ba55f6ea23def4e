//! Расчёт окна номеров страниц для навигации по списку.
//!
//! Чистая функция без состояния: по текущей странице и общему числу страниц
//! строит последовательность маркеров (номера страниц и многоточия),
//! которую рендерит `PaginationControls`.

/// Один элемент навигации: кликабельный номер страницы или разделитель
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Число соседних страниц, показываемых с каждой стороны от текущей
pub const DEFAULT_DELTA: usize = 2;

/// Строит окно страниц вокруг `current_page` (нумерация с 1).
///
/// Первая и последняя страницы присутствуют всегда; между ними — сплошной
/// диапазон `[current - delta, current + delta]`, обрезанный границами
/// списка. Пропуск длиной больше нуля сворачивается в `Ellipsis`, поэтому
/// многоточий в окне не больше двух.
///
/// При `total_pages <= 1` (включая 0) возвращается `[Page(1)]` — рендерить
/// ли навигацию для одной страницы, решает вызывающая сторона.
/// `current_page` вне диапазона приводится к ближайшей границе.
pub fn page_window(current_page: usize, total_pages: usize, delta: usize) -> Vec<PageMarker> {
    if total_pages <= 1 {
        return vec![PageMarker::Page(1)];
    }
    let current = current_page.clamp(1, total_pages);

    // Средний диапазон не захватывает граничные страницы 1 и total_pages
    let mid_start = current.saturating_sub(delta).max(2);
    let mid_end = current.saturating_add(delta).min(total_pages - 1);

    let mut window = vec![PageMarker::Page(1)];

    if mid_start > 2 {
        window.push(PageMarker::Ellipsis);
    }
    for page in mid_start..=mid_end {
        window.push(PageMarker::Page(page));
    }
    if current.saturating_add(delta) < total_pages - 1 {
        window.push(PageMarker::Ellipsis);
    }
    window.push(PageMarker::Page(total_pages));

    // Номера страниц идут по неубыванию, поэтому для уникальности достаточно
    // убрать соседние числовые дубли; многоточия дублями не считаются.
    window.dedup_by(|a, b| match (a, b) {
        (PageMarker::Page(x), PageMarker::Page(y)) => x == y,
        _ => false,
    });

    window
}

/// Разрешён ли переход на страницу `target` из `current`.
///
/// Переход за границы `[1, total_pages]` и переход на текущую страницу
/// запрещены: «назад» с первой страницы и «вперёд» с последней — no-op,
/// колбэк навигации вызывать не нужно.
pub fn page_change_allowed(target: usize, current: usize, total_pages: usize) -> bool {
    target >= 1 && target <= total_pages && target != current
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn test_window_at_start() {
        assert_eq!(
            page_window(1, 10, 2),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_window(5, 10, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(
            page_window(9, 10, 2),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_two_pages_no_ellipsis() {
        assert_eq!(page_window(1, 2, 2), vec![Page(1), Page(2)]);
        assert_eq!(page_window(2, 2, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn test_single_page() {
        assert_eq!(page_window(1, 1, 2), vec![Page(1)]);
    }

    #[test]
    fn test_zero_total_treated_as_single_page() {
        assert_eq!(page_window(1, 0, 2), vec![Page(1)]);
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(page_window(0, 10, 2), page_window(1, 10, 2));
        assert_eq!(page_window(99, 10, 2), page_window(10, 10, 2));
    }

    #[test]
    fn test_zero_delta() {
        assert_eq!(
            page_window(5, 10, 0),
            vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]
        );
    }

    /// Инварианты окна на сетке аргументов: числовые маркеры строго растут
    /// и уникальны, граничные страницы присутствуют, многоточий не больше двух
    #[test]
    fn test_window_invariants() {
        for total in 1..=30 {
            for current in 1..=total {
                for delta in 0..=4 {
                    let window = page_window(current, total, delta);

                    let pages: Vec<usize> = window
                        .iter()
                        .filter_map(|m| match m {
                            Page(p) => Some(*p),
                            Ellipsis => None,
                        })
                        .collect();

                    assert!(
                        pages.windows(2).all(|w| w[0] < w[1]),
                        "не по возрастанию: current={current} total={total} delta={delta}"
                    );
                    assert_eq!(pages.first(), Some(&1));
                    if total > 1 {
                        assert_eq!(pages.last(), Some(&total));
                    }
                    assert!(pages.iter().all(|p| *p >= 1 && *p <= total.max(1)));

                    let ellipses = window.iter().filter(|m| **m == Ellipsis).count();
                    assert!(ellipses <= 2);
                }
            }
        }
    }

    /// Окно детерминировано: повторный вызов даёт тот же результат
    #[test]
    fn test_window_is_pure() {
        assert_eq!(page_window(7, 42, 2), page_window(7, 42, 2));
    }

    /// Счётчики у правой границы usize не должны ронять расчёт
    #[test]
    fn test_window_near_usize_max() {
        let total = usize::MAX;
        assert_eq!(
            page_window(total, total, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(total - 2),
                Page(total - 1),
                Page(total)
            ]
        );
        assert_eq!(page_window(total - 1, total, 2).last(), Some(&Page(total)));
    }

    #[test]
    fn test_page_change_allowed_within_range() {
        assert!(page_change_allowed(2, 1, 10));
        assert!(page_change_allowed(10, 5, 10));
    }

    /// «Назад» с первой страницы и «вперёд» с последней — no-op
    #[test]
    fn test_page_change_blocked_at_boundaries() {
        assert!(!page_change_allowed(0, 1, 10));
        assert!(!page_change_allowed(11, 10, 10));
    }

    #[test]
    fn test_page_change_blocked_for_current_and_out_of_range() {
        assert!(!page_change_allowed(5, 5, 10));
        assert!(!page_change_allowed(99, 5, 10));
    }
}
