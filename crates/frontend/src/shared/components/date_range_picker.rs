use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

/// Выбор диапазона дат в два клика по календарю.
///
/// Первый клик ставит начало и сбрасывает конец; второй клик ставит конец,
/// нормализуя порядок так, чтобы start <= end независимо от порядка кликов.
/// Клик при уже выбранном полном диапазоне начинает новый диапазон.
/// Сравнения — по календарным дням, без часовых поясов.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn click(&mut self, day: NaiveDate) {
        match (self.start, self.end) {
            (Some(start), None) => {
                if day < start {
                    self.end = Some(start);
                    self.start = Some(day);
                } else {
                    self.end = Some(day);
                }
            }
            // первый клик, либо полный диапазон уже выбран — начинаем заново
            _ => {
                self.start = Some(day);
                self.end = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// День входит в выбранный диапазон (для подсветки в календаре)
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= day && day <= end,
            (Some(start), None) => day == start,
            _ => false,
        }
    }

    /// Диапазон "весь месяц" для кнопок быстрого выбора
    pub fn full_month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = month_end(year, month)?;
        Some(Self {
            start: Some(start),
            end: Some(end),
        })
    }
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_first - Duration::days(1))
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Январь",
        2 => "Февраль",
        3 => "Март",
        4 => "Апрель",
        5 => "Май",
        6 => "Июнь",
        7 => "Июль",
        8 => "Август",
        9 => "Сентябрь",
        10 => "Октябрь",
        11 => "Ноябрь",
        _ => "Декабрь",
    }
}

/// DateRangePicker - календарь с выбором периода в два клика
/// и кнопками быстрого выбора месяца. Стилизован под Thaw UI.
#[component]
pub fn DateRangePicker(
    /// Текущий выбранный диапазон
    selection: RwSignal<RangeSelection>,

    /// Опциональная метка для компонента
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let today = Utc::now().date_naive();
    let visible_year = RwSignal::new(today.year());
    let visible_month = RwSignal::new(today.month());

    let on_prev_month = move |_| {
        if visible_month.get() == 1 {
            visible_month.set(12);
            visible_year.update(|y| *y -= 1);
        } else {
            visible_month.update(|m| *m -= 1);
        }
    };

    let on_next_month = move |_| {
        if visible_month.get() == 12 {
            visible_month.set(1);
            visible_year.update(|y| *y += 1);
        } else {
            visible_month.update(|m| *m += 1);
        }
    };

    // Быстрый выбор: текущий месяц
    let on_current_month = move |_| {
        let now = Utc::now().date_naive();
        if let Some(range) = RangeSelection::full_month(now.year(), now.month()) {
            visible_year.set(now.year());
            visible_month.set(now.month());
            selection.set(range);
        }
    };

    // Быстрый выбор: предыдущий месяц
    let on_previous_month_range = move |_| {
        let now = Utc::now().date_naive();
        let (year, month) = if now.month() == 1 {
            (now.year() - 1, 12)
        } else {
            (now.year(), now.month() - 1)
        };
        if let Some(range) = RangeSelection::full_month(year, month) {
            visible_year.set(year);
            visible_month.set(month);
            selection.set(range);
        }
    };

    let on_clear = move |_| {
        selection.update(|s| s.clear());
    };

    // Ячейки календаря видимого месяца: смещение до понедельника + дни
    let day_cells = move || {
        let year = visible_year.get();
        let month = visible_month.get();
        let first = NaiveDate::from_ymd_opt(year, month, 1);
        let last = month_end(year, month);
        let (Some(first), Some(last)) = (first, last) else {
            return Vec::new();
        };
        let offset = first.weekday().num_days_from_monday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; offset];
        for day in 1..=last.day() {
            cells.push(NaiveDate::from_ymd_opt(year, month, day));
        }
        cells
    };

    let range_label = move || {
        let sel = selection.get();
        match (sel.start, sel.end) {
            (Some(start), Some(end)) => format!(
                "{} — {}",
                start.format("%d.%m.%Y"),
                end.format("%d.%m.%Y")
            ),
            (Some(start), None) => format!("{} — …", start.format("%d.%m.%Y")),
            _ => "Период не выбран".to_string(),
        }
    };

    view! {
        <style>
            "
            .date-range-picker {
                box-sizing: border-box;
                border: 1px solid var(--colorNeutralStroke1, #d1d1d1);
                border-radius: var(--borderRadiusMedium, 4px);
                background: var(--colorNeutralBackground1, #fff);
                padding: 8px;
                width: 252px;
            }

            .date-range-picker__grid {
                display: grid;
                grid-template-columns: repeat(7, 1fr);
                gap: 2px;
            }

            .date-range-picker__weekday {
                text-align: center;
                font-size: 11px;
                color: var(--colorNeutralForeground3, #888);
                padding: 2px 0;
            }

            .date-range-picker__day {
                border: none;
                background: transparent;
                border-radius: var(--borderRadiusMedium, 4px);
                font-size: 13px;
                padding: 4px 0;
                cursor: pointer;
            }

            .date-range-picker__day:hover {
                background: var(--colorNeutralBackground1Hover, #f0f0f0);
            }

            .date-range-picker__day--selected {
                background: var(--colorBrandBackground, #3b82f6);
                color: white;
            }

            .date-range-picker__day--selected:hover {
                background: var(--colorBrandBackgroundHover, #2563eb);
            }
            "
        </style>

        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <div class="date-range-picker">
                <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 4px;">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_prev_month
                    >
                        "‹"
                    </Button>
                    <span style="font-size: 13px; font-weight: 500;">
                        {move || format!("{} {}", month_name(visible_month.get()), visible_year.get())}
                    </span>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_next_month
                    >
                        "›"
                    </Button>
                </div>

                <div class="date-range-picker__grid">
                    {["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"].into_iter().map(|wd| view! {
                        <div class="date-range-picker__weekday">{wd}</div>
                    }).collect_view()}
                    {move || day_cells().into_iter().map(|cell| match cell {
                        Some(day) => {
                            let is_selected = move || selection.get().contains(day);
                            view! {
                                <button
                                    class="date-range-picker__day"
                                    class:date-range-picker__day--selected=is_selected
                                    on:click=move |_| selection.update(|s| s.click(day))
                                >
                                    {day.day()}
                                </button>
                            }.into_any()
                        }
                        None => view! { <div></div> }.into_any(),
                    }).collect_view()}
                </div>
            </div>

            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_previous_month_range
                    >
                        "-1M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_current_month
                    >
                        "0M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_clear
                    >
                        "Сброс"
                    </Button>
                </ButtonGroup>
                <span style="font-size: 13px; color: var(--colorNeutralForeground3, #666);">
                    {range_label}
                </span>
            </Flex>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn two_clicks_in_order() {
        let mut sel = RangeSelection::default();
        sel.click(day(5));
        assert_eq!(sel.start, Some(day(5)));
        assert_eq!(sel.end, None);
        sel.click(day(10));
        assert_eq!(sel.start, Some(day(5)));
        assert_eq!(sel.end, Some(day(10)));
    }

    #[test]
    fn reverse_clicks_are_normalized() {
        let mut sel = RangeSelection::default();
        sel.click(day(10));
        sel.click(day(5));
        assert_eq!(sel.start, Some(day(5)));
        assert_eq!(sel.end, Some(day(10)));
    }

    #[test]
    fn click_on_complete_range_starts_over() {
        let mut sel = RangeSelection::default();
        sel.click(day(5));
        sel.click(day(10));
        sel.click(day(20));
        assert_eq!(sel.start, Some(day(20)));
        assert_eq!(sel.end, None);
    }

    #[test]
    fn clear_resets_both_bounds() {
        let mut sel = RangeSelection::default();
        sel.click(day(5));
        sel.click(day(10));
        sel.clear();
        assert_eq!(sel.start, None);
        assert_eq!(sel.end, None);
    }

    #[test]
    fn same_day_twice_is_a_one_day_range() {
        let mut sel = RangeSelection::default();
        sel.click(day(7));
        sel.click(day(7));
        assert!(sel.is_complete());
        assert!(sel.contains(day(7)));
        assert!(!sel.contains(day(8)));
    }

    #[test]
    fn full_month_covers_boundaries() {
        let range = RangeSelection::full_month(2025, 6).unwrap();
        assert_eq!(range.start, Some(day(1)));
        assert_eq!(range.end, Some(day(30)));
        // декабрь переходит через границу года
        let december = RangeSelection::full_month(2024, 12).unwrap();
        assert_eq!(
            december.end,
            Some(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
        );
    }
}
