//! Pagination, unit and sort settings of the object list

use std::cmp::Ordering;
use std::ops::Range;

use super::record::ObjectRecord;

/// Rows per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Ten,
    #[default]
    Hundred,
    FiveHundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [Self::Ten, Self::Hundred, Self::FiveHundred];

    pub fn rows(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Hundred => 100,
            Self::FiveHundred => 500,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ten => "10",
            Self::Hundred => "100",
            Self::FiveHundred => "500",
        }
    }
}

/// Unit sizes are displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    #[default]
    Megabytes,
    Gigabytes,
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 4] = [
        Self::Bytes,
        Self::Kilobytes,
        Self::Megabytes,
        Self::Gigabytes,
    ];

    pub fn divisor(self) -> u64 {
        match self {
            Self::Bytes => 1,
            Self::Kilobytes => 1024,
            Self::Megabytes => 1024 * 1024,
            Self::Gigabytes => 1024 * 1024 * 1024,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bytes => "Bytes",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
        }
    }

    /// Fraction digits shown: two more per step up from bytes
    pub fn decimals(self) -> usize {
        let index = match self {
            Self::Bytes => 0,
            Self::Kilobytes => 1,
            Self::Megabytes => 2,
            Self::Gigabytes => 3,
        };
        index * 2
    }

    /// Format a byte count in this unit with thousands separators
    pub fn format(self, bytes: u64) -> String {
        let value = bytes as f64 / self.divisor() as f64;
        group_thousands(&format!("{:.*}", self.decimals(), value))
    }
}

/// Column the list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Name,
    #[default]
    Size,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [Self::Name, Self::Size];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
        }
    }

    /// Ascending comparison of two rows by this key
    pub fn compare(self, a: &ObjectRecord, b: &ObjectRecord) -> Ordering {
        match self {
            Self::Name => a.display_name.cmp(&b.display_name),
            Self::Size => a.retained_bytes.cmp(&b.retained_bytes),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [Self::Ascending, Self::Descending];

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Ascending => "\u{25B2}",
            Self::Descending => "\u{25BC}",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Stable sort of `records` by `key` in `direction`
pub fn sort_records(records: &mut [ObjectRecord], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| direction.apply(key.compare(a, b)));
}

/// View settings of the object list
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListViewState {
    pub page_index: usize,
    pub page_size: PageSize,
    pub unit: SizeUnit,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub scroll_offset: egui::Vec2,
}

impl ListViewState {
    /// Pages needed for `count` rows; zero when there are no rows
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size.rows())
    }

    /// Pull `page_index` back into `[0, total_pages - 1]`
    pub fn clamp_page(&mut self, count: usize) {
        let total = self.total_pages(count);
        self.page_index = if total == 0 {
            0
        } else {
            self.page_index.min(total - 1)
        };
    }

    /// Row indices shown on the current page
    pub fn page_range(&self, count: usize) -> Range<usize> {
        let rows = self.page_size.rows();
        let start = self.page_index.saturating_mul(rows).min(count);
        let end = start.saturating_add(rows).min(count);
        start..end
    }

    pub fn is_first_page(&self) -> bool {
        self.page_index == 0
    }

    pub fn is_last_page(&self, count: usize) -> bool {
        self.page_index + 1 >= self.total_pages(count)
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self, count: usize) {
        if !self.is_last_page(count) {
            self.page_index += 1;
        }
    }

    /// Go back one page; no-op on the first page
    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Insert `,` separators into the integer part of a formatted number
pub fn group_thousands(number: &str) -> String {
    let (sign, rest) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match rest.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with(page_size: PageSize) -> ListViewState {
        ListViewState {
            page_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let view = ListViewState::default();
        assert_eq!(view.page_index, 0);
        assert_eq!(view.page_size, PageSize::Hundred);
        assert_eq!(view.unit, SizeUnit::Megabytes);
        assert_eq!(view.sort_key, SortKey::Size);
        assert_eq!(view.sort_direction, SortDirection::Descending);
        assert_eq!(view.scroll_offset, egui::Vec2::ZERO);
    }

    #[test]
    fn test_total_pages() {
        let view = view_with(PageSize::Ten);
        assert_eq!(view.total_pages(0), 0);
        assert_eq!(view.total_pages(1), 1);
        assert_eq!(view.total_pages(10), 1);
        assert_eq!(view.total_pages(25), 3);
    }

    #[test]
    fn test_clamp_and_range() {
        let mut view = view_with(PageSize::Ten);
        view.page_index = 5;
        view.clamp_page(25);
        assert_eq!(view.page_index, 2);
        assert_eq!(view.page_range(25), 20..25);
    }

    #[test]
    fn test_clamp_empty_resets_to_zero() {
        let mut view = view_with(PageSize::Ten);
        view.page_index = 3;
        view.clamp_page(0);
        assert_eq!(view.page_index, 0);
        assert_eq!(view.page_range(0), 0..0);
    }

    #[test]
    fn test_page_moves_stop_at_boundaries() {
        let mut view = view_with(PageSize::Ten);
        view.previous_page();
        assert_eq!(view.page_index, 0);

        view.next_page(25);
        view.next_page(25);
        assert!(view.is_last_page(25));
        view.next_page(25);
        assert_eq!(view.page_index, 2);
    }

    #[test]
    fn test_unit_format_precision() {
        assert_eq!(SizeUnit::Bytes.format(1_234_567), "1,234,567");
        assert_eq!(SizeUnit::Kilobytes.format(1536), "1.50");
        assert_eq!(SizeUnit::Megabytes.format(1024 * 1024), "1.0000");
        assert_eq!(SizeUnit::Gigabytes.format(0), "0.000000");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567.891"), "1,234,567.891");
        assert_eq!(group_thousands("-12345"), "-12,345");
    }

    #[test]
    fn test_direction_reverses_comparison() {
        assert_eq!(
            SortDirection::Ascending.apply(Ordering::Less),
            Ordering::Less
        );
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
    }
}
