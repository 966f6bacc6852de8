//! Aggregation & Filter Engine
//!
//! Merges the lost and found collections into one tagged sequence, applies the
//! board's filters and orders the result newest first. Everything here is pure;
//! the current time is an argument.

use std::cmp::Reverse;

use chrono::{DateTime, Days, Datelike, Months, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::domain::{Item, ItemKind, TaggedItem};

/// `all` / `lost` / `found` selector, used both by the type select and the tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Lost,
    Found,
}

impl KindFilter {
    pub const ALL: [KindFilter; 3] = [KindFilter::All, KindFilter::Lost, KindFilter::Found];

    pub fn as_str(&self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Lost => "lost",
            KindFilter::Found => "found",
        }
    }

    /// Unknown values select everything
    pub fn parse(s: &str) -> Self {
        match s {
            "lost" => KindFilter::Lost,
            "found" => KindFilter::Found,
            _ => KindFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KindFilter::All => "All Items",
            KindFilter::Lost => "Lost Items",
            KindFilter::Found => "Found Items",
        }
    }

    pub fn matches(&self, kind: ItemKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Lost => kind == ItemKind::Lost,
            KindFilter::Found => kind == ItemKind::Found,
        }
    }
}

/// Date-range select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [DateRange::All, DateRange::Today, DateRange::Week, DateRange::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "today" => DateRange::Today,
            "week" => DateRange::Week,
            "month" => DateRange::Month,
            _ => DateRange::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::All => "All Time",
            DateRange::Today => "Today",
            DateRange::Week => "This Week",
            DateRange::Month => "This Month",
        }
    }

    /// Earliest effective date kept by this range, `None` for `All`.
    ///
    /// Ranges start at local midnight. `Week` steps back seven days while
    /// `Month` steps back one calendar month; the two are deliberately not
    /// unified.
    pub fn cutoff<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
        let today = now.date_naive();
        let start = match self {
            DateRange::All => return None,
            DateRange::Today => today,
            DateRange::Week => today.checked_sub_days(Days::new(7)).unwrap_or(today),
            DateRange::Month => one_month_before(today),
        };
        Some(local_midnight(&now.timezone(), start))
    }
}

/// Browser-style month step: keep the day of month and let it overflow
/// into the next month (31 March -> 3 March in a common year).
fn one_month_before(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_sub_months(Months::new(1)))
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day0()))))
        .unwrap_or(date)
}

/// Start of `date` in `tz`. When midnight falls in a DST gap the day starts
/// at the first local instant after the gap, as browsers do.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    (0..=2)
        .map(|hours| naive + TimeDelta::hours(hours))
        .find_map(|candidate| tz.from_local_datetime(&candidate).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

/// Filter criteria for the items board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemFilter {
    /// Free-text term; trimmed and lowercased before matching
    pub search: String,
    /// Explicit type select
    pub kind: KindFilter,
    /// Tab selector, intersected with `kind`
    pub tab: KindFilter,
    /// Exact category, `None` for "all"
    pub category: Option<String>,
    pub date_range: DateRange,
}

impl ItemFilter {
    /// Only the tab is set (dashboard listing)
    pub fn for_tab(tab: KindFilter) -> Self {
        Self { tab, ..Default::default() }
    }

    fn accepts(&self, tagged: &TaggedItem, cutoff: Option<DateTime<Utc>>, term: &str) -> bool {
        if !self.kind.matches(tagged.kind) || !self.tab.matches(tagged.kind) {
            return false;
        }
        if let Some(category) = &self.category {
            if tagged.item.category.as_ref() != Some(category) {
                return false;
            }
        }
        if let Some(cutoff) = cutoff {
            match tagged.effective_date() {
                Some(date) if date >= cutoff => {}
                _ => return false,
            }
        }
        term.is_empty() || matches_search(&tagged.item, term)
    }
}

fn matches_search(item: &Item, term: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(term);
    contains(&item.item_name)
        || contains(&item.description)
        || item.location.as_deref().is_some_and(contains)
        || item.category.as_deref().is_some_and(contains)
}

/// Tag lost records `lost`, found records `found`, and concatenate
pub fn tag_items(lost: &[Item], found: &[Item]) -> Vec<TaggedItem> {
    lost.iter()
        .map(|item| TaggedItem::new(ItemKind::Lost, item.clone()))
        .chain(found.iter().map(|item| TaggedItem::new(ItemKind::Found, item.clone())))
        .collect()
}

/// Stable sort, newest effective date first; undated records go last
pub fn sort_newest_first(items: &mut [TaggedItem]) {
    items.sort_by_cached_key(|tagged| Reverse(tagged.effective_date()));
}

/// Run the whole pipeline: tag, filter, sort
pub fn aggregate<Tz: TimeZone>(
    lost: &[Item],
    found: &[Item],
    filter: &ItemFilter,
    now: &DateTime<Tz>,
) -> Vec<TaggedItem> {
    let cutoff = filter.date_range.cutoff(now);
    let term = filter.search.trim().to_lowercase();

    let mut items: Vec<TaggedItem> = tag_items(lost, found)
        .into_iter()
        .filter(|tagged| filter.accepts(tagged, cutoff, &term))
        .collect();
    sort_newest_first(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    fn make_item(id: u64, name: &str, category: Option<&str>, date: Option<&str>, created_at: &str) -> Item {
        Item {
            id: ItemId::Number(id),
            item_name: name.to_string(),
            category: category.map(str::to_string),
            location: None,
            date: date.map(str::to_string),
            description: String::new(),
            user_name: "lee".to_string(),
            contact: "lee@example.com".to_string(),
            created_at: created_at.to_string(),
            status: Some("active".to_string()),
            turned_in: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 15, 0, 0).unwrap()
    }

    fn ids(items: &[TaggedItem]) -> Vec<String> {
        items.iter().map(|t| t.item.id.to_string()).collect()
    }

    fn sample() -> (Vec<Item>, Vec<Item>) {
        let lost = vec![
            make_item(1, "Black Phone", Some("Electronics"), Some("2024-03-31"), "2024-03-31T09:00:00Z"),
            make_item(2, "Wallet", Some("Accessories"), None, "2024-03-20T09:00:00Z"),
            make_item(3, "Phone charger", None, Some("2024-01-15"), "2024-01-16T09:00:00Z"),
        ];
        let found = vec![
            make_item(4, "Red phone case", Some("Accessories"), Some("2024-03-28"), "2024-03-28T10:00:00Z"),
            make_item(5, "Laptop", Some("Electronics"), None, "2024-03-02T10:00:00Z"),
        ];
        (lost, found)
    }

    #[test]
    fn test_kind_filter_selects_tagged_subset() {
        let (lost, found) = sample();
        let filter = ItemFilter { kind: KindFilter::Lost, ..Default::default() };
        let result = aggregate(&lost, &found, &filter, &now());
        assert_eq!(result.len(), lost.len());
        assert!(result.iter().all(|t| t.kind == ItemKind::Lost));

        let filter = ItemFilter { kind: KindFilter::Found, ..Default::default() };
        let result = aggregate(&lost, &found, &filter, &now());
        assert_eq!(result.len(), found.len());
        assert!(result.iter().all(|t| t.kind == ItemKind::Found));
    }

    #[test]
    fn test_kind_and_tab_are_intersected() {
        let (lost, found) = sample();
        let filter = ItemFilter { kind: KindFilter::Lost, tab: KindFilter::Found, ..Default::default() };
        assert!(aggregate(&lost, &found, &filter, &now()).is_empty());

        let filter = ItemFilter { kind: KindFilter::All, tab: KindFilter::Found, ..Default::default() };
        assert_eq!(ids(&aggregate(&lost, &found, &filter, &now())), vec!["4", "5"]);
    }

    #[test]
    fn test_category_excludes_missing_even_when_search_matches() {
        let (lost, found) = sample();
        let filter = ItemFilter {
            search: "phone".to_string(),
            category: Some("Electronics".to_string()),
            ..Default::default()
        };
        let result = aggregate(&lost, &found, &filter, &now());
        // "Phone charger" (no category) and "Red phone case" (Accessories) match the term only
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let (mut lost, found) = sample();
        lost[1].description = "Brown LEATHER, two cards".to_string();
        lost[2].location = Some("Leather shop".to_string());
        let filter = ItemFilter { search: "  leather ".to_string(), ..Default::default() };
        let result = aggregate(&lost, &found, &filter, &now());
        assert_eq!(ids(&result), vec!["2", "3"]);

        let filter = ItemFilter { search: "accessories".to_string(), ..Default::default() };
        for tagged in aggregate(&lost, &found, &filter, &now()) {
            assert_eq!(tagged.item.category.as_deref(), Some("Accessories"));
        }
    }

    #[test]
    fn test_blank_search_is_noop() {
        let (lost, found) = sample();
        let all = aggregate(&lost, &found, &ItemFilter::default(), &now());
        let blank = ItemFilter { search: "   ".to_string(), ..Default::default() };
        assert_eq!(aggregate(&lost, &found, &blank, &now()), all);
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_date_ranges() {
        let (lost, found) = sample();
        let run = |range| {
            let filter = ItemFilter { date_range: range, ..Default::default() };
            ids(&aggregate(&lost, &found, &filter, &now()))
        };
        assert_eq!(run(DateRange::Today), vec!["1"]);
        assert_eq!(run(DateRange::Week), vec!["1", "4"]);
        // 31 March minus one month overflows to 2 March in 2024
        assert_eq!(run(DateRange::Month), vec!["1", "4", "2", "5"]);
        assert_eq!(run(DateRange::All).len(), 5);
    }

    #[test]
    fn test_month_cutoff_is_calendar_based_but_week_is_fixed() {
        let now = Utc.with_ymd_and_hms(2023, 3, 31, 12, 0, 0).unwrap();
        assert_eq!(
            DateRange::Month.cutoff(&now),
            Some(Utc.with_ymd_and_hms(2023, 3, 3, 0, 0, 0).unwrap())
        );
        assert_eq!(
            DateRange::Week.cutoff(&now),
            Some(Utc.with_ymd_and_hms(2023, 3, 24, 0, 0, 0).unwrap())
        );

        let mid_month = Utc.with_ymd_and_hms(2023, 5, 15, 12, 0, 0).unwrap();
        assert_eq!(
            DateRange::Month.cutoff(&mid_month),
            Some(Utc.with_ymd_and_hms(2023, 4, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(DateRange::All.cutoff(&mid_month), None);
    }

    #[test]
    fn test_cutoff_uses_local_midnight() {
        let tz = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 6, 10, 1, 0, 0).unwrap();
        assert_eq!(
            DateRange::Today.cutoff(&now),
            Some(Utc.with_ymd_and_hms(2024, 6, 9, 22, 0, 0).unwrap())
        );
    }

    /// UTC-3 that springs forward to UTC-2 at local midnight on 2024-11-03,
    /// so that day has no 00:00..01:00
    #[derive(Debug, Clone, Copy)]
    struct MidnightGap;

    impl MidnightGap {
        fn standard() -> chrono::FixedOffset {
            chrono::FixedOffset::west_opt(3 * 3600).unwrap()
        }

        fn summer() -> chrono::FixedOffset {
            chrono::FixedOffset::west_opt(2 * 3600).unwrap()
        }

        fn gap_start() -> chrono::NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 11, 3).unwrap().and_time(NaiveTime::MIN)
        }
    }

    impl TimeZone for MidnightGap {
        type Offset = chrono::FixedOffset;

        fn from_offset(_: &chrono::FixedOffset) -> Self {
            MidnightGap
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> chrono::LocalResult<chrono::FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &chrono::NaiveDateTime) -> chrono::LocalResult<chrono::FixedOffset> {
            let gap = Self::gap_start();
            if *local < gap {
                chrono::LocalResult::Single(Self::standard())
            } else if *local < gap + TimeDelta::hours(1) {
                chrono::LocalResult::None
            } else {
                chrono::LocalResult::Single(Self::summer())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> chrono::FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &chrono::NaiveDateTime) -> chrono::FixedOffset {
            // Local 00:00 at UTC-3
            if *utc < Self::gap_start() + TimeDelta::hours(3) {
                Self::standard()
            } else {
                Self::summer()
            }
        }
    }

    #[test]
    fn test_cutoff_skips_midnight_dst_gap() {
        let now = Utc.with_ymd_and_hms(2024, 11, 3, 15, 0, 0).unwrap().with_timezone(&MidnightGap);
        assert_eq!(now.date_naive(), NaiveDate::from_ymd_opt(2024, 11, 3).unwrap());
        // First valid local instant is 01:00 at UTC-2
        assert_eq!(
            DateRange::Today.cutoff(&now),
            Some(Utc.with_ymd_and_hms(2024, 11, 3, 3, 0, 0).unwrap())
        );
        // Days without a gap are unaffected
        let before = Utc.with_ymd_and_hms(2024, 11, 2, 15, 0, 0).unwrap().with_timezone(&MidnightGap);
        assert_eq!(
            DateRange::Today.cutoff(&before),
            Some(Utc.with_ymd_and_hms(2024, 11, 2, 3, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_unparseable_dates_fail_ranges_and_sort_last() {
        let lost = vec![
            make_item(1, "Scarf", None, Some("last tuesday"), "2024-03-30T00:00:00Z"),
            make_item(2, "Hat", None, None, "2024-03-30T00:00:00Z"),
        ];
        let filter = ItemFilter { date_range: DateRange::Week, ..Default::default() };
        assert_eq!(ids(&aggregate(&lost, &[], &filter, &now())), vec!["2"]);
        assert_eq!(ids(&aggregate(&lost, &[], &ItemFilter::default(), &now())), vec!["2", "1"]);
    }

    #[test]
    fn test_sort_uses_effective_date_and_is_idempotent() {
        let (lost, found) = sample();
        let mut sorted = aggregate(&lost, &found, &ItemFilter::default(), &now());
        assert_eq!(ids(&sorted), vec!["1", "4", "2", "5", "3"]);

        let once = sorted.clone();
        sort_newest_first(&mut sorted);
        assert_eq!(sorted, once);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let lost = vec![
            make_item(1, "A", None, Some("2024-02-01"), "2024-02-01T10:00:00Z"),
            make_item(2, "B", None, Some("2024-02-01"), "2024-02-01T08:00:00Z"),
        ];
        let found = vec![make_item(3, "C", None, Some("2024-02-01"), "2024-02-01T09:00:00Z")];
        let result = aggregate(&lost, &found, &ItemFilter::default(), &now());
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_selector_round_trip_strings() {
        for kind in KindFilter::ALL {
            assert_eq!(KindFilter::parse(kind.as_str()), kind);
        }
        for range in DateRange::ALL {
            assert_eq!(DateRange::parse(range.as_str()), range);
        }
        assert_eq!(KindFilter::parse("bogus"), KindFilter::All);
    }
}
